#![allow(clippy::new_without_default)]
#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
// When docs auto created for docs.rs, will include features, given docs.rs uses nightly by default:
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod location;
mod page;
mod paginated_query;
mod paging_controls;
mod query_executor;
#[cfg(feature = "leptos")]
mod router;
mod search_params;

pub use location::*;
pub use page::*;
pub use paginated_query::*;
pub use paging_controls::*;
pub use query_executor::*;
#[cfg(feature = "leptos")]
pub use router::*;
pub use search_params::*;
