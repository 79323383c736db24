use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::{
    NavigateOptions, Navigator, PaginatedQuery, PagingControls, PathSource, QueryExecutor,
    SearchParamsSource, SearchParams, paginated_query, paging_controls, read_page,
};

/// The current router location, read through signals.
///
/// Reads are tracked, so anything built from this inside a reactive closure reruns when the url changes.
#[derive(Debug, Clone, Copy)]
pub struct RouterLocation {
    pathname: Signal<String>,
    search: Signal<String>,
}

impl RouterLocation {
    /// The location of the surrounding `<Router/>`.
    ///
    /// Panics outside of a router, like the `leptos_router` hooks it uses.
    #[track_caller]
    pub fn new() -> Self {
        let location = use_location();
        Self::from_signals(location.pathname, location.search)
    }

    /// Create from any pair of signals holding the path and the raw query string.
    pub fn from_signals(
        pathname: impl Into<Signal<String>>,
        search: impl Into<Signal<String>>,
    ) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }
}

impl SearchParamsSource for RouterLocation {
    fn get(&self, name: &str) -> Option<String> {
        self.search
            .with(|search| SearchParams::parse(search).get(name).map(str::to_string))
    }

    fn serialize(&self) -> String {
        self.search_params().to_string()
    }

    fn search_params(&self) -> SearchParams {
        self.search.with(|search| SearchParams::parse(search))
    }
}

impl PathSource for RouterLocation {
    fn current_path(&self) -> String {
        self.pathname.get()
    }
}

/// Navigates through the surrounding `<Router/>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Arc<dyn Fn(&str, leptos_router::NavigateOptions)>,
}

impl std::fmt::Debug for RouterNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterNavigator").finish()
    }
}

impl RouterNavigator {
    /// Panics outside of a router, like `use_navigate()`.
    #[track_caller]
    pub fn new() -> Self {
        Self {
            navigate: Arc::new(use_navigate()),
        }
    }
}

impl From<NavigateOptions> for leptos_router::NavigateOptions {
    fn from(options: NavigateOptions) -> Self {
        Self {
            scroll: options.scroll,
            ..Default::default()
        }
    }
}

impl Navigator for RouterNavigator {
    fn go(&self, url: &str, options: NavigateOptions) {
        (self.navigate)(url, options.into());
    }
}

/// The active page as a signal, read from the `param` query parameter.
///
/// ```rust,ignore
/// let page = use_page("page");
/// view! { <p>"Page " {page}</p> }
/// ```
#[track_caller]
pub fn use_page(param: &str) -> Signal<u64> {
    let location = RouterLocation::new();
    let param = param.to_string();
    Signal::derive(move || read_page(&location, &param))
}

/// Paging urls and actions for the current router location.
///
/// The urls are a snapshot, call this inside a reactive closure to keep them in sync with the url:
///
/// ```rust,ignore
/// move || {
///     let controls = use_paging_controls("page");
///     view! { <a href=controls.next_url().to_string()>"Next"</a> }
/// }
/// ```
#[track_caller]
pub fn use_paging_controls(param: &str) -> PagingControls<RouterNavigator> {
    paging_controls(&RouterLocation::new(), RouterNavigator::new(), param)
}

/// Run a [`PaginatedQuery`] against the current router location.
///
/// Like [`use_paging_controls`], rerun inside a reactive closure to follow page changes.
#[track_caller]
pub fn use_paginated_query<D, E>(executor: &E, query: &PaginatedQuery<D>) -> E::Output
where
    E: QueryExecutor<D> + ?Sized,
{
    paginated_query(&RouterLocation::new(), executor, query)
}
