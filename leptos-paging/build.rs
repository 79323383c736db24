use rustc_version::{Channel, version_meta};

fn main() {
    println!("cargo::rustc-check-cfg=cfg(CHANNEL_NIGHTLY)");

    // Set cfg flags depending on release channel, used to enable doc_auto_cfg on docs.rs:
    if let Ok(meta) = version_meta() {
        if meta.channel == Channel::Nightly {
            println!("cargo::rustc-cfg=CHANNEL_NIGHTLY");
        }
    }
}
