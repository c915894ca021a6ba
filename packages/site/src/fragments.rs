use tracing::{debug, error};

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::transport::Transport;

/// A placeholder element and the HTML partial that fills it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSlot {
    pub selector: String,
    pub path: String,
}

impl FragmentSlot {
    pub fn new(selector: &str, path: &str) -> Self {
        Self {
            selector: selector.to_string(),
            path: path.to_string(),
        }
    }
}

/// Fill the slot's placeholder with the fetched partial.
///
/// A page without the placeholder is not an error and nothing is fetched.
/// Failures are logged and leave the placeholder untouched. Returns whether
/// the placeholder was filled.
pub async fn load_fragment<T, D>(transport: &T, dom: &D, slot: &FragmentSlot) -> bool
where
    T: Transport + ?Sized,
    D: Dom + ?Sized,
{
    if !dom.exists(&slot.selector) {
        debug!("fragments.load: no {} placeholder, skipping", slot.selector);
        return false;
    }

    match transport.get(&slot.path).await {
        Ok(reply) if reply.is_success() => {
            dom.set_inner_html(&slot.selector, &reply.body);
            debug!("fragments.load: {} <- {}", slot.selector, slot.path);
            true
        }
        Ok(reply) => {
            error!("fragments.load: {} not found ({})", slot.path, reply.status);
            false
        }
        Err(err) => {
            error!("fragments.load: failed to load {}: {err}", slot.selector);
            false
        }
    }
}

/// Load header and footer concurrently; returns once both are settled.
pub async fn load_shell<T, D>(transport: &T, dom: &D, config: &SiteConfig) -> (bool, bool)
where
    T: Transport + ?Sized,
    D: Dom + ?Sized,
{
    futures::join!(
        load_fragment(transport, dom, &config.header),
        load_fragment(transport, dom, &config.footer),
    )
}
