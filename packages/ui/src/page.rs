use dioxus::prelude::*;
use site::forms::{FormHost, FormKind, SubmitState};
use site::{Lang, PageState, SiteConfig};

/// Provide the page state (`Signal<PageState>`) and the site configuration to
/// the component tree. The language starts as French until the shell reads the
/// document's own `lang` attribute.
#[component]
pub fn PageProvider(children: Element) -> Element {
    use_context_provider(SiteConfig::from_env);
    let page = use_signal(|| PageState::load(Lang::default()));
    use_context_provider(|| page);

    rsx! { {children} }
}

pub fn use_page() -> Signal<PageState> {
    if let Some(sig) = try_use_context::<Signal<PageState>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("page: missing PageProvider context, using a local state");
    use_signal(|| PageState::load(Lang::default()))
}

pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_env)
}

/// Routes the submit flow's callbacks into the page signal.
#[derive(Clone, Copy)]
pub(crate) struct SignalHost {
    page: Signal<PageState>,
}

impl SignalHost {
    pub(crate) fn new(page: Signal<PageState>) -> Self {
        Self { page }
    }
}

impl FormHost for SignalHost {
    fn submit_state(&self, form: FormKind) -> SubmitState {
        self.page.peek().submit(form)
    }

    fn set_submit(&self, form: FormKind, submit: SubmitState) {
        let mut page = self.page;
        page.with_mut(|state| state.set_submit(form, submit));
    }

    fn clear(&self, form: FormKind) {
        let mut page = self.page;
        page.with_mut(|state| state.clear_form(form));
    }

    fn alert(&self, message: &str) {
        crate::browser::alert(message);
    }
}
