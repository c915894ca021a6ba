use crate::i18n::Lang;
use crate::view::PageView;

pub const LANG_BUTTON: &str = ".lang-btn";
pub const ACTIVE_CLASS: &str = "active";
pub const MENU_BUTTON: &str = ".mobile-menu-btn";
pub const NAV_LIST: &str = ".nav-links";
pub const MENU_OPEN_CLASS: &str = "show";
pub const NEWSLETTER_EMAIL: &str = ".newsletter-email";

/// The slice of the document the page controller writes to.
///
/// Every setter applies to all elements matching the selector and is a no-op
/// when nothing matches.
pub trait Dom {
    fn exists(&self, selector: &str) -> bool;
    /// `lang` attribute of the root element.
    fn document_lang(&self) -> Option<String>;
    fn set_document_lang(&self, code: &str);
    fn set_inner_html(&self, selector: &str, html: &str);
    fn set_text(&self, selector: &str, text: &str);
    fn set_attribute(&self, selector: &str, name: &str, value: &str);
    fn toggle_class(&self, selector: &str, class: &str, on: bool);
    /// Hidden elements get `display: none`; visible ones lose the override.
    fn set_visible(&self, selector: &str, visible: bool);
    fn set_required(&self, selector: &str, required: bool);
    /// Offset of the first match from the top of the document.
    fn offset_top(&self, selector: &str) -> Option<f64>;
}

pub fn lang_button(lang: Lang) -> String {
    format!("{LANG_BUTTON}[data-lang='{}']", lang.code())
}

pub fn lang_elements(lang: Lang) -> String {
    format!(".{}", lang.class())
}

pub fn newsletter_email(lang: Lang) -> String {
    format!("{NEWSLETTER_EMAIL}.{}", lang.class())
}

/// Write `view` to the document, including the parts of the page that were
/// injected as raw HTML fragments.
pub fn apply<D: Dom + ?Sized>(view: &PageView, dom: &D) {
    dom.set_document_lang(view.lang.code());

    dom.toggle_class(LANG_BUTTON, ACTIVE_CLASS, false);
    dom.toggle_class(&lang_button(view.lang), ACTIVE_CLASS, true);

    for lang in Lang::ALL {
        dom.set_visible(&lang_elements(lang), view.shows(lang));
        dom.set_required(&newsletter_email(lang), view.shows(lang));
    }

    for link in &view.legal_links {
        dom.set_attribute(link.selector, "href", link.href);
        dom.set_text(link.selector, link.label);
    }

    dom.toggle_class(NAV_LIST, MENU_OPEN_CLASS, view.menu_open);

    for notice in &view.notices {
        dom.set_text(notice.selector, &notice.text);
    }
}
