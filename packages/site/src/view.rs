use crate::copyright;
use crate::forms::{ButtonView, FormKind, SubmitState};
use crate::i18n::Lang;
use crate::legal::LEGAL_LINKS;
use crate::state::PageState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub selector: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub selector: &'static str,
    pub text: String,
}

/// Everything the page shows for a given state. Pure data: components read it
/// and [`crate::dom::apply`] writes it to the injected fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub lang: Lang,
    pub menu_open: bool,
    pub legal_links: Vec<LinkView>,
    pub notices: Vec<NoticeView>,
    pub contact_buttons: [ButtonView; 2],
    pub newsletter_buttons: [ButtonView; 2],
}

impl PageView {
    /// Whether elements tagged with `tag` are shown.
    pub fn shows(&self, tag: Lang) -> bool {
        tag == self.lang
    }

    /// Inline style for an element tagged with `tag`.
    pub fn display(&self, tag: Lang) -> &'static str {
        display(self.lang, tag)
    }
}

/// Inline style for an element tagged with `tag` while `current` is active.
pub fn display(current: Lang, tag: Lang) -> &'static str {
    if current == tag {
        ""
    } else {
        "display: none"
    }
}

pub fn render(state: &PageState) -> PageView {
    let legal_links = LEGAL_LINKS
        .iter()
        .map(|link| LinkView {
            selector: link.selector,
            href: link.href(state.lang),
            label: link.label(state.lang),
        })
        .collect();

    let notices = copyright::NOTICE_SELECTORS
        .iter()
        .map(|(lang, selector)| NoticeView {
            selector: *selector,
            text: copyright::notice(*lang, state.year),
        })
        .collect();

    let buttons = |form: FormKind, submit: SubmitState| {
        Lang::ALL.map(|variant| submit.button(form, variant))
    };

    PageView {
        lang: state.lang,
        menu_open: state.menu_open,
        legal_links,
        notices,
        contact_buttons: buttons(FormKind::Contact, state.contact.submit),
        newsletter_buttons: buttons(FormKind::Newsletter, state.newsletter.submit),
    }
}
