use tracing::debug;

use crate::copyright;
use crate::forms::{ContactField, ContactForm, FormKind, NewsletterForm, SubmitState};
use crate::i18n::Lang;
use crate::scroll;

/// Everything that can change on the page after load.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub lang: Lang,
    pub menu_open: bool,
    /// Year printed in the copyright notices.
    pub year: i32,
    pub contact: ContactForm,
    pub newsletter: NewsletterForm,
}

impl PageState {
    pub fn new(lang: Lang, year: i32) -> Self {
        Self {
            lang,
            menu_open: false,
            year,
            contact: ContactForm::default(),
            newsletter: NewsletterForm::default(),
        }
    }

    /// Fresh state for a page load, dated from the local clock.
    pub fn load(lang: Lang) -> Self {
        Self::new(lang, copyright::current_year())
    }

    pub fn submit(&self, form: FormKind) -> SubmitState {
        match form {
            FormKind::Contact => self.contact.submit,
            FormKind::Newsletter => self.newsletter.submit,
        }
    }

    pub fn set_submit(&mut self, form: FormKind, submit: SubmitState) {
        match form {
            FormKind::Contact => self.contact.submit = submit,
            FormKind::Newsletter => self.newsletter.submit = submit,
        }
    }

    pub fn clear_form(&mut self, form: FormKind) {
        match form {
            FormKind::Contact => self.contact.fields = Default::default(),
            FormKind::Newsletter => self.newsletter.fields = Default::default(),
        }
    }
}

/// User interactions the page reacts to, independent of how the browser
/// delivered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    SelectLanguage(Lang),
    ToggleMenu,
    /// Click on an in-page link (`href` as written in the markup).
    FollowAnchor(String),
    EditContact(ContactField, String),
    EditNewsletter(Lang, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Changed,
    Unchanged,
    /// Nothing to store; the caller scrolls to this selector if it exists.
    ScrollTo(String),
}

pub fn dispatch(state: &mut PageState, interaction: Interaction) -> Dispatch {
    match interaction {
        Interaction::SelectLanguage(lang) => {
            if state.lang == lang {
                return Dispatch::Unchanged;
            }
            debug!("page.dispatch: language {} -> {}", state.lang, lang);
            state.lang = lang;
            Dispatch::Changed
        }
        Interaction::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Dispatch::Changed
        }
        Interaction::FollowAnchor(href) => match scroll::anchor_selector(&href) {
            Some(selector) => Dispatch::ScrollTo(selector.to_string()),
            None => Dispatch::Unchanged,
        },
        Interaction::EditContact(field, value) => {
            state.contact.fields.set(field, value);
            Dispatch::Changed
        }
        Interaction::EditNewsletter(lang, value) => {
            state.newsletter.fields.set_email(lang, value);
            Dispatch::Changed
        }
    }
}

/// What the browser layer found around a clicked element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// `data-lang` of the closest `.lang-btn`.
    pub lang_button: Option<String>,
    /// Inside the closest `.mobile-menu-btn`.
    pub menu_button: bool,
    /// `href` of the closest `a[href^="#"]`.
    pub anchor_href: Option<String>,
}

pub fn classify(target: &ClickTarget) -> Option<Interaction> {
    if let Some(code) = &target.lang_button {
        return Lang::from_code(code).map(Interaction::SelectLanguage);
    }
    if target.menu_button {
        return Some(Interaction::ToggleMenu);
    }
    target
        .anchor_href
        .as_deref()
        .and_then(scroll::anchor_selector)
        .map(|href| Interaction::FollowAnchor(href.to_string()))
}
