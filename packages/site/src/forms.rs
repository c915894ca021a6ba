//! Contact and newsletter submission.
//!
//! Both forms share one flow: build a fresh payload, flip the active
//! language's submit button to "sending", POST the JSON, alert the outcome and
//! put both buttons back to their idle label whatever happened. The contact
//! form additionally requires a reCAPTCHA token before anything is sent.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::i18n::{t, Lang};
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn key(self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Newsletter => "newsletter",
        }
    }

    fn message(self, lang: Lang, suffix: &str) -> String {
        t(lang, &format!("{}.{suffix}", self.key()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    /// A request is in flight; the button of this language shows "sending".
    Sending(Lang),
}

impl SubmitState {
    pub fn is_sending(self) -> bool {
        matches!(self, SubmitState::Sending(_))
    }

    /// State of the submit button twin for `variant`.
    pub fn button(self, form: FormKind, variant: Lang) -> ButtonView {
        match self {
            SubmitState::Sending(lang) if lang == variant => ButtonView {
                lang: variant,
                label: t(variant, "form.sending"),
                disabled: true,
            },
            _ => ButtonView {
                lang: variant,
                label: form.message(variant, "send"),
                disabled: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub lang: Lang,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Service => self.service = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
    #[serde(rename = "g-recaptcha-response")]
    pub recaptcha_response: String,
}

impl ContactPayload {
    pub fn new(fields: &ContactFields, recaptcha_response: &str) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            service: fields.service.trim().to_string(),
            message: fields.message.trim().to_string(),
            recaptcha_response: recaptcha_response.to_string(),
        }
    }
}

/// The newsletter block has one email input per language; only the visible
/// one is required and submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterFields {
    pub email_fr: String,
    pub email_en: String,
}

impl NewsletterFields {
    pub fn email(&self, lang: Lang) -> &str {
        match lang {
            Lang::Fr => &self.email_fr,
            Lang::En => &self.email_en,
        }
    }

    pub fn set_email(&mut self, lang: Lang, value: String) {
        match lang {
            Lang::Fr => self.email_fr = value,
            Lang::En => self.email_en = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterPayload {
    pub email: String,
}

impl NewsletterPayload {
    pub fn new(fields: &NewsletterFields, lang: Lang) -> Self {
        Self {
            email: fields.email(lang).trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub submit: SubmitState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub fields: NewsletterFields,
    pub submit: SubmitState,
}

/// What the submit flow needs from the page hosting the form.
pub trait FormHost {
    fn submit_state(&self, form: FormKind) -> SubmitState;
    fn set_submit(&self, form: FormKind, state: SubmitState);
    /// Clear every field of the form.
    fn clear(&self, form: FormKind);
    /// Blocking notification to the visitor.
    fn alert(&self, message: &str);
}

/// The reCAPTCHA widget embedded in the contact form.
#[async_trait(?Send)]
pub trait Captcha {
    /// Current token, empty when the visitor has not solved the challenge.
    async fn response(&self) -> String;
    async fn reset(&self);
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A request for this form is already in flight: nothing was sent.
    Busy,
    /// No token: nothing was sent.
    CaptchaMissing,
    Sent,
    Failed(SiteError),
}

pub struct Submitter<'a> {
    transport: &'a dyn Transport,
    config: &'a SiteConfig,
}

impl<'a> Submitter<'a> {
    pub fn new(transport: &'a dyn Transport, config: &'a SiteConfig) -> Self {
        Self { transport, config }
    }

    pub async fn contact(
        &self,
        host: &dyn FormHost,
        captcha: &dyn Captcha,
        lang: Lang,
        fields: &ContactFields,
    ) -> SubmitOutcome {
        if Self::in_flight(FormKind::Contact, host) {
            return SubmitOutcome::Busy;
        }

        let token = captcha.response().await;
        if token.trim().is_empty() {
            warn!("forms.contact: missing recaptcha token");
            host.alert(&t(lang, "contact.recaptcha"));
            return SubmitOutcome::CaptchaMissing;
        }

        let payload = ContactPayload::new(fields, &token);
        let result = match serde_json::to_value(&payload) {
            Ok(body) => {
                self.send(FormKind::Contact, host, lang, &self.config.contact_endpoint, body)
                    .await
            }
            Err(err) => Err(err.into()),
        };

        let outcome = self.finish(FormKind::Contact, host, lang, result);
        if matches!(outcome, SubmitOutcome::Sent) {
            captcha.reset().await;
        }
        outcome
    }

    pub async fn newsletter(
        &self,
        host: &dyn FormHost,
        lang: Lang,
        fields: &NewsletterFields,
    ) -> SubmitOutcome {
        if Self::in_flight(FormKind::Newsletter, host) {
            return SubmitOutcome::Busy;
        }

        let payload = NewsletterPayload::new(fields, lang);
        let result = match serde_json::to_value(&payload) {
            Ok(body) => {
                self.send(
                    FormKind::Newsletter,
                    host,
                    lang,
                    &self.config.newsletter_endpoint,
                    body,
                )
                .await
            }
            Err(err) => Err(err.into()),
        };
        self.finish(FormKind::Newsletter, host, lang, result)
    }

    /// One request per form at a time, whichever language twin was used.
    fn in_flight(form: FormKind, host: &dyn FormHost) -> bool {
        let busy = host.submit_state(form).is_sending();
        if busy {
            warn!("forms.{}: already sending, ignoring submit", form.key());
        }
        busy
    }

    async fn send(
        &self,
        form: FormKind,
        host: &dyn FormHost,
        lang: Lang,
        url: &str,
        body: serde_json::Value,
    ) -> Result<()> {
        host.set_submit(form, SubmitState::Sending(lang));
        info!("forms.{}: posting to {url}", form.key());

        let reply = self.transport.post_json(url, &body).await?;
        if reply.is_success() {
            return Ok(());
        }

        let status = reply.status;
        if form == FormKind::Contact {
            let message = serde_json::from_str::<ErrorBody>(&reply.body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty());
            if let Some(message) = message {
                return Err(SiteError::Rejected { status, message });
            }
        }
        Err(SiteError::Status { status })
    }

    fn finish(
        &self,
        form: FormKind,
        host: &dyn FormHost,
        lang: Lang,
        result: Result<()>,
    ) -> SubmitOutcome {
        let outcome = match result {
            Ok(()) => {
                info!("forms.{}: sent", form.key());
                host.alert(&form.message(lang, "success"));
                host.clear(form);
                SubmitOutcome::Sent
            }
            Err(err) => {
                error!("forms.{}: submission failed: {err}", form.key());
                host.alert(&format!("{} ({})", form.message(lang, "error"), err.detail(lang)));
                SubmitOutcome::Failed(err)
            }
        };
        host.set_submit(form, SubmitState::Idle);
        outcome
    }
}
