//! In-memory doubles for the DOM, the transport, the form host and the
//! reCAPTCHA widget, shared by unit and integration tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;

use crate::dom::Dom;
use crate::error::{Result, SiteError};
use crate::forms::{Captcha, FormHost, FormKind, SubmitState};
use crate::state::PageState;
use crate::transport::{Reply, Transport};

/// Element of a [`MemoryDom`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub inner_html: String,
    pub hidden: bool,
    pub required: bool,
    pub offset_top: f64,
}

impl MemElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        for c in class.split_whitespace() {
            self.classes.insert(c.to_string());
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn at(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }

    pub fn visible(&self) -> bool {
        !self.hidden
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Compound selectors only: `tag`, `.class`, `#id`, `[attr]`, `[attr='v']`.
    pub fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        let stop = |c: char| matches!(c, '.' | '#' | '[');

        let tag_end = selector.find(stop).unwrap_or(selector.len());
        let tag = &selector[..tag_end];
        if !tag.is_empty() && tag != "*" && tag != self.tag {
            return false;
        }

        let mut rest = &selector[tag_end..];
        while let Some(first) = rest.chars().next() {
            match first {
                '.' | '#' => {
                    let body = &rest[1..];
                    let end = body.find(stop).unwrap_or(body.len());
                    let name = &body[..end];
                    let ok = if first == '.' {
                        self.has_class(name)
                    } else {
                        self.id.as_deref() == Some(name)
                    };
                    if !ok {
                        return false;
                    }
                    rest = &body[end..];
                }
                '[' => {
                    let Some(end) = rest.find(']') else {
                        return false;
                    };
                    let inner = &rest[1..end];
                    let ok = match inner.split_once('=') {
                        Some((name, value)) => {
                            let value = value.trim_matches(|c| c == '\'' || c == '"');
                            self.attrs.get(name.trim()).map(String::as_str) == Some(value)
                        }
                        None => self.attrs.contains_key(inner.trim()),
                    };
                    if !ok {
                        return false;
                    }
                    rest = &rest[end + 1..];
                }
                _ => return false,
            }
        }
        true
    }
}

/// A flat list of elements standing in for the browser document.
#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: RefCell<Vec<MemElement>>,
    lang: RefCell<Option<String>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, element: MemElement) -> Self {
        self.elements.borrow_mut().push(element);
        self
    }

    pub fn with_lang(self, code: &str) -> Self {
        *self.lang.borrow_mut() = Some(code.to_string());
        self
    }

    pub fn find(&self, selector: &str) -> Vec<MemElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|el| el.matches(selector))
            .cloned()
            .collect()
    }

    /// First element matching `selector`. Panics when there is none.
    pub fn one(&self, selector: &str) -> MemElement {
        self.find(selector)
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no element matches {selector}"))
    }

    fn each(&self, selector: &str, mut f: impl FnMut(&mut MemElement)) {
        for el in self.elements.borrow_mut().iter_mut() {
            if el.matches(selector) {
                f(el);
            }
        }
    }
}

impl Dom for MemoryDom {
    fn exists(&self, selector: &str) -> bool {
        self.elements.borrow().iter().any(|el| el.matches(selector))
    }

    fn document_lang(&self) -> Option<String> {
        self.lang.borrow().clone()
    }

    fn set_document_lang(&self, code: &str) {
        *self.lang.borrow_mut() = Some(code.to_string());
    }

    fn set_inner_html(&self, selector: &str, html: &str) {
        self.each(selector, |el| el.inner_html = html.to_string());
    }

    fn set_text(&self, selector: &str, text: &str) {
        self.each(selector, |el| el.text = text.to_string());
    }

    fn set_attribute(&self, selector: &str, name: &str, value: &str) {
        self.each(selector, |el| {
            el.attrs.insert(name.to_string(), value.to_string());
        });
    }

    fn toggle_class(&self, selector: &str, class: &str, on: bool) {
        self.each(selector, |el| {
            if on {
                el.classes.insert(class.to_string());
            } else {
                el.classes.remove(class);
            }
        });
    }

    fn set_visible(&self, selector: &str, visible: bool) {
        self.each(selector, |el| el.hidden = !visible);
    }

    fn set_required(&self, selector: &str, required: bool) {
        self.each(selector, |el| el.required = required);
    }

    fn offset_top(&self, selector: &str) -> Option<f64> {
        self.elements
            .borrow()
            .iter()
            .find(|el| el.matches(selector))
            .map(|el| el.offset_top)
    }
}

/// Yields once to the executor so that concurrently joined requests
/// interleave the way real network calls do.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Transport answering from canned replies. Unknown paths fail like an
/// unreachable host.
#[derive(Debug, Default)]
pub struct MockTransport {
    gets: HashMap<String, Reply>,
    posts: HashMap<String, Reply>,
    get_log: RefCell<Vec<String>>,
    post_log: RefCell<Vec<(String, serde_json::Value)>>,
    events: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_get(mut self, path: &str, reply: Reply) -> Self {
        self.gets.insert(path.to_string(), reply);
        self
    }

    pub fn with_post(mut self, url: &str, reply: Reply) -> Self {
        self.posts.insert(url.to_string(), reply);
        self
    }

    pub fn gets(&self) -> Vec<String> {
        self.get_log.borrow().clone()
    }

    pub fn posts(&self) -> Vec<(String, serde_json::Value)> {
        self.post_log.borrow().clone()
    }

    /// `start:<path>` / `end:<path>` for every GET, in the order they happened.
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn unreachable(url: &str) -> SiteError {
        SiteError::InvalidUrl {
            url: url.to_string(),
            message: "no canned reply".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<Reply> {
        self.get_log.borrow_mut().push(path.to_string());
        self.events.borrow_mut().push(format!("start:{path}"));
        YieldNow(false).await;
        self.events.borrow_mut().push(format!("end:{path}"));
        self.gets
            .get(path)
            .cloned()
            .ok_or_else(|| Self::unreachable(path))
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<Reply> {
        self.post_log
            .borrow_mut()
            .push((url.to_string(), body.clone()));
        self.posts
            .get(url)
            .cloned()
            .ok_or_else(|| Self::unreachable(url))
    }
}

/// Form host backed by a [`PageState`], recording every call.
#[derive(Debug)]
pub struct RecordingHost {
    state: RefCell<PageState>,
    alerts: RefCell<Vec<String>>,
    cleared: RefCell<Vec<FormKind>>,
    submits: RefCell<Vec<(FormKind, SubmitState)>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::with_state(PageState::new(Default::default(), 2024))
    }

    pub fn with_state(state: PageState) -> Self {
        Self {
            state: RefCell::new(state),
            alerts: RefCell::default(),
            cleared: RefCell::default(),
            submits: RefCell::default(),
        }
    }

    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn cleared(&self) -> Vec<FormKind> {
        self.cleared.borrow().clone()
    }

    pub fn submit_history(&self) -> Vec<(FormKind, SubmitState)> {
        self.submits.borrow().clone()
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FormHost for RecordingHost {
    fn submit_state(&self, form: FormKind) -> SubmitState {
        self.state.borrow().submit(form)
    }

    fn set_submit(&self, form: FormKind, state: SubmitState) {
        self.submits.borrow_mut().push((form, state));
        self.state.borrow_mut().set_submit(form, state);
    }

    fn clear(&self, form: FormKind) {
        self.cleared.borrow_mut().push(form);
        self.state.borrow_mut().clear_form(form);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// reCAPTCHA widget returning a fixed token.
#[derive(Debug, Default)]
pub struct StaticCaptcha {
    token: String,
    resets: Cell<usize>,
}

impl StaticCaptcha {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            resets: Cell::new(0),
        }
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }
}

#[async_trait(?Send)]
impl Captcha for StaticCaptcha {
    async fn response(&self) -> String {
        self.token.clone()
    }

    async fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
    }
}
