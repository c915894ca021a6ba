//! This crate contains the page controller shared by every platform: language
//! state, the pure page view, DOM sync, fragment loading and form submission.
//!
//! Nothing here touches the browser directly. The UI crate plugs the real DOM,
//! transport and reCAPTCHA widget in through the traits below.

pub mod config;
pub mod copyright;
pub mod dom;
pub mod error;
pub mod forms;
pub mod fragments;
pub mod i18n;
pub mod legal;
pub mod scroll;
pub mod state;
pub mod transport;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{SiteConfig, SiteMode};
pub use dom::{apply, Dom};
pub use error::SiteError;
pub use forms::{Captcha, FormHost, FormKind, SubmitOutcome, SubmitState, Submitter};
pub use fragments::{load_fragment, load_shell, FragmentSlot};
pub use i18n::{t, Lang};
pub use state::{classify, dispatch, ClickTarget, Dispatch, Interaction, PageState};
pub use transport::{HttpTransport, Reply, Transport};
pub use view::{render, PageView};
