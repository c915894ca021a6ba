//! This crate contains all shared UI for the site.

mod browser;

mod page;
pub use page::{use_page, use_site_config, PageProvider};

mod localized;
pub use localized::Localized;

mod shell;
pub use shell::SiteShell;

mod hero;
pub use hero::Hero;

mod services;
pub use services::Services;

mod contact;
pub use contact::ContactSection;

mod newsletter;
pub use newsletter::NewsletterSection;

mod theme;
pub use theme::SiteTheme;

pub use site::{t, Lang};
