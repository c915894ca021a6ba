use crate::fragments::FragmentSlot;

pub const DEFAULT_CONTACT_ENDPOINT: &str =
    "https://e9hpqlfmz2.execute-api.us-east-1.amazonaws.com/prod/contact/";
pub const DEFAULT_NEWSLETTER_ENDPOINT: &str =
    "https://e9hpqlfmz2.execute-api.us-east-1.amazonaws.com/prod/newsletter/";
/// Google's published test key: the widget renders and always validates.
pub const DEFAULT_RECAPTCHA_SITE_KEY: &str = "6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";
/// Height of the fixed header, in CSS pixels.
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteMode {
    Local,
    Production,
}

impl SiteMode {
    pub fn from_env() -> Self {
        Self::parse(&setting("SITE_MODE").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => SiteMode::Local,
            _ => SiteMode::Production,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub mode: SiteMode,
    pub contact_endpoint: String,
    pub newsletter_endpoint: String,
    pub recaptcha_site_key: String,
    /// Used to resolve fragment paths when there is no page URL (native builds).
    pub base_url: String,
    pub header: FragmentSlot,
    pub footer: FragmentSlot,
    pub header_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Runtime environment first, then values baked in at compile time (the
    /// only source in the browser), then defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(setting)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let header_offset = lookup("SITE_HEADER_OFFSET")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(DEFAULT_HEADER_OFFSET);

        Self {
            mode: SiteMode::parse(&lookup("SITE_MODE").unwrap_or_default()),
            contact_endpoint: get("SITE_CONTACT_ENDPOINT", DEFAULT_CONTACT_ENDPOINT),
            newsletter_endpoint: get("SITE_NEWSLETTER_ENDPOINT", DEFAULT_NEWSLETTER_ENDPOINT),
            recaptcha_site_key: get("SITE_RECAPTCHA_SITE_KEY", DEFAULT_RECAPTCHA_SITE_KEY),
            base_url: get("SITE_BASE_URL", DEFAULT_BASE_URL),
            header: FragmentSlot::new("header", "/header.html"),
            footer: FragmentSlot::new("footer", "/footer.html"),
            header_offset,
        }
    }
}

fn setting(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| baked(key).map(str::to_string))
}

fn baked(key: &str) -> Option<&'static str> {
    match key {
        "SITE_MODE" => option_env!("SITE_MODE"),
        "SITE_CONTACT_ENDPOINT" => option_env!("SITE_CONTACT_ENDPOINT"),
        "SITE_NEWSLETTER_ENDPOINT" => option_env!("SITE_NEWSLETTER_ENDPOINT"),
        "SITE_RECAPTCHA_SITE_KEY" => option_env!("SITE_RECAPTCHA_SITE_KEY"),
        "SITE_BASE_URL" => option_env!("SITE_BASE_URL"),
        "SITE_HEADER_OFFSET" => option_env!("SITE_HEADER_OFFSET"),
        _ => None,
    }
}
