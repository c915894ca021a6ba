use chrono::Datelike;

use crate::i18n::{t, Lang};

pub const SINCE: i32 = 2021;
pub const COMPANY: &str = "RMS International Group";

pub const NOTICE_SELECTORS: [(Lang, &str); 2] = [
    (Lang::Fr, "#copyright-notice"),
    (Lang::En, "#copyright-notice-en"),
];

pub fn notice(lang: Lang, year: i32) -> String {
    format!("© {SINCE}-{year} {COMPANY}. {}", t(lang, "copyright.rights"))
}

/// Calendar year on the visitor's clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
