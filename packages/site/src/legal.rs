use crate::i18n::Lang;

/// A footer link to a legal document that exists once per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalLink {
    pub selector: &'static str,
    hrefs: [&'static str; 2],
    labels: [&'static str; 2],
}

impl LegalLink {
    pub fn href(&self, lang: Lang) -> &'static str {
        self.hrefs[index(lang)]
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        self.labels[index(lang)]
    }
}

fn index(lang: Lang) -> usize {
    match lang {
        Lang::Fr => 0,
        Lang::En => 1,
    }
}

pub const LEGAL_LINKS: [LegalLink; 3] = [
    LegalLink {
        selector: ".privacy-policy-link",
        hrefs: ["privacy-policy-fr.pdf", "privacy-policy-en.pdf"],
        labels: ["Politique de confidentialité", "Privacy Policy"],
    },
    LegalLink {
        selector: ".legal-notice-link",
        hrefs: ["legal-notice-fr.pdf", "legal-notice-en.pdf"],
        labels: ["Mentions légales", "Legal Notice"],
    },
    LegalLink {
        selector: ".terms-conditions-link",
        hrefs: ["terms-conditions-fr.pdf", "terms-conditions-en.pdf"],
        labels: ["Conditions générales", "Terms and Conditions"],
    },
];
