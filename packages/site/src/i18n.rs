use serde::{Deserialize, Serialize};

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Fr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Some(Lang::Fr),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    /// CSS class carried by every element that belongs to this language.
    pub fn class(self) -> &'static str {
        match self {
            Lang::Fr => "lang-fr",
            Lang::En => "lang-en",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Translate a key for a given language. Falls back to French if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        (Lang::Fr, "site.name") => "RMS International Group".to_string(),

        // Hero
        (Lang::Fr, "hero.title") => "Votre partenaire pour réussir à l'international".to_string(),
        (Lang::En, "hero.title") => "Your partner for international success".to_string(),
        (Lang::Fr, "hero.subtitle") => "Conseil, sourcing et logistique entre l'Europe, l'Afrique et l'Amérique du Nord.".to_string(),
        (Lang::En, "hero.subtitle") => "Consulting, sourcing and logistics between Europe, Africa and North America.".to_string(),
        (Lang::Fr, "hero.cta") => "Nous contacter".to_string(),
        (Lang::En, "hero.cta") => "Contact us".to_string(),
        (Lang::Fr, "hero.cta.services") => "Nos services".to_string(),
        (Lang::En, "hero.cta.services") => "Our services".to_string(),

        // Services
        (Lang::Fr, "services.title") => "Nos services".to_string(),
        (Lang::En, "services.title") => "Our services".to_string(),
        (Lang::Fr, "services.consulting") => "Conseil".to_string(),
        (Lang::En, "services.consulting") => "Consulting".to_string(),
        (Lang::Fr, "services.consulting.body") => "Études de marché, stratégie d'implantation et accompagnement réglementaire.".to_string(),
        (Lang::En, "services.consulting.body") => "Market research, expansion strategy and regulatory support.".to_string(),
        (Lang::Fr, "services.sourcing") => "Sourcing".to_string(),
        (Lang::Fr, "services.sourcing.body") => "Identification et qualification de fournisseurs fiables.".to_string(),
        (Lang::En, "services.sourcing.body") => "Finding and vetting reliable suppliers.".to_string(),
        (Lang::Fr, "services.logistics") => "Logistique".to_string(),
        (Lang::En, "services.logistics") => "Logistics".to_string(),
        (Lang::Fr, "services.logistics.body") => "Transport, dédouanement et suivi de vos marchandises.".to_string(),
        (Lang::En, "services.logistics.body") => "Freight, customs clearance and shipment tracking.".to_string(),

        // Contact form
        (Lang::Fr, "contact.title") => "Contactez-nous".to_string(),
        (Lang::En, "contact.title") => "Contact us".to_string(),
        (Lang::Fr, "contact.name") => "Nom complet".to_string(),
        (Lang::En, "contact.name") => "Full name".to_string(),
        (Lang::Fr, "contact.email") => "Adresse e-mail".to_string(),
        (Lang::En, "contact.email") => "Email address".to_string(),
        (Lang::Fr, "contact.service") => "Service souhaité".to_string(),
        (Lang::En, "contact.service") => "Service of interest".to_string(),
        (Lang::Fr, "contact.service.choose") => "Choisissez un service".to_string(),
        (Lang::En, "contact.service.choose") => "Choose a service".to_string(),
        (Lang::Fr, "contact.service.other") => "Autre".to_string(),
        (Lang::En, "contact.service.other") => "Other".to_string(),
        (Lang::Fr, "contact.message") => "Votre message".to_string(),
        (Lang::En, "contact.message") => "Your message".to_string(),
        (Lang::Fr, "contact.send") => "Envoyer le Message".to_string(),
        (Lang::En, "contact.send") => "Send Message".to_string(),
        (Lang::Fr, "contact.recaptcha") => "Veuillez valider le reCAPTCHA.".to_string(),
        (Lang::En, "contact.recaptcha") => "Please complete the reCAPTCHA.".to_string(),
        (Lang::Fr, "contact.success") => "Message envoyé avec succès !".to_string(),
        (Lang::En, "contact.success") => "Message sent successfully!".to_string(),
        (Lang::Fr, "contact.error") => "Erreur lors de l'envoi du message.".to_string(),
        (Lang::En, "contact.error") => "Error sending message.".to_string(),

        // Newsletter form
        (Lang::Fr, "newsletter.title") => "Restez informé".to_string(),
        (Lang::En, "newsletter.title") => "Stay informed".to_string(),
        (Lang::Fr, "newsletter.body") => "Recevez nos actualités et analyses de marché.".to_string(),
        (Lang::En, "newsletter.body") => "Get our news and market insights.".to_string(),
        (Lang::Fr, "newsletter.placeholder") => "Votre adresse e-mail".to_string(),
        (Lang::En, "newsletter.placeholder") => "Your email address".to_string(),
        (Lang::Fr, "newsletter.send") => "S'abonner".to_string(),
        (Lang::En, "newsletter.send") => "Subscribe".to_string(),
        (Lang::Fr, "newsletter.success") => "Merci pour votre inscription !".to_string(),
        (Lang::En, "newsletter.success") => "Thank you for subscribing!".to_string(),
        (Lang::Fr, "newsletter.error") => "Erreur lors de l'inscription.".to_string(),
        (Lang::En, "newsletter.error") => "Subscription failed.".to_string(),

        // Shared
        (Lang::Fr, "form.sending") => "Envoi en cours...".to_string(),
        (Lang::En, "form.sending") => "Sending...".to_string(),
        (Lang::Fr, "error.server_status") => "Erreur serveur :".to_string(),
        (Lang::En, "error.server_status") => "Server error:".to_string(),
        (Lang::Fr, "copyright.rights") => "Tous droits réservés.".to_string(),
        (Lang::En, "copyright.rights") => "All rights reserved.".to_string(),

        // Not found
        (Lang::Fr, "notfound.title") => "Page introuvable".to_string(),
        (Lang::En, "notfound.title") => "Page not found".to_string(),
        (Lang::Fr, "notfound.back") => "Retour à l'accueil".to_string(),
        (Lang::En, "notfound.back") => "Back to home".to_string(),

        // Fallback: use French string if present, else show key.
        (Lang::En, k) => t(Lang::Fr, k),
        (Lang::Fr, _) => key.to_string(),
    }
}
