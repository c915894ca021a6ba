use site::test_utils::{MemElement, MemoryDom, MockTransport};
use site::{apply, classify, dispatch, load_shell, render, ClickTarget, Dom, Lang, PageState, Reply, SiteConfig};

const HEADER: &str = r#"<nav><button class="lang-btn" data-lang="fr">FR</button></nav>"#;
const FOOTER: &str = r#"<p id="copyright-notice"></p>"#;

/// The document after the fragments were injected, flattened into the
/// in-memory DOM.
fn loaded_page() -> MemoryDom {
    MemoryDom::new()
        .with(MemElement::new("header"))
        .with(MemElement::new("footer"))
        .with(MemElement::new("button").class("lang-btn").attr("data-lang", "fr"))
        .with(MemElement::new("button").class("lang-btn").attr("data-lang", "en"))
        .with(MemElement::new("button").class("mobile-menu-btn"))
        .with(MemElement::new("ul").class("nav-links"))
        .with(MemElement::new("h1").class("lang-fr"))
        .with(MemElement::new("h1").class("lang-en"))
        .with(MemElement::new("p").class("tagline lang-fr"))
        .with(MemElement::new("p").class("tagline lang-en"))
        .with(MemElement::new("a").class("privacy-policy-link"))
        .with(MemElement::new("a").class("legal-notice-link"))
        .with(MemElement::new("a").class("terms-conditions-link"))
        .with(MemElement::new("input").class("newsletter-email lang-fr"))
        .with(MemElement::new("input").class("newsletter-email lang-en"))
        .with(MemElement::new("p").id("copyright-notice"))
        .with(MemElement::new("p").id("copyright-notice-en"))
        .with(MemElement::new("section").id("contact").at(900.0))
}

fn snapshot(dom: &MemoryDom) -> Vec<MemElement> {
    dom.find("*")
}

#[tokio::test]
async fn page_ready_flow() {
    let transport = MockTransport::new()
        .with_get("/header.html", Reply::new(200, HEADER))
        .with_get("/footer.html", Reply::new(200, FOOTER));
    let dom = loaded_page();
    let config = SiteConfig::default();

    assert_eq!(load_shell(&transport, &dom, &config).await, (true, true));
    assert_eq!(dom.one("header").inner_html, HEADER);

    // No lang attribute yet: French.
    let lang = dom
        .document_lang()
        .as_deref()
        .and_then(Lang::from_code)
        .unwrap_or_default();
    let state = PageState::new(lang, 2030);
    apply(&render(&state), &dom);

    assert_eq!(dom.document_lang().as_deref(), Some("fr"));
    assert!(dom.one(".lang-btn[data-lang='fr']").has_class("active"));
    assert_eq!(dom.one("#copyright-notice").text, "© 2021-2030 RMS International Group. Tous droits réservés.");
    assert_eq!(dom.one("#copyright-notice-en").text, "© 2021-2030 RMS International Group. All rights reserved.");
}

#[test]
fn every_tagged_element_mirrors_the_language() {
    for lang in Lang::ALL {
        let dom = loaded_page();
        let mut state = PageState::new(Lang::Fr, 2030);
        dispatch(&mut state, site::Interaction::SelectLanguage(lang));
        apply(&render(&state), &dom);

        for tag in Lang::ALL {
            let selector = format!(".{}", tag.class());
            let elements = dom.find(&selector);
            assert!(!elements.is_empty());
            for el in elements {
                assert_eq!(el.visible(), tag == lang, "{selector} after switching to {lang}");
            }
        }
        let active: Vec<_> = dom.find(".lang-btn.active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].attrs["data-lang"], lang.code());
        assert!(dom.one(&format!(".newsletter-email.{}", lang.class())).required);
    }
}

#[test]
fn switching_twice_is_idempotent() {
    let dom = loaded_page();
    let mut state = PageState::new(Lang::Fr, 2030);

    dispatch(&mut state, site::Interaction::SelectLanguage(Lang::En));
    apply(&render(&state), &dom);
    let once = snapshot(&dom);

    dispatch(&mut state, site::Interaction::SelectLanguage(Lang::En));
    apply(&render(&state), &dom);
    assert_eq!(snapshot(&dom), once);
}

#[test]
fn clicks_drive_the_page() {
    let dom = loaded_page();
    let mut state = PageState::new(Lang::Fr, 2030);
    apply(&render(&state), &dom);

    let menu_click = ClickTarget {
        menu_button: true,
        ..Default::default()
    };
    let interaction = classify(&menu_click).expect("menu click");
    dispatch(&mut state, interaction);
    apply(&render(&state), &dom);
    assert!(dom.one(".nav-links").has_class("show"));

    let lang_click = ClickTarget {
        lang_button: Some("en".to_string()),
        ..Default::default()
    };
    dispatch(&mut state, classify(&lang_click).expect("lang click"));
    apply(&render(&state), &dom);
    assert_eq!(dom.one(".legal-notice-link").attrs["href"], "legal-notice-en.pdf");
    assert_eq!(dom.one(".legal-notice-link").text, "Legal Notice");

    let anchor_click = ClickTarget {
        anchor_href: Some("#contact".to_string()),
        ..Default::default()
    };
    let interaction = classify(&anchor_click).expect("anchor click");
    match dispatch(&mut state, interaction) {
        site::Dispatch::ScrollTo(selector) => {
            assert_eq!(
                site::scroll::scroll_top(&dom, &selector, SiteConfig::default().header_offset),
                Some(820.0)
            );
        }
        other => panic!("expected a scroll request, got {other:?}"),
    }
}

#[tokio::test]
async fn page_without_placeholders_still_works() {
    let transport = MockTransport::new();
    let dom = MemoryDom::new().with(MemElement::new("span").class("lang-en"));

    assert_eq!(load_shell(&transport, &dom, &SiteConfig::default()).await, (false, false));
    assert!(transport.gets().is_empty());

    apply(&render(&PageState::new(Lang::Fr, 2030)), &dom);
    assert!(!dom.one(".lang-en").visible());
}
