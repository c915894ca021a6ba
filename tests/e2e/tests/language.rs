use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn french_is_shown_first() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");

    let label = page
        .find_element(".contact-form button.lang-fr")
        .expect("French submit button should exist");
    assert_eq!(label.trim(), "Envoyer le Message");

    let hidden = page
        .attribute(".contact-form button.lang-en", "style")
        .expect("English submit button should exist");
    assert_eq!(hidden.as_deref(), Some("display: none"));

    let required = page
        .attribute(".newsletter-email.lang-fr", "required")
        .expect("French newsletter input should exist");
    assert!(required.is_some(), "visible newsletter input is required");
}

#[tokio::test]
async fn header_buttons_open_menu_and_switch_language() {
    let server = TestServer::start_with_client()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch_mobile().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");

    // Present once header.html has been injected.
    page.find_element(".mobile-menu-btn")
        .expect("header fragment should be injected");
    page.wait_for_attribute(".lang-btn[data-lang='fr']", "class", |class| {
        class.is_some_and(|c| c.contains("active"))
    })
    .expect("French button starts active");

    // On a phone the language buttons sit inside the collapsed menu.
    page.click(".mobile-menu-btn").expect("Failed to click menu");
    page.wait_for_attribute(".nav-links", "class", |class| {
        class.is_some_and(|c| c.split_whitespace().any(|c| c == "show"))
    })
    .expect("menu should open");

    page.click(".lang-btn[data-lang='en']")
        .expect("Failed to click EN");

    page.wait_for_attribute(".privacy-policy-link", "href", |href| {
        href == Some("privacy-policy-en.pdf")
    })
    .expect("privacy link should point to the English PDF");
    page.wait_for_attribute("html", "lang", |lang| lang == Some("en"))
        .expect("document language should be en");
    page.wait_for_attribute("header .lang-fr", "style", |style| {
        style.is_some_and(|s| s.contains("display: none"))
    })
    .expect("French header text should be hidden");
}
