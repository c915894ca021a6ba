use e2e::test_server::TestServer;

#[tokio::test]
async fn homepage_renders_every_section() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    for marker in ["id=\"services\"", "id=\"contact\"", "newsletter-form", "g-recaptcha"] {
        assert!(body.contains(marker), "homepage should contain {marker}");
    }
}

#[tokio::test]
async fn unknown_path_renders_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(format!("{}no/such/page", server.url()))
        .await
        .expect("Failed to fetch page");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Page introuvable"), "French not-found title should render");
}
