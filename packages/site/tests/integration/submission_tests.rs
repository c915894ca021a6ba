use site::forms::{ContactField, ContactFields, FormKind, NewsletterFields, SubmitState};
use site::test_utils::{MockTransport, RecordingHost, StaticCaptcha};
use site::{dispatch, render, Interaction, Lang, PageState, Reply, SiteConfig, SubmitOutcome, Submitter};

fn state_with_contact(lang: Lang) -> PageState {
    let mut state = PageState::new(lang, 2030);
    for (field, value) in [
        (ContactField::Name, "Grace Hopper"),
        (ContactField::Email, "grace@example.test"),
        (ContactField::Service, "logistics"),
        (ContactField::Message, "Need a quote"),
    ] {
        dispatch(&mut state, Interaction::EditContact(field, value.to_string()));
    }
    state
}

#[tokio::test]
async fn empty_captcha_never_reaches_the_network() {
    let config = SiteConfig::default();
    let transport = MockTransport::new().with_post(&config.contact_endpoint, Reply::new(200, "{}"));
    let state = state_with_contact(Lang::En);
    let host = RecordingHost::with_state(state.clone());

    let outcome = Submitter::new(&transport, &config)
        .contact(&host, &StaticCaptcha::new("   "), Lang::En, &state.contact.fields)
        .await;

    assert!(matches!(outcome, SubmitOutcome::CaptchaMissing));
    assert!(transport.posts().is_empty());
    assert_eq!(host.alerts(), vec!["Please complete the reCAPTCHA.".to_string()]);
    // The visitor keeps what they typed.
    assert_eq!(host.state().contact.fields, state.contact.fields);
}

#[tokio::test]
async fn success_clears_form_and_restores_both_buttons() {
    for lang in Lang::ALL {
        let config = SiteConfig::default();
        let transport =
            MockTransport::new().with_post(&config.contact_endpoint, Reply::new(200, r#"{"ok":true}"#));
        let state = state_with_contact(lang);
        let host = RecordingHost::with_state(state.clone());

        let outcome = Submitter::new(&transport, &config)
            .contact(&host, &StaticCaptcha::new("token"), lang, &state.contact.fields)
            .await;
        assert!(matches!(outcome, SubmitOutcome::Sent));

        let after = host.state();
        assert_eq!(after.contact.fields, ContactFields::default());
        assert_eq!(after.contact.submit, SubmitState::Idle);

        let view = render(&after);
        assert_eq!(view.contact_buttons[0].label, "Envoyer le Message");
        assert_eq!(view.contact_buttons[1].label, "Send Message");
        assert!(view.contact_buttons.iter().all(|b| !b.disabled));
    }
}

#[tokio::test]
async fn server_message_is_shown_and_button_re_enabled() {
    let config = SiteConfig::default();
    let transport = MockTransport::new().with_post(
        &config.contact_endpoint,
        Reply::new(500, r#"{"message":"bad input"}"#),
    );
    let state = state_with_contact(Lang::En);
    let host = RecordingHost::with_state(state.clone());

    Submitter::new(&transport, &config)
        .contact(&host, &StaticCaptcha::new("token"), Lang::En, &state.contact.fields)
        .await;

    let alerts = host.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains("bad input"));
    assert_eq!(
        host.submit_history(),
        vec![
            (FormKind::Contact, SubmitState::Sending(Lang::En)),
            (FormKind::Contact, SubmitState::Idle),
        ]
    );
    assert!(render(&host.state()).contact_buttons.iter().all(|b| !b.disabled));
    // A failed submission keeps the fields for another attempt.
    assert_eq!(host.state().contact.fields, state.contact.fields);
}

#[tokio::test]
async fn contact_payload_on_the_wire() {
    let config = SiteConfig::default();
    let transport = MockTransport::new().with_post(&config.contact_endpoint, Reply::new(200, ""));
    let mut state = state_with_contact(Lang::Fr);
    dispatch(
        &mut state,
        Interaction::EditContact(ContactField::Name, "  Grace Hopper  ".to_string()),
    );
    let host = RecordingHost::with_state(state.clone());

    Submitter::new(&transport, &config)
        .contact(&host, &StaticCaptcha::new("captcha-token"), Lang::Fr, &state.contact.fields)
        .await;

    let posts = transport.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(
        posts[0].1,
        serde_json::json!({
            "name": "Grace Hopper",
            "email": "grace@example.test",
            "service": "logistics",
            "message": "Need a quote",
            "g-recaptcha-response": "captcha-token",
        })
    );
}

#[tokio::test]
async fn newsletter_submits_the_visible_language_input() {
    let config = SiteConfig::default();
    let transport = MockTransport::new().with_post(&config.newsletter_endpoint, Reply::new(200, ""));
    let mut state = PageState::new(Lang::En, 2030);
    dispatch(&mut state, Interaction::EditNewsletter(Lang::Fr, "stale@example.test".into()));
    dispatch(&mut state, Interaction::EditNewsletter(Lang::En, "reader@example.test".into()));
    let host = RecordingHost::with_state(state.clone());

    let outcome = Submitter::new(&transport, &config)
        .newsletter(&host, state.lang, &state.newsletter.fields)
        .await;

    assert!(matches!(outcome, SubmitOutcome::Sent));
    assert_eq!(transport.posts()[0].1, serde_json::json!({"email": "reader@example.test"}));
    assert_eq!(host.state().newsletter.fields, NewsletterFields::default());
    assert_eq!(host.alerts(), vec!["Thank you for subscribing!".to_string()]);
}
