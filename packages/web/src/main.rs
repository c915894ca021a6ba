use dioxus::prelude::*;
use site::SiteConfig;

use views::{Home, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    if let Err(err) = installed {
        eprintln!("startup: tracing already installed: {err}");
    }
}

fn log_runtime_config() {
    let config = SiteConfig::from_env();

    tracing::info!("startup: SITE_MODE={:?}", config.mode);
    tracing::info!("startup: contact endpoint {}", config.contact_endpoint);
    tracing::info!("startup: newsletter endpoint {}", config.newsletter_endpoint);
    tracing::info!(
        "startup: fragments {} -> {}, {} -> {}",
        config.header.path,
        config.header.selector,
        config.footer.path,
        config.footer.selector
    );

    if config.recaptcha_site_key == site::config::DEFAULT_RECAPTCHA_SITE_KEY {
        tracing::warn!("startup: SITE_RECAPTCHA_SITE_KEY not set, using the reCAPTCHA test key");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::PageProvider {
            Router::<Route> {}
        }
    }
}

/// The shared page frame around the web `Route` outlet.
#[component]
fn WebShell() -> Element {
    rsx! {
        ui::SiteShell {
            Outlet::<Route> {}
        }
    }
}
