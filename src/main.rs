#![allow(non_snake_case)]

mod app;
mod captcha;
mod components;
pub mod context;
mod data;
mod driver;
mod pages;
mod relay;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::RelayCredentials;

/// Global relay credentials, set from command line
static RELAY_CREDENTIALS: OnceLock<RelayCredentials> = OnceLock::new();

/// Get the relay credentials (set from command line, empty otherwise)
pub fn relay_credentials() -> RelayCredentials {
    RELAY_CREDENTIALS.get().cloned().unwrap_or_default()
}

/// Folio - personal portfolio shell
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio site with a scroll-synchronized UI")]
struct Args {
    /// Public key for the email relay account
    #[arg(long)]
    relay_public_key: Option<String>,

    /// Email relay service id
    #[arg(long)]
    relay_service: Option<String>,

    /// Email relay template id
    #[arg(long)]
    relay_template: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let credentials = RelayCredentials {
        public_key: args.relay_public_key.unwrap_or_default(),
        service_id: args.relay_service.unwrap_or_default(),
        template_id: args.relay_template.unwrap_or_default(),
    };
    if !credentials.is_complete() {
        tracing::warn!("email relay credentials missing; contact sends will be rejected");
    }
    let _ = RELAY_CREDENTIALS.set(credentials);

    let window_width = 1180.0;
    let window_height = 860.0;

    tracing::info!("starting folio shell");

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
