use leptos::prelude::*;

use portfolio::app::{App, Site};
use portfolio::config::DEFAULT_LOG_LEVEL;
use portfolio::logging;

fn main() {
    let site = Site::load();

    let level = site
        .as_ref()
        .map(|s| s.config.log_level.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    logging::init(&level);

    if let Err(e) = &site {
        tracing::error!("Failed to load site data: {}", e);
    }

    leptos::mount::mount_to_body(move || view! { <App site=site /> });
}
