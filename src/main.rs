use log::{info, warn};
use yew::prelude::*;

mod catalog;
mod config;
mod gallery;
mod motion;
mod styles;
mod view_state;

mod components {
    pub mod footer_icon;
    pub mod gallery_grid;
    pub mod icons;
    pub mod lightbox;
    pub mod switcher;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;
use styles::GlobalStyles;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <GlobalStyles />
            <Portfolio />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    match catalog::validate(catalog::collections()) {
        Ok(()) => info!("Catalog loaded with {} collections", catalog::collections().len()),
        Err(err) => warn!("Catalog problem, rendering anyway: {}", err),
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
