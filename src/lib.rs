//! A small storefront over the Fake Store catalog: a product list screen
//! and a product detail screen, each one fetch cycle against the shared
//! catalog client.

pub mod api;
pub mod components;
pub mod remote;

use dioxus::prelude::*;

use crate::api::CatalogClient;
use crate::components::home::Home;
use crate::components::nav::NavBar;
use crate::components::product_page::ProductPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/products/:id")]
        ProductPage { id: u32 },
}

/// Composition root: one catalog client for the whole app, handed to the
/// screens through context.
pub fn App() -> Element {
    use_context_provider(|| CatalogClient::new(api::DEFAULT_BASE_URL));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
