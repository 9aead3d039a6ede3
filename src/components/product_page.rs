use std::fmt::Display;

use dioxus::prelude::*;

use crate::api::{CatalogClient, Product};
use crate::components::error::ErrorPage;
use crate::components::loading::Loading;
use crate::remote::{use_remote, RemoteState};
use crate::Route;

/// The product detail screen. `id` comes from the route and is a reactive
/// input: every distinct value starts a fresh fetch cycle, discarding
/// whatever the previous cycle was about to deliver.
#[component]
pub fn ProductPage(id: u32) -> Element {
    let client = use_context::<CatalogClient>();
    let product = use_remote(id, move |id| {
        let client = client.clone();
        async move { client.product(id).await }
    });

    let body = match &*product.read() {
        RemoteState::Loading => rsx! {
            Loading {}
        },
        RemoteState::Failed(message) => rsx! {
            ErrorPage { message: message.clone() }
        },
        RemoteState::Loaded(product) => rsx! {
            ProductContent { product: product.clone() }
        },
    };

    rsx! {
        section { class: "product-page",
            Link { class: "back", to: Route::Home {}, "← Back" }
            {body}
        }
    }
}

/// The loaded detail view: image, title, price, rating line, description,
/// quantity selector and the (unimplemented) add-to-cart action.
#[component]
pub fn ProductContent(product: Product) -> Element {
    let mut quantity = use_signal(Quantity::default);

    rsx! {
        img { class: "product-image", src: "{product.image}", alt: "{product.title}" }
        h1 { class: "product-title", "{product.title}" }
        span { class: "product-price", "${product.price}" }
        p { class: "product-rating", "⭐ {product.rating}" }
        h3 { "Description" }
        p { class: "product-description", "{product.description}" }
        div { class: "quantity",
            button { onclick: move |_| quantity.write().decrement(), "−" }
            span { class: "quantity-count", "{quantity}" }
            button { onclick: move |_| quantity.write().increment(), "+" }
        }
        // TODO: wire this up once a cart exists.
        button { class: "add-to-cart", "Add to cart" }
    }
}

/// View-local pick of how many units to add, floored at one. Never leaves
/// the screen and dies with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantity(u32);

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

impl Quantity {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }

    /// Decrementing at one is a no-op.
    pub fn decrement(&mut self) {
        if self.0 > 1 {
            self.0 -= 1;
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
