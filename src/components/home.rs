use dioxus::prelude::*;

use crate::api::{CatalogClient, Product};
use crate::components::loading::Loading;
use crate::components::product_item::ProductItem;
use crate::remote::{use_remote, RemoteState};

/// The product list screen. Fetches the whole catalog once per mount.
#[component]
pub fn Home() -> Element {
    let client = use_context::<CatalogClient>();
    let products = use_remote((), move |()| {
        let client = client.clone();
        async move { client.products().await }
    });

    let state = products.read();
    if matches!(*state, RemoteState::Loading) {
        return rsx! {
            Loading {}
        };
    }

    rsx! {
        div { class: "hero",
            p { "The best products," }
            p { "at the best price." }
        }
        section { class: "products",
            h2 { "Products" }
            for product in visible_products(&state) {
                ProductItem { key: "{product.id}", product: product.clone() }
            }
        }
    }
}

/// A failed list fetch renders as an empty catalog. The failure itself is
/// reported by the fetch lifecycle, not surfaced on this screen.
fn visible_products(state: &RemoteState<Vec<Product>>) -> &[Product] {
    match state {
        RemoteState::Loaded(products) => products,
        RemoteState::Loading | RemoteState::Failed(_) => &[],
    }
}
