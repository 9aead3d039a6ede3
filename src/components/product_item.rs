use dioxus::prelude::*;

use crate::api::Product;
use crate::Route;

/// One summary row in the product list: thumbnail, single-line title,
/// price. The whole row links to the product's detail page.
#[component]
pub fn ProductItem(product: Product) -> Element {
    rsx! {
        Link {
            class: "product-item",
            to: Route::ProductPage { id: product.id },
            img { class: "product-thumb", src: "{product.image}", alt: "{product.title}" }
            div { class: "product-summary",
                p { class: "product-title", "{product.title}" }
                span { class: "product-price", "${product.price}" }
            }
        }
    }
}
