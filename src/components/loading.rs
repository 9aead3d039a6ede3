use dioxus::prelude::*;

/// Indeterminate spinner, shown exclusively while a fetch is in flight.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "spinner" }
    }
}
