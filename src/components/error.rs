use dioxus::prelude::*;

/// The one user-visible error surface: the captured failure text, verbatim.
#[component]
pub fn ErrorPage(message: String) -> Element {
    rsx! {
        section { class: "error",
            p { "Error: {message}" }
        }
    }
}
