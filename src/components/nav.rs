use dioxus::prelude::*;

use crate::Route;

/// Store chrome shared by every screen.
#[component]
pub fn NavBar() -> Element {
    rsx! {
        header { class: "navbar",
            Link { to: Route::Home {}, h1 { "Fake Store" } }
        }
        Outlet::<Route> {}
    }
}
