use dioxus::prelude::*;

use ui::{use_session, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: straight to the dashboard.
    if session().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "login-layout",
            LoginForm {
                on_success: move |_| {
                    nav.push(Route::Dashboard {});
                },
            }
        }
    }
}
