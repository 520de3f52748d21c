use dioxus::prelude::*;

use ui::{Navbar, RoleBasedDashboard};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "app-layout",
            Navbar {}
            main {
                class: "app-main",
                RoleBasedDashboard {}
            }
        }
    }
}
