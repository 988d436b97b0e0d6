//! Login page. Sends an already logged-in user straight to the dashboard.

use dioxus::prelude::*;
use ui::{use_session, LoginView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if session.read().is_authenticated() {
            nav.replace(Route::Users {});
        }
    });

    if !session.read().ready {
        return rsx! {
            div { class: "shell-loading", "Cargando..." }
        };
    }

    rsx! {
        LoginView {
            on_login: move |_| {
                nav.replace(Route::Users {});
            },
        }
    }
}
