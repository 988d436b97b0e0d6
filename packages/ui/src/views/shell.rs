use dioxus::prelude::*;

use super::LoginView;
use crate::session::use_session;
use crate::sidebar::{Section, Sidebar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Authenticated chrome around a section.
///
/// Shows a placeholder until the session is restored and the login form while
/// nobody is logged in; nothing below it mounts (or fetches) before that.
#[component]
pub fn DashboardShell(
    /// Section highlighted in the side navigation.
    active: Section,
    on_navigate: EventHandler<Section>,
    children: Element,
) -> Element {
    let session = use_session();
    let (ready, authenticated) = {
        let current = session.read();
        (current.ready, current.is_authenticated())
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        if !ready {
            div { class: "shell-loading", "Cargando..." }
        } else if !authenticated {
            LoginView {}
        } else {
            div {
                class: "shell",
                Sidebar { active, on_navigate }
                main { class: "shell-content", {children} }
            }
        }
    }
}
