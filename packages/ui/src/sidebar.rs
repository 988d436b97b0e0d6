use dioxus::prelude::*;

use crate::session::{logout, use_config, use_session};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Top-level sections reachable from the side navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Users,
    Receipts,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Users, Section::Receipts];

    pub fn label(self) -> &'static str {
        match self {
            Section::Users => "Empleados",
            Section::Receipts => "Recibos",
        }
    }
}

#[component]
pub fn Sidebar(active: Section, on_navigate: EventHandler<Section>) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",

            div { class: "sidebar-brand", "Talento Humano" }

            nav {
                class: "sidebar-nav",
                for section in Section::ALL {
                    button {
                        key: "{section.label()}",
                        class: if section == active { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(section),
                        "{section.label()}"
                    }
                }
            }

            ProfileMenu {}
        }
    }
}

#[component]
fn ProfileMenu() -> Element {
    let session = use_session();
    let config = use_config();
    let mut open = use_signal(|| false);

    let (initials, name, email) = match session.read().user.as_ref() {
        Some(u) => (
            u.avatar_initials(),
            u.display_name().to_string(),
            u.email.clone(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    let onlogout = move |_| {
        let scope = config.storage.scope.clone();
        async move {
            open.set(false);
            logout(session, &scope).await;
        }
    };

    rsx! {
        div {
            class: "sidebar-profile",
            button {
                class: "sidebar-profile-toggle",
                onclick: move |_| open.set(!open()),
                span { class: "avatar", "{initials}" }
                span { class: "sidebar-profile-name", "{name}" }
            }
            if open() {
                div {
                    class: "sidebar-profile-menu",
                    if !email.is_empty() {
                        div { class: "sidebar-profile-email", "{email}" }
                    }
                    button {
                        class: "sidebar-profile-logout",
                        onclick: onlogout,
                        "Cerrar sesión"
                    }
                }
            }
        }
    }
}
