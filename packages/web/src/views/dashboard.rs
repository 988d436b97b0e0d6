use dioxus::prelude::*;
use ui::{DashboardShell, ReceiptsView, Section, UsersView};

use crate::Route;

fn route_for(section: Section) -> Route {
    match section {
        Section::Users => Route::Users {},
        Section::Receipts => Route::Receipts {},
    }
}

/// Layout shared by every `/dashboard/...` route.
#[component]
pub fn Dashboard() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    let active = match route {
        Route::Receipts {} => Section::Receipts,
        _ => Section::Users,
    };

    rsx! {
        DashboardShell {
            active,
            on_navigate: move |section| {
                nav.push(route_for(section));
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Users() -> Element {
    rsx! { UsersView {} }
}

#[component]
pub fn Receipts() -> Element {
    rsx! { ReceiptsView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "shell-loading",
            p { "No existe la página /{path}." }
            Link { to: Route::Users {}, "Ir a Empleados" }
        }
    }
}
