use api::{UserFilter, UserQuery, UserSort, ALL_LABEL};
use dioxus::prelude::*;

use super::Pagination;
use crate::format::relative;
use crate::listing::use_listing;
use crate::messages::describe_error;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Employees listing: search, seven filter dimensions, sort and pagination.
#[component]
pub fn UsersView() -> Element {
    let listing = use_listing(UserQuery::new);
    let state = listing.state();
    let search = listing.search_input();
    let ctl = state.read();

    let total = ctl
        .page()
        .and_then(|p| p.total_count)
        .map(|n| format!("{n} empleados"))
        .unwrap_or_default();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "listing",
            header {
                class: "listing-header",
                h1 { "Empleados" }
                span { class: "listing-total", "{total}" }
            }

            div {
                class: "listing-toolbar",
                input {
                    class: "listing-search",
                    r#type: "search",
                    placeholder: "Buscar por nombre, correo o número",
                    value: "{search}",
                    oninput: move |evt| listing.set_search(evt.value()),
                }

                for filter in UserFilter::ALL {
                    label {
                        key: "{filter.api_key()}",
                        class: "listing-filter",
                        "{filter.label()}"
                        select {
                            onchange: move |evt| {
                                let label = evt.value();
                                listing.update(move |q| q.select(filter, &label));
                            },
                            option {
                                value: ALL_LABEL,
                                selected: ctl.query().selected_label(filter).is_none(),
                                "{ALL_LABEL}"
                            }
                            for opt in filter.options() {
                                option {
                                    key: "{opt.label}",
                                    value: "{opt.label}",
                                    selected: ctl.query().selected_label(filter) == Some(opt.label),
                                    "{opt.label}"
                                }
                            }
                        }
                    }
                }

                label {
                    class: "listing-filter",
                    "Ordenar por"
                    select {
                        onchange: move |evt| {
                            if let Some(sort) = UserSort::from_label(&evt.value()) {
                                listing.update(move |q| q.set_sort(sort));
                            }
                        },
                        for sort in UserSort::ALL {
                            option {
                                key: "{sort.api_key()}",
                                value: "{sort.label()}",
                                selected: ctl.query().sort() == sort,
                                "{sort.label()}"
                            }
                        }
                    }
                }
            }

            if let Some(err) = ctl.error() {
                p { class: "listing-error", "{describe_error(err)}" }
            }

            if ctl.is_loading() && ctl.page().is_none() {
                p { class: "listing-loading", "Cargando..." }
            } else if ctl.is_empty() {
                p { class: "listing-empty", "No se encontraron empleados." }
            } else {
                table {
                    class: if ctl.is_loading() { "listing-table loading" } else { "listing-table" },
                    thead {
                        tr {
                            th { "N°" }
                            th { "Nombre" }
                            th { "Correo" }
                            th { "Teléfono" }
                            th { "Rol" }
                            th { "Estado" }
                            th { "Último acceso" }
                        }
                    }
                    tbody {
                        for user in ctl.items() {
                            tr {
                                key: "{user.id}",
                                td { "{user.employee_number}" }
                                td {
                                    span { class: "avatar", "{user.avatar_initials()}" }
                                    "{user.display_name()}"
                                }
                                td { "{user.email}" }
                                td { "{user.phone_number}" }
                                td { "{user.role}" }
                                td {
                                    if user.active() { "Activo" } else { "Inactivo" }
                                }
                                td { "{relative(user.last_login.as_deref())}" }
                            }
                        }
                    }
                }
            }

            Pagination {
                current_page: ctl.current_page(),
                num_pages: ctl.page().and_then(|p| p.num_pages),
                has_previous: ctl.has_previous(),
                has_next: ctl.has_next(),
                loading: ctl.is_loading(),
                on_previous: move |_| listing.previous(),
                on_next: move |_| listing.next(),
            }
        }
    }
}
