use api::{Receipt, ReceiptFlag, ReceiptQuery, ReceiptSort};
use chrono::Datelike;
use dioxus::prelude::*;

use super::Pagination;
use crate::format::short_date;
use crate::listing::use_listing;
use crate::messages::describe_error;
use crate::session::{use_api, use_session};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Years offered in the year selector, counting back from the current one.
const YEARS_SHOWN: i32 = 5;

fn flag_choice(value: Option<bool>) -> &'static str {
    match value {
        None => "all",
        Some(true) => "yes",
        Some(false) => "no",
    }
}

fn parse_flag_choice(choice: &str) -> Option<bool> {
    match choice {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Payroll receipts of one year with status filters. Activating a row opens
/// the receipt's document.
#[component]
pub fn ReceiptsView() -> Element {
    let listing = use_listing(ReceiptQuery::new);
    let state = listing.state();
    let search = listing.search_input();
    let ctl = state.read();

    let session = use_session();
    let client = use_api();
    let mut notice = use_signal(|| Option::<String>::None);
    let mut document_link = use_signal(|| Option::<String>::None);

    let this_year = chrono::Local::now().year();
    let selected_year = ctl.query().year();

    let open_receipt = move |receipt: Receipt| async move {
        notice.set(None);
        let Some(token) = session.peek().token().map(str::to_string) else {
            return;
        };
        let api = client.peek().clone();
        match api.get_receipt_file(&receipt.id, &token).await {
            Ok(file) => {
                if !open_document(&file.file) {
                    document_link.set(Some(file.file));
                }
            }
            Err(e) => {
                tracing::error!(receipt = %receipt.id, "could not open receipt: {e}");
                notice.set(Some(format!(
                    "No se pudo abrir el recibo de {}: {}",
                    receipt.employee_full_name,
                    describe_error(&e)
                )));
            }
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "listing",
            header {
                class: "listing-header",
                h1 { "Recibos" }
                button {
                    class: "listing-refresh",
                    disabled: ctl.is_loading(),
                    onclick: move |_| listing.reload(),
                    "Actualizar"
                }
            }

            div {
                class: "listing-toolbar",
                input {
                    class: "listing-search",
                    r#type: "search",
                    placeholder: "Buscar por funcionario",
                    value: "{search}",
                    oninput: move |evt| listing.set_search(evt.value()),
                }

                label {
                    class: "listing-filter",
                    "Año"
                    select {
                        onchange: move |evt| {
                            if let Ok(year) = evt.value().parse::<i32>() {
                                listing.update(move |q| q.set_year(Some(year)));
                            }
                        },
                        for year in (this_year - YEARS_SHOWN + 1..=this_year).rev() {
                            option {
                                key: "{year}",
                                value: "{year}",
                                selected: year == selected_year,
                                "{year}"
                            }
                        }
                    }
                }

                for flag in ReceiptFlag::ALL {
                    label {
                        key: "{flag.api_key()}",
                        class: "listing-filter",
                        "{flag.label()}"
                        select {
                            onchange: move |evt| {
                                let value = parse_flag_choice(&evt.value());
                                listing.update(move |q| q.set_flag(flag, value));
                            },
                            for (choice, text) in [("all", "Todos"), ("yes", "Sí"), ("no", "No")] {
                                option {
                                    key: "{choice}",
                                    value: "{choice}",
                                    selected: flag_choice(ctl.query().flag(flag)) == choice,
                                    "{text}"
                                }
                            }
                        }
                    }
                }

                label {
                    class: "listing-filter",
                    "Ordenar"
                    select {
                        onchange: move |evt| {
                            if let Some(sort) = ReceiptSort::from_api_key(&evt.value()) {
                                listing.update(move |q| q.set_sort(sort));
                            }
                        },
                        for sort in ReceiptSort::ALL {
                            option {
                                key: "{sort.api_key()}",
                                value: "{sort.api_key()}",
                                selected: ctl.query().sort() == sort,
                                "{sort.label()}"
                            }
                        }
                    }
                }
            }

            if let Some(message) = notice() {
                div {
                    class: "listing-notice",
                    span { "{message}" }
                    button { onclick: move |_| notice.set(None), "×" }
                }
            }
            if let Some(link) = document_link() {
                div {
                    class: "listing-notice",
                    a { href: "{link}", target: "_blank", "Abrir documento" }
                    button { onclick: move |_| document_link.set(None), "×" }
                }
            }

            if let Some(err) = ctl.error() {
                p { class: "listing-error", "{describe_error(err)}" }
            }

            if ctl.is_loading() && ctl.page().is_none() {
                p { class: "listing-loading", "Cargando..." }
            } else if ctl.is_empty() {
                p { class: "listing-empty", "No hay recibos para {selected_year}." }
            } else {
                table {
                    class: if ctl.is_loading() { "listing-table loading" } else { "listing-table" },
                    thead {
                        tr {
                            th { "Funcionario" }
                            th { "N°" }
                            th { "Tipo" }
                            th { "Período" }
                            th { "Enviado" }
                            th { "Leído" }
                            th { "Firmado" }
                        }
                    }
                    tbody {
                        for receipt in ctl.items().iter().cloned() {
                            tr {
                                key: "{receipt.id}",
                                class: "listing-row clickable",
                                onclick: {
                                    let receipt = receipt.clone();
                                    move |_| open_receipt(receipt.clone())
                                },
                                td { "{receipt.employee_full_name}" }
                                td { "{receipt.employee_number}" }
                                td { "{receipt.r#type}" }
                                td { "{receipt.period()}" }
                                td { "{status_cell(receipt.is_sended, receipt.sended_date.as_deref())}" }
                                td { "{status_cell(receipt.is_readed, receipt.readed_date.as_deref())}" }
                                td { "{status_cell(receipt.is_signed, receipt.signed_date.as_deref())}" }
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

fn status_cell(done: bool, date: Option<&str>) -> String {
    if !done {
        return "No".to_string();
    }
    match date {
        Some(_) => short_date(date),
        None => "Sí".to_string(),
    }
}

/// Open `url` in a new browser tab. Returns `false` where there is no browser
/// window, so the caller can show the link instead.
fn open_document(url: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.open_with_url_and_target(url, "_blank").is_ok();
        }
        false
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(%url, "receipt document resolved");
        false
    }
}
