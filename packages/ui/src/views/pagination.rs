use dioxus::prelude::*;

#[component]
pub fn Pagination(
    current_page: u32,
    num_pages: Option<u32>,
    has_previous: bool,
    has_next: bool,
    #[props(default)] loading: bool,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let position = match num_pages {
        Some(total) => format!("Página {current_page} de {total}"),
        None => format!("Página {current_page}"),
    };

    rsx! {
        div {
            class: "pagination",
            button {
                class: "pagination-btn",
                disabled: loading || !has_previous,
                onclick: move |_| on_previous.call(()),
                "Anterior"
            }
            span { class: "pagination-position", "{position}" }
            button {
                class: "pagination-btn",
                disabled: loading || !has_next,
                onclick: move |_| on_next.call(()),
                "Siguiente"
            }
        }
    }
}
