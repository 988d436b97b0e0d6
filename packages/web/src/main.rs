use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::DashboardConfig;

use ui::SessionProvider;
use views::{Dashboard, Login, NotFound, Receipts, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[layout(Dashboard)]
        #[route("/dashboard/users")]
        Users {},
        #[route("/dashboard/receipts")]
        Receipts {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let (config, client) = use_hook(|| {
        let config = DashboardConfig::default();
        let settings = ApiConfig::from_env(&config);
        tracing::info!(base_url = %settings.base_url, "starting dashboard");
        (config, ApiClient::new(&settings))
    });

    match client {
        Ok(client) => rsx! {
            SessionProvider {
                client,
                config,
                Router::<Route> {}
            }
        },
        Err(e) => {
            tracing::error!("cannot start: {e}");
            rsx! {
                p { class: "shell-loading", "Configuración inválida: {e}" }
            }
        }
    }
}
