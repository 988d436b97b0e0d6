use dioxus::prelude::*;

use crate::messages::describe_error;
use crate::session::{login, use_api, use_config, use_session};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Username/password form. Installs the session on success.
#[component]
pub fn LoginView(
    /// Called once the session is installed.
    #[props(default)]
    on_login: Option<EventHandler<()>>,
) -> Element {
    let session = use_session();
    let client = use_api();
    let config = use_config();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let can_submit = !loading() && !username().trim().is_empty() && !password().is_empty();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let scope = config.storage.scope.clone();
        async move {
            if loading() || username().trim().is_empty() || password().is_empty() {
                return;
            }
            loading.set(true);
            error.set(None);

            let api = client.peek().clone();
            match login(session, &api, &scope, username().trim(), &password()).await {
                Ok(()) => {
                    password.set(String::new());
                    if let Some(handler) = on_login {
                        handler.call(());
                    }
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    error.set(Some(describe_error(&e)));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "login-container",
            form {
                class: "login-form",
                onsubmit: onsubmit,

                h1 { "Iniciar sesión" }

                label { r#for: "username", "Usuario" }
                input {
                    id: "username",
                    r#type: "text",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }

                label { r#for: "password", "Contraseña" }
                input {
                    id: "password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(message) = error() {
                    p { class: "login-error", "{message}" }
                }

                button {
                    r#type: "submit",
                    class: "login-btn",
                    disabled: !can_submit,
                    if loading() { "Ingresando..." } else { "Ingresar" }
                }
            }
        }
    }
}
