//! Session context and hooks for the UI.

use api::{ApiClient, ApiError, User};
use dioxus::prelude::*;
use store::{DashboardConfig, Session};

use crate::storage::session_store;

/// The session of the logged-in administrator.
/// Updates on restore, login and logout.
pub fn use_session() -> Signal<Session<User>> {
    use_context::<Signal<Session<User>>>()
}

pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}

/// Provider component for the session, the API client and the configuration.
/// Wrap the app with this component; it restores the persisted session once.
#[component]
pub fn SessionProvider(client: ApiClient, config: DashboardConfig, children: Element) -> Element {
    let mut session = use_context_provider(|| Signal::new(Session::<User>::default()));
    use_context_provider(|| Signal::new(client.clone()));
    let config = use_context_provider(|| config.clone());

    let _restore = use_resource(move || {
        let scope = config.storage.scope.clone();
        async move {
            let restored = session_store(&scope).restore::<User>().await;
            merge_restored(&mut session.write(), restored);
        }
    });

    rsx! {
        {children}
    }
}

/// Install a session read back from storage, unless a login already replaced
/// the in-memory one while storage was being read.
pub(crate) fn merge_restored(current: &mut Session<User>, restored: Session<User>) {
    if current.token.is_some() {
        // A login finished first; keep it.
        current.set_ready(true);
    } else {
        *current = restored;
    }
}

/// Exchange credentials for a session, persist it and install it.
///
/// A failure to persist is logged; the session still holds for this run.
pub async fn login(
    mut session: Signal<Session<User>>,
    client: &ApiClient,
    scope: &str,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let response = client.login(username, password).await?;

    if let Err(e) = session_store(scope).save(&response.user, &response.token).await {
        tracing::warn!("session not persisted: {e}");
    }

    tracing::info!(user = %response.user.display_name(), "logged in");
    let mut current = session.write();
    current.set_user(response.user);
    current.set_token(response.token);
    current.set_ready(true);
    Ok(())
}

/// Local logout: forget the session in memory and in storage. The server is not told.
pub async fn logout(mut session: Signal<Session<User>>, scope: &str) {
    session.write().clear();
    if let Err(e) = session_store(scope).clear().await {
        tracing::warn!("failed to remove persisted session: {e}");
    }
    tracing::info!("logged out");
}
