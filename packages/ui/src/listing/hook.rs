use std::time::Duration;

use api::{ApiClient, ListingQuery, PageSource, User};
use dioxus::prelude::*;
use store::Session;

use super::controller::{ListingController, PendingFetch};
use super::debounce::{sleep, Debouncer};
use crate::session::{use_api, use_config, use_session};

/// Handle to a listing mounted in a component. `Copy`, so it can be moved into
/// any number of event handlers.
pub struct Listing<Q: ListingQuery + 'static> {
    state: Signal<ListingController<Q>>,
    session: Signal<Session<User>>,
    client: Signal<ApiClient>,
    search_input: Signal<String>,
    search_debounce: Signal<Debouncer>,
    debounce: Duration,
}

impl<Q: ListingQuery + 'static> Clone for Listing<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: ListingQuery + 'static> Copy for Listing<Q> {}

/// Mount a listing for `Q`, starting from the query `init` returns.
///
/// The listing stays idle until the session is ready and holds a token, then
/// fetches the first page. It restarts whenever the token changes.
pub fn use_listing<Q>(init: impl FnOnce() -> Q) -> Listing<Q>
where
    Q: ListingQuery + 'static,
    ApiClient: PageSource<Q>,
{
    let session = use_session();
    let client = use_api();
    let config = use_config();

    let state = use_signal(|| ListingController::new(init()));
    let search_input = use_signal(|| state.peek().query().search().to_string());
    let search_debounce = use_signal(Debouncer::default);

    let listing = Listing {
        state,
        session,
        client,
        search_input,
        search_debounce,
        debounce: Duration::from_millis(config.listing.search_debounce_ms),
    };

    let token = use_memo(move || session.read().token().map(str::to_string));
    use_effect(move || {
        let token = token();
        let mut state = listing.state;
        let pending = state.write().activate(token.as_deref());
        listing.dispatch(pending);
    });

    listing
}

impl<Q> Listing<Q>
where
    Q: ListingQuery + 'static,
    ApiClient: PageSource<Q>,
{
    pub fn state(&self) -> Signal<ListingController<Q>> {
        self.state
    }

    /// Text of the search box, which may be ahead of the query while debouncing.
    pub fn search_input(&self) -> Signal<String> {
        self.search_input
    }

    /// Change the query. Takes effect immediately.
    pub fn update(self, change: impl FnOnce(&mut Q)) {
        let token = self.token();
        let mut state = self.state;
        let pending = state.write().update(token.as_deref(), change);
        self.dispatch(pending);
    }

    /// Record typed search text; the query follows once typing pauses.
    pub fn set_search(self, text: String) {
        let mut input = self.search_input;
        input.set(text.clone());

        if self.debounce.is_zero() {
            self.update(move |q| q.set_search(text));
            return;
        }

        let mut debouncer = self.search_debounce;
        let ticket = debouncer.write().issue();

        spawn(async move {
            sleep(self.debounce).await;
            if debouncer.peek().is_latest(ticket) {
                self.update(move |q| q.set_search(text));
            }
        });
    }

    pub fn next(self) {
        let token = self.token();
        let mut state = self.state;
        let pending = state.write().next(token.as_deref());
        self.dispatch(pending);
    }

    pub fn previous(self) {
        let token = self.token();
        let mut state = self.state;
        let pending = state.write().previous(token.as_deref());
        self.dispatch(pending);
    }

    pub fn reload(self) {
        let token = self.token();
        let mut state = self.state;
        let pending = state.write().reload(token.as_deref());
        self.dispatch(pending);
    }

    fn token(&self) -> Option<String> {
        self.session.peek().token().map(str::to_string)
    }

    fn dispatch(self, pending: Option<PendingFetch<Q>>) {
        let Some(pending) = pending else {
            return;
        };
        let client = self.client;
        let mut state = self.state;
        spawn(async move {
            let source = client.peek().clone();
            let result = pending.run(&source).await;
            state.write().commit(pending, result);
        });
    }
}
