//! HR API client.
//!
//! Wraps a configured [`reqwest::Client`] and exposes one method per endpoint.
//! Requests carry `Authorization: Token <token>`; nothing is retried.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{server_message, ApiError};
use crate::models::{LoginRequest, LoginResponse, PageResponse, PageResult, Receipt, ReceiptFile, User};
use crate::query::{ListingQuery, PageCursor, ReceiptQuery, UserQuery};

/// Client for the HR REST API.
///
/// Cheap to clone; clones share the connection pool.
///
/// ```rust,no_run
/// # async fn list_employees() -> Result<(), api::ApiError> {
/// use api::{ApiClient, ApiConfig, PageCursor, UserQuery};
///
/// let client = ApiClient::new(&ApiConfig::new("http://localhost:8000"))?;
/// let login = client.login("admin", "secret").await?;
/// let page = client
///     .list_users(&UserQuery::new().with_search("garcia"), &PageCursor::First, &login.token)
///     .await?;
/// println!("{} employees", page.items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    timeout: Duration,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.timeout == other.timeout
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url =
            Url::parse(&base).map_err(|_| ApiError::InvalidUrl(config.base_url.clone()))?;

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let http = builder.build()?;

        Ok(Self {
            base_url,
            http,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchange credentials for a token and the user record.
    ///
    /// A 4xx answer means the credentials were rejected and yields [`ApiError::Auth`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("users/demo_login/")?;
        tracing::debug!(%url, username, "logging in");

        let request = self
            .http
            .post(url)
            .json(&LoginRequest { username, password });
        let response = self.send(request).await?;

        if response.status().is_client_error() {
            let message = match Self::status_error(response).await {
                ApiError::Status { message, .. } => message,
                other => other.to_string(),
            };
            tracing::debug!("login rejected: {message}");
            return Err(ApiError::Auth(message));
        }
        Self::decode(response).await
    }

    /// One page of the employees listing.
    pub async fn list_users(
        &self,
        query: &UserQuery,
        cursor: &PageCursor,
        token: &str,
    ) -> Result<PageResult<User>, ApiError> {
        self.fetch_listing(query, cursor, token).await
    }

    /// One page of the receipts listing for the query's year (current year by default).
    pub async fn list_receipts(
        &self,
        query: &ReceiptQuery,
        cursor: &PageCursor,
        token: &str,
    ) -> Result<PageResult<Receipt>, ApiError> {
        self.fetch_listing(query, cursor, token).await
    }

    /// Resolve the viewing/download link of a receipt's document.
    pub async fn get_receipt_file(&self, id: &str, token: &str) -> Result<ReceiptFile, ApiError> {
        Self::require_token(token)?;

        let mut url = self.endpoint("receipts/")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(id)
            .push("file");

        tracing::debug!(%url, "resolving receipt file");
        let response = self.send(self.authorized(self.http.get(url), token)).await?;
        Self::decode(response).await
    }

    async fn fetch_listing<Q>(
        &self,
        query: &Q,
        cursor: &PageCursor,
        token: &str,
    ) -> Result<PageResult<Q::Item>, ApiError>
    where
        Q: ListingQuery,
        Q::Item: DeserializeOwned,
    {
        Self::require_token(token)?;

        let request = match cursor {
            PageCursor::First => self.http.get(self.endpoint(Q::PATH)?).query(&query.params()),
            PageCursor::Link(link) => self.http.get(self.resolve(link)?),
        };

        #[cfg(not(target_arch = "wasm32"))]
        let start = std::time::Instant::now();
        let response = self.send(self.authorized(request, token)).await?;
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!(
            url = %response.url(),
            status = %response.status(),
            elapsed = ?start.elapsed(),
            "listing response"
        );

        let page: PageResponse<Q::Item> = Self::decode(response).await?;
        Ok(page.into())
    }

    fn require_token(token: &str) -> Result<(), ApiError> {
        if token.trim().is_empty() {
            return Err(ApiError::MissingToken);
        }
        Ok(())
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Token {token}"))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|_| ApiError::InvalidUrl(path.to_string()))
    }

    /// Server-issued links are used as-is; relative ones are taken relative to the base.
    fn resolve(&self, link: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(link)
            .map_err(|_| ApiError::InvalidUrl(link.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        Ok(request.send().await?)
    }

    // reqwest has no client-wide timeout in the browser; race the request against a timer.
    #[cfg(target_arch = "wasm32")]
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        use futures::future::{select, Either};

        let request = std::pin::pin!(request.send());
        let timer = std::pin::pin!(gloo_timers::future::sleep(self.timeout));
        match select(request, timer).await {
            Either::Left((result, _)) => Ok(result?),
            Either::Right(_) => Err(ApiError::Transport(format!(
                "request timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body).unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "request failed");
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// Source of listing pages.
///
/// The listing controller only needs this; [`ApiClient`] implements it for both
/// listings and tests substitute their own sources.
pub trait PageSource<Q: ListingQuery> {
    fn fetch_page(
        &self,
        query: &Q,
        cursor: &PageCursor,
        token: &str,
    ) -> impl std::future::Future<Output = Result<PageResult<Q::Item>, ApiError>>;
}

impl PageSource<UserQuery> for ApiClient {
    async fn fetch_page(
        &self,
        query: &UserQuery,
        cursor: &PageCursor,
        token: &str,
    ) -> Result<PageResult<User>, ApiError> {
        self.list_users(query, cursor, token).await
    }
}

impl PageSource<ReceiptQuery> for ApiClient {
    async fn fetch_page(
        &self,
        query: &ReceiptQuery,
        cursor: &PageCursor,
        token: &str,
    ) -> Result<PageResult<Receipt>, ApiError> {
        self.list_receipts(query, cursor, token).await
    }
}
