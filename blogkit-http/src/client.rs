//! The authenticated HTTP client.
//!
//! Wraps a [`Transport`], attaches the stored bearer token to every
//! outgoing request, and recovers from rejected access tokens with a
//! single-flight refresh: however many requests fail at once, exactly one
//! refresh call goes out, every other failed request waits in a queue,
//! and the queue is drained in arrival order once the refresh resolves.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{debug, warn};
use uuid::Uuid;

use blogkit_core::{ApiEnvelope, Credentials, Error, ErrorBody, RefreshRequest, Result};

use crate::config::{ClientConfig, ConfigError};
use crate::request::{ApiRequest, RequestOptions};
use crate::store::{MemoryTokenStore, TokenStore, TokenStoreExt};
use crate::transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};

/// Callback fired once per failed refresh, after credentials are cleared.
/// The owning application uses it to navigate to its login entry point.
pub type AuthLostHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client with automatic bearer-token attachment and single-flight
/// token refresh.
///
/// Cloning is cheap; clones share the token store, the transport, and the
/// refresh state, so concurrent requests from any clone join the same
/// refresh burst.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    store: Arc<dyn TokenStore>,
    on_auth_lost: Option<AuthLostHook>,
    refresh: Mutex<RefreshState>,
}

/// Refresh bookkeeping. The flag and queue are always mutated together
/// under the one lock, and the lock is never held across an await.
#[derive(Default)]
struct RefreshState {
    in_flight: bool,
    queue: Vec<QueuedRequest>,
}

/// A request that failed authentication while a refresh was in flight.
/// The drain path replays `request` with the new token and delivers the
/// outcome through `tx`.
struct QueuedRequest {
    request: ApiRequest,
    tx: oneshot::Sender<Result<TransportResponse>>,
}

impl fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClient")
            .field("base_url", self.inner.config.base_url())
            .finish_non_exhaustive()
    }
}

impl AuthClient {
    /// Start building a client for the given API base URL.
    pub fn builder(base_url: impl Into<String>) -> AuthClientBuilder {
        AuthClientBuilder::new(base_url)
    }

    /// Create a client with defaults: reqwest transport, in-memory token
    /// store, no auth-lost hook.
    pub fn new(base_url: impl Into<String>) -> std::result::Result<Self, ConfigError> {
        Self::builder(base_url).build()
    }

    /// The token store this client reads and writes.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.store
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &url::Url {
        self.inner.config.base_url()
    }

    /// Issue a GET request. The payload, if any, is sent as query
    /// parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, payload: Option<Value>) -> Result<T> {
        self.send(Method::GET, path, payload).await
    }

    /// Issue a POST request with an optional JSON body.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, payload: Option<Value>) -> Result<T> {
        self.send(Method::POST, path, payload).await
    }

    /// Issue a PUT request with an optional JSON body.
    pub async fn put<T: DeserializeOwned>(&self, path: &str, payload: Option<Value>) -> Result<T> {
        self.send(Method::PUT, path, payload).await
    }

    /// Issue a PATCH request with an optional JSON body.
    pub async fn patch<T: DeserializeOwned>(&self, path: &str, payload: Option<Value>) -> Result<T> {
        self.send(Method::PATCH, path, payload).await
    }

    /// Issue a DELETE request, discarding any response payload.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send_unit(Method::DELETE, path, None).await
    }

    /// Issue a request and return the envelope's `data` payload.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<T> {
        self.send_with(method, path, payload, RequestOptions::default())
            .await
    }

    /// [`send`](Self::send) with per-call options.
    pub async fn send_with<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
        options: RequestOptions,
    ) -> Result<T> {
        let envelope: ApiEnvelope<T> = self.send_envelope_with(method, path, payload, options).await?;
        Ok(envelope.data)
    }

    /// Issue a request and return the full envelope, metadata included.
    pub async fn send_envelope<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<ApiEnvelope<T>> {
        self.send_envelope_with(method, path, payload, RequestOptions::default())
            .await
    }

    /// [`send_envelope`](Self::send_envelope) with per-call options.
    pub async fn send_envelope_with<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
        options: RequestOptions,
    ) -> Result<ApiEnvelope<T>> {
        let request = ApiRequest::new(method, path, payload).with_options(options);
        let response = self.dispatch(request).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Issue a request where the caller does not care about the payload.
    pub async fn send_unit(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<()> {
        let request = ApiRequest::new(method, path, payload);
        self.dispatch(request).await.map(|_| ())
    }

    /// Dispatch a request with the current access token, entering the
    /// refresh protocol on a 401.
    async fn dispatch(&self, request: ApiRequest) -> Result<TransportResponse> {
        let request_id = Uuid::new_v4();
        debug!(
            %request_id,
            method = %request.method,
            path = %request.path,
            "dispatching request"
        );

        let token = self.inner.store.access_token();
        let response = self.execute(&request, token.as_deref()).await?;

        if response.is_unauthorized() {
            return self.recover_unauthorized(request).await;
        }
        ensure_success(response)
    }

    /// Hand one request to the transport with the given token attached.
    async fn execute(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<TransportResponse> {
        let url = self
            .inner
            .config
            .endpoint_url(&request.path, &request.query)
            .map_err(|err| Error::transport(format!("invalid request path: {err}")))?;

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        headers.extend(request.headers.iter().cloned());
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let transport_request = TransportRequest {
            method: request.method.clone(),
            url,
            headers,
            body: request.body.clone(),
        };

        Ok(self.inner.transport.execute(transport_request).await?)
    }

    /// The authentication-failure protocol.
    ///
    /// The first request of a failure burst becomes the refresher;
    /// everyone after it queues on the same in-flight refresh instead of
    /// issuing another one.
    async fn recover_unauthorized(&self, request: ApiRequest) -> Result<TransportResponse> {
        let Some(refresh_token) = self.inner.store.refresh_token() else {
            debug!(path = %request.path, "access token rejected and no refresh token stored");
            return Err(Error::AuthExpired);
        };

        let waiter = {
            let mut state = self.inner.refresh.lock();
            if state.in_flight {
                let (tx, rx) = oneshot::channel();
                state.queue.push(QueuedRequest {
                    request: request.clone(),
                    tx,
                });
                Some(rx)
            } else {
                state.in_flight = true;
                None
            }
        };

        match waiter {
            Some(rx) => {
                debug!(path = %request.path, "refresh in flight, joining queue");
                match rx.await {
                    Ok(result) => result,
                    // The refresher was dropped before draining.
                    Err(_) => Err(Error::refresh_failed("refresh abandoned")),
                }
            }
            None => self.run_refresh(request, refresh_token).await,
        }
    }

    /// Perform the refresh call, then drain the queue and reissue the
    /// original request.
    async fn run_refresh(
        &self,
        original: ApiRequest,
        refresh_token: String,
    ) -> Result<TransportResponse> {
        debug!("starting token refresh");
        let deadline = self.inner.config.refresh_timeout;
        let outcome = match timeout(deadline, self.call_refresh(&refresh_token)).await {
            Ok(result) => result,
            Err(_) => Err(Error::refresh_failed(format!(
                "refresh call exceeded {deadline:?}"
            ))),
        };

        match outcome {
            Ok(credentials) => {
                self.inner.store.store_credentials(&credentials);
                let queued = self.finish_refresh();
                debug!(queued = queued.len(), "token refresh succeeded");
                for entry in queued {
                    let result = self.replay(&entry.request, &credentials.access_token).await;
                    // A queued caller may have been dropped; nothing to do.
                    let _ = entry.tx.send(result);
                }
                self.replay(&original, &credentials.access_token).await
            }
            Err(err) => {
                let reason = err.to_string();
                let queued = self.finish_refresh();
                warn!(
                    queued = queued.len(),
                    error = %reason,
                    "token refresh failed, clearing credentials"
                );
                for entry in queued {
                    let _ = entry.tx.send(Err(Error::refresh_failed(reason.clone())));
                }
                self.inner.store.clear_credentials();
                if let Some(hook) = &self.inner.on_auth_lost {
                    hook();
                }
                Err(Error::refresh_failed(reason))
            }
        }
    }

    /// Clear the in-flight flag and take the queue, atomically. Requests
    /// failing after this point start a new burst.
    fn finish_refresh(&self) -> Vec<QueuedRequest> {
        let mut state = self.inner.refresh.lock();
        state.in_flight = false;
        std::mem::take(&mut state.queue)
    }

    /// Replay one request with the refreshed token. Replays happen exactly
    /// once: a second rejection surfaces as a plain request error.
    async fn replay(&self, request: &ApiRequest, access_token: &str) -> Result<TransportResponse> {
        debug!(
            method = %request.method,
            path = %request.path,
            "replaying request with refreshed token"
        );
        let response = self.execute(request, Some(access_token)).await?;
        ensure_success(response)
    }

    /// Call the refresh endpoint directly, outside the auth protocol.
    async fn call_refresh(&self, refresh_token: &str) -> Result<Credentials> {
        let body = serde_json::to_value(RefreshRequest {
            refresh_token: refresh_token.to_string(),
        })?;
        let url = self
            .inner
            .config
            .endpoint_url(&self.inner.config.refresh_path, &[])
            .map_err(|err| Error::transport(format!("invalid refresh path: {err}")))?;

        let request = TransportRequest {
            method: Method::POST,
            url,
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: Some(body),
        };

        let response = self.inner.transport.execute(request).await?;
        if !response.is_success() {
            return Err(Error::refresh_failed(format!(
                "refresh endpoint returned {}: {}",
                response.status,
                ErrorBody::message_from_bytes(&response.body)
            )));
        }

        let envelope: ApiEnvelope<Credentials> = serde_json::from_slice(&response.body)?;
        Ok(envelope.data)
    }
}

/// Map a completed response to success or a request error carrying the
/// upstream message.
fn ensure_success(response: TransportResponse) -> Result<TransportResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(Error::request(
            response.status,
            ErrorBody::message_from_bytes(&response.body),
        ))
    }
}

/// Builder for [`AuthClient`].
#[derive(Default)]
pub struct AuthClientBuilder {
    base_url: String,
    refresh_path: Option<String>,
    refresh_timeout: Option<Duration>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    store: Option<Arc<dyn TokenStore>>,
    on_auth_lost: Option<AuthLostHook>,
}

impl AuthClientBuilder {
    /// Create a builder for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override the refresh endpoint path.
    pub fn refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = Some(path.into());
        self
    }

    /// Bound the refresh call. Defaults to
    /// [`DEFAULT_REFRESH_TIMEOUT`](crate::config::DEFAULT_REFRESH_TIMEOUT).
    pub fn refresh_timeout(mut self, timeout: Duration) -> Self {
        self.refresh_timeout = Some(timeout);
        self
    }

    /// Set a request timeout on the default transport. Ignored when a
    /// custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supply a custom transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Supply a token store. Defaults to a fresh [`MemoryTokenStore`].
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register the callback fired when a refresh fails and the session
    /// is lost.
    pub fn on_auth_lost(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_auth_lost = Some(Arc::new(hook));
        self
    }

    /// Build the client.
    pub fn build(self) -> std::result::Result<AuthClient, ConfigError> {
        let mut config = ClientConfig::new(&self.base_url)?;
        if let Some(path) = self.refresh_path {
            config = config.with_refresh_path(path);
        }
        if let Some(timeout) = self.refresh_timeout {
            config = config.with_refresh_timeout(timeout);
        }

        let transport = self.transport.unwrap_or_else(|| match self.timeout {
            Some(timeout) => Arc::new(ReqwestTransport::with_timeout(timeout)),
            None => Arc::new(ReqwestTransport::new()),
        });
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryTokenStore::new()));

        Ok(AuthClient {
            inner: Arc::new(ClientInner {
                config,
                transport,
                store,
                on_auth_lost: self.on_auth_lost,
                refresh: Mutex::new(RefreshState::default()),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MockTokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
    use crate::transport::MockTransport;
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client_with(
        transport: MockTransport,
        store: Arc<dyn TokenStore>,
    ) -> AuthClient {
        AuthClient::builder("https://api.example.com")
            .transport(Arc::new(transport))
            .token_store(store)
            .build()
            .unwrap()
    }

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    #[tokio::test]
    async fn test_success_decodes_envelope_data() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .withf(|req| req.url.path() == "/posts" && req.method == Method::GET)
            .returning(|_| Ok(response(200, r#"{"data":[{"id":1,"title":"a","slug":"a"}]}"#)));

        let client = client_with(transport, Arc::new(MemoryTokenStore::new()));
        let posts: Vec<serde_json::Value> = client.get("/posts", None).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["id"], 1);
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_stored() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .withf(|req| {
                req.headers
                    .iter()
                    .any(|(name, value)| name == "Authorization" && value == "Bearer A1")
            })
            .returning(|_| Ok(response(200, r#"{"data":null}"#)));

        let store = MemoryTokenStore::with_credentials(Credentials::new("A1", "R1"));
        let client = client_with(transport, Arc::new(store));
        client.send_unit(Method::GET, "/auth/me", None).await.unwrap();
    }

    #[tokio::test]
    async fn test_no_auth_header_without_token() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .withf(|req| !req.headers.iter().any(|(name, _)| name == "Authorization"))
            .returning(|_| Ok(response(200, r#"{"data":[]}"#)));

        let client = client_with(transport, Arc::new(MemoryTokenStore::new()));
        let _: Vec<serde_json::Value> = client.get("/posts", None).await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_passes_message_through_without_refresh() {
        // A 500 must fail immediately: one transport call, no refresh.
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .returning(|_| Ok(response(500, r#"{"message":"database is down"}"#)));

        let store = MemoryTokenStore::with_credentials(Credentials::new("A1", "R1"));
        let client = client_with(transport, Arc::new(store));

        let err = client
            .send_unit(Method::GET, "/posts", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "database is down");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_unauthorized_without_refresh_token_is_auth_expired() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .returning(|_| Ok(response(401, r#"{"message":"Unauthorized"}"#)));

        // Access token present, refresh token absent.
        let mut store = MockTokenStore::new();
        store
            .expect_get()
            .withf(|key| key == ACCESS_TOKEN_KEY)
            .returning(|_| Some("A1".to_string()));
        store
            .expect_get()
            .withf(|key| key == REFRESH_TOKEN_KEY)
            .returning(|_| None);

        let client = client_with(transport, Arc::new(store));
        let err = client
            .send_unit(Method::GET, "/auth/me", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AuthExpired));
    }

    #[tokio::test]
    async fn test_refresh_success_reissues_original() {
        let mut transport = MockTransport::new();
        // Original request with the stale token.
        transport
            .expect_execute()
            .times(1)
            .withf(|req| {
                req.url.path() == "/auth/me"
                    && req
                        .headers
                        .iter()
                        .any(|(n, v)| n == "Authorization" && v == "Bearer A1")
            })
            .returning(|_| Ok(response(401, "{}")));
        // The refresh call carries the refresh token, not the bearer.
        transport
            .expect_execute()
            .times(1)
            .withf(|req| {
                req.url.path() == "/auth/refresh"
                    && req.body.as_ref().map(|b| b["refresh_token"] == "R1") == Some(true)
                    && !req.headers.iter().any(|(n, _)| n == "Authorization")
            })
            .returning(|_| {
                Ok(response(
                    200,
                    r#"{"data":{"access_token":"A2","refresh_token":"R2"}}"#,
                ))
            });
        // The reissued original carries the new token.
        transport
            .expect_execute()
            .times(1)
            .withf(|req| {
                req.url.path() == "/auth/me"
                    && req
                        .headers
                        .iter()
                        .any(|(n, v)| n == "Authorization" && v == "Bearer A2")
            })
            .returning(|_| Ok(response(200, r#"{"data":{"id":1,"username":"jdoe"}}"#)));

        let store = Arc::new(MemoryTokenStore::with_credentials(Credentials::new(
            "A1", "R1",
        )));
        let client = client_with(transport, store.clone());

        let user: serde_json::Value = client.get("/auth/me", None).await.unwrap();
        assert_eq!(user["username"], "jdoe");
        assert_eq!(
            store.credentials(),
            Some(Credentials::new("A2", "R2")),
            "refreshed pair must be stored"
        );
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_credentials_and_fires_hook() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .withf(|req| req.url.path() == "/auth/me")
            .returning(|_| Ok(response(401, "{}")));
        transport
            .expect_execute()
            .times(1)
            .withf(|req| req.url.path() == "/auth/refresh")
            .returning(|_| Ok(response(403, r#"{"message":"refresh token revoked"}"#)));

        let store = Arc::new(MemoryTokenStore::with_credentials(Credentials::new(
            "A1", "R1",
        )));
        let hook_calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let hook_calls_clone = hook_calls.clone();

        let client = AuthClient::builder("https://api.example.com")
            .transport(Arc::new(transport))
            .token_store(store.clone())
            .on_auth_lost(move || {
                hook_calls_clone.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            })
            .build()
            .unwrap();

        let err = client
            .send_unit(Method::GET, "/auth/me", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RefreshFailed { .. }));
        assert!(err.to_string().contains("refresh token revoked"));
        assert_eq!(store.credentials(), None);
        assert_eq!(hook_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_payload_placement_follows_method() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .withf(|req| {
                req.url.query() == Some("page=3") && req.body.is_none()
            })
            .returning(|_| Ok(response(200, r#"{"data":[]}"#)));
        transport
            .expect_execute()
            .times(1)
            .withf(|req| {
                req.url.query().is_none() && req.body == Some(json!({"content": "hi"}))
            })
            .returning(|_| Ok(response(201, r#"{"data":{"id":9}}"#)));

        let client = client_with(transport, Arc::new(MemoryTokenStore::new()));
        let _: Vec<serde_json::Value> = client
            .get("/posts", Some(json!({"page": 3})))
            .await
            .unwrap();
        let _: serde_json::Value = client
            .post("/comments", Some(json!({"content": "hi"})))
            .await
            .unwrap();
    }
}
