//! Request description passed through the client.

use reqwest::Method;
use serde_json::Value;

/// A request as the endpoint services describe it: a path relative to the
/// configured base URL plus an optional JSON payload.
///
/// Payload placement follows the verb: GET-style methods serialize it as
/// query parameters, everything else sends it as a JSON body. The
/// `Authorization` header is never stored here; the client attaches the
/// current access token at dispatch time so a queued request picks up a
/// refreshed token when it is replayed.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL, e.g. `/posts/42/like`.
    pub path: String,
    /// Query parameters.
    pub query: Vec<(String, String)>,
    /// JSON body for non-GET methods.
    pub body: Option<Value>,
    /// Extra headers from per-call options.
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Build a request, placing `payload` according to the method.
    pub fn new(method: Method, path: impl Into<String>, payload: Option<Value>) -> Self {
        let (query, body) = match payload {
            None => (Vec::new(), None),
            Some(value) if method == Method::GET || method == Method::HEAD => {
                (query_pairs(&value), None)
            }
            Some(value) => (Vec::new(), Some(value)),
        };
        Self {
            method,
            path: path.into(),
            query,
            body,
            headers: Vec::new(),
        }
    }

    /// Attach per-call options.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.headers = options.headers;
        self
    }
}

/// Per-call overrides, the moral equivalent of an extra config argument on
/// each service function.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Additional headers for this call only.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Flatten a JSON object into query pairs.
///
/// Scalars are stringified, arrays repeat the key, and null values are
/// skipped. Anything that is not an object produces no pairs.
fn query_pairs(value: &Value) -> Vec<(String, String)> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(s) = scalar_string(item) {
                        pairs.push((key.clone(), s));
                    }
                }
            }
            other => {
                if let Some(s) = scalar_string(other) {
                    pairs.push((key.clone(), s));
                }
            }
        }
    }
    pairs
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
