//! SupabaseRpcTransport -- concrete [`RpcTransport`] for Supabase PostgREST.
//!
//! Sends `POST {base_url}/rest/v1/rpc/{operation}` with the named parameters
//! as a JSON object body, the project's anonymous key in the `apikey`
//! header, and the resolved bearer in `Authorization`.
//!
//! Keys are held as [`SecretString`] and only exposed while building request
//! headers.

use std::time::Duration;

use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};

use notebook_bridge_core::rpc::transport::RpcTransport;
use notebook_bridge_types::config::BridgeConfig;
use notebook_bridge_types::error::RelayError;
use notebook_bridge_types::rpc::{RpcReply, RpcRequest};

pub struct SupabaseRpcTransport {
    client: reqwest::Client,
    base_url: String,
    anon_key: SecretString,
    timeout: Duration,
}

impl SupabaseRpcTransport {
    /// Build a transport with its own pooled client.
    ///
    /// `timeout` bounds each request at the HTTP layer as well; the relay
    /// applies the same budget around the whole call.
    pub fn new(
        base_url: &str,
        anon_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            timeout,
        })
    }

    pub fn from_config(config: &BridgeConfig) -> Result<Self, RelayError> {
        Self::new(
            &config.supabase_url,
            config.supabase_anon_key.clone(),
            config.request_timeout,
        )
    }

    fn rpc_url(&self, operation: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, operation)
    }

    fn map_error(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout(self.timeout)
        } else {
            RelayError::Transport(format!("HTTP request failed: {err}"))
        }
    }
}

impl RpcTransport for SupabaseRpcTransport {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn invoke(&self, request: &RpcRequest<'_>) -> Result<RpcReply, RelayError> {
        let response = self
            .client
            .post(self.rpc_url(request.operation))
            .header("apikey", self.anon_key.expose_secret())
            .bearer_auth(request.bearer.expose_secret())
            .header(ACCEPT, "application/json")
            .json(request.params)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        Ok(RpcReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::Json;
    use axum::Router;
    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use serde_json::{Value, json};

    use notebook_bridge_types::rpc::RpcParams;

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Captured {
        operation: String,
        apikey: Option<String>,
        authorization: Option<String>,
        content_type: Option<String>,
        body: Value,
    }

    type Capture = Arc<Mutex<Option<Captured>>>;

    fn header(headers: &HeaderMap, name: &str) -> Option<String> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    async fn record_rpc(
        State(capture): State<Capture>,
        Path(operation): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let reply = if operation == "missing_note" {
            (StatusCode::NOT_FOUND, Json(json!({"error": "not found"})))
        } else {
            (StatusCode::OK, Json(json!([{"id": "u1"}])))
        };

        *capture.lock().unwrap() = Some(Captured {
            operation,
            apikey: header(&headers, "apikey"),
            authorization: header(&headers, "authorization"),
            content_type: header(&headers, "content-type"),
            body,
        });

        reply
    }

    async fn slow_rpc() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "[]"
    }

    async fn spawn_mock_remote() -> (String, Capture) {
        let capture: Capture = Arc::new(Mutex::new(None));
        let app = Router::new()
            .route("/rest/v1/rpc/slow", post(slow_rpc))
            .route("/rest/v1/rpc/{operation}", post(record_rpc))
            .with_state(capture.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), capture)
    }

    fn transport(base_url: &str, timeout: Duration) -> SupabaseRpcTransport {
        SupabaseRpcTransport::new(base_url, SecretString::from("anon-key"), timeout).unwrap()
    }

    #[tokio::test]
    async fn sends_rpc_with_headers_and_json_body() {
        let (base_url, capture) = spawn_mock_remote().await;
        let transport = transport(&format!("{base_url}/"), Duration::from_secs(5));

        let mut params = RpcParams::new();
        params.insert("p_limit".to_string(), json!(10));
        params.insert("p_offset".to_string(), json!(0));
        let bearer = SecretString::from("caller-jwt");
        let request = RpcRequest {
            operation: "get_all_profiles",
            params: &params,
            bearer: &bearer,
        };

        let reply = transport.invoke(&request).await.unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(serde_json::from_str::<Value>(&reply.body).unwrap(), json!([{"id": "u1"}]));

        let captured = capture.lock().unwrap().clone().unwrap();
        assert_eq!(captured.operation, "get_all_profiles");
        assert_eq!(captured.apikey.as_deref(), Some("anon-key"));
        assert_eq!(captured.authorization.as_deref(), Some("Bearer caller-jwt"));
        assert_eq!(captured.content_type.as_deref(), Some("application/json"));
        assert_eq!(captured.body, json!({"p_limit": 10, "p_offset": 0}));
    }

    #[tokio::test]
    async fn empty_params_send_empty_object() {
        let (base_url, capture) = spawn_mock_remote().await;
        let transport = transport(&base_url, Duration::from_secs(5));

        let params = RpcParams::new();
        let bearer = SecretString::from("default-token");
        let request = RpcRequest {
            operation: "get_admin_stats",
            params: &params,
            bearer: &bearer,
        };
        transport.invoke(&request).await.unwrap();

        let captured = capture.lock().unwrap().clone().unwrap();
        assert_eq!(captured.body, json!({}));
        assert_eq!(captured.authorization.as_deref(), Some("Bearer default-token"));
    }

    #[tokio::test]
    async fn error_status_is_a_reply_not_an_error() {
        let (base_url, _capture) = spawn_mock_remote().await;
        let transport = transport(&base_url, Duration::from_secs(5));

        let params = RpcParams::new();
        let bearer = SecretString::from("t");
        let request = RpcRequest {
            operation: "missing_note",
            params: &params,
            bearer: &bearer,
        };
        let reply = transport.invoke(&request).await.unwrap();

        assert_eq!(reply.status, 404);
        assert_eq!(reply.body, r#"{"error":"not found"}"#);
    }

    #[tokio::test]
    async fn slow_remote_times_out() {
        let (base_url, _capture) = spawn_mock_remote().await;
        let transport = transport(&base_url, Duration::from_millis(100));

        let params = RpcParams::new();
        let bearer = SecretString::from("t");
        let request = RpcRequest {
            operation: "slow",
            params: &params,
            bearer: &bearer,
        };
        let err = transport.invoke(&request).await.unwrap_err();

        assert!(matches!(err, RelayError::Timeout(d) if d == Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn unreachable_remote_is_a_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = transport(&format!("http://{addr}"), Duration::from_secs(2));
        let params = RpcParams::new();
        let bearer = SecretString::from("t");
        let request = RpcRequest {
            operation: "get_admin_stats",
            params: &params,
            bearer: &bearer,
        };
        let err = transport.invoke(&request).await.unwrap_err();

        assert!(matches!(err, RelayError::Transport(_)));
    }
}
