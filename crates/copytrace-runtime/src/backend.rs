use copytrace_types::{
    AnalysisRequest, AnalysisResponse, TransactionsRequest, TransactionsResponse,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::BackendConfig;
use crate::{Error, Result};

/// HTTP client for the analysis backend. One request at a time, no retries.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /process-wallet`. The payload is returned as sent, including
    /// non-success statuses; callers decide how to surface those.
    pub async fn analyze_wallet(&self, wallet: &str) -> Result<AnalysisResponse> {
        let body = AnalysisRequest {
            wallet_address: wallet.to_string(),
        };
        info!(wallet, "requesting wallet analysis");
        let response: AnalysisResponse = self
            .post_json("process_wallet", "/process-wallet", &body)
            .await?;
        debug!(
            status = %response.status,
            followers = response.follower_scores().map_or(0, |r| r.len()),
            "analysis response received"
        );
        Ok(response)
    }

    /// `POST /get-copy-transactions`.
    pub async fn copy_transactions(
        &self,
        leader: &str,
        follower: &str,
    ) -> Result<TransactionsResponse> {
        let body = TransactionsRequest {
            target_wallet: leader.to_string(),
            follower_wallet: follower.to_string(),
        };
        info!(leader, follower, "requesting copy transactions");
        self.post_json("copy_transactions", "/get-copy-transactions", &body)
            .await
    }

    fn join(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn post_json<T, B>(&self, op: &'static str, path: &str, body: &B) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        B: Serialize + ?Sized,
    {
        let url = self.join(path);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                warn!(
                    operation = op,
                    url = %url,
                    kind = classify_request_error(&err),
                    error = %err,
                    "request failed"
                );
                Error::fetch(format!(
                    "could not reach backend at {}: {}",
                    self.base_url, err
                ))
            })?;

        Self::map_response(op, resp).await
    }

    async fn map_response<T>(op: &'static str, resp: reqwest::Response) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::fetch(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            warn!(operation = op, status = status.as_u16(), "non-success status");
            return Err(Error::Fetch {
                status: Some(status.as_u16()),
                message: error_detail(&body).unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                }),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(operation = op, error = %e, "failed to decode response");
            Error::Decode(format!("{op}: {e}"))
        })
    }
}

/// Extract the `detail` message from an error body, if there is one.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(msg) => Some(msg),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn classify_request_error(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_request() {
        "request"
    } else if error.is_body() {
        "body"
    } else if error.is_decode() {
        "decode"
    } else {
        "other"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copytrace_testing::fixtures::{
        FOLLOWER_WALLET, LEADER_WALLET, copy_transaction, success_response,
    };
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> BackendConfig {
        BackendConfig {
            base_url,
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn analyze_wallet_success() {
        let server = MockServer::start().await;
        let payload = success_response(LEADER_WALLET, &[0.9, 0.5]);

        Mock::given(method("POST"))
            .and(path("/process-wallet"))
            .and(body_json(json!({"wallet_address": LEADER_WALLET})))
            .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(&test_config(server.uri())).unwrap();
        let response = client.analyze_wallet(LEADER_WALLET).await.unwrap();
        assert_eq!(response, payload);
    }

    #[tokio::test]
    async fn analyze_wallet_surfaces_detail_on_400() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/process-wallet"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"detail": "Invalid Solana wallet address"})),
            )
            .mount(&server)
            .await;

        let client = BackendClient::new(&test_config(server.uri())).unwrap();
        let err = client.analyze_wallet(LEADER_WALLET).await.unwrap_err();
        match err {
            Error::Fetch { status, message } => {
                assert_eq!(status, Some(400));
                assert_eq!(message, "Invalid Solana wallet address");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_without_detail_uses_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/process-wallet"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(&test_config(server.uri())).unwrap();
        let err = client.analyze_wallet(LEADER_WALLET).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Fetch {
                status: Some(500),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/process-wallet"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
            .mount(&server)
            .await;

        let client = BackendClient::new(&test_config(server.uri())).unwrap();
        let err = client.analyze_wallet(LEADER_WALLET).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_fetch_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let base_url = format!("http://127.0.0.1:{port}");
        let client = BackendClient::new(&test_config(base_url)).unwrap();
        let err = client.analyze_wallet(LEADER_WALLET).await.unwrap_err();
        assert!(matches!(err, Error::Fetch { status: None, .. }));
    }

    #[tokio::test]
    async fn copy_transactions_success() {
        let server = MockServer::start().await;
        let payload = TransactionsResponse {
            transactions: vec![copy_transaction("BONK", 1_700_000_000, 2)],
        };

        Mock::given(method("POST"))
            .and(path("/get-copy-transactions"))
            .and(body_json(json!({
                "target_wallet": LEADER_WALLET,
                "follower_wallet": FOLLOWER_WALLET,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
            .mount(&server)
            .await;

        let client = BackendClient::new(&test_config(format!("{}/", server.uri()))).unwrap();
        let response = client
            .copy_transactions(LEADER_WALLET, FOLLOWER_WALLET)
            .await
            .unwrap();
        assert_eq!(response, payload);
    }

    #[test]
    fn error_detail_parsing() {
        assert_eq!(
            error_detail(r#"{"detail": "Wallet not found"}"#),
            Some("Wallet not found".to_string())
        );
        assert_eq!(error_detail("plain text"), None);
        assert_eq!(
            error_detail(r#"{"detail": [{"msg": "field required"}]}"#),
            Some(r#"[{"msg":"field required"}]"#.to_string())
        );
    }
}
