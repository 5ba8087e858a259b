// Remote proof verification over HTTP.
//
// The checker accepts the source text as a `v=` form field and answers with
// a JSON payload. Verification failure is signaled *inside* a successful
// response by an `Error:` marker in the payload; a non-success HTTP status
// means the endpoint itself is unavailable.

use serde_json::Value;

use crate::DafnyError;

/// Public Dafny checker used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://dafny.livecode.ch/check";

/// Marker distinguishing failed verification within a 2xx response payload.
const ERROR_MARKER: &str = "Error:";

/// Outcome of one verification request.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// True when the serialized payload carries no error marker.
    pub success: bool,
    /// The checker's JSON response, serialized. On failure this is fed back
    /// into the next generation prompt.
    pub feedback: String,
}

/// Client for the remote Dafny checker.
#[derive(Debug, Clone)]
pub struct VerifyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl VerifyClient {
    /// Client against the default public endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client against a specific endpoint (tests point this at a mock).
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Submit `source` for verification.
    ///
    /// Returns `Err(EndpointUnavailable)` on a non-success HTTP status and
    /// `Err(Transport)` when the request itself fails; otherwise a
    /// [`Verdict`] with the checker's feedback.
    pub async fn verify(&self, source: &str) -> Result<Verdict, DafnyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("v", source)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DafnyError::EndpointUnavailable {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let feedback = body.to_string();
        let success = !feedback.contains(ERROR_MARKER);
        tracing::debug!(success, "verification response received");
        Ok(Verdict { success, feedback })
    }
}

impl Default for VerifyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> VerifyClient {
        VerifyClient::with_endpoint(&format!("{}/check", server.uri()))
    }

    #[tokio::test]
    async fn clean_response_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/check"))
            .and(body_string_contains("v="))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "out": "Dafny program verifier finished" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let verdict = client_for(&server)
            .await
            .verify("lemma trivial() ensures true {}")
            .await
            .unwrap();
        assert!(verdict.success);
        assert!(verdict.feedback.contains("verifier finished"));
    }

    #[tokio::test]
    async fn error_marker_in_payload_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/check"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({ "out": "x.dfy(3,0): Error: assertion might not hold" }),
            ))
            .mount(&server)
            .await;

        let verdict = client_for(&server).await.verify("bad code").await.unwrap();
        assert!(!verdict.success);
        assert!(verdict.feedback.contains("Error:"));
    }

    #[tokio::test]
    async fn non_success_status_is_endpoint_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/check"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).await.verify("anything").await.unwrap_err();
        match err {
            DafnyError::EndpointUnavailable { status } => assert_eq!(status, 503),
            other => panic!("expected EndpointUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn source_is_sent_as_form_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/check"))
            .and(body_string_contains("v=module"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "out": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).await.verify("module").await.unwrap();
    }
}
