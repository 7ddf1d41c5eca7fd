use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use warden_core::{Identity, IdentityClient, IdentityClientError};

/// Header carrying the provider's public API key on every verification call.
const API_KEY_HEADER: &str = "apikey";

/// The provider's verify-user endpoint, relative to the provider base URL.
const VERIFY_USER_PATH: &str = "/auth/v1/user";

/// Identity client backed by the provider's HTTP verification endpoint.
///
/// Performs `GET {provider_url}/auth/v1/user` with the caller's token in the
/// `Authorization` header and the project's public key in `apikey`. The
/// provider answers with the principal the token belongs to, or a 401/403/404
/// when it recognizes no one.
///
/// The `reqwest::Client` is injected so connection pooling and timeouts stay
/// under the composition root's control; the guard itself imposes no
/// request-level timeout.
#[derive(Debug, Clone)]
pub struct HttpIdentityClient {
    http_client: Client,
    provider_url: Url,
    public_key: Secret<String>,
}

impl HttpIdentityClient {
    pub fn new(provider_url: Url, public_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            provider_url,
            public_key,
        }
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    #[tracing::instrument(name = "Verifying token with identity provider", skip_all)]
    async fn verify_token(&self, token: &str) -> Result<Option<Identity>, IdentityClientError> {
        let url = self
            .provider_url
            .join(VERIFY_USER_PATH)
            .map_err(|e| IdentityClientError::UnexpectedResponse(e.to_string()))?;

        let response = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, self.public_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| IdentityClientError::Unreachable(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let identity = response.json::<Identity>().await.map_err(|e| {
                    IdentityClientError::UnexpectedResponse(format!(
                        "malformed identity payload: {e}"
                    ))
                })?;
                Ok(Some(identity))
            }
            // The provider answered and recognizes no one for this token.
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(None),
            status => Err(IdentityClientError::UnexpectedResponse(format!(
                "status {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpIdentityClient {
        HttpIdentityClient::new(
            Url::parse(&server.uri()).unwrap(),
            Secret::new(Faker.fake::<String>()),
            Client::new(),
        )
    }

    fn identity_body(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "email": "user@example.com",
            "role": "authenticated",
        })
    }

    #[tokio::test]
    async fn sends_token_and_api_key_to_the_verify_endpoint() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("Authorization", "Bearer abc123"))
            .and(header_exists("apikey"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(identity_body("39f2049a-6e77-4e9d-a63a-07fb95dbd412")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client.verify_token("abc123").await.unwrap();

        let identity = result.expect("provider recognized the token");
        assert_eq!(
            identity.id.to_string(),
            "39f2049a-6e77-4e9d-a63a-07fb95dbd412"
        );
        assert_eq!(identity.extra["role"], "authenticated");
    }

    #[tokio::test]
    async fn unauthorized_response_means_no_identity() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = client.verify_token("expired").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn provider_5xx_is_an_unexpected_response() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client.verify_token("abc123").await.unwrap_err();

        assert!(matches!(err, IdentityClientError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn malformed_identity_payload_is_an_unexpected_response() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "not_an_identity": true,
            })))
            .mount(&server)
            .await;

        let err = client.verify_token("abc123").await.unwrap_err();

        assert!(matches!(err, IdentityClientError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn connection_failure_is_unreachable() {
        // Port 1 is never listening.
        let client = HttpIdentityClient::new(
            Url::parse("http://127.0.0.1:1").unwrap(),
            Secret::new(Faker.fake::<String>()),
            Client::new(),
        );

        let err = client.verify_token("abc123").await.unwrap_err();

        assert!(matches!(err, IdentityClientError::Unreachable(_)));
    }
}
