use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::{controller::AuthClient, form::Credentials};

/// Answer of the authentication service to a login request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: Option<String>) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Authentication service returned {status}: {text}")]
    Http { status: u16, text: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl From<NotSuccessResponseInfo> for AuthError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self::Http {
            status: info.status_code,
            text: info.text,
        }
    }
}

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

impl NotSuccessResponseInfo {
    fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            return Err(NotSuccessResponseInfo {
                status_code: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}

/// Talks to the authentication service over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let url = format!("{}/auth/login", self.base_url);
        tracing::debug!("Sending login request to {}", url);

        let response = self.http.post(&url).json(credentials).send().await?;
        match response.check_success().await {
            Ok(response) => Ok(response.json().await?),
            // A rejected login usually comes with a 4xx and a regular body.
            Err(info) if info.is_client_error() => {
                match serde_json::from_str::<LoginResponse>(&info.text) {
                    Ok(res) => Ok(LoginResponse::failure(res.message)),
                    Err(_) => Err(info.into()),
                }
            }
            Err(info) => Err(info.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn credentials() -> Credentials {
        Credentials {
            email: "a@b.co".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn login_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/login")
                    .json_body(json!({"email": "a@b.co", "password": "secret1"}));
                then.status(200).json_body(json!({"success": true}));
            })
            .await;

        let client = HttpAuthClient::new(server.base_url());
        let res = client.login(&credentials()).await.unwrap();
        mock.assert_async().await;
        assert_eq!(res, LoginResponse::success());
    }

    #[tokio::test]
    async fn login_rejected_with_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(200)
                    .json_body(json!({"success": false, "message": "Invalid credentials"}));
            })
            .await;

        let client = HttpAuthClient::new(format!("{}/", server.base_url()));
        let res = client.login(&credentials()).await.unwrap();
        assert_eq!(
            res,
            LoginResponse::failure(Some("Invalid credentials".to_string()))
        );
    }

    #[tokio::test]
    async fn unauthorized_body_is_a_failed_login() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(401)
                    .json_body(json!({"success": true, "message": "Wrong password"}));
            })
            .await;

        let client = HttpAuthClient::new(server.base_url());
        let res = client.login(&credentials()).await.unwrap();
        assert_eq!(res, LoginResponse::failure(Some("Wrong password".to_string())));
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(503).body("maintenance");
            })
            .await;

        let client = HttpAuthClient::new(server.base_url());
        let err = client.login(&credentials()).await.unwrap_err();
        assert_eq!(
            err,
            AuthError::Http {
                status: 503,
                text: "maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/login");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let client = HttpAuthClient::new(server.base_url());
        let err = client.login(&credentials()).await.unwrap_err();
        assert!(matches!(err, AuthError::Decode(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Nothing listens on the discard port.
        let client = HttpAuthClient::new("http://127.0.0.1:9");
        let err = client.login(&credentials()).await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)), "{:?}", err);
    }

    #[test]
    fn response_message_is_optional() {
        let res: LoginResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(res, LoginResponse::failure(None));
    }
}
