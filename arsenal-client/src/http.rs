//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult, Session};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{AuthResponse, LoginRequest};
use shared::{ApiErrorResponse, User};

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_query<T: DeserializeOwned, Q: serde::Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        let session = match &config.token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::new(),
        };
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Share an existing session instead of the one built from config
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(req).send().await?;
        self.handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), body = %text, "Request failed");

        if status == StatusCode::UNAUTHORIZED {
            // Server no longer accepts the token
            self.session.clear();
            return Err(ClientError::Unauthorized(text));
        }

        if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
            return Err(ClientError::Api {
                status: status.as_u16(),
                code: api_err.code,
                message: api_err.message,
            });
        }

        match status {
            StatusCode::FORBIDDEN => {
                tracing::warn!("Access denied");
                Err(ClientError::Forbidden(text))
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
            s if s.is_server_error() => {
                tracing::error!(status = s.as_u16(), "Server error");
                Err(ClientError::Internal(text))
            }
            _ => Err(ClientError::Internal(text)),
        }
    }

    // ========== Auth API ==========

    /// Login with username and password; the session keeps the token
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self.post("/api/auth/login", &req).await?;
        if resp.token.is_empty() {
            return Err(ClientError::InvalidResponse("Missing token".into()));
        }
        self.session
            .set_login(resp.token.clone(), Some(resp.user.clone()));
        tracing::info!(user_id = resp.user.id, "Logged in");
        Ok(resp)
    }

    /// Check the stored token against the server and refresh the user profile
    pub async fn verify(&self) -> ClientResult<User> {
        let user: User = self.get("/api/auth/verify").await?;
        self.session.set_user(user.clone());
        Ok(user)
    }

    /// Drop the local session
    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("Logged out");
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn get_query<T: DeserializeOwned, Q: serde::Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ClientConfig::new("http://localhost:8080/")
            .build_http_client()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/pcs/all"), "http://localhost:8080/api/pcs/all");
        assert_eq!(client.url("api/pcs/all"), "http://localhost:8080/api/pcs/all");
    }

    #[test]
    fn test_token_from_config_seeds_session() {
        let client = ClientConfig::default()
            .with_token("abc")
            .build_http_client()
            .unwrap();
        assert!(client.session().is_logged_in());
        client.logout();
        assert!(!client.session().is_logged_in());
    }
}
