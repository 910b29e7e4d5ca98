use crate::core::config::{default_user_agent, ClientConfig};
use crate::core::error::ClientError;
use crate::models::user::User;
use crate::utils::auth::bearer;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    RequestBuilder, StatusCode,
};
use tracing::{debug, warn};
use url::Url;

/// Client for the user lookup API
///
/// Holds a single token; configure it with [`ApiClient::with_token`] before
/// sharing the client. Every call issues exactly one request with no retry.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    user_agent: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            user_agent: default_user_agent(),
            token: String::new(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Self::new(&config.base_url)?.with_user_agent(config.user_agent.clone());

        Ok(match &config.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }

    /// Send `Authorization: Bearer {token}` on subsequent calls
    /// An empty token sends no Authorization header at all
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one user
    ///
    /// 404 and 401 are classified by status alone. Any other transport or
    /// decode failure is reported as [`ClientError::Unavailable`].
    pub async fn get_user(&self, id: i64) -> Result<User, ClientError> {
        let request = self.request(&format!("/user/{}", id))?;

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(user_id = id, error = %e, "User API request failed");
                return Err(ClientError::Unavailable);
            }
        };

        match response.status() {
            StatusCode::NOT_FOUND => return Err(ClientError::NotFound),
            StatusCode::UNAUTHORIZED => return Err(ClientError::Unauthorized),
            _ => {}
        }

        let status = response.status();
        response.json::<User>().await.map_err(|e| {
            warn!(user_id = id, status = %status, error = %e, "Failed to decode user");
            ClientError::Unavailable
        })
    }

    /// Fetch every user
    ///
    /// Transport and decode failures are returned as-is; statuses are not
    /// classified here.
    pub async fn get_users(&self) -> Result<Vec<User>, ClientError> {
        let response = self.request("/users")?.send().await?;
        debug!(status = %response.status(), "User list response");

        Ok(response.json::<Vec<User>>().await?)
    }

    fn request(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.base_url.join(path)?;

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent);

        if !self.token.is_empty() {
            request = request.header(AUTHORIZATION, bearer(&self.token));
        }

        Ok(request)
    }
}
