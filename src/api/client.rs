use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{Habit, HabitPatch, NewHabit};
use crate::config::ApiConfig;

/// Async client for the habit service.
///
/// Every call is single-shot: no retry, no backoff, no deduplication.
/// Timeouts are whatever the transport was configured with.
#[derive(Clone)]
pub struct HabitClient {
    client: Client,
    base_url: String,
}

impl HabitClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|source| ApiError::Build { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list(&self) -> Result<Vec<Habit>, ApiError> {
        self.request::<Vec<Habit>, ()>(Method::GET, "/habits", None)
            .await?
            .ok_or(ApiError::EmptyBody)
    }

    pub async fn get(&self, id: &str) -> Result<Habit, ApiError> {
        self.expect_habit(Method::GET, &format!("/habits/{}", id), None::<&()>)
            .await
    }

    pub async fn create(&self, payload: &NewHabit) -> Result<Habit, ApiError> {
        self.expect_habit(Method::POST, "/habits", Some(payload)).await
    }

    pub async fn update(&self, id: &str, patch: &HabitPatch) -> Result<Habit, ApiError> {
        self.expect_habit(Method::PATCH, &format!("/habits/{}", id), Some(patch))
            .await
    }

    /// Delete a habit. A 204 (or any empty success body) counts as success;
    /// a JSON body, if the service sends one, is ignored.
    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.request::<serde_json::Value, ()>(Method::DELETE, &format!("/habits/{}", id), None)
            .await?;
        Ok(())
    }

    pub async fn complete(&self, id: &str) -> Result<Habit, ApiError> {
        self.expect_habit(Method::POST, &format!("/habits/{}/complete", id), None::<&()>)
            .await
    }

    async fn expect_habit<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Habit, ApiError> {
        self.request::<Habit, B>(method, path, body)
            .await?
            .ok_or(ApiError::EmptyBody)
    }

    /// Perform one request and decode the body.
    ///
    /// Returns `Ok(None)` for 204 or an empty success body.
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "habit api request");

        let builder = self.client.request(method.clone(), &url);
        // `json` sets the content type itself; bodiless calls declare it too.
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder.header(CONTENT_TYPE, "application/json"),
        };

        let response = builder.send().await.map_err(|source| {
            tracing::warn!(%method, %url, error = %source, "habit api transport failure");
            ApiError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status.as_u16(), &text);
            tracing::warn!(%method, %url, status = status.as_u16(), error = %err, "habit api error status");
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| {
                tracing::warn!(%method, %url, error = %source, "habit api decode failure");
                ApiError::Decode { source }
            })
    }
}
