use log::{debug, info};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    configs::{Classification, ModelRecord, ModelSubmission},
    error::{ConfigError, Result},
};

/// Error document the backend answers non-2xx requests with.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
}

/// Thin client of the backend's model-management endpoints.
///
/// Nothing is retried: a failed request returns the error and the caller
/// keeps its configuration to try again.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a new `BackendClient`.
    ///
    /// # Arguments
    /// * `base_url` - The backend's root URL, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Persists a new model configuration.
    ///
    /// # Arguments
    /// * `submission` - The configuration attached to its classification.
    ///
    /// # Returns
    /// The record the backend stored, carrying its assigned id.
    pub async fn create_model(&self, submission: &ModelSubmission) -> Result<ModelRecord> {
        let url = format!("{}/models", self.base_url);
        info!(
            "creating {} under classification {}",
            submission.model_name, submission.classification_id
        );

        let response = self.http.post(&url).json(submission).send().await?;
        Self::read(response).await
    }

    /// Replaces the configuration of a persisted model.
    ///
    /// # Arguments
    /// * `model_id` - The id the backend assigned on creation.
    /// * `submission` - The new configuration.
    ///
    /// # Returns
    /// The updated record.
    pub async fn update_model(
        &self,
        model_id: &str,
        submission: &ModelSubmission,
    ) -> Result<ModelRecord> {
        let url = format!("{}/models/{model_id}", self.base_url);
        info!("updating model {model_id} ({})", submission.model_name);

        let response = self.http.put(&url).json(submission).send().await?;
        Self::read(response).await
    }

    /// Fetches a classification together with its persisted models.
    pub async fn classification(&self, id: &str) -> Result<Classification> {
        let url = format!("{}/classifications/{id}", self.base_url);
        debug!("fetching classification {id}");

        let response = self.http.get(&url).send().await?;
        Self::read(response).await
    }

    /// Decodes a 2xx body, or turns the backend's `{error}` document into a
    /// `ConfigError::Backend`.
    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorPayload>(&body)
                .map(|payload| payload.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected response")
                        .to_owned()
                });

            return Err(ConfigError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
