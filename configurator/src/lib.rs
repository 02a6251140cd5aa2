//! Builds, validates and submits the hyperparameter configuration of the
//! model selected in the dashboard's forms.

mod client;
mod coerce;
pub mod configs;
pub mod error;

pub use client::BackendClient;
pub use coerce::{Raw, check, coerce};
pub use configs::{
    Classification, Entry, FormField, ModelConfiguration, ModelRecord, ModelSubmission, Widget,
    default_layer, describe, describe_layer,
};
pub use error::{ConfigError, Result};

/// Submits a finalized configuration to the backend.
///
/// Creates a new model record, or replaces `model_id`'s configuration when
/// one is given. The configuration itself is left untouched so a failed
/// submission can simply be retried.
///
/// # Errors
/// Returns a `ConfigError` if the request fails or the backend rejects it.
pub async fn submit(
    client: &BackendClient,
    config: &ModelConfiguration,
    classification_id: &str,
    model_id: Option<&str>,
) -> Result<ModelRecord> {
    let submission = config.to_submission(classification_id);
    log::info!(
        "submitting {} with {} parameter(s)",
        submission.model_name,
        submission.hyperparameter_values.len()
    );

    match model_id {
        Some(id) => client.update_model(id, &submission).await,
        None => client.create_model(&submission).await,
    }
}
