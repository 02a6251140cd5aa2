use std::collections::BTreeMap;

use schema::{TypeDescriptor, Value};
use serde::{Deserialize, Serialize};

use super::{ModelConfiguration, layers};
use crate::{
    coerce,
    error::{ConfigError, Result},
};

/// The body sent to the backend to persist a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSubmission {
    pub classification_id: String,
    pub model_name: String,
    pub hyperparameters: BTreeMap<String, TypeDescriptor>,
    pub hyperparameter_values: BTreeMap<String, Value>,
}

/// A model configuration as persisted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub classification_id: Option<String>,
    pub model_name: String,
    #[serde(default)]
    pub hyperparameters: BTreeMap<String, TypeDescriptor>,
    #[serde(default)]
    pub hyperparameter_values: BTreeMap<String, Value>,
}

impl ModelRecord {
    /// Rebuilds the live configuration of a persisted model.
    pub fn configuration(&self) -> Result<ModelConfiguration> {
        ModelConfiguration::from_values(&self.model_name, &self.hyperparameter_values)
    }
}

/// A named grouping of persisted models, as cached from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "_id")]
    pub id: String,
    pub classification_name: String,
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

impl ModelConfiguration {
    /// Builds the backend payload attaching this configuration to a
    /// classification.
    pub fn to_submission(&self, classification_id: &str) -> ModelSubmission {
        ModelSubmission {
            classification_id: classification_id.to_owned(),
            model_name: self.model_type().to_owned(),
            hyperparameters: self.hyperparameters(),
            hyperparameter_values: self.hyperparameter_values(),
        }
    }

    /// Rebuilds a configuration from a submission.
    pub fn from_submission(submission: &ModelSubmission) -> Result<Self> {
        Self::from_values(&submission.model_name, &submission.hyperparameter_values)
    }

    /// Rebuilds a configuration from a model name and its value map.
    ///
    /// Every value is validated against the registry's spec. Parameters
    /// missing from `values` keep their defaults.
    ///
    /// # Errors
    /// `UnknownModel` if no category registers `model_name`,
    /// `UnknownParameter` for keys the model doesn't declare, or the
    /// validation failure of the first invalid value.
    pub fn from_values(model_name: &str, values: &BTreeMap<String, Value>) -> Result<Self> {
        let schema = schema::find(model_name).ok_or_else(|| {
            ConfigError::UnknownModel(schema::UnknownModel {
                category: "*".to_owned(),
                model: model_name.to_owned(),
            })
        })?;

        let mut config = Self::initialize(schema);
        for (param, value) in values {
            let spec = schema.param(param).ok_or_else(|| ConfigError::UnknownParameter {
                model: model_name.to_owned(),
                param: param.clone(),
            })?;
            coerce::check(param, spec, value)?;

            if let (Some(architecture), Value::Layers(list)) = (schema.architecture, value) {
                layers::check_layers(model_name, architecture, list)?;
            }
            config = config.set_value(param, value.clone())?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_json_shape() {
        let config = ModelConfiguration::for_model("naive_bayes", "gaussian_nb").unwrap();
        let json = serde_json::to_value(config.to_submission("c1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "classification_id": "c1",
                "model_name": "gaussian_nb",
                "hyperparameters": { "var_smoothing": "float" },
                "hyperparameter_values": { "var_smoothing": 1e-9 },
            })
        );
    }

    #[test]
    fn test_union_types_serialize_as_arrays() {
        let config =
            ModelConfiguration::for_model("classification", "logistic_regression").unwrap();
        let submission = config.to_submission("c1");
        let json = serde_json::to_value(&submission.hyperparameters["random_state"]).unwrap();
        assert_eq!(json, serde_json::json!(["int", "None"]));
    }

    #[test]
    fn test_from_values_validates() {
        let mut values = BTreeMap::new();
        values.insert("max_iter".to_owned(), Value::Int(0));
        let err = ModelConfiguration::from_values("logistic_regression", &values).unwrap_err();
        assert!(matches!(err, ConfigError::Range { .. }));

        let mut values = BTreeMap::new();
        values.insert("momentum".to_owned(), Value::Float(0.9));
        let err = ModelConfiguration::from_values("logistic_regression", &values).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownParameter { .. }));

        let err = ModelConfiguration::from_values("perceptron", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownModel(_)));
    }

    #[test]
    fn test_from_values_keeps_defaults_for_missing_keys() {
        let mut values = BTreeMap::new();
        values.insert("n_clusters".to_owned(), Value::Int(3));
        let config = ModelConfiguration::from_values("k_means", &values).unwrap();
        assert_eq!(config.get("n_clusters"), Some(&Value::Int(3)));
        assert_eq!(config.get("init"), Some(&Value::from("k-means++")));
    }

    #[test]
    fn test_record_parses_backend_document() {
        let record: ModelRecord = serde_json::from_str(
            r#"{
                "_id": "m1",
                "classification_id": "c1",
                "model_name": "recurrent_neural_network",
                "hyperparameters": { "epochs": "int", "layers": "array" },
                "hyperparameter_values": {
                    "epochs": 4,
                    "layers": [{ "units": 32, "activation": "tanh", "return_sequences": true }]
                }
            }"#,
        )
        .unwrap();

        let config = record.configuration().unwrap();
        assert_eq!(config.get("epochs"), Some(&Value::Int(4)));
        assert_eq!(config.layers()[0].return_sequences, Some(true));
        assert_eq!(config.get("optimizer"), Some(&Value::from("adam")));
    }

    #[test]
    fn test_record_with_foreign_layer_field_is_rejected() {
        let mut values: BTreeMap<String, Value> = BTreeMap::new();
        values.insert(
            "layers".to_owned(),
            serde_json::from_str(r#"[{ "units": 8, "activation": "relu", "filters": 4 }]"#)
                .unwrap(),
        );
        let err =
            ModelConfiguration::from_values("feedforward_neural_network", &values).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLayerField { .. }));
    }

    #[test]
    fn test_classification_document() {
        let classification: Classification = serde_json::from_str(
            r#"{ "_id": "c1", "classification_name": "churn" }"#,
        )
        .unwrap();
        assert_eq!(classification.classification_name, "churn");
        assert!(classification.models.is_empty());
    }
}
