use std::fmt;

use schema::UnknownModel;

/// The configurator's result type.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// All errors that can occur while building, validating or submitting a
/// model configuration.
///
/// Validation variants never leave a configuration half-updated: the
/// operation that failed returns the error and the prior value stays as is.
#[derive(Debug)]
pub enum ConfigError {
    /// The category or the model isn't in the registry.
    UnknownModel(UnknownModel),
    /// The model declares no parameter with this name.
    UnknownParameter { model: String, param: String },
    /// The value doesn't match the declared primitive type.
    InvalidType {
        param: String,
        expected: String,
        got: String,
    },
    /// A numeric value outside the inclusive `[min, max]` bounds.
    Range {
        param: String,
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// The value isn't one of the enumerated choices.
    InvalidOption {
        param: String,
        value: String,
        options: Vec<String>,
    },
    /// A layer mutation addressed a layer that doesn't exist.
    IndexOutOfRange { index: usize, len: usize },
    /// A layer operation on a model that has no layers.
    NotNeuralModel { model: String },
    /// The layers of this model don't carry the field.
    InvalidLayerField { model: String, field: String },
    /// The backend answered with a non-2xx status.
    Backend { status: u16, message: String },
    /// The request never got a response.
    Http(reqwest::Error),
    /// A payload couldn't be encoded or decoded.
    Json(serde_json::Error),
}

impl ConfigError {
    /// The parameter a validation failure refers to, if any.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::UnknownParameter { param, .. }
            | Self::InvalidType { param, .. }
            | Self::Range { param, .. }
            | Self::InvalidOption { param, .. } => Some(param),
            Self::InvalidLayerField { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the failure is a local validation failure rather than a
    /// backend or transport one.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Backend { .. } | Self::Http(_) | Self::Json(_))
    }
}

fn bound(value: Option<f64>, unset: &str) -> String {
    value.map_or_else(|| unset.to_owned(), |v| v.to_string())
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModel(e) => write!(f, "{e}"),
            Self::UnknownParameter { model, param } => {
                write!(f, "model '{model}' has no parameter '{param}'")
            }
            Self::InvalidType {
                param,
                expected,
                got,
            } => write!(f, "{param}: expected {expected}, got {got}"),
            Self::Range {
                param,
                value,
                min,
                max,
            } => write!(
                f,
                "{param} must be between {} and {}, got {value}",
                bound(*min, "-∞"),
                bound(*max, "∞"),
            ),
            Self::InvalidOption {
                param,
                value,
                options,
            } => write!(f, "{param}: {value} is not one of [{}]", options.join(", ")),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "layer index {index} out of range ({len} layer(s))")
            }
            Self::NotNeuralModel { model } => {
                write!(f, "model '{model}' is not a neural network, it has no layers")
            }
            Self::InvalidLayerField { model, field } => {
                write!(f, "layers of model '{model}' have no field '{field}'")
            }
            Self::Backend { status, message } => write!(f, "backend responded {status}: {message}"),
            Self::Http(e) => write!(f, "http error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownModel(e) => Some(e),
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnknownModel> for ConfigError {
    fn from(e: UnknownModel) -> Self {
        Self::UnknownModel(e)
    }
}

impl From<reqwest::Error> for ConfigError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
