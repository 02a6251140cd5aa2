use std::fmt;

use serde::{Deserialize, Serialize};

/// The current value of a parameter.
///
/// Serializes as the plain JSON value, so `Int(3)` is `3`, `Null` is `null`
/// and `Layers` is an array of layer objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Layers(Vec<Layer>),
}

impl Value {
    /// A short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Layers(_) => "array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(i) => Some(i as f64),
            Self::Float(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_layers(&self) -> Option<&[Layer]> {
        match self {
            Self::Layers(layers) => Some(layers),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Layers(layers) => write!(f, "[{} layer(s)]", layers.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

/// One layer of a neural network's architecture description.
///
/// The convolutional fields are only present on layers of convolutional
/// models and `return_sequences` only on layers of recurrent ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub units: i64,
    pub activation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_sequences: Option<bool>,
}

impl Layer {
    /// Reads a field by name.
    ///
    /// # Returns
    /// `None` if the field is unknown or not present on this layer.
    pub fn get(&self, field: &str) -> Option<Value> {
        match field {
            "units" => Some(Value::Int(self.units)),
            "activation" => Some(Value::Str(self.activation.clone())),
            "filters" => self.filters.map(Value::Int),
            "kernel_size" => self.kernel_size.map(Value::Int),
            "pool_size" => self.pool_size.map(Value::Int),
            "return_sequences" => self.return_sequences.map(Value::Bool),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json_shape() {
        let values = vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(3),
            Value::Float(0.5),
            Value::Str("rbf".into()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,true,3,0.5,"rbf"]"#);
    }

    #[test]
    fn test_integral_float_stays_float() {
        let json = serde_json::to_string(&Value::Float(1.0)).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Value::Float(1.0));
    }

    #[test]
    fn test_layers_parse_from_array() {
        let parsed: Value = serde_json::from_str(
            r#"[{"units":64,"activation":"relu","return_sequences":false}]"#,
        )
        .unwrap();
        let layers = parsed.as_layers().unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].return_sequences, Some(false));
        assert_eq!(layers[0].filters, None);

        let empty: Value = serde_json::from_str("[]").unwrap();
        assert_eq!(empty, Value::Layers(Vec::new()));
    }

    #[test]
    fn test_absent_layer_fields_are_skipped() {
        let layer = Layer {
            units: 64,
            activation: "relu".into(),
            filters: None,
            kernel_size: None,
            pool_size: None,
            return_sequences: None,
        };
        let json = serde_json::to_string(&layer).unwrap();
        assert_eq!(json, r#"{"units":64,"activation":"relu"}"#);
        assert_eq!(layer.get("pool_size"), None);
        assert_eq!(layer.get("units"), Some(Value::Int(64)));
    }
}
