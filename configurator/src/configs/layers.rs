use log::debug;
use schema::{Architecture, Layer, Value};

use super::ModelConfiguration;
use crate::{
    coerce::{self, Raw},
    error::{ConfigError, Result},
};

const DEFAULT_UNITS: i64 = 64;
const DEFAULT_ACTIVATION: &str = "relu";
const DEFAULT_FILTERS: i64 = 32;
const DEFAULT_KERNEL_SIZE: i64 = 3;
const DEFAULT_POOL_SIZE: i64 = 2;

/// Builds the layer appended by "add layer" for the given architecture.
pub fn default_layer(architecture: Architecture) -> Layer {
    let mut layer = Layer {
        units: DEFAULT_UNITS,
        activation: DEFAULT_ACTIVATION.to_owned(),
        filters: None,
        kernel_size: None,
        pool_size: None,
        return_sequences: None,
    };

    match architecture {
        Architecture::Dense => {}
        Architecture::Convolutional => {
            layer.filters = Some(DEFAULT_FILTERS);
            layer.kernel_size = Some(DEFAULT_KERNEL_SIZE);
            layer.pool_size = Some(DEFAULT_POOL_SIZE);
        }
        Architecture::Recurrent => layer.return_sequences = Some(false),
    }
    layer
}

/// Checks a received layer list against the model's architecture: every
/// field the architecture carries is present and valid, no other field is.
pub(crate) fn check_layers(
    model: &str,
    architecture: Architecture,
    layers: &[Layer],
) -> Result<()> {
    const FIELDS: [&str; 6] = [
        "units",
        "activation",
        "filters",
        "kernel_size",
        "pool_size",
        "return_sequences",
    ];

    for (index, layer) in layers.iter().enumerate() {
        for field in FIELDS {
            let value = layer.get(field);
            match (architecture.has_field(field), value) {
                (true, Some(value)) => {
                    let spec = field_spec(model, field)?;
                    coerce::check(&layer_param(index, field), spec, &value)?;
                }
                (false, None) => {}
                _ => {
                    return Err(ConfigError::InvalidLayerField {
                        model: model.to_owned(),
                        field: layer_param(index, field),
                    });
                }
            }
        }
    }
    Ok(())
}

fn field_spec(model: &str, field: &str) -> Result<&'static schema::ParamSpec> {
    schema::layer_field(field).ok_or_else(|| ConfigError::InvalidLayerField {
        model: model.to_owned(),
        field: field.to_owned(),
    })
}

fn layer_param(index: usize, field: &str) -> String {
    format!("layers[{index}].{field}")
}

fn write_field(layer: &mut Layer, field: &str, value: Value) -> std::result::Result<(), Value> {
    match (field, value) {
        ("units", Value::Int(units)) => layer.units = units,
        ("activation", Value::Str(activation)) => layer.activation = activation,
        ("filters", Value::Int(filters)) => layer.filters = Some(filters),
        ("kernel_size", Value::Int(size)) => layer.kernel_size = Some(size),
        ("pool_size", Value::Int(size)) => layer.pool_size = Some(size),
        ("return_sequences", Value::Bool(b)) => layer.return_sequences = Some(b),
        (_, value) => return Err(value),
    }
    Ok(())
}

impl ModelConfiguration {
    /// Returns a configuration with one more layer, carrying the defaults of
    /// the model's architecture.
    ///
    /// # Errors
    /// `NotNeuralModel` if the model has no layers.
    pub fn append_layer(&self) -> Result<Self> {
        let architecture = self.require_architecture()?;
        let mut layers = self.layers().to_vec();
        layers.push(default_layer(architecture));

        debug!("{}: appended layer {}", self.model_type(), layers.len() - 1);
        self.set_value("layers", Value::Layers(layers))
    }

    /// Returns a configuration where one field of the layer at `index` is
    /// replaced by the coerced `raw` input.
    ///
    /// # Arguments
    /// * `index` - Position of the layer in the current layer list.
    /// * `field` - A field carried by the model's architecture.
    /// * `raw` - The input to coerce against the field's spec.
    ///
    /// # Errors
    /// `NotNeuralModel`, `IndexOutOfRange`, `InvalidLayerField`, or the
    /// coercion failure for the field.
    pub fn set_layer_field(&self, index: usize, field: &str, raw: &Raw) -> Result<Self> {
        let architecture = self.require_architecture()?;
        if !architecture.has_field(field) {
            return Err(ConfigError::InvalidLayerField {
                model: self.model_type().to_owned(),
                field: field.to_owned(),
            });
        }

        let layers = self.layers();
        if index >= layers.len() {
            return Err(ConfigError::IndexOutOfRange {
                index,
                len: layers.len(),
            });
        }

        let param = layer_param(index, field);
        let spec = field_spec(self.model_type(), field)?;
        let value = coerce::coerce(&param, spec, raw)?;

        let mut layers = layers.to_vec();
        write_field(&mut layers[index], field, value).map_err(|value| {
            ConfigError::InvalidType {
                param: param.clone(),
                expected: coerce::expected(spec),
                got: value.to_string(),
            }
        })?;

        debug!("{}: set {param}", self.model_type());
        self.set_value("layers", Value::Layers(layers))
    }

    fn require_architecture(&self) -> Result<Architecture> {
        self.architecture().ok_or_else(|| ConfigError::NotNeuralModel {
            model: self.model_type().to_owned(),
        })
    }
}
