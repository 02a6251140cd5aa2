use std::collections::BTreeMap;

use log::debug;
use schema::{Architecture, Category, Layer, ModelSchema, ParamSpec, TypeDescriptor, Value};

use crate::{
    coerce::{Raw, coerce},
    error::{ConfigError, Result},
};

/// One parameter of a live configuration: its declaration and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: &'static str,
    spec: &'static ParamSpec,
    value: Value,
}

impl Entry {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn spec(&self) -> &'static ParamSpec {
        self.spec
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The configuration of the model currently selected in a form.
///
/// Every update returns a new configuration and leaves `self` untouched, so
/// a failed update keeps the prior configuration intact and readers of an
/// older value never observe a later change.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfiguration {
    schema: &'static ModelSchema,
    entries: Vec<Entry>,
}

impl ModelConfiguration {
    /// Creates a configuration holding every declared parameter at its default.
    ///
    /// # Arguments
    /// * `schema` - The schema of the selected model.
    ///
    /// # Returns
    /// A configuration with exactly the schema's parameters, in schema order.
    pub fn initialize(schema: &'static ModelSchema) -> Self {
        let params: &'static [(&'static str, ParamSpec)] = schema.params;
        let entries = params
            .iter()
            .map(|(name, spec)| Entry {
                name: *name,
                spec,
                value: spec.default_value(),
            })
            .collect();

        debug!("initialized configuration for {}", schema.name);
        Self { schema, entries }
    }

    /// Looks up `model` under `category` and initializes its configuration.
    ///
    /// # Errors
    /// `UnknownModel` if the registry has no such model.
    pub fn for_model(category: &str, model: &str) -> Result<Self> {
        let schema = schema::lookup(category, model)?;
        Ok(Self::initialize(schema))
    }

    pub fn schema(&self) -> &'static ModelSchema {
        self.schema
    }

    /// The model name, as the backend knows it.
    pub fn model_type(&self) -> &'static str {
        self.schema.name
    }

    pub fn category(&self) -> Category {
        self.schema.category
    }

    /// The layer layout, set for neural models only.
    pub fn architecture(&self) -> Option<Architecture> {
        self.schema.architecture
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the current value of a parameter.
    pub fn get(&self, param: &str) -> Option<&Value> {
        self.entry(param).map(|e| &e.value)
    }

    /// Returns the current layer list, empty for models without layers.
    pub fn layers(&self) -> &[Layer] {
        self.get("layers")
            .and_then(Value::as_layers)
            .unwrap_or_default()
    }

    /// The declared type of every parameter, keyed by name.
    pub fn hyperparameters(&self) -> BTreeMap<String, TypeDescriptor> {
        self.entries
            .iter()
            .map(|e| (e.name.to_owned(), e.spec.ty.descriptor()))
            .collect()
    }

    /// The current value of every parameter, keyed by name.
    pub fn hyperparameter_values(&self) -> BTreeMap<String, Value> {
        self.entries
            .iter()
            .map(|e| (e.name.to_owned(), e.value.clone()))
            .collect()
    }

    /// Returns a configuration with `param` set to `value`.
    ///
    /// The value is stored as given; run raw input through [`apply`] to have
    /// it validated first.
    ///
    /// # Errors
    /// `UnknownParameter` if the model doesn't declare `param`.
    ///
    /// [`apply`]: Self::apply
    pub fn set_value(&self, param: &str, value: Value) -> Result<Self> {
        let idx = self.position(param)?;
        let mut next = self.clone();
        debug!("{}: {param} = {value}", self.schema.name);
        next.entries[idx].value = value;
        Ok(next)
    }

    /// Coerces a raw input against the parameter's spec and sets it.
    ///
    /// # Errors
    /// `UnknownParameter`, or the coercion failure naming the parameter
    /// together with its allowed range or options.
    pub fn apply(&self, param: &str, raw: &Raw) -> Result<Self> {
        let entry = self.entry(param).ok_or_else(|| self.unknown_param(param))?;
        let value = coerce(entry.name, entry.spec, raw)?;
        self.set_value(param, value)
    }

    /// Restores a parameter to its declared default.
    pub fn reset(&self, param: &str) -> Result<Self> {
        let entry = self.entry(param).ok_or_else(|| self.unknown_param(param))?;
        self.set_value(param, entry.spec.default_value())
    }

    fn entry(&self, param: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == param)
    }

    fn position(&self, param: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.name == param)
            .ok_or_else(|| self.unknown_param(param))
    }

    fn unknown_param(&self, param: &str) -> ConfigError {
        ConfigError::UnknownParameter {
            model: self.schema.name.to_owned(),
            param: param.to_owned(),
        }
    }
}
