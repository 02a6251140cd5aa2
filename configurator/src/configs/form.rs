use schema::{Architecture, ModelSchema, ParamSpec, ParamType, TypeDescriptor, Value};
use serde::Serialize;

/// The form control a parameter is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    Checkbox,
    Select,
    Number,
    Text,
    Layers,
}

/// Everything a form needs to render and label one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub name: String,
    pub widget: Widget,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub nullable: bool,
}

impl FormField {
    fn new(name: &str, spec: &ParamSpec) -> Self {
        let widget = match spec.ty {
            ParamType::Int | ParamType::Float => Widget::Number,
            ParamType::Bool => Widget::Checkbox,
            _ if spec.is_choice() => Widget::Select,
            ParamType::Str => Widget::Text,
            ParamType::Array | ParamType::Union(_) => Widget::Layers,
        };

        Self {
            name: name.to_owned(),
            widget,
            ty: spec.ty.descriptor(),
            default: spec.default_value(),
            min: spec.min,
            max: spec.max,
            options: spec.choices().into_iter().map(str::to_owned).collect(),
            nullable: spec.is_choice(),
        }
    }
}

/// Describes the form of a model, one field per parameter in schema order.
pub fn describe(schema: &ModelSchema) -> Vec<FormField> {
    schema
        .params
        .iter()
        .map(|(name, spec)| FormField::new(name, spec))
        .collect()
}

/// Describes the per-layer form of an architecture.
pub fn describe_layer(architecture: Architecture) -> Vec<FormField> {
    architecture
        .fields()
        .iter()
        .filter_map(|field| schema::layer_field(field).map(|spec| FormField::new(field, spec)))
        .collect()
}
