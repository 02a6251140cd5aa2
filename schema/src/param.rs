use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A single member of a union type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member {
    /// Any integer is admitted alongside the literal choices.
    Int,
    /// Shows up in the wire descriptor only. Every choice parameter accepts
    /// null, with or without this member.
    None,
    /// One enumerated string choice.
    Literal(&'static str),
}

impl Member {
    /// Returns the member the way it appears in a type descriptor.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Int => "int",
            Self::None => "None",
            Self::Literal(s) => s,
        }
    }
}

/// The declared type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Int,
    Float,
    Bool,
    Str,
    Array,
    Union(&'static [Member]),
}

impl ParamType {
    /// The scalar tag, or `"union"` for unions.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Array => "array",
            Self::Union(_) => "union",
        }
    }

    /// Returns the wire form of this type.
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            Self::Union(members) => {
                TypeDescriptor::Union(members.iter().map(|m| m.as_str().to_owned()).collect())
            }
            other => TypeDescriptor::Tag(other.tag().to_owned()),
        }
    }

    /// Whether integer values are admitted, either directly or through a union.
    pub fn includes_int(&self) -> bool {
        match self {
            Self::Int => true,
            Self::Union(members) => members.contains(&Member::Int),
            _ => false,
        }
    }

    /// Whether `min`/`max` bounds apply to values of this type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Float) || self.includes_int()
    }

    /// The literal string choices of a union, in declaration order.
    pub fn literals(&self) -> Vec<&'static str> {
        match self {
            Self::Union(members) => members
                .iter()
                .filter_map(|m| match m {
                    Member::Literal(s) => Some(*s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// The wire form of a parameter's declared type: a scalar tag such as `"int"`
/// or, for unions, the list of members such as `["int", "None"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeDescriptor {
    Tag(String),
    Union(Vec<String>),
}

/// A default value that can live inside a `static` table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
    EmptyList,
}

impl Literal {
    /// Converts the literal into an owned `Value`.
    pub fn to_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Int(i) => Value::Int(i),
            Self::Float(f) => Value::Float(f),
            Self::Str(s) => Value::Str(s.to_owned()),
            Self::EmptyList => Value::Layers(Vec::new()),
        }
    }
}

/// Declarative description of one configurable parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub ty: ParamType,
    pub default: Literal,
    /// Inclusive lower bound, numeric types only.
    pub min: Option<f64>,
    /// Inclusive upper bound, numeric types only.
    pub max: Option<f64>,
    /// Explicit allowed strings; takes precedence over a union's literals.
    pub options: Option<&'static [&'static str]>,
}

impl ParamSpec {
    pub const fn new(ty: ParamType, default: Literal) -> Self {
        Self {
            ty,
            default,
            min: None,
            max: None,
            options: None,
        }
    }

    pub const fn int(default: i64) -> Self {
        Self::new(ParamType::Int, Literal::Int(default))
    }

    pub const fn float(default: f64) -> Self {
        Self::new(ParamType::Float, Literal::Float(default))
    }

    pub const fn boolean(default: bool) -> Self {
        Self::new(ParamType::Bool, Literal::Bool(default))
    }

    pub const fn string(default: &'static str) -> Self {
        Self::new(ParamType::Str, Literal::Str(default))
    }

    pub const fn array() -> Self {
        Self::new(ParamType::Array, Literal::EmptyList)
    }

    pub const fn union(members: &'static [Member], default: Literal) -> Self {
        Self::new(ParamType::Union(members), default)
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    pub const fn options(self, options: &'static [&'static str]) -> Self {
        Self {
            options: Some(options),
            ..self
        }
    }

    /// Whether values are picked from an enumerated set.
    pub fn is_choice(&self) -> bool {
        self.options.is_some() || matches!(self.ty, ParamType::Union(_))
    }

    /// The allowed strings: `options` if set, otherwise the union's literals.
    pub fn choices(&self) -> Vec<&'static str> {
        match self.options {
            Some(options) => options.to_vec(),
            None => self.ty.literals(),
        }
    }

    /// The value a freshly initialized configuration holds.
    pub fn default_value(&self) -> Value {
        self.default.to_value()
    }
}
