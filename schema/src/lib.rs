//! Static hyperparameter tables for every model the dashboard can configure.
//!
//! The registry is read-only process-wide data: it's safe to share between
//! any number of callers without synchronization.

mod model;
mod param;
mod registry;
mod tables;
mod value;

pub use model::{Architecture, Category, ModelSchema, ParseCategoryErr};
pub use param::{Literal, Member, ParamSpec, ParamType, TypeDescriptor};
pub use registry::{LAYER_FIELDS, UnknownModel, all, find, layer_field, lookup, models};
pub use value::{Layer, Value};
