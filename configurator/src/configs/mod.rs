mod form;
mod layers;
mod model;
mod submission;

pub use form::{FormField, Widget, describe, describe_layer};
pub use layers::default_layer;
pub use model::{Entry, ModelConfiguration};
pub use submission::{Classification, ModelRecord, ModelSubmission};
