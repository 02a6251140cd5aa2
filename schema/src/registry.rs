use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::{
    model::{Category, ModelSchema},
    param::{Literal, Member, ParamSpec},
    tables,
};

/// Error returned by `lookup` when the category or the model isn't registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModel {
    pub category: String,
    pub model: String,
}

impl Display for UnknownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown model '{}' in category '{}'",
            self.model, self.category
        )
    }
}

impl Error for UnknownModel {}

/// Specs of the editable fields of a neural layer.
pub static LAYER_FIELDS: &[(&str, ParamSpec)] = &[
    ("units", ParamSpec::int(64).min(1.0)),
    (
        "activation",
        ParamSpec::union(
            &[
                Member::Literal("relu"),
                Member::Literal("sigmoid"),
                Member::Literal("tanh"),
                Member::Literal("softmax"),
                Member::Literal("linear"),
            ],
            Literal::Str("relu"),
        ),
    ),
    ("filters", ParamSpec::int(32).min(1.0)),
    ("kernel_size", ParamSpec::int(3).min(1.0)),
    ("pool_size", ParamSpec::int(2).min(1.0)),
    ("return_sequences", ParamSpec::boolean(false)),
];

/// Returns the table of a category.
pub fn models(category: Category) -> &'static [ModelSchema] {
    match category {
        Category::Classification => tables::CLASSIFICATION,
        Category::Clustering => tables::CLUSTERING,
        Category::NaiveBayes => tables::NAIVE_BAYES,
        Category::Regression => tables::REGRESSION,
        Category::Neural => tables::NEURAL,
    }
}

/// Iterates every registered model, category by category.
pub fn all() -> impl Iterator<Item = &'static ModelSchema> {
    Category::ALL.into_iter().flat_map(models)
}

/// Returns the schema registered for `model` under `category`.
///
/// # Arguments
/// * `category` - The snake_case name of the category.
/// * `model` - The model name within that category.
///
/// # Returns
/// The static schema, or `UnknownModel` if either name misses.
pub fn lookup(category: &str, model: &str) -> Result<&'static ModelSchema, UnknownModel> {
    let unknown = || UnknownModel {
        category: category.to_owned(),
        model: model.to_owned(),
    };

    let category: Category = category.parse().map_err(|_| unknown())?;
    models(category)
        .iter()
        .find(|schema| schema.name == model)
        .ok_or_else(unknown)
}

/// Resolves a model by name alone; names are unique across categories.
pub fn find(model: &str) -> Option<&'static ModelSchema> {
    all().find(|schema| schema.name == model)
}

/// Returns the spec of a layer field.
pub fn layer_field(field: &str) -> Option<&'static ParamSpec> {
    LAYER_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, spec)| spec)
}
