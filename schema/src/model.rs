use std::{
    error::Error,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::param::ParamSpec;

/// The partitions of the schema registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Classification,
    Clustering,
    NaiveBayes,
    Regression,
    Neural,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Classification,
        Self::Clustering,
        Self::NaiveBayes,
        Self::Regression,
        Self::Neural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classification => "classification",
            Self::Clustering => "clustering",
            Self::NaiveBayes => "naive_bayes",
            Self::Regression => "regression",
            Self::Neural => "neural",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a category name that isn't registered.
#[derive(Debug)]
pub struct ParseCategoryErr(pub String);

impl Display for ParseCategoryErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown model category: {}", self.0)
    }
}

impl Error for ParseCategoryErr {}

impl FromStr for Category {
    type Err = ParseCategoryErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryErr(s.to_owned()))
    }
}

/// The layer layout of a neural model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    Dense,
    Convolutional,
    Recurrent,
}

impl Architecture {
    /// The layer fields a layer of this architecture carries.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Dense => &["units", "activation"],
            Self::Convolutional => &["units", "activation", "filters", "kernel_size", "pool_size"],
            Self::Recurrent => &["units", "activation", "return_sequences"],
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields().contains(&field)
    }
}

/// The parameter table of a single registered model.
#[derive(Debug, PartialEq)]
pub struct ModelSchema {
    pub name: &'static str,
    pub category: Category,
    /// Set for neural models only.
    pub architecture: Option<Architecture>,
    /// Parameters in display order.
    pub params: &'static [(&'static str, ParamSpec)],
}

impl ModelSchema {
    /// Looks up a parameter's spec by name.
    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        let params: &'static [(&'static str, ParamSpec)] = self.params;
        params.iter().find(|(n, _)| *n == name).map(|(_, spec)| spec)
    }

    /// Parameter names in display order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let params: &'static [(&'static str, ParamSpec)] = self.params;
        params.iter().map(|(n, _)| *n)
    }

    pub fn is_neural(&self) -> bool {
        self.category == Category::Neural
    }
}
