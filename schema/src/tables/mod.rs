//! Static parameter tables, one module per category.
//!
//! Shared specs that several models declare identically live here.

use crate::param::{Literal, Member, ParamSpec};

mod classification;
mod clustering;
mod naive_bayes;
mod neural;
mod regression;

pub(crate) use classification::CLASSIFICATION;
pub(crate) use clustering::CLUSTERING;
pub(crate) use naive_bayes::NAIVE_BAYES;
pub(crate) use neural::NEURAL;
pub(crate) use regression::REGRESSION;

const INT_OR_NONE: &[Member] = &[Member::Int, Member::None];

/// Seed for estimators with randomness; unset means a fresh seed per fit.
pub(crate) const RANDOM_STATE: ParamSpec = ParamSpec::union(INT_OR_NONE, Literal::Null).min(0.0);

/// Maximum tree depth; unset grows until leaves are pure.
pub(crate) const MAX_DEPTH: ParamSpec = ParamSpec::union(INT_OR_NONE, Literal::Null).min(1.0);

pub(crate) const N_JOBS: ParamSpec = ParamSpec::union(INT_OR_NONE, Literal::Null).min(-1.0);

pub(crate) const TOL: ParamSpec = ParamSpec::float(1e-4).min(0.0);

pub(crate) const GAMMA: ParamSpec = ParamSpec::union(
    &[Member::Literal("scale"), Member::Literal("auto")],
    Literal::Str("scale"),
)
.options(&["scale", "auto"]);

pub(crate) const KERNEL: ParamSpec = ParamSpec::union(
    &[
        Member::Literal("linear"),
        Member::Literal("poly"),
        Member::Literal("rbf"),
        Member::Literal("sigmoid"),
    ],
    Literal::Str("rbf"),
);
