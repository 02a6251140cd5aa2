use crate::{
    model::{Category, ModelSchema},
    param::{Literal, Member, ParamSpec},
};

use super::{GAMMA, KERNEL, MAX_DEPTH, N_JOBS, RANDOM_STATE, TOL};

pub(crate) static REGRESSION: &[ModelSchema] = &[
    ModelSchema {
        name: "linear_regression",
        category: Category::Regression,
        architecture: None,
        params: &[
            ("fit_intercept", ParamSpec::boolean(true)),
            ("positive", ParamSpec::boolean(false)),
            ("n_jobs", N_JOBS),
        ],
    },
    ModelSchema {
        name: "ridge",
        category: Category::Regression,
        architecture: None,
        params: &[
            ("alpha", ParamSpec::float(1.0).min(0.0)),
            (
                "solver",
                ParamSpec::union(
                    &[
                        Member::Literal("auto"),
                        Member::Literal("svd"),
                        Member::Literal("cholesky"),
                        Member::Literal("lsqr"),
                        Member::Literal("sag"),
                        Member::Literal("saga"),
                    ],
                    Literal::Str("auto"),
                ),
            ),
            (
                "max_iter",
                ParamSpec::union(&[Member::Int, Member::None], Literal::Null).min(1.0),
            ),
            ("tol", TOL),
            ("random_state", RANDOM_STATE),
        ],
    },
    ModelSchema {
        name: "lasso",
        category: Category::Regression,
        architecture: None,
        params: &[
            ("alpha", ParamSpec::float(1.0).min(0.0)),
            ("max_iter", ParamSpec::int(1000).min(1.0)),
            ("tol", TOL),
            (
                "selection",
                ParamSpec::union(
                    &[Member::Literal("cyclic"), Member::Literal("random")],
                    Literal::Str("cyclic"),
                ),
            ),
            ("random_state", RANDOM_STATE),
        ],
    },
    ModelSchema {
        name: "elastic_net",
        category: Category::Regression,
        architecture: None,
        params: &[
            ("alpha", ParamSpec::float(1.0).min(0.0)),
            ("l1_ratio", ParamSpec::float(0.5).range(0.0, 1.0)),
            ("max_iter", ParamSpec::int(1000).min(1.0)),
            ("tol", TOL),
            ("random_state", RANDOM_STATE),
        ],
    },
    ModelSchema {
        name: "support_vector_regressor",
        category: Category::Regression,
        architecture: None,
        params: &[
            ("kernel", KERNEL),
            ("C", ParamSpec::float(1.0).min(0.0)),
            ("epsilon", ParamSpec::float(0.1).min(0.0)),
            ("gamma", GAMMA),
            ("degree", ParamSpec::int(3).min(1.0)),
        ],
    },
    ModelSchema {
        name: "random_forest_regressor",
        category: Category::Regression,
        architecture: None,
        params: &[
            ("n_estimators", ParamSpec::int(100).min(1.0)),
            (
                "criterion",
                ParamSpec::union(
                    &[
                        Member::Literal("squared_error"),
                        Member::Literal("absolute_error"),
                        Member::Literal("friedman_mse"),
                        Member::Literal("poisson"),
                    ],
                    Literal::Str("squared_error"),
                ),
            ),
            ("max_depth", MAX_DEPTH),
            ("bootstrap", ParamSpec::boolean(true)),
            ("n_jobs", N_JOBS),
            ("random_state", RANDOM_STATE),
        ],
    },
];
