use crate::{
    model::{Category, ModelSchema},
    param::{Literal, Member, ParamSpec},
};

use super::{GAMMA, KERNEL, MAX_DEPTH, N_JOBS, RANDOM_STATE, TOL};

const CRITERION: ParamSpec = ParamSpec::union(
    &[
        Member::Literal("gini"),
        Member::Literal("entropy"),
        Member::Literal("log_loss"),
    ],
    Literal::Str("gini"),
);

pub(crate) static CLASSIFICATION: &[ModelSchema] = &[
    ModelSchema {
        name: "logistic_regression",
        category: Category::Classification,
        architecture: None,
        params: &[
            (
                "penalty",
                ParamSpec::union(
                    &[
                        Member::Literal("l1"),
                        Member::Literal("l2"),
                        Member::Literal("elasticnet"),
                        Member::None,
                    ],
                    Literal::Str("l2"),
                ),
            ),
            ("C", ParamSpec::float(1.0).min(0.0)),
            (
                "solver",
                ParamSpec::union(
                    &[
                        Member::Literal("lbfgs"),
                        Member::Literal("liblinear"),
                        Member::Literal("newton-cg"),
                        Member::Literal("sag"),
                        Member::Literal("saga"),
                    ],
                    Literal::Str("lbfgs"),
                ),
            ),
            ("max_iter", ParamSpec::int(100).min(1.0)),
            ("tol", TOL),
            ("fit_intercept", ParamSpec::boolean(true)),
            ("random_state", RANDOM_STATE),
        ],
    },
    ModelSchema {
        name: "support_vector_classifier",
        category: Category::Classification,
        architecture: None,
        params: &[
            ("C", ParamSpec::float(1.0).min(0.0)),
            ("kernel", KERNEL),
            ("degree", ParamSpec::int(3).min(1.0)),
            ("gamma", GAMMA),
            ("probability", ParamSpec::boolean(false)),
            ("tol", ParamSpec::float(1e-3).min(0.0)),
            ("random_state", RANDOM_STATE),
        ],
    },
    ModelSchema {
        name: "decision_tree_classifier",
        category: Category::Classification,
        architecture: None,
        params: &[
            ("criterion", CRITERION),
            ("max_depth", MAX_DEPTH),
            ("min_samples_split", ParamSpec::int(2).min(2.0)),
            ("min_samples_leaf", ParamSpec::int(1).min(1.0)),
            ("random_state", RANDOM_STATE),
        ],
    },
    ModelSchema {
        name: "random_forest_classifier",
        category: Category::Classification,
        architecture: None,
        params: &[
            ("n_estimators", ParamSpec::int(100).min(1.0)),
            ("criterion", CRITERION),
            ("max_depth", MAX_DEPTH),
            ("min_samples_split", ParamSpec::int(2).min(2.0)),
            ("bootstrap", ParamSpec::boolean(true)),
            ("n_jobs", N_JOBS),
            ("random_state", RANDOM_STATE),
        ],
    },
    ModelSchema {
        name: "k_nearest_neighbors",
        category: Category::Classification,
        architecture: None,
        params: &[
            ("n_neighbors", ParamSpec::int(5).min(1.0)),
            (
                "weights",
                ParamSpec::union(
                    &[Member::Literal("uniform"), Member::Literal("distance")],
                    Literal::Str("uniform"),
                ),
            ),
            (
                "algorithm",
                ParamSpec::union(
                    &[
                        Member::Literal("auto"),
                        Member::Literal("ball_tree"),
                        Member::Literal("kd_tree"),
                        Member::Literal("brute"),
                    ],
                    Literal::Str("auto"),
                ),
            ),
            ("leaf_size", ParamSpec::int(30).min(1.0)),
            ("p", ParamSpec::int(2).min(1.0)),
        ],
    },
    ModelSchema {
        name: "gradient_boosting_classifier",
        category: Category::Classification,
        architecture: None,
        params: &[
            ("n_estimators", ParamSpec::int(100).min(1.0)),
            ("learning_rate", ParamSpec::float(0.1).min(0.0)),
            ("max_depth", ParamSpec::int(3).min(1.0)),
            ("subsample", ParamSpec::float(1.0).range(0.0, 1.0)),
            ("random_state", RANDOM_STATE),
        ],
    },
];
