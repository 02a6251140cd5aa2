use crate::{
    model::{Category, ModelSchema},
    param::{Literal, Member, ParamSpec},
};

use super::{N_JOBS, RANDOM_STATE, TOL};

pub(crate) static CLUSTERING: &[ModelSchema] = &[
    ModelSchema {
        name: "k_means",
        category: Category::Clustering,
        architecture: None,
        params: &[
            ("n_clusters", ParamSpec::int(8).min(1.0)),
            (
                "init",
                ParamSpec::union(
                    &[Member::Literal("k-means++"), Member::Literal("random")],
                    Literal::Str("k-means++"),
                ),
            ),
            (
                "n_init",
                ParamSpec::union(&[Member::Literal("auto"), Member::Int], Literal::Str("auto"))
                    .min(1.0),
            ),
            ("max_iter", ParamSpec::int(300).min(1.0)),
            ("tol", TOL),
            ("random_state", RANDOM_STATE),
        ],
    },
    ModelSchema {
        name: "dbscan",
        category: Category::Clustering,
        architecture: None,
        params: &[
            ("eps", ParamSpec::float(0.5).min(0.0)),
            ("min_samples", ParamSpec::int(5).min(1.0)),
            (
                "metric",
                ParamSpec::union(
                    &[
                        Member::Literal("euclidean"),
                        Member::Literal("manhattan"),
                        Member::Literal("cosine"),
                    ],
                    Literal::Str("euclidean"),
                ),
            ),
            ("leaf_size", ParamSpec::int(30).min(1.0)),
            ("n_jobs", N_JOBS),
        ],
    },
    ModelSchema {
        name: "agglomerative_clustering",
        category: Category::Clustering,
        architecture: None,
        params: &[
            (
                "n_clusters",
                ParamSpec::union(&[Member::Int, Member::None], Literal::Int(2)).min(1.0),
            ),
            (
                "linkage",
                ParamSpec::union(
                    &[
                        Member::Literal("ward"),
                        Member::Literal("complete"),
                        Member::Literal("average"),
                        Member::Literal("single"),
                    ],
                    Literal::Str("ward"),
                ),
            ),
            ("compute_distances", ParamSpec::boolean(false)),
        ],
    },
    ModelSchema {
        name: "mean_shift",
        category: Category::Clustering,
        architecture: None,
        params: &[
            ("bin_seeding", ParamSpec::boolean(false)),
            ("cluster_all", ParamSpec::boolean(true)),
            ("max_iter", ParamSpec::int(300).min(1.0)),
            ("n_jobs", N_JOBS),
        ],
    },
];
