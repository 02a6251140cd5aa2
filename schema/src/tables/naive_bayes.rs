use crate::{
    model::{Category, ModelSchema},
    param::ParamSpec,
};

const ALPHA: ParamSpec = ParamSpec::float(1.0).min(0.0);

pub(crate) static NAIVE_BAYES: &[ModelSchema] = &[
    ModelSchema {
        name: "gaussian_nb",
        category: Category::NaiveBayes,
        architecture: None,
        params: &[("var_smoothing", ParamSpec::float(1e-9).min(0.0))],
    },
    ModelSchema {
        name: "multinomial_nb",
        category: Category::NaiveBayes,
        architecture: None,
        params: &[
            ("alpha", ALPHA),
            ("force_alpha", ParamSpec::boolean(true)),
            ("fit_prior", ParamSpec::boolean(true)),
        ],
    },
    ModelSchema {
        name: "bernoulli_nb",
        category: Category::NaiveBayes,
        architecture: None,
        params: &[
            ("alpha", ALPHA),
            ("binarize", ParamSpec::float(0.0)),
            ("fit_prior", ParamSpec::boolean(true)),
        ],
    },
    ModelSchema {
        name: "complement_nb",
        category: Category::NaiveBayes,
        architecture: None,
        params: &[
            ("alpha", ALPHA),
            ("fit_prior", ParamSpec::boolean(true)),
            ("norm", ParamSpec::boolean(false)),
        ],
    },
];
