use crate::{
    model::{Architecture, Category, ModelSchema},
    param::{Literal, Member, ParamSpec},
};

const EPOCHS: ParamSpec = ParamSpec::int(10).min(1.0);
const BATCH_SIZE: ParamSpec = ParamSpec::int(32).min(1.0);
const LEARNING_RATE: ParamSpec = ParamSpec::float(0.001).min(0.0);
const DROPOUT: ParamSpec = ParamSpec::float(0.0).range(0.0, 1.0);

const OPTIMIZER: ParamSpec = ParamSpec::union(
    &[
        Member::Literal("adam"),
        Member::Literal("sgd"),
        Member::Literal("rmsprop"),
    ],
    Literal::Str("adam"),
);

const LOSS: ParamSpec = ParamSpec::union(
    &[
        Member::Literal("categorical_crossentropy"),
        Member::Literal("binary_crossentropy"),
        Member::Literal("mean_squared_error"),
    ],
    Literal::Str("categorical_crossentropy"),
);

pub(crate) static NEURAL: &[ModelSchema] = &[
    ModelSchema {
        name: "feedforward_neural_network",
        category: Category::Neural,
        architecture: Some(Architecture::Dense),
        params: &[
            ("epochs", EPOCHS),
            ("batch_size", BATCH_SIZE),
            ("learning_rate", LEARNING_RATE),
            ("optimizer", OPTIMIZER),
            ("loss", LOSS),
            ("dropout", DROPOUT),
            ("layers", ParamSpec::array()),
        ],
    },
    ModelSchema {
        name: "convolutional_neural_network",
        category: Category::Neural,
        architecture: Some(Architecture::Convolutional),
        params: &[
            ("epochs", EPOCHS),
            ("batch_size", BATCH_SIZE),
            ("learning_rate", LEARNING_RATE),
            ("optimizer", OPTIMIZER),
            ("loss", LOSS),
            ("dropout", DROPOUT),
            ("layers", ParamSpec::array()),
        ],
    },
    ModelSchema {
        name: "recurrent_neural_network",
        category: Category::Neural,
        architecture: Some(Architecture::Recurrent),
        params: &[
            ("epochs", EPOCHS),
            ("batch_size", BATCH_SIZE),
            ("learning_rate", LEARNING_RATE),
            ("optimizer", OPTIMIZER),
            ("loss", LOSS),
            ("dropout", DROPOUT),
            (
                "cell",
                ParamSpec::union(
                    &[Member::Literal("lstm"), Member::Literal("gru"), Member::Literal("simple")],
                    Literal::Str("lstm"),
                ),
            ),
            ("layers", ParamSpec::array()),
        ],
    },
];
