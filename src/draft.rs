use configurator::{ConfigError, ModelConfiguration, Raw};

/// The raw inputs of a model form, as saved by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub category: String,
    pub model: String,
    pub classification_id: String,
    /// Set when the draft edits an already persisted model.
    pub model_id: Option<String>,
    pub inputs: Vec<(String, Raw)>,
    /// One entry per layer to append, each holding the fields to override.
    pub layers: Vec<Vec<(String, Raw)>>,
}

/// An input the configuration refused, together with the reason.
#[derive(Debug)]
pub struct Rejection {
    pub input: String,
    pub error: ConfigError,
}

/// Loads a [`Draft`] from a JSON file.
///
/// # Errors
/// Returns a human-readable string if the file cannot be read or parsed.
pub fn load(path: &str) -> Result<Draft, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read '{path}': {e}"))?;
    parse(&content)
}

/// Parses a [`Draft`] from its JSON text.
///
/// # Errors
/// Returns a human-readable string naming the first malformed field.
pub fn parse(content: &str) -> Result<Draft, String> {
    let val: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

    let str_field = |key: &str| -> Result<String, String> {
        val[key]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| format!("missing field: {key}"))
    };

    let category = str_field("category")?;
    let model = str_field("model")?;
    let classification_id = str_field("classification_id")?;

    let model_id = match &val["model_id"] {
        serde_json::Value::Null => None,
        serde_json::Value::String(id) => Some(id.clone()),
        _ => return Err("model_id must be a string".into()),
    };

    let inputs = match &val["inputs"] {
        serde_json::Value::Null => Vec::new(),
        inputs => parse_inputs(inputs, "inputs")?,
    };

    let layers = match &val["layers"] {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::Array(layers) => layers
            .iter()
            .enumerate()
            .map(|(i, l)| parse_inputs(l, &format!("layers[{i}]")))
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err("layers must be an array".into()),
    };

    Ok(Draft {
        category,
        model,
        classification_id,
        model_id,
        inputs,
        layers,
    })
}

fn parse_inputs(val: &serde_json::Value, key: &str) -> Result<Vec<(String, Raw)>, String> {
    let object = val
        .as_object()
        .ok_or_else(|| format!("{key} must be an object"))?;

    object
        .iter()
        .map(|(name, v)| {
            // A cleared control is saved as null.
            let raw = match v {
                serde_json::Value::Null => Some(Raw::from("null")),
                v => Raw::from_json(v),
            };
            raw.map(|raw| (name.clone(), raw))
                .ok_or_else(|| format!("{key}.{name} must be a string, number or bool"))
        })
        .collect()
}

impl Draft {
    /// Applies the draft's inputs to a fresh configuration of its model.
    ///
    /// A rejected input leaves the prior value in place and is reported back
    /// instead of aborting the whole draft.
    ///
    /// # Errors
    /// `UnknownModel` if the draft names a model the registry doesn't have.
    pub fn configure(&self) -> configurator::Result<(ModelConfiguration, Vec<Rejection>)> {
        let mut config = ModelConfiguration::for_model(&self.category, &self.model)?;
        let mut rejections = Vec::new();

        for (param, raw) in &self.inputs {
            match config.apply(param, raw) {
                Ok(next) => config = next,
                Err(error) => rejections.push(Rejection {
                    input: param.clone(),
                    error,
                }),
            }
        }

        for (index, fields) in self.layers.iter().enumerate() {
            match config.append_layer() {
                Ok(next) => config = next,
                Err(error) => {
                    rejections.push(Rejection {
                        input: format!("layers[{index}]"),
                        error,
                    });
                    continue;
                }
            }

            for (field, raw) in fields {
                match config.set_layer_field(index, field, raw) {
                    Ok(next) => config = next,
                    Err(error) => rejections.push(Rejection {
                        input: format!("layers[{index}].{field}"),
                        error,
                    }),
                }
            }
        }

        Ok((config, rejections))
    }
}

#[cfg(test)]
mod tests {
    use schema::Value;

    use super::*;

    #[test]
    fn test_parse_full_draft() {
        let draft = parse(
            r#"{
                "category": "neural",
                "model": "convolutional_neural_network",
                "classification_id": "c1",
                "model_id": "m1",
                "inputs": { "epochs": "20", "optimizer": "sgd", "dropout": 0.25 },
                "layers": [{ "filters": "16" }, {}]
            }"#,
        )
        .unwrap();

        assert_eq!(draft.model_id.as_deref(), Some("m1"));
        assert_eq!(draft.inputs.len(), 3);
        assert!(draft.inputs.contains(&("dropout".into(), Raw::Number(0.25))));
        assert_eq!(draft.layers.len(), 2);
        assert_eq!(draft.layers[0], vec![("filters".into(), Raw::from("16"))]);
        assert!(draft.layers[1].is_empty());
    }

    #[test]
    fn test_parse_minimal_draft() {
        let draft =
            parse(r#"{"category":"regression","model":"ridge","classification_id":"c1"}"#)
                .unwrap();
        assert_eq!(draft.model_id, None);
        assert!(draft.inputs.is_empty());
        assert!(draft.layers.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(r#"{"model":"ridge","classification_id":"c1"}"#).unwrap_err(),
            "missing field: category"
        );
        assert!(parse("{").unwrap_err().starts_with("invalid JSON"));
        assert_eq!(
            parse(
                r#"{"category":"regression","model":"ridge","classification_id":"c1",
                    "inputs":{"alpha":[1]}}"#
            )
            .unwrap_err(),
            "inputs.alpha must be a string, number or bool"
        );
    }

    #[test]
    fn test_null_input_clears_choice() {
        let draft = parse(
            r#"{"category":"classification","model":"support_vector_classifier",
                "classification_id":"c1","inputs":{"gamma":null}}"#,
        )
        .unwrap();
        let (config, rejections) = draft.configure().unwrap();
        assert!(rejections.is_empty());
        assert_eq!(config.get("gamma"), Some(&Value::Null));
    }

    #[test]
    fn test_configure_keeps_prior_value_on_rejection() {
        let draft = parse(
            r#"{"category":"classification","model":"logistic_regression",
                "classification_id":"c1",
                "inputs":{"max_iter":"0","C":"2.5","unknown":"1"}}"#,
        )
        .unwrap();
        let (config, rejections) = draft.configure().unwrap();

        assert_eq!(config.get("max_iter"), Some(&Value::Int(100)));
        assert_eq!(config.get("C"), Some(&Value::Float(2.5)));

        let mut rejected: Vec<_> = rejections.iter().map(|r| r.input.as_str()).collect();
        rejected.sort_unstable();
        assert_eq!(rejected, vec!["max_iter", "unknown"]);
    }

    #[test]
    fn test_configure_builds_layers() {
        let draft = parse(
            r#"{"category":"neural","model":"recurrent_neural_network",
                "classification_id":"c1",
                "layers":[{"units":"128","return_sequences":true},{"units":"-3"}]}"#,
        )
        .unwrap();
        let (config, rejections) = draft.configure().unwrap();

        assert_eq!(config.layers().len(), 2);
        assert_eq!(config.layers()[0].units, 128);
        assert_eq!(config.layers()[0].return_sequences, Some(true));
        assert_eq!(config.layers()[1].units, 64);
        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].input, "layers[1].units");
    }

    #[test]
    fn test_configure_layers_on_non_neural_model() {
        let draft = parse(
            r#"{"category":"clustering","model":"dbscan","classification_id":"c1","layers":[{}]}"#,
        )
        .unwrap();
        let (config, rejections) = draft.configure().unwrap();
        assert!(config.layers().is_empty());
        assert!(matches!(rejections[0].error, ConfigError::NotNeuralModel { .. }));
    }

    #[test]
    fn test_configure_unknown_model() {
        let draft =
            parse(r#"{"category":"neural","model":"transformer","classification_id":"c1"}"#)
                .unwrap();
        assert!(matches!(draft.configure(), Err(ConfigError::UnknownModel(_))));
    }
}
