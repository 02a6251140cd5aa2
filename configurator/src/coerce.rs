use std::fmt;

use schema::{ParamSpec, ParamType, TypeDescriptor, Value};

use crate::error::{ConfigError, Result};

/// A raw input value as a form control produces it.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
    Text(String),
    Bool(bool),
    Int(i64),
    Number(f64),
}

impl Raw {
    /// Converts a JSON scalar into a raw input.
    ///
    /// # Returns
    /// `None` for arrays, objects and `null`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Number)),
            _ => None,
        }
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Number(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Raw {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Raw {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Raw {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Converts a raw input into a value conforming to `spec`.
///
/// Dispatch follows the declared type: `int`, `float` and `bool` first, then
/// enumerated choices (unions or explicit `options`), then `str`. Arrays are
/// never set from a raw input.
///
/// # Arguments
/// * `param` - The parameter name, reported back in errors.
/// * `spec` - The parameter's declaration.
/// * `raw` - The input to convert.
///
/// # Returns
/// The typed value, or the validation failure naming `param`.
pub fn coerce(param: &str, spec: &ParamSpec, raw: &Raw) -> Result<Value> {
    match spec.ty {
        ParamType::Int => {
            let value = parse_int(raw).ok_or_else(|| invalid_type(param, spec, raw))?;
            check_range(param, spec, value as f64)?;
            Ok(Value::Int(value))
        }
        ParamType::Float => {
            let value = parse_float(raw).ok_or_else(|| invalid_type(param, spec, raw))?;
            check_range(param, spec, value)?;
            Ok(Value::Float(value))
        }
        ParamType::Bool => match raw {
            Raw::Bool(b) => Ok(Value::Bool(*b)),
            Raw::Text(s) if s == "true" => Ok(Value::Bool(true)),
            Raw::Text(s) if s == "false" => Ok(Value::Bool(false)),
            _ => Err(invalid_type(param, spec, raw)),
        },
        _ if spec.is_choice() => coerce_choice(param, spec, raw),
        ParamType::Str => match raw {
            Raw::Text(s) => Ok(Value::Str(s.clone())),
            _ => Err(invalid_type(param, spec, raw)),
        },
        ParamType::Array | ParamType::Union(_) => Err(invalid_type(param, spec, raw)),
    }
}

/// Validates an already typed value against `spec`.
///
/// Integers are accepted for float parameters. The content of a layer list
/// is not inspected here, only its kind.
pub fn check(param: &str, spec: &ParamSpec, value: &Value) -> Result<()> {
    match (spec.ty, value) {
        (ParamType::Int, Value::Int(i)) => check_range(param, spec, *i as f64),
        (ParamType::Float, Value::Int(_) | Value::Float(_)) => {
            let x = value.as_f64().unwrap_or_default();
            if !x.is_finite() {
                return Err(type_mismatch(param, spec, value.to_string()));
            }
            check_range(param, spec, x)
        }
        (ParamType::Bool, Value::Bool(_)) => Ok(()),
        (_, Value::Null) if spec.is_choice() => Ok(()),
        (_, Value::Str(s)) if spec.is_choice() => {
            if spec.choices().contains(&s.as_str()) {
                Ok(())
            } else {
                Err(invalid_option(param, spec, value.to_string()))
            }
        }
        (ParamType::Union(_), Value::Int(i)) if spec.ty.includes_int() => {
            check_range(param, spec, *i as f64)
        }
        (ParamType::Str, Value::Str(_)) => Ok(()),
        (ParamType::Array, Value::Layers(_)) => Ok(()),
        _ => Err(type_mismatch(param, spec, value.to_string())),
    }
}

fn coerce_choice(param: &str, spec: &ParamSpec, raw: &Raw) -> Result<Value> {
    match raw {
        Raw::Text(s) if s == "null" => Ok(Value::Null),
        Raw::Text(s) if spec.choices().contains(&s.as_str()) => Ok(Value::Str(s.clone())),
        Raw::Text(_) | Raw::Int(_) | Raw::Number(_) if spec.ty.includes_int() => {
            let value = parse_int(raw).ok_or_else(|| invalid_option(param, spec, raw.to_string()))?;
            check_range(param, spec, value as f64)?;
            Ok(Value::Int(value))
        }
        _ => Err(invalid_option(param, spec, raw.to_string())),
    }
}

/// `2^63`, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn parse_int(raw: &Raw) -> Option<i64> {
    match *raw {
        Raw::Text(ref s) => s.trim().parse().ok(),
        Raw::Int(i) => Some(i),
        Raw::Number(x) if x.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&x) => {
            Some(x as i64)
        }
        _ => None,
    }
}

fn parse_float(raw: &Raw) -> Option<f64> {
    let value = match *raw {
        Raw::Text(ref s) => s.trim().parse().ok()?,
        Raw::Int(i) => i as f64,
        Raw::Number(x) => x,
        Raw::Bool(_) => return None,
    };
    value.is_finite().then_some(value)
}

/// Bounds are inclusive; an unset bound doesn't constrain.
fn check_range(param: &str, spec: &ParamSpec, value: f64) -> Result<()> {
    let below = spec.min.is_some_and(|min| value < min);
    let above = spec.max.is_some_and(|max| value > max);

    if below || above {
        return Err(ConfigError::Range {
            param: param.to_owned(),
            value,
            min: spec.min,
            max: spec.max,
        });
    }
    Ok(())
}

/// Human readable form of a declared type, e.g. `int | None`.
pub(crate) fn expected(spec: &ParamSpec) -> String {
    match spec.ty.descriptor() {
        TypeDescriptor::Tag(tag) => tag,
        TypeDescriptor::Union(members) => members.join(" | "),
    }
}

fn invalid_type(param: &str, spec: &ParamSpec, raw: &Raw) -> ConfigError {
    type_mismatch(param, spec, raw.to_string())
}

fn type_mismatch(param: &str, spec: &ParamSpec, got: String) -> ConfigError {
    ConfigError::InvalidType {
        param: param.to_owned(),
        expected: expected(spec),
        got,
    }
}

fn invalid_option(param: &str, spec: &ParamSpec, value: String) -> ConfigError {
    let mut options: Vec<String> = spec.choices().into_iter().map(str::to_owned).collect();
    if spec.ty.includes_int() {
        options.push("<int>".to_owned());
    }
    options.push("null".to_owned());

    ConfigError::InvalidOption {
        param: param.to_owned(),
        value,
        options,
    }
}

#[cfg(test)]
mod tests {
    use schema::{Literal, Member};

    use super::*;

    const MAX_ITER: ParamSpec = ParamSpec::int(100).min(1.0);
    const L1_RATIO: ParamSpec = ParamSpec::float(0.5).range(0.0, 1.0);
    const GAMMA: ParamSpec = ParamSpec::string("scale").options(&["scale", "auto"]);
    const RANDOM_STATE: ParamSpec =
        ParamSpec::union(&[Member::Int, Member::None], Literal::Null).min(0.0);
    const PENALTY: ParamSpec = ParamSpec::union(
        &[Member::Literal("l1"), Member::Literal("l2"), Member::None],
        Literal::Str("l2"),
    );

    #[test]
    fn test_int_parses_text_and_integral_numbers() {
        assert_eq!(coerce("max_iter", &MAX_ITER, &" 250 ".into()).unwrap(), Value::Int(250));
        assert_eq!(coerce("max_iter", &MAX_ITER, &Raw::Number(3.0)).unwrap(), Value::Int(3));
    }

    #[test]
    fn test_int_rejects_numbers_outside_i64() {
        for x in [1e19, -1e19, I64_BOUND, f64::INFINITY, f64::NAN] {
            let err = coerce("max_iter", &MAX_ITER, &Raw::Number(x)).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidType { .. }), "{x}");
        }
        assert!(matches!(
            coerce("random_state", &RANDOM_STATE, &Raw::Number(1e19)),
            Err(ConfigError::InvalidOption { .. })
        ));
        assert!(matches!(
            coerce("max_iter", &MAX_ITER, &Raw::Number(-I64_BOUND)),
            Err(ConfigError::Range { .. })
        ));
    }

    #[test]
    fn test_int_keeps_full_precision() {
        let big = 9_007_199_254_740_993_i64;
        assert_eq!(coerce("max_iter", &MAX_ITER, &big.into()).unwrap(), Value::Int(big));

        let raw = Raw::from_json(&serde_json::json!(big)).unwrap();
        assert_eq!(coerce("max_iter", &MAX_ITER, &raw).unwrap(), Value::Int(big));
        assert_eq!(
            coerce("max_iter", &MAX_ITER, &"9007199254740993".into()).unwrap(),
            Value::Int(big)
        );
    }

    #[test]
    fn test_int_rejects_fractions_and_words() {
        for raw in [Raw::from("2.5"), Raw::from("many"), Raw::Number(2.5), Raw::Bool(true)] {
            let err = coerce("max_iter", &MAX_ITER, &raw).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidType { .. }), "{raw}");
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(coerce("max_iter", &MAX_ITER, &"1".into()).unwrap(), Value::Int(1));
        assert!(matches!(
            coerce("max_iter", &MAX_ITER, &"0".into()),
            Err(ConfigError::Range { .. })
        ));

        assert_eq!(coerce("l1_ratio", &L1_RATIO, &"0".into()).unwrap(), Value::Float(0.0));
        assert_eq!(coerce("l1_ratio", &L1_RATIO, &"1".into()).unwrap(), Value::Float(1.0));
        assert!(matches!(
            coerce("l1_ratio", &L1_RATIO, &"1.0001".into()),
            Err(ConfigError::Range { .. })
        ));
    }

    #[test]
    fn test_unset_bounds_do_not_constrain() {
        let binarize = ParamSpec::float(0.0);
        assert_eq!(
            coerce("binarize", &binarize, &"-12.5".into()).unwrap(),
            Value::Float(-12.5)
        );
    }

    #[test]
    fn test_float_rejects_non_finite() {
        for text in ["inf", "NaN", "-infinity"] {
            assert!(matches!(
                coerce("l1_ratio", &L1_RATIO, &text.into()),
                Err(ConfigError::InvalidType { .. })
            ));
        }
    }

    #[test]
    fn test_bool_accepts_literals_and_keywords() {
        let spec = ParamSpec::boolean(true);
        assert_eq!(coerce("b", &spec, &"true".into()).unwrap(), Value::Bool(true));
        assert_eq!(coerce("b", &spec, &"false".into()).unwrap(), Value::Bool(false));
        assert_eq!(coerce("b", &spec, &true.into()).unwrap(), Value::Bool(true));
        assert_eq!(coerce("b", &spec, &false.into()).unwrap(), Value::Bool(false));

        for raw in [Raw::from("True"), Raw::from("yes"), Raw::from(""), Raw::Number(1.0)] {
            assert!(matches!(
                coerce("b", &spec, &raw),
                Err(ConfigError::InvalidType { .. })
            ));
        }
    }

    #[test]
    fn test_options_accept_members_and_null() {
        assert_eq!(coerce("gamma", &GAMMA, &"auto".into()).unwrap(), Value::from("auto"));
        assert_eq!(coerce("gamma", &GAMMA, &"null".into()).unwrap(), Value::Null);

        let err = coerce("gamma", &GAMMA, &"bogus".into()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { .. }));
        assert_eq!(err.param(), Some("gamma"));
    }

    #[test]
    fn test_union_with_int_accepts_integers() {
        assert_eq!(
            coerce("random_state", &RANDOM_STATE, &"42".into()).unwrap(),
            Value::Int(42)
        );
        assert_eq!(
            coerce("random_state", &RANDOM_STATE, &Raw::Number(7.0)).unwrap(),
            Value::Int(7)
        );
        assert_eq!(
            coerce("random_state", &RANDOM_STATE, &"null".into()).unwrap(),
            Value::Null
        );
        assert!(matches!(
            coerce("random_state", &RANDOM_STATE, &"abc".into()),
            Err(ConfigError::InvalidOption { .. })
        ));
        assert!(matches!(
            coerce("random_state", &RANDOM_STATE, &"-1".into()),
            Err(ConfigError::Range { .. })
        ));
    }

    #[test]
    fn test_null_does_not_need_a_none_member() {
        let criterion = ParamSpec::union(
            &[Member::Literal("gini"), Member::Literal("entropy")],
            Literal::Str("gini"),
        );
        assert_eq!(coerce("criterion", &criterion, &"null".into()).unwrap(), Value::Null);
        assert!(check("criterion", &criterion, &Value::Null).is_ok());
    }

    #[test]
    fn test_type_tags_are_not_literal_choices() {
        assert!(coerce("random_state", &RANDOM_STATE, &"int".into()).is_err());
        assert!(coerce("penalty", &PENALTY, &"None".into()).is_err());
        assert_eq!(coerce("penalty", &PENALTY, &"l1".into()).unwrap(), Value::from("l1"));
    }

    #[test]
    fn test_str_requires_text() {
        let spec = ParamSpec::string("");
        assert_eq!(coerce("name", &spec, &"abc".into()).unwrap(), Value::from("abc"));
        assert!(matches!(
            coerce("name", &spec, &Raw::Bool(false)),
            Err(ConfigError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_array_is_never_coerced() {
        let err = coerce("layers", &ParamSpec::array(), &"[]".into()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidType { .. }));
    }

    #[test]
    fn test_check_typed_values() {
        assert!(check("C", &ParamSpec::float(1.0).min(0.0), &Value::Int(2)).is_ok());
        assert!(check("C", &ParamSpec::float(1.0).min(0.0), &Value::Float(-1.0)).is_err());
        assert!(check("penalty", &PENALTY, &Value::Null).is_ok());
        assert!(check("penalty", &PENALTY, &Value::from("l3")).is_err());
        assert!(check("random_state", &RANDOM_STATE, &Value::Int(3)).is_ok());
        assert!(check("max_iter", &MAX_ITER, &Value::Null).is_err());
        assert!(check("max_iter", &MAX_ITER, &Value::Float(3.0)).is_err());
        assert!(check("layers", &ParamSpec::array(), &Value::Layers(Vec::new())).is_ok());
    }

    #[test]
    fn test_raw_from_json_scalars() {
        assert_eq!(Raw::from_json(&serde_json::json!("x")), Some(Raw::from("x")));
        assert_eq!(Raw::from_json(&serde_json::json!(3)), Some(Raw::Int(3)));
        assert_eq!(Raw::from_json(&serde_json::json!(2.5)), Some(Raw::Number(2.5)));
        assert_eq!(Raw::from_json(&serde_json::json!(false)), Some(Raw::Bool(false)));
        assert_eq!(Raw::from_json(&serde_json::json!(null)), None);
        assert_eq!(Raw::from_json(&serde_json::json!([1])), None);
    }
}
