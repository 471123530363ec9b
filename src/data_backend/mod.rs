use regex_lite::Regex;
use serde_json::Value;
use static_init::dynamic;

use crate::constants::WEIGHT_KEYS;

pub mod menu_actions;
pub mod menu_parser;

#[dynamic]
static DISALLOWED_CHARS: Regex =
    Regex::new("[^0-9A-Za-zÁÄČĎÉÍĹĽŇÓÔŔŠŤÚÝŽáäčďéíĺľňóôŕšťúýž\\s]").unwrap();

/// Roman-numeral formatting marker upstream embeds into dish names.
const NAME_NOISE_TOKEN: &str = "I.";

/// Strip the noise token and every character outside letters (incl. Slovak
/// diacritics), digits and whitespace, then trim. Non-string input yields
/// an empty string, which callers treat as "no usable name".
pub(crate) fn clean_dish_name(raw: Option<&Value>) -> String {
    let Some(name) = raw.and_then(Value::as_str) else {
        return String::new();
    };

    let name = name.replace(NAME_NOISE_TOKEN, "");
    DISALLOWED_CHARS.replace_all(&name, "").trim().to_string()
}

/// Dish weight, probed across the known key variants. Only key *presence*
/// is scanned: the first key holding a non-null value decides, and if that
/// value fails to convert the weight is 0 without trying further keys.
pub(crate) fn coerce_weight(row: &serde_json::Map<String, Value>) -> u32 {
    for key in WEIGHT_KEYS {
        let Some(value) = row.get(key) else { continue };
        if value.is_null() {
            continue;
        }

        return match value_as_f64(value) {
            Some(weight) if weight.is_finite() && weight > 0.0 => weight.trunc() as u32,
            _ => 0,
        };
    }

    0
}

/// Best-effort float view of a JSON value: numbers directly, strings
/// trimmed and parsed. Anything else is no value.
pub(crate) fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Whole-number view: numeric strings must be plain integers, fractional
/// numbers are truncated.
pub(crate) fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Loose truthiness as the upstream data uses it: null, false, 0, "" and
/// empty containers all count as "not set".
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dish_name_noise_and_punctuation_removed() {
        let raw = json!("Hovädzie I. mäso!!");
        let cleaned = clean_dish_name(Some(&raw));

        assert_eq!(cleaned, "Hovädzie  mäso");
        assert!(!cleaned.contains("I."));
        assert!(!cleaned.contains('!'));
    }

    #[test]
    fn dish_name_keeps_diacritics_and_digits() {
        let raw = json!("Šošovicová polievka 330g");
        assert_eq!(clean_dish_name(Some(&raw)), "Šošovicová polievka 330g");
    }

    #[test]
    fn dish_name_all_disallowed_is_empty() {
        let raw = json!("***!!??");
        assert_eq!(clean_dish_name(Some(&raw)), "");
    }

    #[test]
    fn dish_name_non_string_is_empty() {
        assert_eq!(clean_dish_name(Some(&json!(42))), "");
        assert_eq!(clean_dish_name(Some(&Value::Null)), "");
        assert_eq!(clean_dish_name(None), "");
    }

    #[test]
    fn weight_from_first_present_key() {
        let row = json!({"hmotnostiStr": "150.0"});
        assert_eq!(coerce_weight(row.as_object().unwrap()), 150);

        let row = json!({"hmotnost": 250});
        assert_eq!(coerce_weight(row.as_object().unwrap()), 250);
    }

    #[test]
    fn weight_conversion_failure_is_terminal() {
        // hmotnostiStr is present, so the valid fallback key is never tried
        let row = json!({"hmotnostiStr": "abc", "hmotnost": "200"});
        assert_eq!(coerce_weight(row.as_object().unwrap()), 0);
    }

    #[test]
    fn weight_null_value_skips_to_next_key() {
        let row = json!({"hmotnostiStr": null, "hmotnostStr": " 180 "});
        assert_eq!(coerce_weight(row.as_object().unwrap()), 180);
    }

    #[test]
    fn weight_missing_everywhere_is_zero() {
        let row = json!({"nazov": "polievka"});
        assert_eq!(coerce_weight(row.as_object().unwrap()), 0);
    }

    #[test]
    fn truthiness_follows_upstream_conventions() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("ano")));
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(!is_truthy(&Value::Null));
    }
}
