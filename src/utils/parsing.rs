use regex::Regex;
use std::collections::BTreeMap;

use crate::models::value::AnyValue;

lazy_static::lazy_static! {
    static ref OPTION_PAIR_REGEX: Regex =
        Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_-]*)\s*=\s*(.*?)\s*$").unwrap();
}

/// Turn one raw token typed at the console into a typed value.
pub fn parse_value(raw: &str) -> AnyValue {
    let token = raw.trim();

    if let Ok(n) = token.parse::<i64>() {
        return AnyValue::Integer(n);
    }
    // Rust also accepts "inf" and "NaN" here; those stay text.
    if let Ok(n) = token.parse::<f64>() {
        if n.is_finite() {
            return AnyValue::Decimal(n);
        }
    }
    match token {
        "true" => return AnyValue::Bool(true),
        "false" => return AnyValue::Bool(false),
        _ => {}
    }
    if token.starts_with('{') || token.starts_with('[') {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(token) {
            return json.into();
        }
    }
    if let Some(options) = parse_options(token) {
        return AnyValue::Map(options);
    }

    AnyValue::Text(token.to_string())
}

pub fn parse_values<S: AsRef<str>>(raw: &[S]) -> Vec<AnyValue> {
    raw.iter().map(|token| parse_value(token.as_ref())).collect()
}

/// `milk=oat,size=large` style modifiers. Every comma separated part must
/// be a `key=value` pair, otherwise the token is not an option list.
fn parse_options(token: &str) -> Option<BTreeMap<String, AnyValue>> {
    if !token.contains('=') {
        return None;
    }

    let mut options = BTreeMap::new();
    for part in token.split(',') {
        let captures = OPTION_PAIR_REGEX.captures(part)?;
        options.insert(
            captures[1].to_string(),
            AnyValue::Text(captures[2].to_string()),
        );
    }
    Some(options)
}
