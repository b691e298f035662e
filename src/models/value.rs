use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A dynamically typed value as it arrives at the order aggregator.
///
/// Every caller-side value is converted into one of these variants before
/// classification. Values that have no natural variant (custom structs and
/// the like) are captured through their `Debug` rendering as `Opaque`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Map(BTreeMap<String, AnyValue>),
    Bool(bool),
    List(Vec<AnyValue>),
    Null,
    Opaque {
        type_name: &'static str,
        repr: String,
    },
}

impl AnyValue {
    /// Capture an arbitrary value by its type name and `Debug` output.
    pub fn opaque<T: fmt::Debug>(value: &T) -> Self {
        AnyValue::Opaque {
            type_name: std::any::type_name::<T>(),
            repr: format!("{:?}", value),
        }
    }

    /// Short name of the runtime type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            AnyValue::Text(_) => "string",
            AnyValue::Integer(_) => "integer",
            AnyValue::Decimal(_) => "decimal",
            AnyValue::Map(_) => "map",
            AnyValue::Bool(_) => "bool",
            AnyValue::List(_) => "list",
            AnyValue::Null => "null",
            AnyValue::Opaque { type_name, .. } => type_name,
        }
    }

    /// Numeric view of the value; `None` for anything that is not an
    /// integer or decimal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnyValue::Integer(n) => Some(*n as f64),
            AnyValue::Decimal(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Text(s) => write!(f, "{}", s),
            AnyValue::Integer(n) => write!(f, "{}", n),
            AnyValue::Decimal(n) => write!(f, "{}", n),
            AnyValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            AnyValue::Bool(b) => write!(f, "{}", b),
            AnyValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            AnyValue::Null => write!(f, "null"),
            AnyValue::Opaque { repr, .. } => write!(f, "{}", repr),
        }
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        AnyValue::Text(value.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        AnyValue::Text(value)
    }
}

macro_rules! integer_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AnyValue {
                fn from(value: $ty) -> Self {
                    AnyValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for AnyValue {
    fn from(value: f32) -> Self {
        AnyValue::Decimal(f64::from(value))
    }
}

impl From<f64> for AnyValue {
    fn from(value: f64) -> Self {
        AnyValue::Decimal(value)
    }
}

impl From<bool> for AnyValue {
    fn from(value: bool) -> Self {
        AnyValue::Bool(value)
    }
}

impl<T: Into<AnyValue>> From<Vec<T>> for AnyValue {
    fn from(values: Vec<T>) -> Self {
        AnyValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AnyValue>> From<Option<T>> for AnyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AnyValue::Null)
    }
}

impl<K: Into<String>, V: Into<AnyValue>> From<BTreeMap<K, V>> for AnyValue {
    fn from(map: BTreeMap<K, V>) -> Self {
        AnyValue::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<AnyValue>> From<HashMap<K, V>> for AnyValue {
    fn from(map: HashMap<K, V>) -> Self {
        AnyValue::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for AnyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => AnyValue::Null,
            Value::Bool(b) => AnyValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => AnyValue::Integer(i),
                None => AnyValue::Decimal(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => AnyValue::Text(s),
            Value::Array(items) => AnyValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                AnyValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct LoyaltyCard {
        stamps: u8,
    }

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(AnyValue::from("Latte"), AnyValue::Text("Latte".to_string()));
        assert_eq!(AnyValue::from(2), AnyValue::Integer(2));
        assert_eq!(AnyValue::from(5.5), AnyValue::Decimal(5.5));
        assert_eq!(AnyValue::from(None::<i32>), AnyValue::Null);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(AnyValue::from("20").type_name(), "string");
        assert_eq!(AnyValue::from(20).type_name(), "integer");
        assert_eq!(AnyValue::from(20.0).type_name(), "decimal");
        assert_eq!(AnyValue::from(true).type_name(), "bool");
    }

    #[test]
    fn test_opaque_keeps_type_and_debug_output() {
        let value = AnyValue::opaque(&LoyaltyCard { stamps: 3 });
        assert!(value.type_name().ends_with("LoyaltyCard"));
        assert_eq!(value.to_string(), "LoyaltyCard { stamps: 3 }");
    }

    #[test]
    fn test_map_display_is_sorted_by_key() {
        let mut options = HashMap::new();
        options.insert("size", "large");
        options.insert("milk", "oat");
        assert_eq!(AnyValue::from(options).to_string(), "{milk: oat, size: large}");
    }

    #[test]
    fn test_json_numbers_keep_integer_and_decimal_apart() {
        let value: serde_json::Value = serde_json::json!([2, 2.5, "x", null]);
        assert_eq!(
            AnyValue::from(value),
            AnyValue::List(vec![
                AnyValue::Integer(2),
                AnyValue::Decimal(2.5),
                AnyValue::Text("x".to_string()),
                AnyValue::Null,
            ])
        );
    }
}
