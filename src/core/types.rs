use serde_yml::Value;
use std::fmt;

/// One installable unit as written in the YAML document.
///
/// Entries are decoded leniently: anything that is neither a plain
/// identifier nor a single-key mapping becomes `Malformed` and is later
/// filtered out by [`crate::core::package_set::unique_sort`].
#[derive(Debug, Clone, PartialEq)]
pub enum PackageEntry {
    /// `- git`
    Name(String),

    /// `- postgresql: { restart_service: changed }`
    Parameterized {
        name: String,
        options: Vec<(String, OptionValue)>,
    },

    /// Shape that carries no usable package name
    Malformed { detail: String },
}

/// Value of one install option on a parameterized entry.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Text(String),
    Integer(i128),
    List(Vec<String>),
    /// Booleans, floats, null, nested maps. Never rendered.
    Unsupported { kind: &'static str },
}

impl PackageEntry {
    pub fn name<S: Into<String>>(name: S) -> Self {
        Self::Name(name.into())
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Name(s.clone()),
            Value::Number(n) => Self::Name(n.to_string()),
            Value::Mapping(map) => {
                if map.len() != 1 {
                    return Self::Malformed {
                        detail: format!("mapping with {} keys (expected exactly 1)", map.len()),
                    };
                }
                let Some((key, options)) = map.iter().next() else {
                    return Self::Malformed {
                        detail: "empty mapping".to_string(),
                    };
                };
                let Some(name) = scalar_text(key) else {
                    return Self::Malformed {
                        detail: format!("package name must be a string, got {}", kind_of(key)),
                    };
                };
                Self::Parameterized {
                    name,
                    options: decode_options(options),
                }
            }
            other => Self::Malformed {
                detail: format!("unexpected {}", kind_of(other)),
            },
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Names of options whose value type cannot be rendered.
    pub fn unsupported_options(&self) -> Vec<&str> {
        match self {
            Self::Parameterized { options, .. } => options
                .iter()
                .filter(|(_, v)| matches!(v, OptionValue::Unsupported { .. }))
                .map(|(k, _)| k.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl OptionValue {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => {
                let integer = n.as_i64().map(i128::from);
                match integer.or_else(|| n.as_u64().map(i128::from)) {
                    Some(i) => Self::Integer(i),
                    None => Self::Unsupported { kind: "float" },
                }
            }
            Value::Sequence(items) => items
                .iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .map(Self::List)
                .unwrap_or(Self::Unsupported {
                    kind: "sequence of non-scalars",
                }),
            other => Self::Unsupported {
                kind: kind_of(other),
            },
        }
    }
}

impl fmt::Display for PackageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) | Self::Parameterized { name, .. } => write!(f, "{}", name),
            Self::Malformed { detail } => write!(f, "<malformed: {}>", detail),
        }
    }
}

fn decode_options(value: &Value) -> Vec<(String, OptionValue)> {
    let Value::Mapping(map) = value else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(k, v)| scalar_text(k).map(|key| (key, OptionValue::from_value(v))))
        .collect()
}

/// Strings and numbers, in their textual form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
