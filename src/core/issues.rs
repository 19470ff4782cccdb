//! Data-shape problems found while reading the document.
//!
//! None of these stop generation by default; `--strict` turns them into
//! errors and `--verbose` prints them as warnings.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A list item with no derivable package name
    MalformedEntry { context: String, detail: String },

    /// A field or body that has the wrong YAML shape
    MalformedField { context: String, detail: String },

    /// A configuration names a group that is not defined
    DanglingGroup { configuration: String, group: String },

    /// An option whose value type cannot be rendered
    UnsupportedOption {
        context: String,
        package: String,
        option: String,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEntry { context, detail } => {
                write!(f, "{}: dropped malformed entry ({})", context, detail)
            }
            Self::MalformedField { context, detail } => {
                write!(f, "{}: {}", context, detail)
            }
            Self::DanglingGroup {
                configuration,
                group,
            } => write!(
                f,
                "configuration '{}' references unknown group '{}'",
                configuration, group
            ),
            Self::UnsupportedOption {
                context,
                package,
                option,
            } => write!(
                f,
                "{}: option '{}' of '{}' has an unsupported value and is omitted",
                context, option, package
            ),
        }
    }
}
