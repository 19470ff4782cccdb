use crate::core::issues::Issue;
use serde::Deserialize;
use serde_yml::{Mapping, Value};

/// Top level of `brew.yml` as deserialized.
///
/// Both keys may be absent or null. Bodies stay untyped so that malformed
/// package entries can be dropped one by one instead of failing the file.
#[derive(Debug, Default, Deserialize)]
pub struct DocumentFile {
    #[serde(default)]
    pub groups: Option<Mapping>,

    #[serde(default)]
    pub configurations: Option<Mapping>,
}

/// Document in source order, ready for [`crate::core::resolver::Root::build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    /// `group name -> body`, body `None` when null
    pub groups: Vec<(String, Option<Value>)>,

    /// `configuration name -> referenced group names`
    pub configurations: Vec<(String, Vec<String>)>,

    /// Shape problems found while flattening the file
    pub issues: Vec<Issue>,
}
