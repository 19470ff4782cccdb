//! Brewfile rendering
//!
//! A manifest is the fixed usage header followed by up to seven sections in
//! a fixed order. Empty sections are skipped entirely; every emitted section
//! is a `# Title` line, one line per entry and a blank line.

use crate::core::configuration::Configuration;
use crate::core::package_set::PackageSet;
use crate::core::types::{OptionValue, PackageEntry};

pub const HEADER: &str = r#"# to run:
# $ brew tap Homebrew/bundle
# $ brew bundle
# // or
# $ brew bundle --file=<name>.Brewfile
#
# Tip:
# $ sudo chmod -R +ai "group:admin allow list,add_file,search,delete,add_subdirectory,delete_child,readattr,writeattr,readextattr,writeextattr,readsecurity,writesecurity,chown,file_inherit,directory_inherit" /usr/local/*

"#;

/// Brewfile directive a section's lines start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Tap,
    Brew,
    Cask,
    Mas,
}

impl Directive {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::Brew => "brew",
            Self::Cask => "cask",
            Self::Mas => "mas",
        }
    }
}

/// One titled block of a manifest.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    pub directive: Directive,
    pub entries: PackageSet,
}

/// Sections of a configuration in output order.
pub fn sections(config: &Configuration<'_>) -> Vec<Section> {
    let section = |title, directive, entries| Section {
        title,
        directive,
        entries,
    };
    vec![
        section("Taps", Directive::Tap, config.taps()),
        section("Privileged Brews", Directive::Brew, config.privileged_brews()),
        section("Privileged Casks", Directive::Cask, config.privileged_casks()),
        section(
            "Privileged Mac App Store",
            Directive::Mas,
            config.privileged_mas_apps(),
        ),
        section("Brews", Directive::Brew, config.brews()),
        section("Casks", Directive::Cask, config.casks()),
        section("Mac App Store", Directive::Mas, config.mas_apps()),
    ]
}

/// Full manifest text for a configuration.
pub fn render_manifest(config: &Configuration<'_>) -> String {
    let mut out = String::from(HEADER);
    for section in sections(config) {
        out.push_str(&render_section(&section));
    }
    out
}

/// Empty string for a section without entries.
pub fn render_section(section: &Section) -> String {
    if section.entries.is_empty() {
        return String::new();
    }

    let mut out = format!("# {}:\n", section.title);
    for entry in &section.entries {
        if let Some(line) = render_line(section.directive, entry) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

pub fn render_line(directive: Directive, entry: &PackageEntry) -> Option<String> {
    brewfile_value(entry).map(|value| format!("{} {}", directive.keyword(), value))
}

/// Argument list of a Brewfile directive.
///
/// `'git'` for a plain name, `'mysql', restart_service: 'changed'` for a
/// parameterized entry. Options keep their document order and unsupported
/// option values are left out. A parameterized entry without renderable
/// options still ends in `", "`.
pub fn brewfile_value(entry: &PackageEntry) -> Option<String> {
    match entry {
        PackageEntry::Name(name) => Some(quote(name)),
        PackageEntry::Parameterized { name, options } => {
            let rendered: Vec<String> = options
                .iter()
                .filter_map(|(key, value)| {
                    option_value(value).map(|value| format!("{}: {}", key, value))
                })
                .collect();
            Some(format!("{}, {}", quote(name), rendered.join(", ")))
        }
        PackageEntry::Malformed { .. } => None,
    }
}

fn option_value(value: &OptionValue) -> Option<String> {
    match value {
        OptionValue::Text(text) => Some(quote(text)),
        OptionValue::Integer(number) => Some(number.to_string()),
        OptionValue::List(items) => {
            let items: Vec<String> = items.iter().map(|item| quote(item)).collect();
            Some(format!("[{}]", items.join(", ")))
        }
        OptionValue::Unsupported { .. } => None,
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value)
}
