use super::*;
use crate::core::types::PackageEntry;

fn group(name: &str, brews: &[&str]) -> Group {
    let mut g = Group::empty(name);
    g.brews = brews.iter().map(|b| PackageEntry::name(*b)).collect();
    g
}

fn keys(set: &PackageSet) -> Vec<String> {
    set.keys().map(str::to_string).collect()
}

#[test]
fn test_file_name_for_main() {
    let config = Configuration::new("main".to_string(), vec![], vec![]);
    assert_eq!(config.file_name(), "Brewfile");
}

#[test]
fn test_file_name_for_other_names() {
    let config = Configuration::new("work".to_string(), vec![], vec![]);
    assert_eq!(config.file_name(), "work.Brewfile");

    let config = Configuration::new("Main".to_string(), vec![], vec![]);
    assert_eq!(config.file_name(), "Main.Brewfile");
}

#[test]
fn test_brews_are_merged_across_groups() {
    let dev = group("dev", &["git", "wget"]);
    let ops = group("ops", &["awscli", "git"]);
    let config = Configuration::new(
        "main".to_string(),
        vec!["dev".to_string(), "ops".to_string()],
        vec![Some(&dev), Some(&ops)],
    );

    assert_eq!(keys(&config.brews()), vec!["awscli", "git", "wget"]);
}

#[test]
fn test_dangling_group_contributes_nothing() {
    let dev = group("dev", &["git"]);
    let config = Configuration::new(
        "main".to_string(),
        vec!["dev".to_string(), "ghost".to_string()],
        vec![Some(&dev), None],
    );

    assert_eq!(keys(&config.brews()), vec!["git"]);
    assert_eq!(config.dangling_groups().collect::<Vec<_>>(), vec!["ghost"]);
}

#[test]
fn test_privileged_accessors_skip_groups_without_subset() {
    let plain = group("plain", &["git"]);
    let mut sec = Group::empty("sec");
    sec.privileged = Some(Privileged {
        casks: vec![PackageEntry::name("wireshark")].into_iter().collect(),
        ..Privileged::default()
    });

    let config = Configuration::new(
        "main".to_string(),
        vec!["plain".to_string(), "sec".to_string()],
        vec![Some(&plain), Some(&sec)],
    );

    assert_eq!(keys(&config.privileged_casks()), vec!["wireshark"]);
    assert!(config.casks().is_empty());
    assert!(config.privileged_brews().is_empty());
    assert!(!config.brews().keys().any(|k| k == "wireshark"));
}

#[test]
fn test_display_counts_referenced_names() {
    let config = Configuration::new(
        "work".to_string(),
        vec!["a".to_string(), "b".to_string()],
        vec![None, None],
    );
    assert_eq!(config.to_string(), "Configuration: work, groups: 2");
}
