use super::*;

fn parse(name: &str, src: &str) -> (Group, Vec<Issue>) {
    let body: Value = serde_yml::from_str(src).expect("valid yaml");
    let mut issues = Vec::new();
    let group = Group::parse(name, Some(&body), &mut issues);
    (group, issues)
}

fn keys(set: &PackageSet) -> Vec<&str> {
    set.keys().collect()
}

#[test]
fn test_missing_body_gives_empty_group() {
    let mut issues = Vec::new();
    let group = Group::parse("empty", None, &mut issues);

    assert_eq!(group, Group::empty("empty"));
    assert!(issues.is_empty());
}

#[test]
fn test_null_body_gives_empty_group() {
    let (group, issues) = parse("empty", "~");
    assert_eq!(group, Group::empty("empty"));
    assert!(issues.is_empty());
}

#[test]
fn test_fields_are_deduplicated_and_sorted() {
    let (group, issues) = parse(
        "dev",
        "taps: [homebrew/cask-fonts]\nbrews: [wget, git, git]\ncasks: [iterm2]\nmas_apps:\n  - Xcode: {id: 497799835}\n",
    );

    assert!(issues.is_empty());
    assert_eq!(keys(&group.taps), vec!["homebrew/cask-fonts"]);
    assert_eq!(keys(&group.brews), vec!["git", "wget"]);
    assert_eq!(keys(&group.casks), vec!["iterm2"]);
    assert_eq!(keys(&group.mas_apps), vec!["Xcode"]);
    assert!(group.privileged.is_none());
}

#[test]
fn test_privileged_subset_is_parsed() {
    let (group, _) = parse("sec", "privileged:\n  casks: [wireshark]\n");

    let privileged = group.privileged.expect("privileged present");
    assert_eq!(keys(&privileged.casks), vec!["wireshark"]);
    assert!(privileged.brews.is_empty());
    assert!(group.casks.is_empty());
}

#[test]
fn test_empty_privileged_stays_absent() {
    let (group, issues) = parse("sec", "privileged: {}\n");
    assert!(group.privileged.is_none());
    assert!(issues.is_empty());

    let (group, _) = parse("sec", "privileged:\n");
    assert!(group.privileged.is_none());
}

#[test]
fn test_malformed_entries_are_dropped_and_reported() {
    let (group, issues) = parse("dev", "brews:\n  - git\n  - ~\n  - {a: 1, b: 2}\n");

    assert_eq!(keys(&group.brews), vec!["git"]);
    assert_eq!(issues.len(), 2);
    assert!(matches!(issues[0], Issue::MalformedEntry { .. }));
}

#[test]
fn test_wrong_field_shape_is_reported() {
    let (group, issues) = parse("dev", "brews: git\n");

    assert!(group.brews.is_empty());
    assert_eq!(
        issues,
        vec![Issue::MalformedField {
            context: "group 'dev' brews".to_string(),
            detail: "must be a sequence, got string".to_string(),
        }]
    );
}

#[test]
fn test_unsupported_option_is_reported() {
    let (group, issues) = parse("db", "brews:\n  - postgresql: {restart_service: true}\n");

    assert_eq!(keys(&group.brews), vec!["postgresql"]);
    assert_eq!(
        issues,
        vec![Issue::UnsupportedOption {
            context: "group 'db' brews".to_string(),
            package: "postgresql".to_string(),
            option: "restart_service".to_string(),
        }]
    );
}

#[test]
fn test_display_summary() {
    let (group, _) = parse("dev", "brews: [git]\nprivileged: {casks: [wireshark]}\n");
    assert_eq!(
        group.to_string(),
        "Group: dev, taps: 0, brews: 1, casks: 0, mas: 0 (Privileged: brews: 0, casks: 1, mas: 0)"
    );
}
