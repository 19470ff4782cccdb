use super::*;
use crate::core::types::OptionValue;

#[test]
fn test_plain_name_is_its_own_key() {
    assert_eq!(identity_key(&PackageEntry::name("git")), Some("git"));
}

#[test]
fn test_parameterized_key_is_package_name() {
    let entry = PackageEntry::Parameterized {
        name: "mysql".to_string(),
        options: vec![("link".to_string(), OptionValue::Integer(1))],
    };
    assert_eq!(identity_key(&entry), Some("mysql"));
}

#[test]
fn test_malformed_has_no_key() {
    let entry = PackageEntry::Malformed {
        detail: "unexpected null".to_string(),
    };
    assert_eq!(identity_key(&entry), None);
}

#[test]
fn test_plain_and_parameterized_share_key() {
    let plain = PackageEntry::name("mysql");
    let param = PackageEntry::Parameterized {
        name: "mysql".to_string(),
        options: vec![],
    };
    assert_eq!(identity_key(&plain), identity_key(&param));
}
