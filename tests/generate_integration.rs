//! Library-level generation over a realistic document.

use brewgen::commands::generate::{self, GenerateOptions};
use brewgen::render::HEADER;
use std::fs;

const DOCUMENT: &str = r#"
configurations:
  main: [base, dev, security]
  work: [base, work]
  minimal: [base, missing]

groups:
  base:
    taps:
      - homebrew/cask-fonts
      - homebrew/cask-fonts
    brews:
      - zsh
      - git
      - wget
    casks:
      - iterm2
  dev:
    brews:
      - git
      - node
      - mysql:
          restart_service: changed
          link: 1
          args: [with-test]
      - postgresql:
          restart_service: true
  security:
    privileged:
      brews: [openssh]
      casks: [wireshark]
  work:
    casks: [slack, zoom]
    mas_apps:
      - Keynote:
          id: 409183694
"#;

fn generate_all() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("brew.yml"), DOCUMENT).unwrap();
    generate::run(&GenerateOptions::new(dir.path())).unwrap();
    dir
}

fn body(content: &str) -> &str {
    content.strip_prefix(HEADER).unwrap()
}

#[test]
fn main_manifest_matches_expected_text() {
    let dir = generate_all();
    let content = fs::read_to_string(dir.path().join("Brewfile")).unwrap();

    let expected = concat!(
        "# Taps:\n",
        "tap 'homebrew/cask-fonts'\n",
        "\n",
        "# Privileged Brews:\n",
        "brew 'openssh'\n",
        "\n",
        "# Privileged Casks:\n",
        "cask 'wireshark'\n",
        "\n",
        "# Brews:\n",
        "brew 'git'\n",
        "brew 'mysql', restart_service: 'changed', link: 1, args: ['with-test']\n",
        "brew 'node'\n",
        "brew 'postgresql', \n",
        "brew 'wget'\n",
        "brew 'zsh'\n",
        "\n",
        "# Casks:\n",
        "cask 'iterm2'\n",
        "\n",
    );
    assert_eq!(body(&content), expected);
}

#[test]
fn work_manifest_has_mas_section() {
    let dir = generate_all();
    let content = fs::read_to_string(dir.path().join("work.Brewfile")).unwrap();

    assert!(content.contains("# Casks:\ncask 'iterm2'\ncask 'slack'\ncask 'zoom'\n\n"));
    assert!(content.ends_with("# Mac App Store:\nmas 'Keynote', id: 409183694\n\n"));
    assert!(!content.contains("Privileged"));
}

#[test]
fn dangling_group_is_skipped() {
    let dir = generate_all();
    let content = fs::read_to_string(dir.path().join("minimal.Brewfile")).unwrap();

    assert!(content.contains("brew 'zsh'"));
    assert!(!content.contains("# Mac App Store:"));
}

#[test]
fn privileged_packages_stay_out_of_regular_sections() {
    let dir = generate_all();
    let content = fs::read_to_string(dir.path().join("Brewfile")).unwrap();

    let casks = content.split("# Casks:\n").nth(1).unwrap();
    assert!(!casks.contains("wireshark"));
    assert_eq!(content.matches("openssh").count(), 1);
}

#[test]
fn repeated_generation_is_byte_identical() {
    let first = generate_all();
    let second = generate_all();

    for name in ["Brewfile", "work.Brewfile", "minimal.Brewfile"] {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap()
        );
    }
}
