use cairn_core::properties::{interpolate, load_env_file};
use std::collections::BTreeMap;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_env_file_with_key_value_comments_blank_lines() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        "# comment line\n\
         NDK=28.2.13676358\n\
         \n\
         REPO_URL=https://maven.example.com\n\
         KEY3  =  value3\n"
    )
    .unwrap();
    tmp.flush().unwrap();

    let env = load_env_file(tmp.path()).unwrap();
    assert_eq!(env.get("NDK"), Some(&"28.2.13676358".to_string()));
    assert_eq!(
        env.get("REPO_URL"),
        Some(&"https://maven.example.com".to_string())
    );
    assert_eq!(env.get("KEY3"), Some(&"value3".to_string()));
    assert_eq!(env.len(), 3);
}

#[test]
fn load_env_file_nonexistent_path_returns_empty_map() {
    let env = load_env_file(std::path::Path::new("/nonexistent/path/.cairn.env")).unwrap();
    assert!(env.is_empty());
}

#[test]
fn interpolate_prefers_overrides() {
    let mut overrides = BTreeMap::new();
    overrides.insert("HOME".to_string(), "/custom/home".to_string());
    assert_eq!(
        interpolate("path=${env:HOME}/file", &overrides),
        "path=/custom/home/file"
    );
}

#[test]
fn interpolate_unset_variable_becomes_empty() {
    let overrides = BTreeMap::new();
    assert_eq!(
        interpolate("a${env:CAIRN_SURELY_UNSET_VAR_42}b", &overrides),
        "ab"
    );
}

#[test]
fn interpolate_does_not_rescan_substituted_values() {
    let mut overrides = BTreeMap::new();
    overrides.insert("A".to_string(), "${env:A}".to_string());
    assert_eq!(interpolate("x=${env:A}", &overrides), "x=${env:A}");
}

#[test]
fn interpolate_unterminated_reference_is_kept() {
    let overrides = BTreeMap::new();
    assert_eq!(interpolate("x=${env:A", &overrides), "x=${env:A");
}
