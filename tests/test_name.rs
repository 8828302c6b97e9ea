use create_sitefox::ScaffoldError;
use create_sitefox::name::*;

#[test]
fn test_verbatim_keeps_hyphens() {
    let name = ProjectName::new("my-app").unwrap();
    assert_eq!(name.verbatim(), "my-app");
    assert_eq!(name.to_string(), "my-app");
}

#[test]
fn test_normalized_replaces_every_hyphen() {
    let name = ProjectName::new("my-cool-app").unwrap();
    assert_eq!(name.normalized(), "my_cool_app");
}

#[test]
fn test_normalized_without_hyphens_is_unchanged() {
    assert_eq!(ProjectName::new("blog").unwrap().normalized(), "blog");
}

#[test]
fn test_empty_name_rejected() {
    assert!(matches!(ProjectName::new(""), Err(ScaffoldError::InvalidName { .. })));
}

#[test]
fn test_dot_names_rejected() {
    assert!(ProjectName::new(".").is_err());
    assert!(ProjectName::new("..").is_err());
}

#[test]
fn test_path_separators_rejected() {
    assert!(ProjectName::new("a/b").is_err());
    assert!(ProjectName::new("a\\b").is_err());
}
