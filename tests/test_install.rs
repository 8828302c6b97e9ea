use create_sitefox::ScaffoldError;
use create_sitefox::install::{self, INSTALL_ENV, resolve_command};
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn test_install_runs_in_project_directory() {
    let tmp = TempDir::new().unwrap();
    let command: Vec<String> = ["sh", "-c", "touch installed"].map(String::from).to_vec();

    install::run(&command, tmp.path()).unwrap();

    assert!(tmp.path().join("installed").is_file());
}

#[test]
fn test_install_missing_program() {
    let tmp = TempDir::new().unwrap();
    let command = vec!["definitely-not-a-real-installer-xyz".to_string()];

    let err = install::run(&command, tmp.path()).unwrap_err();
    assert!(matches!(err, ScaffoldError::InstallSpawn { .. }));
}

#[test]
fn test_install_empty_command() {
    let tmp = TempDir::new().unwrap();
    let err = install::run(&[], tmp.path()).unwrap_err();
    assert!(matches!(err, ScaffoldError::InstallSpawn { .. }));
}

#[test]
fn test_resolve_install_command_env_override() {
    let configured = vec!["npm".to_string(), "install".to_string()];

    // SAFETY: only this test touches this env var
    unsafe { std::env::remove_var(INSTALL_ENV) };
    assert_eq!(resolve_command(&configured), configured);

    unsafe { std::env::set_var(INSTALL_ENV, "pnpm install --frozen-lockfile") };
    assert_eq!(resolve_command(&configured), ["pnpm", "install", "--frozen-lockfile"]);

    unsafe { std::env::set_var(INSTALL_ENV, "   ") };
    assert_eq!(resolve_command(&configured), configured);

    unsafe { std::env::remove_var(INSTALL_ENV) };
}
