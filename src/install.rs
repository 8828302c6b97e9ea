use std::path::Path;
use std::process::Command;

use log::info;

use crate::error::{Result, ScaffoldError};

/// Overrides the template's install command line, e.g. `pnpm install`.
pub const INSTALL_ENV: &str = "CREATE_SITEFOX_INSTALL";

pub fn resolve_command(configured: &[String]) -> Vec<String> {
    std::env::var(INSTALL_ENV)
        .ok()
        .map(|v| v.split_whitespace().map(String::from).collect::<Vec<_>>())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| configured.to_vec())
}

/// Run `command` in `cwd` with inherited stdio and wait for it.
pub fn run(command: &[String], cwd: &Path) -> Result<()> {
    let display = command.join(" ");
    let Some((program, args)) = command.split_first() else {
        return Err(ScaffoldError::InstallSpawn {
            command: display,
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty install command"),
        });
    };

    info!("running `{display}` in {}", cwd.display());
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|source| ScaffoldError::InstallSpawn { command: display.clone(), source })?;

    if !status.success() {
        return Err(ScaffoldError::InstallFailed { command: display, status });
    }

    Ok(())
}
