use crate::config::{PostInstall, TemplateConfig};
use crate::name::ProjectName;

/// Next-step instructions printed after a successful run, one line each.
pub fn next_steps(config: &TemplateConfig, name: &ProjectName) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Ok, you are ready to roll:".to_string(),
        format!("$ cd {}", config.directory_name(name)),
    ];

    if config.post_install == PostInstall::ManualInstruction {
        lines.push(format!("$ {}", config.install_display()));
    }
    if !config.run_command.is_empty() {
        lines.push(format!("$ {}", config.run_command));
    }

    if let Some(entry) = &config.entry_point {
        lines.push(String::new());
        lines.push(format!("Then edit {}", config.map_relative_path(entry, name).display()));
    }

    lines.push(String::new());
    lines
}
