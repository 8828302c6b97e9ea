use std::path::Path;

use anyhow::{Context, Result};

use create_sitefox::config::PostInstall;
use create_sitefox::name::ProjectName;
use create_sitefox::templates::Template;
use create_sitefox::{guidance, install, instantiate};

pub fn run(name: &str, variant: &str, no_install: bool) -> Result<()> {
    let name = ProjectName::new(name)?;
    let mut template = Template::bundled(variant)?;

    let config = &mut template.config;
    config.install_command = install::resolve_command(&config.install_command);
    if no_install && config.post_install == PostInstall::Inline {
        config.post_install = PostInstall::ManualInstruction;
    }

    println!("Creating {name}");
    let generated = instantiate(&template, &name, Path::new("."))?;

    if template.config.post_install == PostInstall::Inline {
        let command = template.config.install_display();
        println!("Running {command}");
        install::run(&template.config.install_command, &generated.root).with_context(|| {
            format!("{} was created but `{command}` did not finish", generated.root.display())
        })?;
    }

    for line in guidance::next_steps(&template.config, &name) {
        println!("{line}");
    }

    Ok(())
}
