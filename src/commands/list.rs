use anyhow::Result;

use create_sitefox::templates::{self, DEFAULT_VARIANT, Template};

pub fn run() -> Result<()> {
    for name in templates::variant_names() {
        let template = Template::bundled(&name)?;
        let marker = if name == DEFAULT_VARIANT { " (default)" } else { "" };
        println!("{name:<20} {}{marker}", template.config.description);
    }

    Ok(())
}
