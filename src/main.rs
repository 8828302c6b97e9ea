mod commands;

use anyhow::Result;
use clap::Parser;
use create_sitefox::templates::DEFAULT_VARIANT;

#[derive(Parser)]
#[command(name = "create-sitefox")]
#[command(version, about = "Scaffold a new Sitefox project")]
struct Cli {
    /// Project name, also the name of the generated directory
    #[arg(value_name = "APP-NAME")]
    name: Option<String>,

    /// Bundled template to use
    #[arg(short, long, default_value = DEFAULT_VARIANT)]
    template: String,

    /// List bundled templates
    #[arg(long, conflicts_with = "name")]
    list: bool,

    /// Print the install command instead of running it
    #[arg(long)]
    no_install: bool,
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    if cli.list {
        return commands::list::run();
    }

    match cli.name {
        Some(name) => commands::create::run(&name, &cli.template, cli.no_install),
        None => {
            let invoked = std::env::args().next().unwrap_or_else(|| "create-sitefox".to_string());
            println!("Usage: {invoked} APP-NAME");
            Ok(())
        }
    }
}
