use clap::Parser;
use serenity_junit_exporter::cli::commands::cmd_export;
use serenity_junit_exporter::cli::config::{Cli, Settings, load_config};
use serenity_junit_exporter::logging::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    init_logging(cli.debug_flag().or(config.debug).unwrap_or(false));

    let settings = Settings::resolve(&cli, &config)?;
    let decision = cmd_export(&settings)?;

    // Without a threshold the process ends normally.
    if let Some(code) = decision.exit_code() {
        std::process::exit(code);
    }

    Ok(())
}
