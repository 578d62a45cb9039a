use clap::Parser;
use site_testgen::cli::commands::{cmd_analyze, cmd_repo};
use site_testgen::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Analyze {
            target,
            format,
            output,
        } => {
            // CLI > config file > defaults
            let format = format.unwrap_or_else(|| config.report.format.clone());
            let output = output.or_else(|| config.report.output.clone());
            cmd_analyze(&target, &format, output.as_deref(), cli.verbose, &config)?;
        }
        Commands::Repo {
            url,
            format,
            output,
            max_files,
        } => {
            let format = format.unwrap_or_else(|| config.report.format.clone());
            let output = output.or_else(|| config.report.output.clone());
            let max_files = max_files.unwrap_or(config.repo.max_files);
            cmd_repo(
                &url,
                &format,
                output.as_deref(),
                max_files,
                cli.verbose,
                &config,
            )?;
        }
    }

    Ok(())
}
