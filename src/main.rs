use clap::Parser;
use toolshop_e2e::cli::commands::{cmd_list, cmd_run};
use toolshop_e2e::cli::config::{Cli, Commands, load_config, resolve_config};
use toolshop_e2e::cli::logging::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // CLI > config > env > defaults
    let config = resolve_config(&cli, load_config(cli.config.as_deref()));

    match &cli.command {
        Commands::Run { scenarios, .. } => {
            let all_passed = cmd_run(&config, scenarios)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::List => print!("{}", cmd_list()),
    }

    Ok(())
}
