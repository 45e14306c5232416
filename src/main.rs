//! soxfx CLI
//!
//! Command-line interface for rendering and running SoX effect chains.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use soxfx::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("soxfx v{}", env!("CARGO_PKG_VERSION"));

    handle_command(cli.command)
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match cmd {
        Commands::Effects => commands::list_effects(&mut stdout)?,
        Commands::Render { chain, json } => commands::render(&chain, json, &mut stdout)
            .with_context(|| format!("rendering {}", chain.display()))?,
        Commands::Command {
            chain,
            inputs,
            output,
        } => commands::print_command(&chain, &inputs, output.as_deref(), &mut stdout)
            .with_context(|| format!("building command for {}", chain.display()))?,
        Commands::Run {
            chain,
            inputs,
            output,
        } => {
            if let Err(err) = commands::run(&chain, &inputs, output.as_deref()) {
                for suggestion in err.recovery_suggestions() {
                    eprintln!("hint: {}", suggestion);
                }
                return Err(err).with_context(|| format!("running {}", chain.display()));
            }
        }
    }
    Ok(())
}
