mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ax_config::{Settings, TokenStore};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    // The only place the process decides to terminate and with what code.
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { global, command } = cli;

    // Completions need no settings and no store.
    if let Command::Completions { shell } = command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "ax", &mut std::io::stdout());
        return Ok(());
    }

    let settings = Settings::resolve(global.api_url.clone(), global.signup_url.clone())?;
    tracing::debug!(command = ?command, "dispatching command");

    match command {
        Command::Register => commands::auth::register(&settings, &global),

        Command::Init => {
            let store = TokenStore::open_default()?;
            commands::init::handle(&settings, &store, &global).await
        }

        Command::Login => {
            let store = TokenStore::open_default()?;
            commands::auth::login(&settings, &store, &global).await
        }

        Command::Site(cmd) => {
            let store = TokenStore::open_default()?;
            commands::sites::handle(cmd, &settings, &store, &global).await
        }

        Command::Settings { domain, config } => {
            let store = TokenStore::open_default()?;
            commands::settings::handle(domain, config, &settings, &store, &global).await
        }

        Command::Purge(cmd) => {
            let store = TokenStore::open_default()?;
            commands::purge::handle(cmd, &settings, &store, &global).await
        }

        // Handled before settings resolution.
        Command::Completions { .. } => Ok(()),
    }
}
