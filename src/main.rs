use apostas::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use apostas::adapter::inbound::cli::{check, config as config_cmd, list, output, place, session, show};
use apostas::config::Config;
use clap::Parser;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    // Logging settings come from the config file when it is readable;
    // a broken file still gets logging so `config validate` can explain.
    let logging_config = Config::load_or_default(&cli.config).unwrap_or_default();
    logging_config.init_logging();

    tokio::select! {
        result = run(&cli) => {
            if let Err(err) = result {
                output::error(&err.to_string());
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            // Dropping `run` aborts any in-flight request.
            info!("interrupted");
        }
    }
}

async fn run(cli: &Cli) -> apostas::error::Result<()> {
    match &cli.command {
        Commands::List(args) => list::execute(cli, args).await,
        Commands::Show(args) => show::execute(cli, args).await,
        Commands::Place(args) => place::execute(cli, args).await,
        Commands::Session => session::execute(cli),
        Commands::Check => check::execute(cli).await,
        Commands::Config(command) => match command {
            ConfigCommand::Init(args) => config_cmd::execute_init(&cli.config, args.force),
            ConfigCommand::Show => config_cmd::execute_show(cli),
            ConfigCommand::Validate => config_cmd::execute_validate(&cli.config),
        },
    }
}
