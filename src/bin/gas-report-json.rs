use std::process::ExitCode;

use clap::Parser;

use gas_report::{generate, Mode, Options};

/// Compare gas usage of the map implementations from a `forge test --json` run.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    options: Options,
}

#[tokio::main]
async fn main() -> ExitCode {
    human_panic::setup_panic!();
    env_logger::init();

    let args = Args::parse();

    match generate(Mode::Json, &args.options).await {
        Ok(table) => {
            println!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
