use std::process::ExitCode;

use clap::Parser;

use covid_graph::server;
use covid_graph_configuration::ServerOptions;

#[tokio::main]
pub async fn main() -> ExitCode {
    env_logger::init();
    let options = ServerOptions::parse();
    match server::run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
