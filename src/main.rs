// --- Timetable recommender - command line entry point ---

use std::io::Read;
use std::process::ExitCode;

use log::{error, info};
use sugang::api_json::{RecommendInput, load_input, parse_json_input};
use sugang::{EngineConfig, recommend};
use tracing_subscriber::EnvFilter;

fn read_input(path: &str) -> sugang::Result<RecommendInput> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(parse_json_input(&raw)?);
    }
    load_input(path)
}

fn run(path: &str) -> sugang::Result<String> {
    let config = EngineConfig::from_env()?;
    info!("reading request from {}", if path == "-" { "stdin" } else { path });
    let input = read_input(path)?;
    let recommendation = recommend(&input, &config)?;
    Ok(serde_json::to_string_pretty(&recommendation)?)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: sugang <request.json | ->");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
