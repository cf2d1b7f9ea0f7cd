mod config;
mod main_lib;
mod report;
mod scheduler;

use anyhow::bail;
use config::Config;
use main_lib::init_tracing;

enum Command {
    Report,
    Watch,
}

fn parse_args() -> anyhow::Result<(Command, bool)> {
    let mut command = Command::Report;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "report" => command = Command::Report,
            "watch" => command = Command::Watch,
            "--json" => json = true,
            other => bail!("Unknown argument: {} (usage: finboard [report|watch] [--json])", other),
        }
    }
    Ok((command, json))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (command, json) = parse_args()?;
    let config = Config::from_env()?;
    init_tracing(config.json_logs);

    match command {
        Command::Report => {
            let report = report::load_report(&config, chrono::Utc::now())?;
            report::print_report(&report, &config, json)?;
        }
        Command::Watch => scheduler::run_watch(config, json).await?,
    }
    Ok(())
}
