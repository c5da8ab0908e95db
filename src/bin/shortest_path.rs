use std::env;
use std::process::ExitCode;

use lazy_dijkstra::config::{Report, ReportConfig};
use lazy_dijkstra::graph::text;
use lazy_dijkstra::{Graph, Result};

fn run(config: &ReportConfig) -> Result<String> {
    let graph = text::from_file(&config.graph_path)?;
    let paths = graph.shortest_path_from(config.from)?;
    let report = Report {
        distance: paths.distance(config.to)?,
        path: paths.path_to(config.to)?,
    };
    report.render(config.format)
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let config = match ReportConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {}", config.graph_path.display(), err);
            ExitCode::FAILURE
        }
    }
}
