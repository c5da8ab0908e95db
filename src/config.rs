use std::path::PathBuf;

use serde::Serialize;

use crate::{Distance, Error, Result, Vertex};

/// How the reporting binary prints a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Distance: <d>\t[<path>]`
    Text,
    Json,
}

/// Settings for a single shortest-path report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub graph_path: PathBuf,
    pub from: Vertex,
    pub to: Vertex,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from("graphs/square.txt"),
            from: 0,
            to: 2,
            format: OutputFormat::Text,
        }
    }
}

const USAGE: &str = "usage: shortest_path <graph-file> <from> <to> [--json]";

impl ReportConfig {
    /// Parses `<graph-file> <from> <to> [--json]`, program name excluded.
    ///
    /// Missing positional arguments keep their defaults.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut positional = 0;

        for arg in args {
            if arg == "--json" {
                config.format = OutputFormat::Json;
                continue;
            }
            match positional {
                0 => config.graph_path = PathBuf::from(&arg),
                1 => config.from = parse_vertex(&arg)?,
                2 => config.to = parse_vertex(&arg)?,
                _ => return Err(Error::Config(format!("unexpected argument '{}'; {}", arg, USAGE))),
            }
            positional += 1;
        }

        Ok(config)
    }
}

fn parse_vertex(arg: &str) -> Result<Vertex> {
    arg.parse()
        .map_err(|_| Error::Config(format!("'{}' is not a vertex index; {}", arg, USAGE)))
}

/// A rendered report line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub distance: Distance,
    pub path: Vec<Vertex>,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(format!("Distance: {}\t{:?}", self.distance, self.path)),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}
