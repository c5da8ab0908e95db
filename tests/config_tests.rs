use std::path::PathBuf;

use lazy_dijkstra::config::{OutputFormat, Report, ReportConfig};
use lazy_dijkstra::Error;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_defaults() {
    let config = ReportConfig::from_args(Vec::new()).unwrap();
    assert_eq!(config, ReportConfig::default());
    assert_eq!(config.format, OutputFormat::Text);
}

#[test]
fn test_positional_arguments() {
    let config = ReportConfig::from_args(args(&["graphs/weighted.txt", "0", "3", "--json"])).unwrap();
    assert_eq!(config.graph_path, PathBuf::from("graphs/weighted.txt"));
    assert_eq!(config.from, 0);
    assert_eq!(config.to, 3);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_bad_arguments() {
    assert!(matches!(
        ReportConfig::from_args(args(&["g.txt", "-1", "3"])),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        ReportConfig::from_args(args(&["g.txt", "0", "3", "extra"])),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_report_rendering() {
    let report = Report {
        distance: 2,
        path: vec![0, 1, 2],
    };
    assert_eq!(report.render(OutputFormat::Text).unwrap(), "Distance: 2\t[0, 1, 2]");
    assert_eq!(
        report.render(OutputFormat::Json).unwrap(),
        r#"{"distance":2,"path":[0,1,2]}"#
    );
}
