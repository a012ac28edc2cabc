use shuttle_core::format::OutputFormat;
use shuttle_core::graph::Metric;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse route metric from string
pub fn parse_metric(s: &str) -> std::result::Result<Metric, String> {
    s.parse::<Metric>()
}
