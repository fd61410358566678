use crate::output::OutputError;
use crate::transit::DiagnosticsCollector;

use geo::Point;
use serde::Serialize;
use std::io::Write;

pub const PROBLEM_REPORT: &str = "problem_report.csv";

#[derive(Serialize)]
struct ReportRow {
    shape_id: i64,
    stop_seq: u32,
    link_id: Option<i64>,
    dist: Option<f64>,
    ref_dist: Option<f64>,
    restart: bool,
    lon: f64,
    lat: f64,
}

/// Writes every diagnostic record, ordered by shape and stop sequence.
/// Stops without a match leave the link columns blank.
pub fn write_problem_report<W: Write>(
    writer: W,
    diagnostics: &DiagnosticsCollector,
) -> Result<usize, OutputError> {
    let mut writer = csv::Writer::from_writer(writer);

    for (shape_id, record) in diagnostics.records() {
        let Point(position) = record.position;
        writer.serialize(ReportRow {
            shape_id,
            stop_seq: record.seq,
            link_id: record.link(),
            dist: record.point_on_link.map(|point| point.dist),
            ref_dist: record.point_on_link.map(|point| point.ref_dist),
            restart: record.restart,
            lon: position.x,
            lat: position.y,
        })?;
    }

    writer.flush().map_err(|source| OutputError::Io {
        table: PROBLEM_REPORT.to_string(),
        source,
    })?;

    Ok(diagnostics.len())
}
