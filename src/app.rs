//! Runs the stages of a linking run in order, from reading the inputs
//! through writing every table.

use crate::config::Config;
use crate::gtfs::GtfsReader;
use crate::network::Network;
use crate::output::{
    write_frequencies, write_period, write_problem_report, write_route_links, write_routes,
    write_stops, Header, OutputError, Table, TableWriter, PROBLEM_REPORT,
};
use crate::path::read_dump_file;
use crate::transit::StopLinker;
use crate::Result;

use log::info;
use measure_time::info_time;
use std::fs::File;
use std::io::BufWriter;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub trips: usize,
    pub linked: usize,
    pub route_links: usize,
    pub stops: usize,
}

pub fn run(config: &Config) -> Result<RunSummary> {
    info_time!("linked stops");

    info!("Reading network...");
    let network = Network::from_dir(&config.network_dir)?;

    let feed = GtfsReader::new(&config.gtfs_dir);
    info!("Reading GTFS shapes...");
    let mut shapes = feed.shapes()?;

    info!("Reading path-match results...");
    let paths = read_dump_file(&config.path_match_file, &shapes, &network)?;
    shapes.retain(|shape, _| paths.contains_key(shape));
    info!("{} shapes have matched paths", shapes.len());

    info!("Reading GTFS routes, stops, trips and stop times...");
    let routes = feed.routes()?;
    let stops = feed.stops()?;
    let trips = feed.trips(&routes, |shape| shapes.contains_key(shape), &config.services)?;
    let stop_times = feed.stop_times(&trips, &stops)?;

    let header = Header::new(&config.user, &config.network_name);
    let directory = config.output_dir.as_path();

    let mut routes_table = TableWriter::create(directory, Table::Route, &header)?;
    write_routes(&mut routes_table, &trips)?;
    routes_table.finish()?;

    let mut summary = RunSummary {
        trips: trips.len(),
        ..RunSummary::default()
    };

    let mut linker = StopLinker::new(&network, &paths, config.radius)
        .dwell_time(config.dwell_time)
        .diagnostics(config.problem_report);

    let mut links_table = TableWriter::create(directory, Table::RouteLink, &header)?;
    for trip in trips.values() {
        let calls = stop_times.get(&trip.id).map(Vec::as_slice).unwrap_or_default();

        if let Some(rows) = linker.link_trip(trip, calls)? {
            write_route_links(&mut links_table, &rows)?;
            summary.linked += 1;
        }
    }
    (summary.route_links, _) = links_table.finish()?;

    let (assignments, diagnostics) = linker.finish();

    let mut stops_table = TableWriter::create(directory, Table::Stop, &header)?;
    write_stops(&mut stops_table, &assignments, &stops)?;
    (summary.stops, _) = stops_table.finish()?;

    let mut frequency_table = TableWriter::create(directory, Table::Frequency, &header)?;
    write_frequencies(&mut frequency_table, &trips, &stop_times, config.reference_time)?;
    frequency_table.finish()?;

    let mut period_table = TableWriter::create(directory, Table::Period, &header)?;
    write_period(&mut period_table, config.end_time)?;
    period_table.finish()?;

    if let Some(diagnostics) = diagnostics {
        info!("Dumping {PROBLEM_REPORT}...");
        let file = File::create(directory.join(PROBLEM_REPORT)).map_err(|source| OutputError::Io {
            table: PROBLEM_REPORT.to_string(),
            source,
        })?;

        let records = write_problem_report(BufWriter::new(file), &diagnostics)?;
        info!("Reported {records} stop matches");
    }

    info!(
        "Linked {} of {} trips, placing {} stops",
        summary.linked, summary.trips, summary.stops
    );

    Ok(summary)
}
