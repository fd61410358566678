use stoplink::gtfs::GtfsReader;
use stoplink::network::Network;
use stoplink::path::read_dump_file;
use stoplink::transit::StopLinker;
use stoplink_fixtures::{fixture_path, CORRIDOR_GTFS, CORRIDOR_NETWORK, CORRIDOR_PATH_MATCH};

use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::BTreeSet;

const RADII: [f64; 3] = [100.0, 400.0, 800.0];

fn link_benchmark(c: &mut Criterion) {
    let network = Network::from_dir(fixture_path(CORRIDOR_NETWORK)).expect("network must load");
    let feed = GtfsReader::new(fixture_path(CORRIDOR_GTFS));

    let shapes = feed.shapes().expect("shapes must load");
    let paths = read_dump_file(fixture_path(CORRIDOR_PATH_MATCH), &shapes, &network)
        .expect("dump must load");

    let routes = feed.routes().expect("routes must load");
    let stops = feed.stops().expect("stops must load");
    let trips = feed
        .trips(&routes, |shape| paths.contains_key(shape), &BTreeSet::new())
        .expect("trips must load");
    let stop_times = feed.stop_times(&trips, &stops).expect("stop times must load");

    let mut group = c.benchmark_group("route_links");
    group.significance_level(0.1).sample_size(30);

    RADII.into_iter().for_each(|radius| {
        group.bench_function(format!("link corridor: {radius}m"), |b| {
            b.iter(|| {
                let mut linker = StopLinker::new(&network, &paths, radius);
                for trip in trips.values() {
                    let calls = stop_times.get(&trip.id).map(Vec::as_slice).unwrap_or_default();
                    linker.link_trip(trip, calls).expect("search must succeed");
                }

                linker.finish()
            })
        });
    });

    group.finish();
}

criterion_group!(benches, link_benchmark);
criterion_main!(benches);
