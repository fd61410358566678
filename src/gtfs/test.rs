use crate::gtfs::{GtfsError, GtfsReader, GtfsTime, Route};

use chrono::NaiveTime;
use std::collections::BTreeSet;
use std::fs;

fn reference(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M:%S").expect("reference time must parse")
}

#[test]
fn parses_times_past_midnight() {
    let time = GtfsTime::parse("25:10:05").expect("time must parse");
    assert_eq!(time.total_seconds(), 25 * 3600 + 10 * 60 + 5);
    assert_eq!(time.to_string(), "25:10:05");

    assert!(matches!(
        GtfsTime::parse("7:61:00"),
        Err(GtfsError::InvalidTimeValue(_))
    ));
    assert!(matches!(
        GtfsTime::parse("07-00-00"),
        Err(GtfsError::InvalidTimeFormat(_))
    ));
}

#[test]
fn rejects_overflowing_hours() {
    assert!(matches!(
        GtfsTime::parse("9999999999999999:00:00"),
        Err(GtfsError::InvalidTimeValue(_))
    ));

    let largest = format!("{}:59:59", i64::MAX / 3600 - 1);
    assert!(GtfsTime::parse(&largest).is_ok());
}

#[test]
fn offset_wraps_into_next_day() {
    let reference = reference("06:00:00");

    assert_eq!(GtfsTime::parse("06:30:00").unwrap().offset_from(reference), 1800);
    assert_eq!(GtfsTime::parse("06:00:00").unwrap().offset_from(reference), 0);

    // Half an hour before the reference lands on the following day.
    assert_eq!(
        GtfsTime::parse("05:30:00").unwrap().offset_from(reference),
        86_400 - 1800
    );
}

#[test]
fn route_display_name() {
    let mut route = Route {
        id: "R1".to_string(),
        short_name: "801".to_string(),
        long_name: String::new(),
    };
    assert_eq!(route.display_name(), "801");

    route.long_name = "North Lamar".to_string();
    assert_eq!(route.display_name(), "801: North Lamar");
}

#[test]
fn reads_feed_tables() {
    let directory = tempfile::tempdir().expect("temporary directory");
    let write = |name: &str, contents: &str| {
        fs::write(directory.path().join(name), contents).expect("table must be written")
    };

    write(
        "routes.txt",
        "route_id,route_short_name,route_long_name,route_type\nR1,801,North Lamar,3\n",
    );
    write(
        "stops.txt",
        "stop_id,stop_name,stop_lat,stop_lon\n100,First,0.0,0.0005\n200,Second,0.0,0.0015\n",
    );
    write(
        "trips.txt",
        "route_id,service_id,trip_id,shape_id\nR1,WK,1,7\nR1,SA,2,7\nR1,WK,3,8\nR1,WK,4,\n",
    );
    write(
        "stop_times.txt",
        "trip_id,arrival_time,departure_time,stop_id,stop_sequence\n\
         1,06:05:00,06:05:00,200,2\n\
         1,06:00:00,06:00:00,100,1\n\
         2,07:00:00,07:00:00,100,1\n",
    );
    write(
        "shapes.txt",
        "shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence\n7,0.0,0.0,1\n7,0.0,0.002,2\n",
    );

    let reader = GtfsReader::new(directory.path());
    let shapes = reader.shapes().expect("shapes must read");
    assert_eq!(shapes[&7].points.len(), 2);

    let routes = reader.routes().expect("routes must read");
    let stops = reader.stops().expect("stops must read");
    assert_eq!(stops[&200].name, "Second");

    let services = BTreeSet::from(["WK".to_string()]);
    let trips = reader
        .trips(&routes, |shape| shapes.contains_key(shape), &services)
        .expect("trips must read");

    // Trip 2 runs on another service, trip 3 has no matched shape, trip 4 no shape at all.
    assert_eq!(trips.keys().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(trips[&1].route.display_name(), "801: North Lamar");

    let stop_times = reader.stop_times(&trips, &stops).expect("stop times must read");
    let calls = &stop_times[&1];
    assert_eq!(calls.iter().map(|c| c.seq).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(calls[0].stop.id, 100);
    assert_eq!(calls[0].time().map(|t| t.total_seconds()), Some(6 * 3600));
    assert!(!stop_times.contains_key(&2));
}
