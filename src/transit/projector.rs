use crate::gtfs::StopTime;
use crate::matcher::{MatchError, PathMatcher};
use crate::path::{MatchedPosition, QueryPoint};
use crate::transit::Subgraph;

/// The query for a trip: its stops in schedule order, tagged with
/// their stop sequence, between sentinels at either end of the subgraph.
fn query(subgraph: &Subgraph, stop_times: &[StopTime]) -> Vec<QueryPoint> {
    let sentinel = |node| {
        subgraph
            .network
            .get_position(&node)
            .map(QueryPoint::sentinel)
    };

    sentinel(subgraph.start)
        .into_iter()
        .chain(
            stop_times
                .iter()
                .map(|stop_time| QueryPoint::new(stop_time.seq, stop_time.stop.position)),
        )
        .chain(sentinel(subgraph.end))
        .collect()
}

/// Drops the matches of the sentinels, leaving one match per placed stop.
fn strip_sentinels(mut matches: Vec<MatchedPosition>) -> Vec<MatchedPosition> {
    if matches.last().is_some_and(|last| last.seq.is_none()) {
        matches.pop();
    }

    if matches.first().is_some_and(|first| first.seq.is_none()) {
        matches.remove(0);
        for position in &mut matches {
            position.prev = position.prev.and_then(|prev| prev.checked_sub(1));
        }
    }

    if let Some(first) = matches.first_mut() {
        first.prev = None;
    }

    matches
}

/// Matches the stops of a trip onto its subgraph.
///
/// Errors of the search are returned unchanged.
pub fn project_stops<M: PathMatcher>(
    matcher: &M,
    subgraph: &Subgraph,
    stop_times: &[StopTime],
) -> Result<Vec<MatchedPosition>, MatchError> {
    let query = query(subgraph, stop_times);
    let matches = matcher.match_path(&query, &subgraph.network)?;

    Ok(strip_sentinels(matches))
}
