use crate::path::MatchedPosition;

use itertools::Itertools;
use std::ops::Range;

/// The contiguous run of a matched path that stops are placed along.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Indices of the run within the path.
    pub range: Range<usize>,
    /// Links entered within the run.
    pub links: usize,
    /// Links entered across every run of the path.
    pub total_links: usize,
}

impl Segment {
    /// Share of the path's links which lie within the run, as a percentage.
    pub fn link_share(&self) -> f64 {
        match self.total_links {
            0 => 0.0,
            total => 100.0 * self.links as f64 / total as f64,
        }
    }
}

/// Index ranges of the contiguous runs of `positions`.
fn runs(positions: &[MatchedPosition]) -> impl Iterator<Item = Range<usize>> + '_ {
    positions
        .iter()
        .enumerate()
        .filter(|(index, position)| *index == 0 || position.restart)
        .map(|(index, _)| index)
        .chain(std::iter::once(positions.len()))
        .tuple_windows()
        .map(|(start, end)| start..end)
}

/// The first position of a run stands for its own link, every later
/// one for the links it entered.
fn links_within(run: &[MatchedPosition]) -> usize {
    match run.split_first() {
        Some((_, rest)) => 1 + rest.iter().map(|p| p.route_info.len()).sum::<usize>(),
        None => 0,
    }
}

/// Selects the run of `positions` which covers the greatest distance.
///
/// Runs are delimited by the start of the path and by every position
/// flagged `restart`. Only a strictly greater span replaces the best run
/// found so far, so ties keep the earliest. Returns `None` when the path
/// is empty or no run covers any distance.
pub fn select_segment(positions: &[MatchedPosition]) -> Option<Segment> {
    let mut best: Option<(Range<usize>, usize)> = None;
    let mut best_span = 0.0;
    let mut total_links = 0;

    for run in runs(positions) {
        let slice = &positions[run.clone()];
        let links = links_within(slice);
        total_links += links;

        let span = match (slice.first(), slice.last()) {
            (Some(first), Some(last)) => last.total_dist - first.total_dist,
            _ => continue,
        };

        if span > best_span {
            best_span = span;
            best = Some((run, links));
        }
    }

    best.map(|(range, links)| Segment {
        range,
        links,
        total_links,
    })
}
