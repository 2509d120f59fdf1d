use crate::catalog::{BpmRange, GenreCatalog};
use crate::rng::{int_in_range, RandomStream};
use crate::types::{BpmRangeResult, BpmStyle};

pub const DEFAULT_BPM_PHRASE: &str = "between 90 and 120";

const DISJOINT_SPAN_RATIO: f64 = 0.5;

fn known_ranges(catalog: &GenreCatalog, genres: &str) -> Vec<BpmRange> {
    let mut seen: Vec<&str> = Vec::new();
    let mut ranges = Vec::new();
    for token in genres.split(|c: char| c.is_whitespace() || c == ',' || c == '-') {
        let token = token.trim_matches(|c: char| c == '"' || c == '\'');
        if token.is_empty() {
            continue;
        }
        let Some(genre) = catalog.genre(token) else {
            continue;
        };
        if seen.contains(&genre.id) {
            continue;
        }
        seen.push(genre.id);
        ranges.push(genre.bpm);
    }
    ranges
}

pub fn blend(catalog: &GenreCatalog, genres: &str) -> Option<BpmRangeResult> {
    let ranges = known_ranges(catalog, genres);
    match ranges.as_slice() {
        [] => None,
        [only] => Some(BpmRangeResult { min: only.min, max: only.max, is_intersection: true }),
        _ => Some(blend_ranges(&ranges)),
    }
}

fn blend_ranges(ranges: &[BpmRange]) -> BpmRangeResult {
    let low = ranges.iter().map(|range| range.min).max().unwrap_or(0);
    let high = ranges.iter().map(|range| range.max).min().unwrap_or(0);
    if low <= high {
        return BpmRangeResult { min: low, max: high, is_intersection: true };
    }

    let union_min = ranges.iter().map(|range| range.min).min().unwrap_or(0);
    let union_max = ranges.iter().map(|range| range.max).max().unwrap_or(0);
    let width = union_max - union_min;
    let midpoint = union_min + width / 2;
    let half = (width as f64 * DISJOINT_SPAN_RATIO / 2.0).round() as u16;

    let min = midpoint.saturating_sub(half).max(union_min + 1);
    let max = midpoint.saturating_add(half).min(union_max.saturating_sub(1));
    if min > max {
        return BpmRangeResult { min: midpoint, max: midpoint, is_intersection: false };
    }
    BpmRangeResult { min, max, is_intersection: false }
}

pub fn random_bpm(range: &BpmRangeResult, rng: &mut dyn RandomStream) -> u16 {
    int_in_range(rng, range.min as u32, range.max as u32) as u16
}

pub fn range_phrase(min: u16, max: u16) -> String {
    format!("between {min} and {max}")
}

/// Renders the tempo field. `None` falls back to [`DEFAULT_BPM_PHRASE`]
/// without touching the stream.
pub fn render_bpm(
    range: Option<&BpmRangeResult>,
    style: BpmStyle,
    rng: &mut dyn RandomStream,
) -> String {
    let Some(range) = range else {
        return DEFAULT_BPM_PHRASE.to_string();
    };
    if range.min == range.max {
        return range.min.to_string();
    }
    match style {
        BpmStyle::Exact => random_bpm(range, rng).to_string(),
        BpmStyle::Range => range_phrase(range.min, range.max),
    }
}

pub fn style_of(rendered: &str) -> BpmStyle {
    if rendered.trim().to_lowercase().starts_with("between") {
        BpmStyle::Range
    } else {
        BpmStyle::Exact
    }
}
