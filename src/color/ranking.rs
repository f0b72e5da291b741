//! Frequency ranking and result materialization

use super::naming::name_for_rgb;
use super::quantize::{Bucket, Tally};
use crate::ExtractedColor;

/// Share of `count` in `total`, as a whole percent rounded half up
///
/// `total` is the number of visited pixels, transparent ones included, so
/// the percentages of an image with transparency do not add up to 100.
pub fn percentage(count: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let (count, total) = (count as u64, total as u64);
    ((200 * count + total) / (2 * total)).min(100) as u8
}

/// Order buckets by descending count and keep at most `max_colors`
///
/// The sort is stable: equal counts keep their first-encountered order.
pub fn top_buckets(mut buckets: Vec<Bucket>, max_colors: usize) -> Vec<Bucket> {
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(max_colors);
    buckets
}

/// Build the ranked palette from a tally
pub fn rank(tally: Tally, max_colors: usize) -> Vec<ExtractedColor> {
    let total = tally.sampled();

    top_buckets(tally.into_buckets(), max_colors)
        .into_iter()
        .map(|bucket| ExtractedColor {
            hex: bucket.color.to_hex(),
            rgb: bucket.color,
            name: name_for_rgb(bucket.color),
            percentage: percentage(bucket.count, total),
        })
        .collect()
}
