//! Slide number selections such as `1-3,7,9-11`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

/// Largest slide number a selection accepts.
pub const MAX_SLIDE_NUMBER: usize = 10_000;

/// A set of 1-based slide numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideSelection(BTreeSet<usize>);

impl SlideSelection {
    /// Parses comma-separated numbers and inclusive ranges. Invalid
    /// fragments are skipped with a warning.
    pub fn parse(input: &str) -> Self {
        let mut slides = BTreeSet::new();
        for fragment in input.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            match parse_fragment(fragment) {
                Some((start, end)) => slides.extend(start..=end),
                None => warn!(fragment, "ignoring invalid slide selection"),
            }
        }
        Self(slides)
    }

    pub fn contains(&self, slide: usize) -> bool {
        self.0.contains(&slide)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for SlideSelection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|&n| n > 0).collect())
    }
}

fn parse_fragment(fragment: &str) -> Option<(usize, usize)> {
    let (start, end) = match fragment.split_once('-') {
        Some((start, end)) => (start.trim().parse().ok()?, end.trim().parse().ok()?),
        None => {
            let n = fragment.parse().ok()?;
            (n, n)
        }
    };
    (start >= 1 && start <= end && end <= MAX_SLIDE_NUMBER).then_some((start, end))
}
