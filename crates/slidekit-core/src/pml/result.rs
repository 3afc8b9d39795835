use super::shapes::ShapeSummary;
use super::text::UNTITLED;
use super::transition::NO_TRANSITION;
use crate::animation::describe::NO_ANIMATIONS;
use crate::animation::{AnimationDetail, RawEffect};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Animation facet of one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideAnimationRecord {
    pub slide_number: usize,
    pub title: String,
    pub animations: Vec<RawEffect>,
    pub animation_details: Vec<AnimationDetail>,
    pub animation_summary: String,
    pub shapes: IndexMap<String, ShapeSummary>,
    pub transition: String,
    /// Number of entries in `animation_details`.
    pub animation_count: usize,
    pub has_animations: bool,
    pub layout_animations: bool,
    pub master_animations: bool,
    pub direct_animations: bool,
}

impl SlideAnimationRecord {
    /// Record for a slide that could not be read.
    pub fn empty(slide_number: usize) -> Self {
        Self {
            slide_number,
            title: UNTITLED.to_string(),
            animations: Vec::new(),
            animation_details: Vec::new(),
            animation_summary: NO_ANIMATIONS.to_string(),
            shapes: IndexMap::new(),
            transition: NO_TRANSITION.to_string(),
            animation_count: 0,
            has_animations: false,
            layout_animations: false,
            master_animations: false,
            direct_animations: false,
        }
    }
}

/// Unified per-slide record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    pub number: usize,
    pub title: String,
    pub text: String,
    pub notes: String,
    pub animation_sequence: Option<SlideAnimationRecord>,
    pub image_path: Option<String>,
}

impl SlideContent {
    pub fn empty(number: usize) -> Self {
        Self {
            number,
            title: UNTITLED.to_string(),
            text: String::new(),
            notes: String::new(),
            animation_sequence: None,
            image_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationContent {
    /// Slides in the presentation, selected or not.
    pub slide_count: usize,
    pub slides: Vec<SlideContent>,
}

impl PresentationContent {
    /// Animation records keyed `slide_<n>`, in slide order.
    pub fn animation_records(&self) -> IndexMap<String, SlideAnimationRecord> {
        self.slides
            .iter()
            .filter_map(|slide| {
                slide
                    .animation_sequence
                    .clone()
                    .map(|record| (format!("slide_{}", slide.number), record))
            })
            .collect()
    }
}
