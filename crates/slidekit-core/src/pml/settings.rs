use crate::util::SlideSelection;
use serde::{Deserialize, Serialize};

/// Per-run extraction options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorSettings {
    /// Only these slides are processed; `None` or an empty selection means
    /// all.
    #[serde(default)]
    pub slides: Option<SlideSelection>,
    pub extract_notes: bool,
    pub extract_animations: bool,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            slides: None,
            extract_notes: true,
            extract_animations: true,
        }
    }
}

impl ExtractorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slides(mut self, slides: SlideSelection) -> Self {
        self.slides = Some(slides);
        self
    }

    pub fn includes(&self, slide_number: usize) -> bool {
        self.slides
            .as_ref()
            .filter(|s| !s.is_empty())
            .map(|s| s.contains(slide_number))
            .unwrap_or(true)
    }
}
