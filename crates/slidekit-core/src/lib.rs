//! PresentationML content extraction.
//!
//! Reads a `.pptx` package and produces per-slide text, speaker notes and
//! a normalized, described animation timeline. See [`PmlExtractor`].

pub mod animation;
pub mod error;
pub mod package;
pub mod pml;
pub mod util;
pub mod xml;

pub use error::{Result, SlidekitError};

pub use animation::{AnimationEffect, EffectDuration, EffectType, LayoutAnimationIndex, StartCondition};
pub use pml::{
    ExtractorSettings, PmlDocument, PmlExtractor, PresentationContent, SlideAnimationRecord,
    SlideContent,
};
pub use util::SlideSelection;
