mod document;
mod extractor;
mod result;
mod settings;
pub mod shapes;
pub mod text;
pub mod transition;

pub use document::{PmlDocument, SlideRef};
pub use extractor::PmlExtractor;
pub use result::{PresentationContent, SlideAnimationRecord, SlideContent};
pub use settings::ExtractorSettings;
pub use shapes::{ShapeKind, ShapeSummary};
