pub mod selection;
pub mod strings;

pub use selection::SlideSelection;
pub use strings::{single_line, truncate_preview};
