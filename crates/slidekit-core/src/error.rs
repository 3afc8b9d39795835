use thiserror::Error;

/// Failures that stop a whole extraction. Problems confined to one slide,
/// template part or effect are logged and replaced by defaults instead.
#[derive(Error, Debug)]
pub enum SlidekitError {
    #[error("not a usable presentation package: {message}")]
    InvalidPackage { message: String },

    #[error("{document_type} part '{part_path}' is missing")]
    MissingPart { part_path: String, document_type: String },

    #[error("malformed XML ({location}): {message}")]
    XmlParse { message: String, location: String },

    #[error("bad relationship: {message}")]
    InvalidRelationship { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, SlidekitError>;
