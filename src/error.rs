use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum RenderError {
    /// The requested template has no vector layout program. Callers are expected to
    /// fall back to another export path; nothing is substituted here.
    #[error("vector export is not supported for template {0:?}")]
    UnsupportedTemplate(String),

    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse an embedded font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// A resume or theme could not be read from JSON
    Json(#[from] serde_json::Error),

    /// A colour string was not of the form `#rrggbb`
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColour(String),

    /// The page order refers to a page that is no longer in the document
    #[error("page missing from the document")]
    PageMissing,

    /// An object was written before its reference was allocated
    #[error("no PDF object reference allocated for {0}")]
    MissingReference(String),
}
