use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Text was measured or drawn on a surface before a font was configured on it.
    /// This is a bug in the caller: set a font before sizing or rendering labels
    #[error("no font is configured on the surface")]
    NoFont,

    /// A size, margin, or spacing was negative (or NaN)
    #[error("invalid {what}: {value} (must be non-negative)")]
    InvalidArgument { what: &'static str, value: f32 },

    /// A font id was used with a canvas whose font arena does not contain it
    #[error("font is not registered with this canvas")]
    UnknownFont,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}
