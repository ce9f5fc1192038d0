use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Input or word contains a character that is not a letter
    #[error("Invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    /// No registered layout has this number of tiles
    #[error("No layout with {0} tiles")]
    UnknownLayout(usize),

    /// Number of letters does not match the number of tiles in the layout
    #[error("Invalid input length {found} (expect {expected})")]
    InvalidInputLength { expected: usize, found: usize },

    /// Number of layout cells does not match width times height
    #[error("Layout needs {expected} cells, found {found}")]
    InvalidLayoutSize { expected: usize, found: usize },

    /// Parsing a layout needs rows of equal length
    #[error("Invalid layout row \"{0}\": length {1}")]
    InvalidRowLength(String, usize),

    /// Error parsing layout cell
    #[error("Invalid layout cell: '{0}'")]
    InvalidLayoutCell(char),

    /// Layout has more cells than a path can hold
    #[error("Layout with {0} cells is too large (max 32)")]
    LayoutTooLarge(usize),

    /// Layout without playable cells
    #[error("Layout has no playable cells")]
    EmptyLayout,

    /// A search is active
    #[error("Solver is already running")]
    AlreadyRunning,

    /// Attempt to start a search before setting the board
    #[error("Solver has no board, call configure first")]
    NotConfigured,
}
