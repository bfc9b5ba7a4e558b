use thiserror::Error;

/// Everything that can be wrong with a request, checked before we print a
/// single char. All of these are fatal. The messages carry the offending
/// value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid range: start U+{start:04X} is after end U+{end:04X}")]
    InvalidRange { start: u32, end: u32 },

    /// surrogates, and anything above 10FFFF
    #[error("invalid code point: U+{0:04X} is not a unicode scalar value")]
    InvalidCodePoint(u32),
}
