use crate::Slot;

/// Errors raised while reading or writing colors in a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("{slot} runs past the end of a {len}-byte buffer")]
    OutOfBounds { slot: Slot, len: usize },
}
