use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    Encode(String),
    Decode(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Encode(msg) => {
                write!(f, "failed to encode state snapshot: {}", msg)
            }
            SnapshotError::Decode(msg) => {
                write!(f, "failed to decode state snapshot: {}", msg)
            }
        }
    }
}

impl std::error::Error for SnapshotError {}
