use std::fmt;

/// Errors that end a mining run. None of them are retried: the computation
/// is deterministic, so the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AprioriError {
    /// The transaction source could not be read.
    DataUnavailable { source: String, reason: String },
    /// Empty transaction collection, empty candidate or a threshold outside (0, 1].
    InvalidInput(String),
    /// A subset of a frequent itemset has no recorded support.
    InternalInvariantViolation(String),
}

impl fmt::Display for AprioriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUnavailable { source, reason } => {
                write!(f, "cannot read transactions from {source}: {reason}")
            }
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InternalInvariantViolation(msg) => {
                write!(f, "internal invariant violated: {msg}")
            }
        }
    }
}

impl std::error::Error for AprioriError {}

pub type Result<T> = std::result::Result<T, AprioriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_source() {
        let err = AprioriError::DataUnavailable {
            source: "Data/supermarket.csv".into(),
            reason: "No such file or directory".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot read transactions from Data/supermarket.csv: No such file or directory"
        );
    }
}
