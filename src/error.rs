use thiserror::Error;

// ---------------------------------------------------------------------------
// User-facing fatal errors
// ---------------------------------------------------------------------------

/// The two fatal conditions reported on stdout before any window opens.
///
/// All underlying read failures (missing file, permission denied, I/O error)
/// are collapsed into [`FatalError::FileReadFailure`]; the detailed cause
/// only goes to the log.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("Error: specify a filename.")]
    MissingArgument,
    #[error("Error reading file - does it exist?")]
    FileReadFailure,
}

#[cfg(test)]
mod tests {
    use super::FatalError;

    #[test]
    fn messages_match_cli_contract() {
        assert_eq!(
            FatalError::MissingArgument.to_string(),
            "Error: specify a filename."
        );
        assert_eq!(
            FatalError::FileReadFailure.to_string(),
            "Error reading file - does it exist?"
        );
    }
}
