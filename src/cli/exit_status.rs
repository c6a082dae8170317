use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and every requested translation succeeded
/// - `Failure` (1): Command completed but some translations failed
/// - `Error` (2): Command aborted (malformed catalog, missing configuration, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but some (key, language) pairs failed.
    Failure,
    /// Command aborted before completing.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
