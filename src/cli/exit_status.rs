use std::process::ExitCode;

/// How a changelog run ended, as seen by the calling shell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// `CHANGELOG.md` was written.
    Success,
    /// The run aborted before writing; any previous changelog is untouched.
    Failure,
    /// The command line was invalid. Shares clap's usage-error code.
    Error,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
