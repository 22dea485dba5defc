use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushSkip {
    Declined,
    NoRemote,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbortReason {
    #[error("nothing to commit, working tree clean")]
    NothingToCommit,
    #[error("no commits found in the history")]
    NoCommits,
    #[error("no branches found")]
    NoBranches,
    #[error("selection canceled")]
    SelectionCanceled,
    #[error("could not read a commit identifier from '{0}'")]
    MalformedRecord(String),
    #[error("no message provided")]
    EmptyMessage,
    #[error("no branch name provided")]
    EmptyBranchName,
    #[error("{0}")]
    InvalidBranchName(String),
    #[error("only the most recent commit (HEAD) can be reworded; '{selected}' is older")]
    NotHeadCommit { selected: String },
    #[error("HEAD is detached; check out a branch before pushing")]
    DetachedHead,
    #[error("no remote configured")]
    NoRemote,
    #[error("{step} failed")]
    StepFailed { step: &'static str },
}

/// How an operation ended. Completed local mutations are never rolled back,
/// so `LocalOnly` and some `Aborted` outcomes leave changes behind. A revert
/// or rebase stopped on conflicts is abandoned rather than left in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    LocalOnly(PushSkip),
    Aborted(AbortReason),
}

impl Outcome {
    pub fn aborted(reason: AbortReason) -> Self {
        Self::Aborted(reason)
    }

    pub fn step_failed(step: &'static str) -> Self {
        Self::Aborted(AbortReason::StepFailed { step })
    }

    pub fn message(&self) -> String {
        match self {
            Self::Completed => "Done.".to_string(),
            Self::LocalOnly(PushSkip::Declined) => {
                "Changes kept locally; nothing was pushed.".to_string()
            }
            Self::LocalOnly(PushSkip::NoRemote) => {
                "No remote configured; changes kept locally and nothing was pushed.".to_string()
            }
            Self::Aborted(reason) => format!("Operation aborted: {reason}."),
        }
    }
}
