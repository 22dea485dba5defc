use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("branch name cannot be empty")]
    Empty,
    #[error("branch name cannot start with '-' or '/'")]
    InvalidStart,
    #[error("branch name cannot end with '/', '.' or '.lock'")]
    InvalidEnd,
    #[error("branch name contains invalid character '{character}'")]
    InvalidCharacter { character: char },
    #[error("branch name cannot contain '{sequence}'")]
    InvalidSequence { sequence: &'static str },
}

const FORBIDDEN_CHARACTERS: [char; 8] = [' ', '~', '^', ':', '?', '*', '[', '\\'];
const FORBIDDEN_SEQUENCES: [&str; 4] = ["..", "@{", "//", "/."];

/// Local subset of `git check-ref-format --branch`, so an obviously bad
/// name is rejected before any repository state changes.
pub fn validate_branch_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    if name == "@" || name.starts_with(['-', '/', '.']) {
        return Err(NameError::InvalidStart);
    }

    if name.ends_with('/') || name.ends_with('.') || name.ends_with(".lock") {
        return Err(NameError::InvalidEnd);
    }

    if let Some(character) = name
        .chars()
        .find(|character| character.is_control() || FORBIDDEN_CHARACTERS.contains(character))
    {
        return Err(NameError::InvalidCharacter { character });
    }

    if let Some(sequence) = FORBIDDEN_SEQUENCES
        .iter()
        .copied()
        .find(|sequence| name.contains(sequence))
    {
        return Err(NameError::InvalidSequence { sequence });
    }

    Ok(())
}
