pub mod command_runner;
pub mod config;
pub mod console;
pub mod doctor;
pub mod executor;
pub mod git;
pub mod names;
#[cfg(test)]
pub(crate) mod test_support;
pub mod workspace;
