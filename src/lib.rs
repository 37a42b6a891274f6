pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod resolver;
pub mod ui;

pub use domain::{BumpKind, Version};
pub use error::{NextVersionError, Result};
pub use resolver::{resolve, ResolutionResult, VersionResolver};
