//! Terminal front-end for the EPF customer request tracker.
//!
//! The view-models in [`views`] and the editors in [`forms`] hold all the
//! client-side behaviour and are driven by the `epf-desk` binary through
//! [`cli`].

pub mod cli;
pub mod forms;
pub mod prompt;
pub mod render;
pub mod views;

pub use cli::{execute, run, Cli, Command};
pub use prompt::{LinePrompt, PasswordPrompt};
