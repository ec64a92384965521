//! Estoque BOSS BLANC launcher
//!
//! A short-lived interactive launcher: prepares the console (UTF-8 output,
//! window title, banner), resolves the configured working directory, checks
//! that the application entry point is present there, and hands off to an
//! external runner (`streamlit run <target>` by default). When the target is
//! missing it reports the exact file and directory to the operator, waits
//! for acknowledgment, and exits non-zero.
//!
//! The launched application itself is an opaque external collaborator; this
//! crate only sets up the environment and starts it.

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod launcher;
pub mod runner;
