//! Terminal front end for the task list.
//!
//! # Overview
//! `App` turns key presses into `Intent`s and local edits of the view model,
//! `ui` draws the view model, and `tui::run` ties both to a `TaskSync` backed
//! by `UreqTransport`. Only `tui::run` and the binary touch the terminal.

pub mod app;
pub mod config;
pub mod transport;
pub mod tui;
pub mod ui;

pub use app::{App, Focus};
pub use config::Config;
pub use transport::UreqTransport;
