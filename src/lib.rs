#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! Reversible text commands with undo and redo histories.
//!
//! ```
//! use reverso::{AppendLetterCommand, HistoryManager, SharedText};
//!
//! let mut manager = HistoryManager::new(SharedText::from("cat"));
//! manager.do_command(AppendLetterCommand::from('s'))?;
//! assert_eq!(manager.text().as_str(), "cats");
//! manager.undo()?;
//! assert_eq!(manager.text().as_str(), "cat");
//! manager.redo()?;
//! assert_eq!(manager.text().as_str(), "cats");
//! # Ok::<(), reverso::Error>(())
//! ```
pub mod commands;
pub mod config;
mod error;
mod history;
mod text;

pub use commands::{
    AppendLetterCommand, BoxedCommand, CapitalizeAtCommand, Command, DeleteFromEndCommand,
    DeleteFromStartCommand, Inverse, LowerCaseAtCommand, Step, TitleCaseCommand,
};
pub use config::{Config, ConfigError, RedoPolicy};
pub use error::{Error, HistoryKind, Result};
pub use history::HistoryManager;
pub use text::SharedText;
