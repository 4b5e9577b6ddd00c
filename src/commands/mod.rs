use crate::error::Result;
use crate::SharedText;
use std::fmt::Debug;

pub mod append;
pub mod case;
pub mod delete;
pub mod group;
pub mod title;

pub use append::AppendLetterCommand;
pub use case::{CapitalizeAtCommand, LowerCaseAtCommand};
pub use delete::{DeleteFromEndCommand, DeleteFromStartCommand};
pub use group::{Inverse, Step};
pub use title::TitleCaseCommand;

pub type BoxedCommand = Box<dyn Command>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::AppendLetterCommand {}
    impl Sealed for super::DeleteFromStartCommand {}
    impl Sealed for super::DeleteFromEndCommand {}
    impl Sealed for super::CapitalizeAtCommand {}
    impl Sealed for super::LowerCaseAtCommand {}
    impl Sealed for super::TitleCaseCommand {}
}

/// A reversible mutation of the shared text.
///
/// The set of commands is closed: only the six text commands in this module
/// implement it.
pub trait Command: Debug + sealed::Sealed {
    /// Short identifier used in logs and history listings.
    fn name(&self) -> &'static str;

    /// Performs the mutation. Validates before touching `text`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the command does not fit the current text
    fn apply(&self, text: &mut SharedText) -> Result<()>;

    /// Describes how to get back to the text as it was before `apply`,
    /// given the text as it is now.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a follow-up command cannot be built from `text`
    fn invert(&self, text: &SharedText) -> Result<Inverse>;
}
