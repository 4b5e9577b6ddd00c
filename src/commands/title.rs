use super::{Command, Inverse, LowerCaseAtCommand};
use crate::error::Result;
use crate::SharedText;

/// Title-cases the whole text.
///
/// The inverse only lowercases the first letter of every word. Interior
/// letters that title casing lowered keep their new case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TitleCaseCommand;

impl TitleCaseCommand {
    pub fn new() -> Self {
        TitleCaseCommand
    }
}

impl Command for TitleCaseCommand {
    fn name(&self) -> &'static str {
        "title_case"
    }

    fn apply(&self, text: &mut SharedText) -> Result<()> {
        text.title_case();
        Ok(())
    }

    fn invert(&self, text: &SharedText) -> Result<Inverse> {
        let mut inverse = Inverse::new();
        for index in text.word_starts() {
            inverse.record(LowerCaseAtCommand::new(index));
        }
        Ok(inverse)
    }
}
