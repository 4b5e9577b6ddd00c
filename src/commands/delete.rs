use super::{AppendLetterCommand, Command, Inverse};
use crate::error::{Error, Result};
use crate::SharedText;

/// Removes the first letter. The letter is captured when the command is
/// built, since it cannot be recovered once deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFromStartCommand {
    letter: String,
}

impl DeleteFromStartCommand {
    /// # Errors
    ///
    /// Will return `Err` if `text` is empty
    pub fn new(text: &SharedText) -> Result<Self> {
        let letter = text.first().ok_or(Error::EmptyString)?;
        Ok(DeleteFromStartCommand {
            letter: letter.to_string(),
        })
    }

    pub fn letter(&self) -> &str {
        &self.letter
    }
}

impl Command for DeleteFromStartCommand {
    fn name(&self) -> &'static str {
        "delete_from_start"
    }

    fn apply(&self, text: &mut SharedText) -> Result<()> {
        text.remove_first()?;
        Ok(())
    }

    // Appending to the reversed text puts the letter back at the front.
    fn invert(&self, _text: &SharedText) -> Result<Inverse> {
        let mut inverse = Inverse::new();
        inverse.reverse();
        inverse.record(AppendLetterCommand::new(&self.letter)?);
        inverse.reverse();
        Ok(inverse)
    }
}

/// Removes the last letter, captured at construction like
/// [`DeleteFromStartCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFromEndCommand {
    letter: String,
}

impl DeleteFromEndCommand {
    /// # Errors
    ///
    /// Will return `Err` if `text` is empty
    pub fn new(text: &SharedText) -> Result<Self> {
        let letter = text.last().ok_or(Error::EmptyString)?;
        Ok(DeleteFromEndCommand {
            letter: letter.to_string(),
        })
    }

    pub fn letter(&self) -> &str {
        &self.letter
    }
}

impl Command for DeleteFromEndCommand {
    fn name(&self) -> &'static str {
        "delete_from_end"
    }

    fn apply(&self, text: &mut SharedText) -> Result<()> {
        text.remove_last()?;
        Ok(())
    }

    fn invert(&self, _text: &SharedText) -> Result<Inverse> {
        Ok(Inverse::from_command(AppendLetterCommand::new(&self.letter)?))
    }
}
