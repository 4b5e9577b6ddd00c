use super::{Command, DeleteFromEndCommand, Inverse};
use crate::error::{Error, Result};
use crate::SharedText;
use unicode_segmentation::UnicodeSegmentation;

/// Appends one letter to the end of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendLetterCommand {
    letter: String,
}

impl AppendLetterCommand {
    /// # Errors
    ///
    /// Will return `Err` if `letter` is not exactly one grapheme
    pub fn new(letter: &str) -> Result<Self> {
        if letter.graphemes(true).count() != 1 {
            return Err(Error::InvalidLetter(letter.to_string()));
        }
        Ok(AppendLetterCommand {
            letter: letter.to_string(),
        })
    }

    pub fn letter(&self) -> &str {
        &self.letter
    }
}

impl From<char> for AppendLetterCommand {
    fn from(letter: char) -> Self {
        AppendLetterCommand {
            letter: letter.to_string(),
        }
    }
}

impl Command for AppendLetterCommand {
    fn name(&self) -> &'static str {
        "append_letter"
    }

    fn apply(&self, text: &mut SharedText) -> Result<()> {
        text.push_letter(&self.letter)
    }

    fn invert(&self, text: &SharedText) -> Result<Inverse> {
        Ok(Inverse::from_command(DeleteFromEndCommand::new(text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_end() {
        let mut text = SharedText::from("cat");
        AppendLetterCommand::from('s').apply(&mut text).unwrap();
        assert_eq!(text.as_str(), "cats");
    }

    #[test]
    fn rejects_more_than_one_letter() {
        assert_eq!(
            AppendLetterCommand::new("ab"),
            Err(Error::InvalidLetter("ab".to_string()))
        );
        assert!(AppendLetterCommand::new("").is_err());
        assert!(AppendLetterCommand::new("e\u{301}").is_ok());
    }

    #[test]
    fn letter_joining_previous_one_is_rejected() {
        let mut text = SharedText::from("cafe");
        let accent = AppendLetterCommand::new("\u{301}").unwrap();
        assert_eq!(
            accent.apply(&mut text),
            Err(Error::InvalidLetter("\u{301}".to_string()))
        );
        assert_eq!(text.as_str(), "cafe");
    }

    #[test]
    fn inverse_deletes_from_end() {
        let text = SharedText::from("cats");
        let inverse = AppendLetterCommand::from('s').invert(&text).unwrap();
        assert_eq!(inverse.describe(), vec!["delete_from_end"]);
    }
}
