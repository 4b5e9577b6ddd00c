use super::{Command, Inverse};
use crate::error::Result;
use crate::SharedText;

/// Uppercases the letter at a grapheme index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapitalizeAtCommand {
    index: usize,
}

impl CapitalizeAtCommand {
    pub fn new(index: usize) -> Self {
        CapitalizeAtCommand { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Command for CapitalizeAtCommand {
    fn name(&self) -> &'static str {
        "capitalize_at"
    }

    fn apply(&self, text: &mut SharedText) -> Result<()> {
        text.uppercase_at(self.index)
    }

    fn invert(&self, _text: &SharedText) -> Result<Inverse> {
        Ok(Inverse::from_command(LowerCaseAtCommand::new(self.index)))
    }
}

/// Lowercases the letter at a grapheme index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowerCaseAtCommand {
    index: usize,
}

impl LowerCaseAtCommand {
    pub fn new(index: usize) -> Self {
        LowerCaseAtCommand { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Command for LowerCaseAtCommand {
    fn name(&self) -> &'static str {
        "lower_case_at"
    }

    fn apply(&self, text: &mut SharedText) -> Result<()> {
        text.lowercase_at(self.index)
    }

    fn invert(&self, _text: &SharedText) -> Result<Inverse> {
        Ok(Inverse::from_command(CapitalizeAtCommand::new(self.index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn capitalize_then_lower_restores() {
        let mut text = SharedText::from("Cat");
        CapitalizeAtCommand::new(1).apply(&mut text).unwrap();
        assert_eq!(text.as_str(), "CAt");
        LowerCaseAtCommand::new(1).apply(&mut text).unwrap();
        assert_eq!(text.as_str(), "Cat");
    }

    #[test]
    fn index_past_end_is_rejected() {
        let mut text = SharedText::from("Cat");
        assert_eq!(
            CapitalizeAtCommand::new(3).apply(&mut text),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            LowerCaseAtCommand::new(7).apply(&mut text),
            Err(Error::IndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(text.as_str(), "Cat");
    }

    #[test]
    fn inverses_swap_case_commands() {
        let text = SharedText::from("Cat");
        let inverse = CapitalizeAtCommand::new(1).invert(&text).unwrap();
        assert_eq!(inverse.describe(), vec!["lower_case_at"]);
        let inverse = LowerCaseAtCommand::new(1).invert(&text).unwrap();
        assert_eq!(inverse.describe(), vec!["capitalize_at"]);
    }
}
