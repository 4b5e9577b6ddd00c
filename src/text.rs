use crate::error::{Error, Result};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// The single mutable string every command operates on.
///
/// The text is kept as a sequence of letters, each one extended grapheme
/// cluster. Positions are letter indices, never byte offsets.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct SharedText {
    letters: Vec<String>,
    string: String,
    /// Set while the letters are held back to front.
    reversed: bool,
}

impl From<&str> for SharedText {
    fn from(slice: &str) -> Self {
        Self {
            letters: slice.graphemes(true).map(String::from).collect(),
            string: String::from(slice),
            reversed: false,
        }
    }
}

impl From<String> for SharedText {
    fn from(string: String) -> Self {
        Self {
            letters: string.graphemes(true).map(String::from).collect(),
            string,
            reversed: false,
        }
    }
}

impl fmt::Display for SharedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.letters.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.letters.last().map(String::as_str)
    }

    /// Appends `letter` as a letter of its own.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `letter` would join a neighbouring letter instead
    /// of standing alone, e.g. a combining accent after a base letter
    pub fn push_letter(&mut self, letter: &str) -> Result<()> {
        let mut letters = self.letters.clone();
        letters.push(letter.to_string());

        // Check segmentation in reading order, so a letter pushed onto
        // reversed text is checked against what follows it once flipped back.
        let segmented = if self.reversed {
            let reading: String = letters.iter().rev().map(String::as_str).collect();
            reading.graphemes(true).eq(letters.iter().rev().map(String::as_str))
        } else {
            let reading = letters.concat();
            reading.graphemes(true).eq(letters.iter().map(String::as_str))
        };
        if !segmented {
            return Err(Error::InvalidLetter(letter.to_string()));
        }

        self.letters = letters;
        self.string.push_str(letter);
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the text is empty
    pub fn remove_first(&mut self) -> Result<String> {
        if self.letters.is_empty() {
            return Err(Error::EmptyString);
        }
        let first = self.letters.remove(0);
        self.string.replace_range(..first.len(), "");
        Ok(first)
    }

    /// # Errors
    ///
    /// Will return `Err` if the text is empty
    pub fn remove_last(&mut self) -> Result<String> {
        let last = self.letters.pop().ok_or(Error::EmptyString)?;
        self.string.truncate(self.string.len() - last.len());
        Ok(last)
    }

    /// # Errors
    ///
    /// Will return `Err` if `at` is not a valid letter index
    pub fn uppercase_at(&mut self, at: usize) -> Result<()> {
        self.map_at(at, uppercase)
    }

    /// # Errors
    ///
    /// Will return `Err` if `at` is not a valid letter index
    pub fn lowercase_at(&mut self, at: usize) -> Result<()> {
        self.map_at(at, lowercase)
    }

    /// Uppercases the first alphabetic letter of each whitespace-delimited
    /// word and lowercases the letters after it. Anything in a word before
    /// its first alphabetic letter is left alone.
    pub fn title_case(&mut self) {
        let mut at_word_start = true;

        for letter in &mut self.letters {
            if letter.chars().all(char::is_whitespace) {
                at_word_start = true;
            } else if !at_word_start {
                *letter = lowercase(letter);
            } else if letter.chars().any(char::is_alphabetic) {
                at_word_start = false;
                *letter = uppercase(letter);
            }
        }
        self.string = self.letters.concat();
    }

    /// Reverses the letter order. Reversing twice gives back the same text.
    pub(crate) fn reverse(&mut self) {
        self.letters.reverse();
        self.reversed = !self.reversed;
        self.string = self.letters.concat();
    }

    /// Indices that begin the text or directly follow a space.
    pub fn word_starts(&self) -> Vec<usize> {
        let mut starts = Vec::new();
        let mut previous: Option<&str> = None;

        for (index, letter) in self.letters.iter().enumerate() {
            if previous.is_none_or(|p| p == " ") {
                starts.push(index);
            }
            previous = Some(letter.as_str());
        }
        starts
    }

    fn map_at(&mut self, at: usize, map: fn(&str) -> String) -> Result<()> {
        let len = self.letters.len();
        let letter = self
            .letters
            .get_mut(at)
            .ok_or(Error::IndexOutOfRange { index: at, len })?;
        *letter = map(letter);
        self.string = self.letters.concat();
        Ok(())
    }
}

fn uppercase(letter: &str) -> String {
    letter.chars().flat_map(char::to_uppercase).collect()
}

fn lowercase(letter: &str) -> String {
    letter.chars().flat_map(char::to_lowercase).collect()
}
