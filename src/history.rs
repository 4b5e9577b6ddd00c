use crate::commands::{BoxedCommand, Command, Step};
use crate::config::{Config, RedoPolicy};
use crate::error::{Error, HistoryKind, Result};
use crate::SharedText;
use bounded_vec_deque::BoundedVecDeque;
use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::debug;

type History = BoundedVecDeque<BoxedCommand>;

/// Runs commands against the text and keeps the undo and redo histories.
///
/// Both histories are most-recent-last. Any operation that returns `Err`
/// leaves the text and both histories as they were.
pub struct HistoryManager {
    text: SharedText,
    undo_history: History,
    redo_history: History,
    history_limit: Option<NonZeroUsize>,
    redo_policy: RedoPolicy,
}

impl fmt::Debug for HistoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryManager")
            .field("text", &self.text.as_str())
            .field("undo_history", &self.undo_names())
            .field("redo_history", &self.redo_names())
            .field("history_limit", &self.history_limit)
            .field("redo_policy", &self.redo_policy)
            .finish()
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(SharedText::new())
    }
}

impl HistoryManager {
    pub fn new(text: SharedText) -> Self {
        Self {
            text,
            undo_history: empty_history(None),
            redo_history: empty_history(None),
            history_limit: None,
            redo_policy: RedoPolicy::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let manager = Self::new(SharedText::from(config.initial_text.as_str()))
            .with_redo_policy(config.redo_policy);
        match config.history_limit {
            Some(limit) => manager.with_history_limit(limit),
            None => manager,
        }
    }

    /// Caps each history at `limit` entries, dropping the oldest first.
    #[must_use]
    pub fn with_history_limit(mut self, limit: NonZeroUsize) -> Self {
        self.history_limit = Some(limit);
        self.undo_history = rebound(self.undo_history, Some(limit));
        self.redo_history = rebound(self.redo_history, Some(limit));
        self
    }

    #[must_use]
    pub fn with_redo_policy(mut self, redo_policy: RedoPolicy) -> Self {
        self.redo_policy = redo_policy;
        self
    }

    pub fn text(&self) -> &SharedText {
        &self.text
    }

    pub fn into_text(self) -> SharedText {
        self.text
    }

    pub fn redo_policy(&self) -> RedoPolicy {
        self.redo_policy
    }

    pub fn history_limit(&self) -> Option<NonZeroUsize> {
        self.history_limit
    }

    /// Applies `command` and records it on the undo history. The redo
    /// history is left alone.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the command cannot be applied to the current text
    pub fn do_command<C: Command + 'static>(&mut self, command: C) -> Result<()> {
        self.do_boxed(Box::new(command))
    }

    /// # Errors
    ///
    /// Will return `Err` if the command cannot be applied to the current text
    pub fn do_boxed(&mut self, command: BoxedCommand) -> Result<()> {
        command.apply(&mut self.text)?;
        debug!(command = command.name(), text = %self.text, "did command");
        push(&mut self.undo_history, HistoryKind::Undo, command);
        Ok(())
    }

    /// Moves the latest command to the redo history and runs its inverse.
    ///
    /// Commands issued by the inverse are recorded on the undo history, so
    /// the undo history does not necessarily shrink.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the undo history is empty or the inverse cannot
    /// be carried out
    pub fn undo(&mut self) -> Result<()> {
        let command = self
            .undo_history
            .back()
            .ok_or(Error::EmptyHistory(HistoryKind::Undo))?;
        let (text, recorded) = run_inverse(&self.text, command.as_ref())?;

        if let Some(command) = self.undo_history.pop_back() {
            debug!(command = command.name(), text = %text, "undid command");
            push(&mut self.redo_history, HistoryKind::Redo, command);
        }
        self.text = text;
        for command in recorded {
            push(&mut self.undo_history, HistoryKind::Undo, command);
        }
        Ok(())
    }

    /// Re-applies the latest undone command. Under [`RedoPolicy::Reapply`]
    /// it is not recorded again, so it cannot itself be undone.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the redo history is empty or the command no
    /// longer fits the text
    pub fn redo(&mut self) -> Result<()> {
        let command = self
            .redo_history
            .back()
            .ok_or(Error::EmptyHistory(HistoryKind::Redo))?;
        command.apply(&mut self.text)?;

        if let Some(command) = self.redo_history.pop_back() {
            debug!(
                command = command.name(),
                text = %self.text,
                policy = ?self.redo_policy,
                "redid command"
            );
            if self.redo_policy == RedoPolicy::Record {
                push(&mut self.undo_history, HistoryKind::Undo, command);
            }
        }
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_history.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_history.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_history.len()
    }

    pub fn undo_names(&self) -> Vec<&'static str> {
        self.undo_history.iter().map(|command| command.name()).collect()
    }

    pub fn redo_names(&self) -> Vec<&'static str> {
        self.redo_history.iter().map(|command| command.name()).collect()
    }

    /// Forgets both histories. The text is kept.
    pub fn clear(&mut self) {
        self.undo_history = empty_history(self.history_limit);
        self.redo_history = empty_history(self.history_limit);
    }
}

fn max_len(limit: Option<NonZeroUsize>) -> usize {
    limit.map_or(usize::MAX, NonZeroUsize::get)
}

fn empty_history(limit: Option<NonZeroUsize>) -> History {
    BoundedVecDeque::from_unbounded(VecDeque::new(), max_len(limit))
}

fn rebound(history: History, limit: Option<NonZeroUsize>) -> History {
    let max_len = max_len(limit);
    let mut entries = history.into_unbounded();
    while entries.len() > max_len {
        entries.pop_front();
    }
    BoundedVecDeque::from_unbounded(entries, max_len)
}

fn push(history: &mut History, kind: HistoryKind, command: BoxedCommand) {
    if let Some(evicted) = history.push_back(command) {
        debug!(history = %kind, command = evicted.name(), "evicted oldest entry");
    }
}

/// Carries out the inverse of `command` on a copy of `text`, returning the
/// new text and the commands to record.
fn run_inverse(
    text: &SharedText,
    command: &dyn Command,
) -> Result<(SharedText, Vec<BoxedCommand>)> {
    let inverse = command.invert(text)?;
    let mut scratch = text.clone();
    let mut recorded = Vec::with_capacity(inverse.len());

    for step in inverse {
        match step {
            Step::Record(command) => {
                command.apply(&mut scratch)?;
                recorded.push(command);
            }
            Step::Reverse => scratch.reverse(),
        }
    }
    Ok((scratch, recorded))
}
