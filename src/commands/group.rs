use super::{BoxedCommand, Command};

/// One step of an inverse procedure.
#[derive(Debug)]
pub enum Step {
    /// Run the command through the history manager so it is recorded.
    Record(BoxedCommand),
    /// Reverse the text in place without recording anything.
    Reverse,
}

/// An ordered list of steps that undoes a command.
#[derive(Debug, Default)]
pub struct Inverse {
    steps: Vec<Step>,
}

impl Inverse {
    pub fn new() -> Self {
        Inverse { steps: Vec::new() }
    }

    pub fn from_command<C: Command + 'static>(command: C) -> Self {
        Inverse {
            steps: vec![Step::Record(Box::new(command))],
        }
    }

    pub fn record<C: Command + 'static>(&mut self, command: C) {
        self.steps.push(Step::Record(Box::new(command)));
    }

    pub fn reverse(&mut self) {
        self.steps.push(Step::Reverse);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Names of the recorded commands, `"reverse"` for unrecorded reversals.
    pub fn describe(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Record(command) => command.name(),
                Step::Reverse => "reverse",
            })
            .collect()
    }
}

impl IntoIterator for Inverse {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
