//! The presentation sink boundary.
//!
//! The engine never reads anything back from the sink; it only sends.

use super::command::Command;

/// Receiver for presentation commands.
pub trait PresentationSink {
    fn send(&mut self, command: Command);
}

impl<S: PresentationSink + ?Sized> PresentationSink for Box<S> {
    fn send(&mut self, command: Command) {
        (**self).send(command);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn send(&mut self, _command: Command) {}
}

/// Keeps every command in order, for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    commands: Vec<Command>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text of every notification, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Notify { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of commands matching `predicate`.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Command) -> bool,
    {
        self.commands.iter().filter(|c| predicate(c)).count()
    }
}

impl PresentationSink for RecordingSink {
    fn send(&mut self, command: Command) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.send(Command::Pause { millis: 5 });
        sink.send(Command::Notify {
            text: "hello".into(),
            seconds: 2,
        });

        assert_eq!(sink.commands().len(), 2);
        assert_eq!(sink.notifications(), vec!["hello"]);
        assert_eq!(sink.count(|c| matches!(c, Command::Pause { .. })), 1);

        sink.clear();
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut sink: Box<dyn PresentationSink> = Box::new(NullSink);
        sink.send(Command::Pause { millis: 1 });
    }
}
