use fw_compare::prelude::*;
use std::sync::{Arc, Mutex};

/// Which `ProgressReporter` method produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Info,
    Warning,
    Completion,
}

/// Records every diagnostic; clones share the same log so a test can keep a
/// handle after moving the reporter into a use case.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message, in order, regardless of channel
    pub fn get_messages(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.on(Channel::Warning)
    }

    #[allow(dead_code)]
    pub fn completions(&self) -> Vec<String> {
        self.on(Channel::Completion)
    }

    fn on(&self, channel: Channel) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn push(&self, channel: Channel, message: &str) {
        self.log.lock().unwrap().push((channel, message.to_string()));
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(Channel::Info, message);
    }

    fn report_error(&self, message: &str) {
        self.push(Channel::Warning, message);
    }

    fn report_completion(&self, message: &str) {
        self.push(Channel::Completion, message);
    }
}
