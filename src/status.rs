//! Status reporter: single-channel, latest-message-wins user feedback.

use std::cell::RefCell;
use std::rc::Rc;

/// External surface for status text (DOM node, console, test recorder).
pub trait StatusSink {
    fn publish(&self, message: &str);
}

/// Sink with no status surface; the reporter's tracing event is the only
/// output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn publish(&self, _message: &str) {}
}

#[derive(Clone)]
pub struct StatusReporter {
    latest: Rc<RefCell<Option<String>>>,
    sink: Rc<dyn StatusSink>,
}

impl StatusReporter {
    pub fn new(sink: Rc<dyn StatusSink>) -> Self {
        Self { latest: Rc::new(RefCell::new(None)), sink }
    }

    pub fn report(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "fundme::status", "{}", message);
        self.sink.publish(&message);
        *self.latest.borrow_mut() = Some(message);
    }

    /// Most recent message, if any was reported.
    pub fn latest(&self) -> Option<String> {
        self.latest.borrow().clone()
    }
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new(Rc::new(LogSink))
    }
}
