//! Output sinks for audit messages.
//!
//! The audit never writes to the terminal itself. It hands every message
//! to an [`AuditPrinter`], so the CLI can print human output while tests
//! and JSON mode capture messages instead.

use serde::Serialize;

pub trait AuditPrinter {
    fn print_success(&mut self, message: &str);
    fn print_failure(&mut self, message: &str);
    fn print_warning(&mut self, message: &str);
}

impl<P: AuditPrinter + ?Sized> AuditPrinter for &mut P {
    fn print_success(&mut self, message: &str) {
        (**self).print_success(message);
    }

    fn print_failure(&mut self, message: &str) {
        (**self).print_failure(message);
    }

    fn print_warning(&mut self, message: &str) {
        (**self).print_warning(message);
    }
}

/// Success to stdout; failures and warnings to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrinter;

impl AuditPrinter for TerminalPrinter {
    fn print_success(&mut self, message: &str) {
        println!("{message}");
    }

    fn print_failure(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn print_warning(&mut self, message: &str) {
        eprintln!("warning: {message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Failure,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintedMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Keeps every message in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPrinter {
    messages: Vec<PrintedMessage>,
}

impl RecordingPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[PrintedMessage] {
        &self.messages
    }

    /// Texts of messages of one kind.
    #[must_use]
    pub fn texts(&self, kind: MessageKind) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.text.as_str())
            .collect()
    }

    fn push(&mut self, kind: MessageKind, message: &str) {
        self.messages.push(PrintedMessage {
            kind,
            text: message.to_string(),
        });
    }
}

impl AuditPrinter for RecordingPrinter {
    fn print_success(&mut self, message: &str) {
        self.push(MessageKind::Success, message);
    }

    fn print_failure(&mut self, message: &str) {
        self.push(MessageKind::Failure, message);
    }

    fn print_warning(&mut self, message: &str) {
        self.push(MessageKind::Warning, message);
    }
}
