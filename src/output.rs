//! Output rendering abstraction for lore.
//!
//! Defines the [`Renderer`] trait that decouples the run loop from the
//! display layer. [`StdoutRenderer`] prints the transcript to the terminal;
//! tests substitute a recording fake to assert on emitted messages.

use colored::Colorize;

use crate::assistant::MessageRole;

/// Trait for rendering conversation output.
pub trait Renderer {
    /// Render one transcript message.
    fn message(&mut self, role: MessageRole, text: &str);

    /// Render a progress line (poll status, tool activity).
    fn status(&mut self, text: &str);

    /// Render a diagnostic line, shown only when debug output is enabled.
    fn debug(&mut self, text: &str);

    /// Render a non-fatal error (e.g. a failed tool call that was surfaced
    /// to the assistant instead of aborting the run).
    fn error(&mut self, text: &str);
}

/// Renders the conversation to stdout with colored role labels.
pub struct StdoutRenderer {
    debug_enabled: bool,
}

impl StdoutRenderer {
    pub fn new(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }

    fn role_label(role: MessageRole) -> String {
        match role {
            MessageRole::User => format!("{}", "you:".green().bold()),
            MessageRole::Assistant => format!("{}", "lore:".cyan().bold()),
        }
    }
}

impl Renderer for StdoutRenderer {
    fn message(&mut self, role: MessageRole, text: &str) {
        println!();
        println!("{}", Self::role_label(role));
        println!("{text}");
    }

    fn status(&mut self, text: &str) {
        println!("{}", text.dimmed());
    }

    fn debug(&mut self, text: &str) {
        if self.debug_enabled {
            println!("{}", format!("[debug] {text}").dimmed());
        }
    }

    fn error(&mut self, text: &str) {
        eprintln!("{}", text.red());
    }
}
