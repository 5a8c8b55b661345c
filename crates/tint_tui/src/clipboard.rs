//! Clipboard writes off the UI thread.
//!
//! [spawn_copy] runs the write on its own thread and reports the outcome on a
//! channel the run loop drains, so a slow or missing clipboard never stalls input.

use std::sync::Arc;

use tint_core::TintError;
use tokio::sync::mpsc::UnboundedSender;

/// Outcome of one clipboard write: the copied text, or why it failed.
pub type CopyOutcome = Result<String, TintError>;

/// Something that can take text for the system clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write(&self, text: &str) -> Result<(), TintError>;
}

/// The OS clipboard via `cli-clipboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), TintError> {
        cli_clipboard::set_contents(text.to_string()).map_err(|e| TintError::Clipboard(e.to_string()))
    }
}

/// Write `text` on a background thread; the outcome arrives on `tx`.
pub fn spawn_copy(writer: Arc<dyn ClipboardWriter>, text: String, tx: UnboundedSender<CopyOutcome>) {
    std::thread::spawn(move || {
        let outcome = writer.write(&text).map(|()| text);
        let _ = tx.send(outcome);
    });
}
