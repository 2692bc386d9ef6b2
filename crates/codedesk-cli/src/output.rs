//! Terminal renditions of the output region and blocking notification.

use std::cell::RefCell;
use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use codedesk_client::{Notifier, OutputRegion};

use crate::client::{CliError, CliResult};

/// Final text goes to the writer (stdout outside tests); the in-progress
/// placeholder goes to stderr, and only when stderr is an interactive terminal.
pub(crate) struct TerminalOutput {
    writer: RefCell<Box<dyn Write>>,
    show_progress: bool,
    write_error: RefCell<Option<io::Error>>,
}

impl TerminalOutput {
    pub(crate) fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()), io::stderr().is_terminal())
    }

    pub(crate) fn with_writer(writer: Box<dyn Write>, show_progress: bool) -> Self {
        Self {
            writer: RefCell::new(writer),
            show_progress,
            write_error: RefCell::new(None),
        }
    }

    /// Flush the writer and surface the first write failure, if any.
    pub(crate) fn finish(&self) -> CliResult<()> {
        if let Some(err) = self.write_error.borrow_mut().take() {
            return Err(CliError::failure(
                anyhow::Error::new(err).context("failed to write command output"),
            ));
        }
        self.writer
            .borrow_mut()
            .flush()
            .context("failed to flush command output")
            .map_err(CliError::failure)
    }
}

impl OutputRegion for TerminalOutput {
    fn set_text(&self, text: &str) {
        if let Err(err) = writeln!(self.writer.borrow_mut(), "{text}") {
            let mut slot = self.write_error.borrow_mut();
            if slot.is_none() {
                *slot = Some(err);
            }
        }
    }

    fn show_pending(&self, text: &str) {
        if self.show_progress {
            eprintln!("{text}");
        }
    }
}

/// Blocking notifications are printed to stderr.
pub(crate) struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// In-memory writer whose contents stay readable after it is boxed.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CapturedText(std::rc::Rc<RefCell<Vec<u8>>>);

#[cfg(test)]
impl CapturedText {
    pub(crate) fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

#[cfg(test)]
impl Write for CapturedText {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
