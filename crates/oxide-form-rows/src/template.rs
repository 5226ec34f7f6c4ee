//! Output buffer with block capture.

use std::cell::RefCell;

use crate::config::FormWowConfig;
use crate::error::Result;
use crate::options::RowOptions;
use crate::row::RowDecorator;

/// The output stream a render pass appends to.
///
/// `capture` swaps in a fresh buffer for the duration of a block so the
/// block's output can be post-processed before it reaches the enclosing
/// buffer.
#[derive(Debug, Default)]
pub struct Template {
    buffer: RefCell<String>,
}

/// Puts the enclosing buffer back even when the block unwinds.
struct CaptureGuard<'t> {
    buffer: &'t RefCell<String>,
    saved: Option<String>,
}

impl CaptureGuard<'_> {
    fn finish(mut self) -> String {
        let saved = self.saved.take().unwrap_or_default();
        self.buffer.replace(saved)
    }
}

impl Drop for CaptureGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            self.buffer.replace(saved);
        }
    }
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends markup to the output.
    pub fn concat(&self, markup: impl AsRef<str>) {
        self.buffer.borrow_mut().push_str(markup.as_ref());
    }

    /// Runs a block and returns what it appended, leaving the output as it
    /// was before the block.
    pub fn capture<F>(&self, block: F) -> Result<String>
    where
        F: FnOnce() -> Result<()>,
    {
        let guard = CaptureGuard {
            buffer: &self.buffer,
            saved: Some(self.buffer.take()),
        };
        let result = block();
        let captured = guard.finish();
        result.map(|()| captured)
    }

    /// Block form of a row decorator: captures the block as the row content
    /// and appends the decorated row to the output.
    pub fn form_wow_row_block<F>(
        &self,
        decorator: &dyn RowDecorator,
        label: &str,
        options: &RowOptions,
        config: &FormWowConfig,
        block: F,
    ) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        let content = self.capture(block)?;
        self.concat(decorator.decorate(&content, label, options, config));
        Ok(())
    }

    /// Returns a copy of the current output.
    pub fn output(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// Consumes the template, returning its output.
    pub fn into_string(self) -> String {
        self.buffer.into_inner()
    }
}
