//! Print service: gate, capture, dispatch.

use labelkit_core::{Error, Result};
use labelkit_designer::LabelEditor;
use tracing::{info, warn};

use crate::dispatcher::{PrintDispatcher, PrintJob};

/// Runs print and preview requests for editors through one dispatcher.
pub struct PrintService<D> {
    dispatcher: D,
}

impl<D: PrintDispatcher> PrintService<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Captures the editor's label and hands it to the dispatcher.
    ///
    /// `printer = None` requests a preview. A second request for the same
    /// editor while one is in flight fails with [`Error::Busy`]. The gate is
    /// released however the request ends.
    pub async fn submit(&self, editor: &LabelEditor, printer: Option<&str>) -> Result<String> {
        let _permit = editor.try_begin_print().ok_or(Error::Busy)?;

        let captured = editor.capture().inspect_err(|e| {
            warn!("Capture failed: {}", e);
        })?;
        let job = PrintJob::from_capture(captured, printer);

        let result = self.dispatcher.generate_print_artifact(&job).await;
        match &result {
            Ok(reference) => info!("Dispatch finished: {}", reference),
            Err(e) => warn!("Dispatch failed: {}", e),
        }
        Ok(result?)
    }

    pub async fn preview(&self, editor: &LabelEditor) -> Result<String> {
        self.submit(editor, None).await
    }

    pub async fn print(&self, editor: &LabelEditor, printer: &str) -> Result<String> {
        self.submit(editor, Some(printer)).await
    }

    /// Lists printers. Failures are returned, callers usually just log them.
    pub async fn list_printers(&self) -> Result<Vec<String>> {
        Ok(self.dispatcher.list_printers().await?)
    }
}
