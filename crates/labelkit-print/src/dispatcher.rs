//! Print dispatcher contract.
//!
//! A dispatcher receives the encoded label bitmap together with its physical
//! size. Without a printer name it produces a preview artifact and returns a
//! reference to it; with one it sends a print job and returns an
//! acknowledgement. Errors are passed to the user verbatim and never retried.

use async_trait::async_trait;
use labelkit_core::DispatchError;
use labelkit_designer::CapturedLabel;

/// One request handed to a dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    /// PNG-encoded label at print resolution.
    pub image_data: Vec<u8>,
    pub width_mm: f64,
    pub height_mm: f64,
    /// `None` requests a preview.
    pub printer_name: Option<String>,
}

impl PrintJob {
    pub fn from_capture(captured: CapturedLabel, printer_name: Option<&str>) -> Self {
        Self {
            image_data: captured.png,
            width_mm: captured.width_mm,
            height_mm: captured.height_mm,
            printer_name: printer_name.map(str::to_string),
        }
    }
}

#[async_trait]
pub trait PrintDispatcher: Send + Sync {
    /// Produces a preview artifact or submits a print job.
    async fn generate_print_artifact(&self, job: &PrintJob) -> Result<String, DispatchError>;

    /// Names of available printers. An empty list is a valid answer.
    async fn list_printers(&self) -> Result<Vec<String>, DispatchError>;
}
