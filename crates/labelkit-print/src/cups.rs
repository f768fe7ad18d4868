//! CUPS-backed dispatcher.
//!
//! Printers are listed with `lpstat -e`. Preview writes the bitmap to
//! `label_<unix-millis>.png` in the preview directory and optionally opens
//! it. Printing stages the bitmap in a temporary file and submits it with
//! `lpr`, forcing the custom page size and disabling any scaling.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use labelkit_core::DispatchError;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::dispatcher::{PrintDispatcher, PrintJob};

/// `PageSize=Custom.<w>x<h>` in tenths of a millimeter, truncated.
pub fn page_size_option(width_mm: f64, height_mm: f64) -> String {
    let width_tenths = (width_mm * 10.0) as u32;
    let height_tenths = (height_mm * 10.0) as u32;
    format!("PageSize=Custom.{}x{}", width_tenths, height_tenths)
}

/// Arguments for `lpr`.
pub fn lpr_args(printer: &str, width_mm: f64, height_mm: f64, file: &Path) -> Vec<String> {
    vec![
        "-P".to_string(),
        printer.to_string(),
        "-o".to_string(),
        page_size_option(width_mm, height_mm),
        "-o".to_string(),
        "fit-to-page=false".to_string(),
        "-o".to_string(),
        "scaling=100".to_string(),
        "-o".to_string(),
        "print-scaling=none".to_string(),
        file.to_string_lossy().to_string(),
    ]
}

/// One printer per non-empty, trimmed line.
pub fn parse_printer_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn preview_file_name(unix_millis: i64) -> String {
    format!("label_{}.png", unix_millis)
}

/// Opens `path` in the platform viewer. Failures are logged only.
async fn open_in_viewer(path: PathBuf) {
    let shown = path.display().to_string();
    match tokio::task::spawn_blocking(move || opener::open(&path)).await {
        Ok(Ok(())) => debug!("Opened preview {}", shown),
        Ok(Err(e)) => warn!("Failed to open preview {}: {}", shown, e),
        Err(e) => warn!("Preview opener task failed for {}: {}", shown, e),
    }
}

async fn stage_print_file(data: &[u8]) -> Result<tempfile::NamedTempFile, DispatchError> {
    let staged = tempfile::Builder::new()
        .prefix("label_")
        .suffix(".png")
        .tempfile()?;
    tokio::fs::write(staged.path(), data).await?;
    Ok(staged)
}

async fn run_tool(tool: &str, args: &[String]) -> Result<String, DispatchError> {
    debug!("Running {} {:?}", tool, args);
    let output = Command::new(tool).args(args).output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DispatchError::ToolNotFound {
                tool: tool.to_string(),
            }
        } else {
            DispatchError::Io {
                reason: format!("Failed to execute {}: {}", tool, e),
            }
        }
    })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!("{} exited with {}: {}", tool, output.status, stderr);
        Err(DispatchError::CommandFailed {
            tool: tool.to_string(),
            stderr,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CupsDispatcher {
    preview_dir: PathBuf,
    open_preview: bool,
}

impl Default for CupsDispatcher {
    fn default() -> Self {
        Self::new(std::env::temp_dir(), true)
    }
}

impl CupsDispatcher {
    pub fn new(preview_dir: impl Into<PathBuf>, open_preview: bool) -> Self {
        Self {
            preview_dir: preview_dir.into(),
            open_preview,
        }
    }

    pub fn preview_dir(&self) -> &Path {
        &self.preview_dir
    }

    async fn write_preview(&self, job: &PrintJob) -> Result<String, DispatchError> {
        tokio::fs::create_dir_all(&self.preview_dir).await?;
        let path = self
            .preview_dir
            .join(preview_file_name(chrono::Utc::now().timestamp_millis()));
        tokio::fs::write(&path, &job.image_data).await?;
        info!("Preview written to {}", path.display());

        if self.open_preview {
            open_in_viewer(path.clone()).await;
        }
        Ok(path.to_string_lossy().to_string())
    }

    async fn print(&self, printer: &str, job: &PrintJob) -> Result<String, DispatchError> {
        // Removed when `staged` drops, after lpr has read it.
        let staged = stage_print_file(&job.image_data).await?;

        let args = lpr_args(printer, job.width_mm, job.height_mm, staged.path());
        info!(
            "Printing {:.1}x{:.1} mm label to {}",
            job.width_mm, job.height_mm, printer
        );
        run_tool("lpr", &args).await?;
        Ok(format!("Printed to {}", printer))
    }
}

#[async_trait]
impl PrintDispatcher for CupsDispatcher {
    async fn generate_print_artifact(&self, job: &PrintJob) -> Result<String, DispatchError> {
        match job.printer_name.as_deref() {
            Some(printer) => self.print(printer, job).await,
            None => self.write_preview(job).await,
        }
    }

    async fn list_printers(&self) -> Result<Vec<String>, DispatchError> {
        let stdout = run_tool("lpstat", &["-e".to_string()]).await?;
        Ok(parse_printer_list(&stdout))
    }
}
