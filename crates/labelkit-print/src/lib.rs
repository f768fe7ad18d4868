//! # LabelKit Print
//!
//! Hands captured labels to a print backend.
//!
//! - [`PrintDispatcher`]: async contract for preview/print backends
//! - [`CupsDispatcher`]: backend using the CUPS `lpstat` and `lpr` tools
//! - [`PrintService`]: serialises requests per editor, captures and dispatches

pub mod cups;
pub mod dispatcher;
pub mod service;

pub use cups::CupsDispatcher;
pub use dispatcher::{PrintDispatcher, PrintJob};
pub use service::PrintService;
