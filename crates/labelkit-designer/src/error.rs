//! Error types for the designer crate.
//!
//! Capture failures use [`labelkit_core::CaptureError`]; this module only
//! covers misuse of the pointer interaction protocol.

use thiserror::Error;

use crate::label::Axis;

/// Errors raised by drag and resize interactions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// A box drag is already running.
    #[error("Text box {active} is already being dragged")]
    DragInProgress { active: u32 },

    /// Some pointer operation is already active.
    #[error("Another pointer operation is active: {active}")]
    OperationInProgress { active: String },

    /// The requested box does not exist.
    #[error("No text box with id {0}")]
    UnknownBox(u32),

    /// Only a continuous axis can be resized by dragging.
    #[error("The label {0} is not continuous")]
    AxisNotContinuous(Axis),
}

/// Result type alias for interaction operations.
pub type InteractionResult<T> = Result<T, InteractionError>;
