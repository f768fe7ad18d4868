//! Pointer interaction state.
//!
//! Only one of box drag, width resize or height resize can be active. The
//! editor moves between these states on pointer down / move / up; a pointer
//! release always returns to `Idle`.

use std::fmt;

use crate::label::Axis;
use crate::types::CanvasPoint;

/// Values captured when a resize drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDrag {
    /// Declared size of the axis at drag start.
    pub start_value_mm: f64,
    /// Pointer position (screen px) at drag start.
    pub start_pointer: CanvasPoint,
    /// On-screen scale at drag start.
    pub px_per_mm: f64,
}

impl ResizeDrag {
    /// Pointer travel along the screen direction the handle moves in.
    pub fn delta(&self, pointer: CanvasPoint, vertical: bool) -> f64 {
        if vertical {
            pointer.y - self.start_pointer.y
        } else {
            pointer.x - self.start_pointer.x
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    DraggingBox(u32),
    ResizingWidth(ResizeDrag),
    ResizingHeight(ResizeDrag),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn resizing(axis: Axis, drag: ResizeDrag) -> Self {
        match axis {
            Axis::Width => Self::ResizingWidth(drag),
            Axis::Height => Self::ResizingHeight(drag),
        }
    }

    /// Axis and drag data of an active resize.
    pub fn resize(&self) -> Option<(Axis, ResizeDrag)> {
        match *self {
            Self::ResizingWidth(drag) => Some((Axis::Width, drag)),
            Self::ResizingHeight(drag) => Some((Axis::Height, drag)),
            _ => None,
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::DraggingBox(id) => write!(f, "dragging box {}", id),
            Self::ResizingWidth(_) => write!(f, "resizing width"),
            Self::ResizingHeight(_) => write!(f, "resizing height"),
        }
    }
}
