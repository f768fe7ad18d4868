//! Text box layout.
//!
//! Keeps the ordered set of text boxes (insertion order is stacking order),
//! assigns ids, enforces the container bounds on every move and runs the
//! two-phase drag protocol:
//!
//! 1. `start_drag` records the pointer offset from the box's top-left corner
//! 2. `update_drag` places the box at `pointer - offset`, clamped
//! 3. `end_drag` clears the drag target
//!
//! All coordinates are layout pixels with the origin at the label's top-left.

use labelkit_core::constants::{BOX_BASE_OFFSET_PX, BOX_CASCADE_LEN, BOX_OFFSET_STEP_PX};
use tracing::debug;

use crate::error::{InteractionError, InteractionResult};
use crate::text_box::TextBox;
use crate::types::{CanvasPoint, CanvasSize};

/// Active box drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDrag {
    pub id: u32,
    /// Pointer position minus the box's top-left corner at drag start.
    pub grab_offset: CanvasPoint,
}

/// Clamps a top-left position so the footprint stays inside the container.
///
/// When the footprint is larger than the container the box is pinned to 0.
pub fn clamp_position(x: f64, y: f64, footprint: CanvasSize, container: CanvasSize) -> (f64, f64) {
    let max_x = (container.width - footprint.width).max(0.0);
    let max_y = (container.height - footprint.height).max(0.0);
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}

/// Initial position for a new box, cascading by id so boxes never stack exactly.
pub fn cascade_position(id: u32) -> CanvasPoint {
    let step = f64::from(id.saturating_sub(1) % BOX_CASCADE_LEN);
    let offset = BOX_BASE_OFFSET_PX + step * BOX_OFFSET_STEP_PX;
    CanvasPoint::new(offset, offset)
}

/// Ordered collection of text boxes.
#[derive(Debug, Clone, Default)]
pub struct TextBoxLayout {
    boxes: Vec<TextBox>,
    drag: Option<BoxDrag>,
}

impl TextBoxLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxes in stacking order (first is bottom-most).
    pub fn boxes(&self) -> &[TextBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&TextBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut TextBox> {
        self.boxes.iter_mut().find(|b| b.id == id)
    }

    /// Sorted ids, mainly for assertions and listings.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.boxes.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids
    }

    /// `max(existing ids, 0) + 1`. Ids are reused once the highest is deleted.
    pub fn next_id(&self) -> u32 {
        self.boxes.iter().map(|b| b.id).max().unwrap_or(0) + 1
    }

    /// Appends a box at its cascade position and returns its id.
    pub fn add(&mut self, text: impl Into<String>, footprint: CanvasSize, container: CanvasSize) -> u32 {
        let id = self.next_id();
        let pos = cascade_position(id);
        let (x, y) = clamp_position(pos.x, pos.y, footprint, container);
        let mut text_box = TextBox::new(id, x, y, text);
        text_box.footprint = footprint;
        debug!("Added text box {}", text_box);
        self.boxes.push(text_box);
        id
    }

    /// Removes a box. Absent ids are ignored.
    pub fn remove(&mut self, id: u32) -> Option<TextBox> {
        let index = self.boxes.iter().position(|b| b.id == id)?;
        if self.drag.is_some_and(|d| d.id == id) {
            self.drag = None;
        }
        let removed = self.boxes.remove(index);
        debug!("Removed text box {}", removed.id);
        Some(removed)
    }

    /// Moves a box, clamped to the container. Returns `false` for unknown ids.
    pub fn move_to(&mut self, id: u32, x: f64, y: f64, container: CanvasSize) -> bool {
        match self.get_mut(id) {
            Some(text_box) => {
                let (cx, cy) = clamp_position(x, y, text_box.footprint, container);
                text_box.x = cx;
                text_box.y = cy;
                true
            }
            None => false,
        }
    }

    /// Replaces the text of a box. Any string is accepted, including empty.
    pub fn edit(&mut self, id: u32, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(text_box) => {
                text_box.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Stores a freshly measured footprint.
    pub fn set_footprint(&mut self, id: u32, footprint: CanvasSize) -> bool {
        match self.get_mut(id) {
            Some(text_box) => {
                text_box.footprint = footprint;
                true
            }
            None => false,
        }
    }

    /// Topmost box under `point`.
    pub fn hit_test(&self, point: CanvasPoint) -> Option<u32> {
        self.boxes
            .iter()
            .rev()
            .find(|b| b.bounds().contains(point))
            .map(|b| b.id)
    }

    /// Id of the box being dragged.
    pub fn dragging(&self) -> Option<u32> {
        self.drag.map(|d| d.id)
    }

    pub fn active_drag(&self) -> Option<BoxDrag> {
        self.drag
    }

    /// Begins dragging `id`. Rejected while another drag is active.
    pub fn start_drag(&mut self, id: u32, pointer: CanvasPoint) -> InteractionResult<()> {
        if let Some(active) = self.drag {
            return Err(InteractionError::DragInProgress { active: active.id });
        }
        let text_box = self.get(id).ok_or(InteractionError::UnknownBox(id))?;
        let grab_offset = pointer.offset_from(text_box.top_left());
        self.drag = Some(BoxDrag { id, grab_offset });
        debug!("Drag started on box {} with offset {:?}", id, grab_offset);
        Ok(())
    }

    /// Follows the pointer. Returns the new top-left, or `None` when idle.
    pub fn update_drag(&mut self, pointer: CanvasPoint, container: CanvasSize) -> Option<CanvasPoint> {
        let drag = self.drag?;
        let target = pointer.offset_from(drag.grab_offset);
        if !self.move_to(drag.id, target.x, target.y, container) {
            self.drag = None;
            return None;
        }
        self.get(drag.id).map(TextBox::top_left)
    }

    /// Ends the drag and returns the id that was being dragged.
    pub fn end_drag(&mut self) -> Option<u32> {
        self.drag.take().map(|d| d.id)
    }

    /// Re-applies the bounds invariant to every box.
    pub fn clamp_all(&mut self, container: CanvasSize) {
        for text_box in &mut self.boxes {
            let (x, y) = clamp_position(text_box.x, text_box.y, text_box.footprint, container);
            text_box.x = x;
            text_box.y = y;
        }
    }
}
