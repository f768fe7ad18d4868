//! Label editor facade.
//!
//! Owns one document (label geometry, text boxes, shared style, viewport)
//! and routes pointer events through the interaction state machine. Pointer
//! positions arrive in screen px and are mapped through the viewport.

use labelkit_core::constants::HANDLE_SIZE_PX;
use labelkit_core::CaptureError;
use tiny_skia::Pixmap;
use tracing::{debug, info};

use crate::capture::{capture_label, CaptureSettings, CapturedLabel};
use crate::error::{InteractionError, InteractionResult};
use crate::font_manager;
use crate::interaction::{InteractionState, ResizeDrag};
use crate::label::{Axis, LabelDocument};
use crate::layout::TextBoxLayout;
use crate::print_gate::{PrintGate, PrintPermit};
use crate::renderer::LabelSurface;
use crate::scene::{delete_control_rect, LabelScene, RenderMode};
use crate::text_box::{TextBox, TextStyle};
use crate::types::{CanvasPoint, CanvasSize};
use crate::viewport::Viewport;

/// Text used for boxes created without explicit content.
pub const DEFAULT_BOX_TEXT: &str = "Text";

/// Computes a text box footprint from the shared style.
pub type MeasureFn = fn(&TextStyle, &str) -> CanvasSize;

/// What lies under the pointer, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTarget {
    DeleteControl(u32),
    ResizeHandle(Axis),
    TextBox(u32),
    Label,
    Outside,
}

pub struct LabelEditor {
    label: LabelDocument,
    layout: TextBoxLayout,
    style: TextStyle,
    viewport: Viewport,
    interaction: InteractionState,
    surface: Option<Box<dyn LabelSurface>>,
    capture_settings: CaptureSettings,
    gate: PrintGate,
    measure: MeasureFn,
}

impl Default for LabelEditor {
    fn default() -> Self {
        Self::new(LabelDocument::default(), TextStyle::default())
    }
}

impl LabelEditor {
    /// Creates an editor holding one default text box.
    pub fn new(label: LabelDocument, style: TextStyle) -> Self {
        Self::with_measure(label, style, font_manager::measure_text)
    }

    /// Like [`LabelEditor::new`] with a custom footprint measurement.
    pub fn with_measure(label: LabelDocument, style: TextStyle, measure: MeasureFn) -> Self {
        let mut editor = Self {
            label,
            layout: TextBoxLayout::new(),
            style,
            viewport: Viewport::new(),
            interaction: InteractionState::Idle,
            surface: None,
            capture_settings: CaptureSettings::default(),
            gate: PrintGate::new(),
            measure,
        };
        editor.add_text_box(DEFAULT_BOX_TEXT);
        editor
    }

    pub fn label(&self) -> &LabelDocument {
        &self.label
    }

    pub fn layout(&self) -> &TextBoxLayout {
        &self.layout
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn text_box(&self, id: u32) -> Option<&TextBox> {
        self.layout.get(id)
    }

    /// The layout container in layout px.
    pub fn container(&self) -> CanvasSize {
        self.label.render_size_px()
    }

    // Text boxes

    pub fn add_text_box(&mut self, text: impl Into<String>) -> u32 {
        let text = text.into();
        let footprint = (self.measure)(&self.style, &text);
        let container = self.container();
        self.layout.add(text, footprint, container)
    }

    /// Removes a box. Unknown ids are ignored.
    pub fn remove_text_box(&mut self, id: u32) -> bool {
        let removed = self.layout.remove(id).is_some();
        if removed && self.interaction == InteractionState::DraggingBox(id) {
            self.interaction = InteractionState::Idle;
        }
        removed
    }

    /// Replaces the text of a box and re-measures it.
    pub fn edit_text(&mut self, id: u32, text: impl Into<String>) -> InteractionResult<()> {
        let text = text.into();
        let footprint = (self.measure)(&self.style, &text);
        if !self.layout.edit(id, text) {
            return Err(InteractionError::UnknownBox(id));
        }
        self.layout.set_footprint(id, footprint);
        Ok(())
    }

    /// Moves a box (layout px), clamped to the container.
    pub fn move_text_box(&mut self, id: u32, x: f64, y: f64) -> InteractionResult<()> {
        let container = self.container();
        if self.layout.move_to(id, x, y, container) {
            Ok(())
        } else {
            Err(InteractionError::UnknownBox(id))
        }
    }

    /// Replaces the shared style and re-measures every box.
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
        self.remeasure_all();
    }

    fn remeasure_all(&mut self) {
        let updates: Vec<(u32, CanvasSize)> = self
            .layout
            .boxes()
            .iter()
            .map(|b| (b.id, (self.measure)(&self.style, &b.text)))
            .collect();
        for (id, footprint) in updates {
            self.layout.set_footprint(id, footprint);
        }
        self.layout.clamp_all(self.container());
    }

    // Label geometry

    pub fn set_width_mm(&mut self, width_mm: f64) {
        self.label.set_width_mm(width_mm);
        self.layout.clamp_all(self.container());
    }

    pub fn set_height_mm(&mut self, height_mm: f64) {
        self.label.set_height_mm(height_mm);
        self.layout.clamp_all(self.container());
    }

    pub fn set_continuous(&mut self, axis: Axis, continuous: bool) {
        self.label.set_continuous(axis, continuous);
        self.layout.clamp_all(self.container());
    }

    pub fn toggle_rotation(&mut self) {
        self.label.toggle_rotation();
        self.layout.clamp_all(self.container());
        debug!("View rotation is now {:?}", self.label.rotation());
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    // Pointer interaction

    fn control_size(&self) -> f64 {
        HANDLE_SIZE_PX / self.viewport.zoom()
    }

    /// Classifies the screen position under the pointer.
    pub fn hit_test(&self, screen: CanvasPoint) -> PointerTarget {
        let point = self.viewport.screen_to_layout(screen);
        let control_size = self.control_size();

        if let Some(b) = self
            .layout
            .boxes()
            .iter()
            .rev()
            .find(|b| delete_control_rect(b, control_size).contains(point))
        {
            return PointerTarget::DeleteControl(b.id);
        }

        let scene = self.scene();
        if let Some(handle) = scene.handles.iter().find(|h| h.rect.contains(point)) {
            return PointerTarget::ResizeHandle(handle.axis);
        }

        if let Some(id) = self.layout.hit_test(point) {
            return PointerTarget::TextBox(id);
        }

        let container = self.container();
        if point.x >= 0.0 && point.y >= 0.0 && point.x <= container.width && point.y <= container.height
        {
            PointerTarget::Label
        } else {
            PointerTarget::Outside
        }
    }

    fn ensure_idle(&self) -> InteractionResult<()> {
        match self.interaction {
            InteractionState::Idle => Ok(()),
            InteractionState::DraggingBox(active) => Err(InteractionError::DragInProgress { active }),
            other => Err(InteractionError::OperationInProgress {
                active: other.to_string(),
            }),
        }
    }

    /// Begins dragging a box from the screen position `screen`.
    pub fn start_box_drag(&mut self, id: u32, screen: CanvasPoint) -> InteractionResult<()> {
        self.ensure_idle()?;
        let point = self.viewport.screen_to_layout(screen);
        self.layout.start_drag(id, point)?;
        self.interaction = InteractionState::DraggingBox(id);
        Ok(())
    }

    /// Begins a resize drag on a continuous axis.
    pub fn start_resize(&mut self, axis: Axis, screen: CanvasPoint) -> InteractionResult<()> {
        self.ensure_idle()?;
        if !self.label.is_continuous(axis) {
            return Err(InteractionError::AxisNotContinuous(axis));
        }
        let drag = ResizeDrag {
            start_value_mm: self.label.actual(axis),
            start_pointer: screen,
            px_per_mm: self.viewport.px_per_mm(),
        };
        self.interaction = InteractionState::resizing(axis, drag);
        debug!("Resize started on {} at {:.2} mm", axis, drag.start_value_mm);
        Ok(())
    }

    /// Pointer press: deletes, starts a resize or starts a drag depending on
    /// what is under the pointer.
    pub fn pointer_down(&mut self, screen: CanvasPoint) -> InteractionResult<PointerTarget> {
        self.ensure_idle()?;
        let target = self.hit_test(screen);
        match target {
            PointerTarget::DeleteControl(id) => {
                self.remove_text_box(id);
            }
            PointerTarget::ResizeHandle(axis) => self.start_resize(axis, screen)?,
            PointerTarget::TextBox(id) => self.start_box_drag(id, screen)?,
            PointerTarget::Label | PointerTarget::Outside => {}
        }
        Ok(target)
    }

    /// Pointer motion. A no-op while idle.
    pub fn pointer_move(&mut self, screen: CanvasPoint) {
        match self.interaction {
            InteractionState::Idle => {}
            InteractionState::DraggingBox(_) => {
                let point = self.viewport.screen_to_layout(screen);
                let container = self.container();
                if self.layout.update_drag(point, container).is_none() {
                    self.interaction = InteractionState::Idle;
                }
            }
            InteractionState::ResizingWidth(drag) => self.apply_resize(Axis::Width, drag, screen),
            InteractionState::ResizingHeight(drag) => self.apply_resize(Axis::Height, drag, screen),
        }
    }

    fn apply_resize(&mut self, axis: Axis, drag: ResizeDrag, screen: CanvasPoint) {
        let vertical = self.label.axis_is_vertical_on_screen(axis);
        let delta = drag.delta(screen, vertical);
        let value = self
            .label
            .resized_value(drag.start_value_mm, delta, drag.px_per_mm);
        self.label.set_declared(axis, value);
        self.layout.clamp_all(self.container());
    }

    /// Pointer release ends whatever was active.
    pub fn pointer_up(&mut self) {
        self.layout.end_drag();
        if !self.interaction.is_idle() {
            debug!("Pointer released, ending {}", self.interaction);
        }
        self.interaction = InteractionState::Idle;
    }

    // Rendering and capture

    pub fn attach_surface(&mut self, surface: Box<dyn LabelSurface>) {
        self.surface = Some(surface);
    }

    pub fn detach_surface(&mut self) -> Option<Box<dyn LabelSurface>> {
        self.surface.take()
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn capture_settings(&self) -> CaptureSettings {
        self.capture_settings
    }

    pub fn set_capture_settings(&mut self, settings: CaptureSettings) {
        self.capture_settings = settings;
    }

    pub fn scene(&self) -> LabelScene<'_> {
        LabelScene::new(
            &self.label,
            self.layout.boxes(),
            &self.style,
            self.control_size(),
        )
    }

    /// Renders the current view at the viewport zoom.
    pub fn render(&self, mode: RenderMode) -> Result<Pixmap, CaptureError> {
        let surface = self.surface.as_deref().ok_or(CaptureError::NotReady)?;
        let scene = self.scene();
        let scale = self.viewport.zoom() as f32;
        let (width, height) = scene.pixel_size(scale);
        surface
            .snapshot(&scene, mode, scale)
            .ok_or(CaptureError::RenderContext { width, height })
    }

    /// Produces the print bitmap. Leaves the document untouched.
    pub fn capture(&self) -> Result<CapturedLabel, CaptureError> {
        info!(
            "Capturing {} text box(es) on {:.1}x{:.1} mm label",
            self.layout.len(),
            self.label.actual_width(),
            self.label.actual_height()
        );
        capture_label(
            self.surface.as_deref(),
            &self.scene(),
            &self.label,
            &self.capture_settings,
        )
    }

    pub fn print_gate(&self) -> &PrintGate {
        &self.gate
    }

    /// Takes the document's print gate, `None` while a request is in flight.
    pub fn try_begin_print(&self) -> Option<PrintPermit> {
        self.gate.try_acquire()
    }
}
