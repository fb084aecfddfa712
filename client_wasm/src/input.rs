//! Pointer input handling

use web_sys::HtmlCanvasElement;

/// Convert a pointer event's client Y into field coordinates
///
/// Clamping is left to the simulation.
pub fn pointer_to_field_y(canvas: &HtmlCanvasElement, client_y: f64) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (client_y - rect.top()) as f32
}
