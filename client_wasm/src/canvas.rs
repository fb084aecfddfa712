//! Executes draw commands on a 2D canvas context

use proto::{DrawCommand, Frame};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const FONT_FAMILY: &str = "Arial";

/// Paint every command in order
pub fn draw_frame(ctx: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), JsValue> {
    for command in &frame.commands {
        match command {
            DrawCommand::Rect { x, y, w, h, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
            }
            DrawCommand::Circle {
                x,
                y,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.begin_path();
                ctx.arc(
                    *x as f64,
                    *y as f64,
                    *radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                )?;
                ctx.close_path();
                ctx.fill();
            }
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                color,
            } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.set_font(&format!("{}px {}", size, FONT_FAMILY));
                ctx.fill_text(text, *x as f64, *y as f64)?;
            }
        }
    }
    Ok(())
}
