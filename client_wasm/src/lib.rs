//! Browser host for the Pong simulation
//!
//! Canvas 2D rendering, pointer input and console logging. The page drives
//! the loop: call `render_frame` from every `requestAnimationFrame` callback
//! and forward `mousemove` client Y values to `pointer_moved`.
//!
//! Note: only available when compiling for wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod input;
mod logger;

use game_core::{Clock, Config, LocalGame};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Performance};

/// `performance.now()` as the match clock
struct PerformanceClock(Performance);

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.0.now()
    }
}

struct Client {
    game: LocalGame,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<R>(f: impl FnOnce(&mut Client) -> Result<R, JsValue>) -> Result<R, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => f(client),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Start a match sized to the canvas
#[wasm_bindgen]
pub fn init_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let performance = web_sys::window()
        .and_then(|w| w.performance())
        .ok_or_else(|| JsValue::from_str("performance API unavailable"))?;

    let config = Config::with_field(canvas.width() as f32, canvas.height() as f32);
    let seed = js_sys::Date::now() as u64;
    let game = LocalGame::new(
        config,
        Box::new(PerformanceClock(performance)),
        Box::new(game_core::GameRng::new(seed)),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    CLIENT.with(|cell| {
        *cell.borrow_mut() = Some(Client { game, canvas, ctx });
    });
    Ok(())
}

/// Latch the pointer position from a `mousemove` event's `clientY`
#[wasm_bindgen]
pub fn pointer_moved(client_y: f64) -> Result<(), JsValue> {
    with_client(|client| {
        let y = input::pointer_to_field_y(&client.canvas, client_y);
        client.game.set_pointer_y(y);
        Ok(())
    })
}

/// One tick plus one draw
#[wasm_bindgen]
pub fn render_frame() -> Result<(), JsValue> {
    with_client(|client| {
        let frame = client.game.frame();
        canvas::draw_frame(&client.ctx, &frame)
    })
}

/// One tick, returning the draw list as postcard bytes for hosts that
/// paint on their own
#[wasm_bindgen]
pub fn frame_bytes() -> Result<Vec<u8>, JsValue> {
    with_client(|client| {
        client
            .game
            .frame()
            .to_bytes()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}
