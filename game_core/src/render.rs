//! Converts a `GameState` into renderer-facing data
//!
//! Nothing here touches a drawing API. Hosts execute the `proto::Frame`
//! commands in order on whatever surface they own.

use crate::{GameState, Side};
use proto::{BallCircle, Color, DrawCommand, Frame, PaddleRect, Snapshot};

pub const BACKGROUND: Color = Color::rgb(0x11, 0x11, 0x11);
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const PLAYER_COLOR: Color = Color::rgb(0x4c, 0xaf, 0x50);
pub const AI_COLOR: Color = Color::rgb(0xf4, 0x43, 0x36);

const NET_WIDTH: f32 = 4.0;
const NET_DASH: f32 = 20.0;
const NET_SPACING: f32 = 30.0;

const HUD_BASELINE: f32 = 50.0;
const SCORE_SIZE: f32 = 35.0;
const TIMER_SIZE: f32 = 20.0;
const TIMER_OFFSET: f32 = 40.0;

pub fn side_color(side: Side) -> Color {
    match side {
        Side::Player => PLAYER_COLOR,
        Side::Ai => AI_COLOR,
    }
}

/// Capture what a renderer needs after a tick
///
/// Returns `None` only if the world lost an entity, which `step` never does.
pub fn snapshot(state: &GameState) -> Option<Snapshot> {
    let player = state.paddle(Side::Player)?;
    let ai = state.paddle(Side::Ai)?;
    let ball = state.ball()?;

    let rect = |p: crate::Paddle| PaddleRect {
        x: p.pos.x,
        y: p.pos.y,
        w: p.size.x,
        h: p.size.y,
        color: side_color(p.side),
    };

    Some(Snapshot {
        player: rect(player),
        ai: rect(ai),
        ball: BallCircle {
            x: ball.pos.x,
            y: ball.pos.y,
            radius: ball.radius,
            color: WHITE,
        },
        score_player: player.score,
        score_ai: ai.score,
        elapsed_secs: state.clock.whole_seconds(),
    })
}

/// Draw list for one tick, back to front
pub fn build_frame(state: &GameState) -> Frame {
    let width = state.config.field_width;
    let height = state.config.field_height;
    let mut frame = Frame::new();

    frame.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        w: width,
        h: height,
        color: BACKGROUND,
    });

    // Dashed net down the middle
    let mut y = 0.0;
    while y < height {
        frame.push(DrawCommand::Rect {
            x: width / 2.0 - NET_WIDTH / 2.0,
            y,
            w: NET_WIDTH,
            h: NET_DASH,
            color: WHITE,
        });
        y += NET_SPACING;
    }

    let Some(snap) = snapshot(state) else {
        log::warn!("Game world is missing an entity, drawing field only");
        return frame;
    };

    frame.push(DrawCommand::Text {
        text: snap.score_player.to_string(),
        x: width / 4.0,
        y: HUD_BASELINE,
        size: SCORE_SIZE,
        color: PLAYER_COLOR,
    });
    frame.push(DrawCommand::Text {
        text: snap.score_ai.to_string(),
        x: 3.0 * width / 4.0,
        y: HUD_BASELINE,
        size: SCORE_SIZE,
        color: AI_COLOR,
    });
    frame.push(DrawCommand::Text {
        text: format!("⏱ {}s", snap.elapsed_secs),
        x: width / 2.0 - TIMER_OFFSET,
        y: HUD_BASELINE,
        size: TIMER_SIZE,
        color: WHITE,
    });

    for paddle in [snap.player, snap.ai] {
        frame.push(DrawCommand::Rect {
            x: paddle.x,
            y: paddle.y,
            w: paddle.w,
            h: paddle.h,
            color: paddle.color,
        });
    }

    frame.push(DrawCommand::Circle {
        x: snap.ball.x,
        y: snap.ball.y,
        radius: snap.ball.radius,
        color: snap.ball.color,
    });

    frame
}
