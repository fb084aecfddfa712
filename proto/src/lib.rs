//! Boundary types between the Pong simulation and a renderer
//!
//! The simulation emits a `Frame` of draw commands every tick. Hosts that sit on
//! the other side of a wasm or process boundary can move frames as postcard bytes.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Draw Commands
// ============================================================================

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#4caf50`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle, (x, y) is the top-left corner
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },

    /// Filled circle, (x, y) is the center
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },

    /// Text drawn with its baseline starting at (x, y); size in pixels
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

/// Ordered list of draw commands for one tick (painter's order)
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// ============================================================================
// Snapshot
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaddleRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BallCircle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// Everything a renderer needs after a tick
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub player: PaddleRect,
    pub ai: PaddleRect,
    pub ball: BallCircle,
    pub score_player: u32,
    pub score_ai: u32,
    /// Whole seconds since match start (floor)
    pub elapsed_secs: u32,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Snapshot {
    /// Serialize snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
