//! Stamp image handling and drag positioning

use crate::model::DocumentState;
use crate::{DocError, Result};
use serde::{Deserialize, Serialize};

/// Stamp anchor point, as percentages of the first page's rendered box
///
/// Both coordinates are kept in [0, 100]; the stamp is anchored at its
/// own center when rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StampPosition {
    pub x: f64,
    pub y: f64,
}

impl StampPosition {
    /// Clamp both coordinates to [0, 100]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 100.0),
            y: self.y.clamp(0.0, 100.0),
        }
    }
}

/// A decoded, validated stamp image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StampImage {
    /// Original encoded bytes (JPEG or PNG), handed to the renderer as-is
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl StampImage {
    /// Decode uploaded bytes and capture the pixel dimensions
    ///
    /// # Errors
    /// Returns [`DocError::StampDecodeError`] when the bytes are not a
    /// decodable JPEG or PNG image.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| DocError::StampDecodeError(e.to_string()))?;
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            data: bytes,
        })
    }

    /// Encoded image bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel dimensions of the decoded image
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Drag gesture state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Discrete idle -> dragging -> idle gesture for positioning the stamp
///
/// Movement events only take effect while a drag is active; every update
/// commits a clamped position to the document, so the invariant on
/// [`StampPosition`] holds mid-gesture as well.
#[derive(Debug, Default)]
pub struct StampDrag {
    state: DragState,
}

impl StampDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag gesture
    pub fn start(&mut self) {
        self.state = DragState::Dragging;
    }

    /// Handle a movement event at (x, y) percent of the page box
    ///
    /// Ignored unless a drag is active.
    pub fn update(&mut self, doc: &mut DocumentState, x: f64, y: f64) {
        if self.state == DragState::Dragging {
            doc.set_stamp_position(x, y);
        }
    }

    /// End the gesture
    pub fn finish(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }
}
