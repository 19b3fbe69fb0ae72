//! Pointer input support
//!
//! This module provides types for handling single-pointer input (touch or
//! mouse) in window coordinates. Samples are produced by the host windowing
//! layer and consumed immediately; nothing here stores history.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer event phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    /// The pointer made contact with the screen
    Down,
    /// The pointer moved while in contact
    Move,
    /// The pointer was lifted from the screen
    Up,
    /// The sequence was aborted by the host (e.g., an interrupting dialog)
    Cancelled,
}

impl PointerPhase {
    /// Check whether this phase ends a pointer sequence
    ///
    /// `Up` and `Cancelled` both terminate a gesture; consumers that only
    /// care about "the finger left the screen" can use this instead of
    /// matching both variants.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PointerPhase::Up | PointerPhase::Cancelled)
    }
}

/// A single pointer sample in window coordinates
///
/// Standard screen convention: x grows rightward, y grows downward, units
/// are pixels. One sample is delivered per input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Position of the pointer in window coordinates
    pub position: Vec2,
    /// The phase of this sample
    pub phase: PointerPhase,
}

impl PointerSample {
    /// Create a sample with an explicit phase
    pub fn new(position: Vec2, phase: PointerPhase) -> Self {
        Self { position, phase }
    }

    /// Create a `Down` sample at the given position
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), PointerPhase::Down)
    }

    /// Create a `Move` sample at the given position
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), PointerPhase::Move)
    }

    /// Create an `Up` sample at the given position
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), PointerPhase::Up)
    }

    /// Create a `Cancelled` sample at the given position
    pub fn cancelled(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), PointerPhase::Cancelled)
    }

    /// Horizontal position in pixels
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Vertical position in pixels
    pub fn y(&self) -> f32 {
        self.position.y
    }
}
