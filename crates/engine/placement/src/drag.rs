//! Screen-delta to world-displacement mapping
//!
//! The core of the drag gesture: a signed pixel delta on the viewport plus
//! the current [`CameraFrame`] produce a world-space displacement. Dragging
//! up on screen moves the object away from the viewer along the camera's
//! forward axis; dragging sideways moves it along the camera's lateral
//! axis. No vertical (world-Y) component is ever produced directly, so the
//! object slides in the plane spanned by the camera's forward/right axes,
//! which approximates the detected surface while the camera is roughly
//! level.

use crate::camera::CameraFrame;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Default pixel-to-world scale factor
pub const DEFAULT_SENSITIVITY: f32 = 0.01;

/// Tunable drag parameters
///
/// Loadable from host configuration; `sensitivity` converts pixel units to
/// world units per drag step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// World units of displacement per pixel of pointer travel
    pub sensitivity: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

/// Pure mapping from pointer deltas to world displacements
///
/// Stateless apart from the fixed sensitivity; calling [`translate`] twice
/// with the same inputs returns the same output.
///
/// [`translate`]: DragTranslator::translate
#[derive(Debug, Clone, Copy)]
pub struct DragTranslator {
    sensitivity: f32,
}

impl DragTranslator {
    /// Create a translator with the given configuration
    pub fn new(config: DragConfig) -> Self {
        Self {
            sensitivity: config.sensitivity,
        }
    }

    /// The pixel-to-world scale in effect
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Map a screen-space pointer delta to a world-space displacement
    ///
    /// `delta` is current minus previous pointer position in pixels,
    /// screen convention (x right-positive, y down-positive). The result is
    ///
    /// ```text
    /// frame.forward * (delta.y * sensitivity) + frame.right * (-delta.x * sensitivity)
    /// ```
    ///
    /// The frame's vectors are used as-is; a non-orthonormal frame degrades
    /// the mapping but is not corrected here.
    pub fn translate(&self, delta: Vec2, frame: &CameraFrame) -> Vec3 {
        let translation_x = -delta.x * self.sensitivity;
        let translation_y = delta.y * self.sensitivity;
        frame.forward * translation_y + frame.right * translation_x
    }
}

impl Default for DragTranslator {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

/// Last observed pointer position during a drag
///
/// Updated on every `Down` and `Move` sample; the value is stale (carried
/// over from the previous gesture) when a `Move` arrives without a
/// preceding `Down`, which produces a single large step rather than an
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// Previous pointer position in window coordinates
    pub previous: Vec2,
}

impl DragState {
    /// Record a new anchor position (pointer down)
    pub fn begin(&mut self, position: Vec2) {
        self.previous = position;
    }

    /// Advance to `position`, returning the delta from the previous sample
    pub fn step(&mut self, position: Vec2) -> Vec2 {
        let delta = position - self.previous;
        self.previous = position;
        delta
    }
}
