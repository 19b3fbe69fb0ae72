//! Scene backend trait for host-side AR plumbing
//!
//! This module defines the boundary the placement controller talks through.
//! Plane tracking, hit-testing, anchor lifecycle, asset decoding and
//! rendering all live on the host side of this trait; the controller only
//! issues the calls below and never inspects their internals.

use crate::camera::CameraFrame;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Named asset to load as the manipulable object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub String);

impl ModelId {
    /// Create a model id from an asset name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a loaded renderable, minted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelHandle(pub u64);

/// Opaque handle to a world-space anchor, minted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorHandle(pub u64);

/// Identifies one in-flight model load
///
/// Returned by [`SceneBackend::load_model`] and echoed back by the host
/// when the load resolves, so the controller can drop completions that no
/// longer correspond to the load it is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket(pub u64);

/// World-space result of a successful plane hit-test
///
/// Produced by the host's tracking subsystem when a tap intersects a
/// detected plane. The controller forwards it to the backend to mint an
/// anchor; it never interprets the point itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Intersection point on the detected plane, world coordinates
    pub point: Vec3,
}

impl PlaneHit {
    /// Create a hit at the given world-space point
    pub fn new(point: Vec3) -> Self {
        Self { point }
    }
}

/// Trait for scene backends (AR framework adapters, test doubles)
///
/// Implementations bridge to the host's scene graph and tracking stack.
/// The backend is responsible for:
/// - Building renderables from named assets (asynchronously)
/// - Minting anchors at hit-test locations
/// - Attaching/detaching the object in the renderable scene
/// - Reporting the camera's current orientation
///
/// All calls arrive on one logical thread; implementations need no internal
/// locking on the controller's account. Model loading is fire-and-forget
/// from the controller's perspective: the backend starts the load and the
/// host later delivers the outcome to
/// [`PlacementController::on_model_loaded`] on the same thread.
///
/// [`PlacementController::on_model_loaded`]: crate::controller::PlacementController::on_model_loaded
pub trait SceneBackend {
    /// Start building a renderable from a named asset
    ///
    /// Returns a ticket identifying this load. The backend must hand the
    /// same ticket back to the host for the completion callback.
    fn load_model(&mut self, model: &ModelId) -> LoadTicket;

    /// Mint a world-space anchor at a plane hit location
    fn create_anchor(&mut self, hit: &PlaneHit) -> AnchorHandle;

    /// Attach a loaded renderable to the scene under the given anchor
    fn attach_object(&mut self, anchor: AnchorHandle, model: ModelHandle);

    /// Remove the object attached under the given anchor from the scene
    fn detach_object(&mut self, anchor: AnchorHandle);

    /// Push a new anchor-relative position for the attached object
    fn set_local_position(&mut self, anchor: AnchorHandle, position: Vec3);

    /// Current camera forward/right vectors in world space
    ///
    /// Queried fresh on every drag step; backends should not require this
    /// to be cheap-cached by the caller.
    fn camera_frame(&self) -> CameraFrame;
}

/// A no-op scene backend for hosts without a scene attached
///
/// Useful as a fallback and as a base for test doubles: every operation
/// succeeds trivially, handles are all zero, and the camera is level.
#[derive(Debug, Default)]
pub struct NullScene;

impl NullScene {
    /// Create a new null scene
    pub fn new() -> Self {
        Self
    }
}

impl SceneBackend for NullScene {
    fn load_model(&mut self, _model: &ModelId) -> LoadTicket {
        LoadTicket(0)
    }

    fn create_anchor(&mut self, _hit: &PlaneHit) -> AnchorHandle {
        AnchorHandle(0)
    }

    fn attach_object(&mut self, _anchor: AnchorHandle, _model: ModelHandle) {
        // No-op
    }

    fn detach_object(&mut self, _anchor: AnchorHandle) {
        // No-op
    }

    fn set_local_position(&mut self, _anchor: AnchorHandle, _position: Vec3) {
        // No-op
    }

    fn camera_frame(&self) -> CameraFrame {
        CameraFrame::LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_scene() {
        let mut scene = NullScene::new();

        let ticket = scene.load_model(&ModelId::new("chair"));
        assert_eq!(ticket, LoadTicket(0));

        let anchor = scene.create_anchor(&PlaneHit::new(Vec3::ZERO));
        scene.attach_object(anchor, ModelHandle(0)); // Should not panic
        scene.set_local_position(anchor, Vec3::ONE);
        scene.detach_object(anchor);
        assert_eq!(scene.camera_frame(), CameraFrame::LEVEL);
    }

    #[test]
    fn test_model_id_display() {
        assert_eq!(ModelId::new("couch.glb").to_string(), "couch.glb");
    }
}
