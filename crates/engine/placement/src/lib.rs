//! Plane-anchored object placement and drag manipulation
//!
//! This crate implements the interactive core of a "place a model on a
//! detected surface and drag it around" experience. The host AR framework
//! supplies plane tracking, hit-testing, anchors, asset loading and
//! rendering behind the [`SceneBackend`] trait; this crate supplies the
//! logic that decides what those facilities are asked to do.
//!
//! # Components
//!
//! - [`CameraFrame`]: snapshot of the camera's forward/right axes
//! - [`DragTranslator`]: pure screen-delta to world-displacement mapping
//! - [`PlacementController`]: state machine owning the single placed object
//! - [`SceneBackend`]: boundary trait to the host scene, with [`NullScene`]
//!   as a no-op fallback
//!
//! # Event flow
//!
//! Raw pointer events arrive from the host: taps that hit a tracked plane
//! go to [`PlacementController::on_plane_tap`] (place or remove), touches
//! routed to the object go to [`PlacementController::on_object_touch`]
//! (drag start/step/end), and model-load outcomes come back through
//! [`PlacementController::on_model_loaded`]. Everything runs on one
//! logical thread.

pub mod camera;
pub mod controller;
pub mod drag;
pub mod error;
pub mod scene;

// Re-export commonly used types at crate root
pub use camera::CameraFrame;
pub use controller::{PlacedObject, PlacementController, PlacementPhase};
pub use drag::{DragConfig, DragState, DragTranslator, DEFAULT_SENSITIVITY};
pub use error::{Error, Result};
pub use scene::{
    AnchorHandle, LoadTicket, ModelHandle, ModelId, NullScene, PlaneHit, SceneBackend,
};
