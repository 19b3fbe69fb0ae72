//! Placement state machine
//!
//! Owns the single manipulable object and routes host pointer events to
//! place, drag, or remove logic. All entry points run on one logical
//! thread; the only asynchronous boundary is model loading, whose outcome
//! the host delivers back through [`PlacementController::on_model_loaded`]
//! on that same thread.

use crate::drag::{DragConfig, DragState, DragTranslator};
use crate::error::Error;
use crate::scene::{AnchorHandle, LoadTicket, ModelHandle, ModelId, PlaneHit, SceneBackend};
use devices::{PointerPhase, PointerSample};
use glam::Vec3;

/// Observable state of the placement controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPhase {
    /// No object placed (a model load may still be in flight)
    Empty,
    /// Object placed and at rest
    Placed,
    /// Object placed and currently following the pointer
    Dragging,
}

/// The one object currently anchored in the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject {
    /// Anchor the object hangs under
    pub anchor: AnchorHandle,
    /// Renderable attached at that anchor
    pub model: ModelHandle,
    /// Position relative to the anchor, accumulated over drag steps
    pub local_position: Vec3,
}

/// A model load the controller is waiting on
#[derive(Debug, Clone, Copy)]
struct PendingLoad {
    ticket: LoadTicket,
    hit: PlaneHit,
}

/// State machine owning the single placed object
///
/// At most one [`PlacedObject`] exists at any time. Taps on a detected
/// plane place the object when nothing is placed and remove it when
/// something is; touches routed to the object itself start, advance, and
/// end drags. Placement and dragging are deliberately mutually exclusive
/// trigger paths: a plane tap never moves an existing object.
///
/// # Example
///
/// ```
/// use devices::PointerSample;
/// use glam::Vec3;
/// use placement::{
///     DragConfig, LoadTicket, ModelHandle, ModelId, NullScene, PlacementController,
///     PlacementPhase, PlaneHit,
/// };
///
/// let mut controller = PlacementController::new(ModelId::new("chair.glb"), DragConfig::default());
/// let mut scene = NullScene::new();
///
/// // Tap a detected plane, then let the host deliver the load result
/// controller.on_plane_tap(PlaneHit::new(Vec3::ZERO), PointerSample::down(10.0, 10.0), &mut scene);
/// controller.on_model_loaded(LoadTicket(0), Ok(ModelHandle(1)), &mut scene);
/// assert_eq!(controller.phase(), PlacementPhase::Placed);
/// ```
#[derive(Debug)]
pub struct PlacementController {
    model: ModelId,
    translator: DragTranslator,
    placed: Option<PlacedObject>,
    pending: Option<PendingLoad>,
    drag: DragState,
    dragging: bool,
}

impl PlacementController {
    /// Create a controller for the given asset with the given drag tuning
    pub fn new(model: ModelId, config: DragConfig) -> Self {
        Self {
            model,
            translator: DragTranslator::new(config),
            placed: None,
            pending: None,
            drag: DragState::default(),
            dragging: false,
        }
    }

    /// Current observable phase
    pub fn phase(&self) -> PlacementPhase {
        if self.dragging {
            PlacementPhase::Dragging
        } else if self.placed.is_some() {
            PlacementPhase::Placed
        } else {
            PlacementPhase::Empty
        }
    }

    /// The placed object, if one exists
    pub fn placed(&self) -> Option<&PlacedObject> {
        self.placed.as_ref()
    }

    /// Whether a model load is in flight
    pub fn is_load_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The asset this controller places
    pub fn model_id(&self) -> &ModelId {
        &self.model
    }

    /// Host entry point: a tap landed on a detected plane
    ///
    /// Decides place versus remove. Taps that arrive while a load is
    /// already in flight are ignored, so a double tap cannot start two
    /// concurrent loads.
    pub fn on_plane_tap(
        &mut self,
        hit: PlaneHit,
        sample: PointerSample,
        scene: &mut dyn SceneBackend,
    ) {
        // The plane tap doubles as the drag baseline when the pointer
        // comes down: the next Move must measure from here.
        if sample.phase == PointerPhase::Down {
            self.drag.begin(sample.position);
        }

        if let Some(object) = self.placed.take() {
            // Any further plane tap while placed removes the object
            scene.detach_object(object.anchor);
            self.dragging = false;
            self.drag = DragState::default();
            tracing::info!(anchor = object.anchor.0, "removed placed object");
            return;
        }

        if self.pending.is_some() {
            tracing::debug!("plane tap ignored, model load already in flight");
            return;
        }

        let ticket = scene.load_model(&self.model);
        self.pending = Some(PendingLoad { ticket, hit });
        tracing::info!(model = %self.model, ticket = ticket.0, "model load requested");
    }

    /// Host entry point: a previously requested model load resolved
    ///
    /// Completions whose ticket does not match the load currently pending
    /// are stale (the tap that caused them was superseded) and dropped.
    /// On success the object is anchored at the recorded hit location at
    /// local position zero; on failure the controller logs and stays empty.
    pub fn on_model_loaded(
        &mut self,
        ticket: LoadTicket,
        result: Result<ModelHandle, Error>,
        scene: &mut dyn SceneBackend,
    ) {
        let Some(pending) = self.pending else {
            tracing::debug!(ticket = ticket.0, "load completion with nothing pending");
            return;
        };
        if pending.ticket != ticket {
            tracing::debug!(
                ticket = ticket.0,
                pending = pending.ticket.0,
                "stale load completion dropped"
            );
            return;
        }
        self.pending = None;

        match result {
            Ok(model) => {
                let anchor = scene.create_anchor(&pending.hit);
                scene.attach_object(anchor, model);
                self.placed = Some(PlacedObject {
                    anchor,
                    model,
                    local_position: Vec3::ZERO,
                });
                tracing::info!(anchor = anchor.0, model = model.0, "object placed");
            }
            Err(e) => {
                // No retry path; the user can simply tap again.
                tracing::warn!(model = %self.model, error = %e, "model load failed");
            }
        }
    }

    /// Host entry point: a touch event routed to the placed object
    ///
    /// Returns whether the event was consumed. `Down` starts a drag,
    /// `Move` advances it by the screen delta mapped through the live
    /// camera frame, and `Up`/`Cancelled` (or any unrecognized phase)
    /// ends it, leaving the object where it is. A `Move` without a
    /// preceding `Down` measures from the stale previous position, which
    /// can produce one large step; that matches the reference behavior
    /// and is not clamped.
    pub fn on_object_touch(
        &mut self,
        sample: PointerSample,
        scene: &mut dyn SceneBackend,
    ) -> bool {
        let Some(object) = self.placed.as_mut() else {
            return false;
        };

        match sample.phase {
            PointerPhase::Down => {
                self.drag.begin(sample.position);
                self.dragging = true;
                tracing::debug!(x = sample.x(), y = sample.y(), "drag started");
            }
            PointerPhase::Move => {
                let delta = self.drag.step(sample.position);
                let frame = scene.camera_frame();
                let displacement = self.translator.translate(delta, &frame);
                object.local_position += displacement;
                scene.set_local_position(object.anchor, object.local_position);
                self.dragging = true;
                tracing::trace!(
                    dx = delta.x,
                    dy = delta.y,
                    position = ?object.local_position,
                    "drag step"
                );
            }
            PointerPhase::Up | PointerPhase::Cancelled => {
                if self.dragging {
                    tracing::debug!(position = ?object.local_position, "drag ended");
                }
                self.dragging = false;
            }
        }
        true
    }
}
