//! In-memory scene backend for the testbed
//!
//! Stands in for a real AR framework: mints handles, queues model loads
//! for the driver loop to resolve, keeps a camera that slowly orbits the
//! scene, and records the object's position trace for reporting.

use glam::{Quat, Vec3};
use placement::{
    AnchorHandle, CameraFrame, LoadTicket, ModelHandle, ModelId, PlaneHit, SceneBackend,
};

/// Simulated scene with an orbiting camera
#[derive(Debug, Default)]
pub struct DemoScene {
    next_handle: u64,
    /// Loads started but not yet resolved by the driver
    pending_loads: Vec<(LoadTicket, ModelId)>,
    /// Camera yaw in radians, advanced by the driver each frame
    pub camera_yaw: f32,
    /// Every position pushed through the boundary, in order
    pub position_trace: Vec<Vec3>,
    attached: Option<(AnchorHandle, ModelHandle)>,
}

impl DemoScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest pending load, if any
    ///
    /// The driver resolves it by calling the controller's completion entry
    /// point, mimicking the host delivering the async outcome back onto
    /// the event thread.
    pub fn take_pending_load(&mut self) -> Option<(LoadTicket, ModelId)> {
        if self.pending_loads.is_empty() {
            None
        } else {
            Some(self.pending_loads.remove(0))
        }
    }

    /// Mint a fresh model handle for a resolved load
    pub fn mint_model_handle(&mut self) -> ModelHandle {
        self.next_handle += 1;
        ModelHandle(self.next_handle)
    }

    /// Whether an object is currently attached
    pub fn has_attachment(&self) -> bool {
        self.attached.is_some()
    }
}

impl SceneBackend for DemoScene {
    fn load_model(&mut self, model: &ModelId) -> LoadTicket {
        self.next_handle += 1;
        let ticket = LoadTicket(self.next_handle);
        tracing::debug!(model = %model, ticket = ticket.0, "scene: load queued");
        self.pending_loads.push((ticket, model.clone()));
        ticket
    }

    fn create_anchor(&mut self, hit: &PlaneHit) -> AnchorHandle {
        self.next_handle += 1;
        tracing::debug!(point = ?hit.point, "scene: anchor created");
        AnchorHandle(self.next_handle)
    }

    fn attach_object(&mut self, anchor: AnchorHandle, model: ModelHandle) {
        tracing::debug!(anchor = anchor.0, model = model.0, "scene: object attached");
        self.attached = Some((anchor, model));
    }

    fn detach_object(&mut self, anchor: AnchorHandle) {
        tracing::debug!(anchor = anchor.0, "scene: object detached");
        self.attached = None;
    }

    fn set_local_position(&mut self, _anchor: AnchorHandle, position: Vec3) {
        self.position_trace.push(position);
    }

    fn camera_frame(&self) -> CameraFrame {
        CameraFrame::from_rotation(Quat::from_rotation_y(self.camera_yaw))
    }
}
