//! End-to-end session test: place, drag, release, remove
//!
//! Drives the controller through a full user session against a recording
//! scene backend, checking the boundary traffic and the accumulated object
//! position at each stage.

use devices::PointerSample;
use glam::{Quat, Vec3};
use placement::{
    AnchorHandle, CameraFrame, DragConfig, LoadTicket, ModelHandle, ModelId, PlaneHit,
    PlacementController, PlacementPhase, SceneBackend,
};

/// In-memory scene that mints handles and records every boundary call
#[derive(Debug, Default)]
struct SessionScene {
    next_handle: u64,
    pending: Vec<(LoadTicket, ModelId)>,
    attached: Vec<(AnchorHandle, ModelHandle)>,
    detached: Vec<AnchorHandle>,
    position_trace: Vec<Vec3>,
    camera_rotation: Quat,
}

impl SceneBackend for SessionScene {
    fn load_model(&mut self, model: &ModelId) -> LoadTicket {
        self.next_handle += 1;
        let ticket = LoadTicket(self.next_handle);
        self.pending.push((ticket, model.clone()));
        ticket
    }

    fn create_anchor(&mut self, _hit: &PlaneHit) -> AnchorHandle {
        self.next_handle += 1;
        AnchorHandle(self.next_handle)
    }

    fn attach_object(&mut self, anchor: AnchorHandle, model: ModelHandle) {
        self.attached.push((anchor, model));
    }

    fn detach_object(&mut self, anchor: AnchorHandle) {
        self.detached.push(anchor);
    }

    fn set_local_position(&mut self, _anchor: AnchorHandle, position: Vec3) {
        self.position_trace.push(position);
    }

    fn camera_frame(&self) -> CameraFrame {
        CameraFrame::from_rotation(self.camera_rotation)
    }
}

impl SessionScene {
    /// Resolve the oldest pending load successfully
    fn resolve_next_load(&mut self, controller: &mut PlacementController) {
        let (ticket, _model) = self.pending.remove(0);
        self.next_handle += 1;
        let handle = ModelHandle(self.next_handle);
        controller.on_model_loaded(ticket, Ok(handle), self);
    }
}

#[test]
fn full_session_place_drag_release_remove() {
    let mut controller =
        PlacementController::new(ModelId::new("model.glb"), DragConfig::default());
    let mut scene = SessionScene::default();

    // Tap a detected plane: load requested, still empty while in flight
    controller.on_plane_tap(
        PlaneHit::new(Vec3::new(0.5, 0.0, -1.5)),
        PointerSample::down(240.0, 400.0),
        &mut scene,
    );
    assert_eq!(controller.phase(), PlacementPhase::Empty);
    assert!(controller.is_load_pending());

    // Load resolves: object anchored at local zero
    scene.resolve_next_load(&mut controller);
    assert_eq!(controller.phase(), PlacementPhase::Placed);
    assert_eq!(scene.attached.len(), 1);
    assert_eq!(controller.placed().unwrap().local_position, Vec3::ZERO);

    // Drag: down, three moves of (+10, -10) px each, up
    controller.on_object_touch(PointerSample::down(240.0, 400.0), &mut scene);
    for i in 1..=3 {
        let consumed = controller.on_object_touch(
            PointerSample::moved(240.0 + 10.0 * i as f32, 400.0 - 10.0 * i as f32),
            &mut scene,
        );
        assert!(consumed);
        assert_eq!(controller.phase(), PlacementPhase::Dragging);
    }
    controller.on_object_touch(PointerSample::up(270.0, 370.0), &mut scene);
    assert_eq!(controller.phase(), PlacementPhase::Placed);

    // Each (+10,-10) px step is (-0.10, 0, +0.10) at default sensitivity
    // in the level frame; three steps accumulate.
    let final_position = controller.placed().unwrap().local_position;
    assert!(final_position.abs_diff_eq(Vec3::new(-0.30, 0.0, 0.30), 1e-5));
    assert_eq!(scene.position_trace.len(), 3);
    assert!(scene
        .position_trace
        .last()
        .unwrap()
        .abs_diff_eq(final_position, 1e-5));

    // Second plane tap removes the object
    let anchor = controller.placed().unwrap().anchor;
    controller.on_plane_tap(
        PlaneHit::new(Vec3::ZERO),
        PointerSample::down(100.0, 100.0),
        &mut scene,
    );
    assert_eq!(controller.phase(), PlacementPhase::Empty);
    assert_eq!(scene.detached, vec![anchor]);
}

#[test]
fn drag_follows_camera_as_it_turns() {
    let mut controller =
        PlacementController::new(ModelId::new("model.glb"), DragConfig::default());
    let mut scene = SessionScene::default();

    controller.on_plane_tap(
        PlaneHit::new(Vec3::ZERO),
        PointerSample::down(0.0, 0.0),
        &mut scene,
    );
    scene.resolve_next_load(&mut controller);

    // Screen-down drag with the camera level: displacement along -Z
    controller.on_object_touch(PointerSample::down(0.0, 0.0), &mut scene);
    controller.on_object_touch(PointerSample::moved(0.0, 10.0), &mut scene);
    let after_level = controller.placed().unwrap().local_position;
    assert!(after_level.abs_diff_eq(Vec3::new(0.0, 0.0, -0.1), 1e-6));

    // Camera yaws 90 degrees; the same screen gesture now moves along -X
    scene.camera_rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    controller.on_object_touch(PointerSample::moved(0.0, 20.0), &mut scene);
    let after_turn = controller.placed().unwrap().local_position;
    assert!(after_turn.abs_diff_eq(Vec3::new(-0.1, 0.0, -0.1), 1e-5));
}
