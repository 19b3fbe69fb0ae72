//! Placement Testbed
//!
//! Headless demo for the placement library: wires an in-memory scene
//! backend to the controller and runs a scripted tap-and-drag session,
//! printing the object's position trace.
//!
//! Drag tuning can be loaded from a TOML file with `--config <path>` or
//! overridden directly with `--sensitivity`.

mod scene;

use anyhow::Context;
use clap::Parser;
use devices::PointerSample;
use glam::Vec3;
use placement::{DragConfig, ModelId, PlaneHit, PlacementController, PlacementPhase};
use scene::DemoScene;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Placement Testbed
///
/// Runs a scripted place/drag/remove session against a simulated scene.
#[derive(Parser)]
#[command(name = "testbed")]
#[command(about = "Headless tap-and-drag session against a simulated AR scene")]
struct Args {
    /// Asset name to place
    #[arg(long, default_value = "model.glb")]
    model: String,

    /// Drag tuning file (TOML, fields of DragConfig)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the pixel-to-world sensitivity
    #[arg(long)]
    sensitivity: Option<f32>,

    /// Number of drag move samples to simulate
    #[arg(long, default_value_t = 24)]
    steps: u32,

    /// Camera yaw advance per step, degrees
    #[arg(long, default_value_t = 1.5)]
    orbit_per_step: f32,
}

fn load_drag_config(args: &Args) -> anyhow::Result<DragConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading drag config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("parsing drag config {}", path.display()))?
        }
        None => DragConfig::default(),
    };
    if let Some(sensitivity) = args.sensitivity {
        config.sensitivity = sensitivity;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_drag_config(&args)?;

    println!("=== Placement Testbed ===");
    println!("Model: {}", args.model);
    println!("Sensitivity: {} world units/px", config.sensitivity);
    println!("Drag steps: {}\n", args.steps);

    let mut controller = PlacementController::new(ModelId::new(&args.model), config);
    let mut scene = DemoScene::new();

    // Tap a detected plane roughly in front of the camera
    let tap = PointerSample::down(240.0, 420.0);
    controller.on_plane_tap(PlaneHit::new(Vec3::new(0.3, 0.0, -1.2)), tap, &mut scene);
    anyhow::ensure!(
        controller.is_load_pending(),
        "plane tap did not start a model load"
    );

    // The host event loop would deliver the load result later; here the
    // driver resolves it immediately on the same thread.
    if let Some((ticket, model)) = scene.take_pending_load() {
        tracing::info!(%model, "resolving simulated model load");
        let handle = scene.mint_model_handle();
        controller.on_model_loaded(ticket, Ok(handle), &mut scene);
    }
    anyhow::ensure!(
        controller.phase() == PlacementPhase::Placed,
        "object was not placed"
    );
    println!("Object placed at local origin");

    // Drag diagonally up-right while the camera orbits
    controller.on_object_touch(tap, &mut scene);
    let mut x = tap.x();
    let mut y = tap.y();
    for _ in 0..args.steps {
        x += 4.0;
        y -= 3.0;
        controller.on_object_touch(PointerSample::moved(x, y), &mut scene);
        scene.camera_yaw += args.orbit_per_step.to_radians();
    }
    controller.on_object_touch(PointerSample::up(x, y), &mut scene);

    println!("\nPosition trace ({} steps):", scene.position_trace.len());
    for (i, position) in scene.position_trace.iter().enumerate() {
        println!(
            "  step {:>3}: ({:+.4}, {:+.4}, {:+.4})",
            i + 1,
            position.x,
            position.y,
            position.z
        );
    }
    let final_position = controller
        .placed()
        .map(|object| object.local_position)
        .unwrap_or(Vec3::ZERO);
    println!(
        "\nFinal local position: ({:+.4}, {:+.4}, {:+.4})",
        final_position.x, final_position.y, final_position.z
    );

    // Second plane tap removes the object again
    controller.on_plane_tap(
        PlaneHit::new(Vec3::ZERO),
        PointerSample::down(100.0, 100.0),
        &mut scene,
    );
    anyhow::ensure!(
        controller.phase() == PlacementPhase::Empty && !scene.has_attachment(),
        "object was not removed"
    );
    println!("Object removed by second plane tap");

    Ok(())
}
