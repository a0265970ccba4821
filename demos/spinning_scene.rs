//! Headless run of a three-level spinning rig.
//!
//! Builds a sun/planet/moon parent chain, spins every node a little each
//! frame, and renders through a [`CaptureTarget`] so the whole thing runs
//! without a graphics device. Run with:
//!
//! ```sh
//! cargo run --example spinning_scene
//! ```

use orrery::{
    Camera, CaptureTarget, DirectionalLight, GeometryInfo, Scene, Vec3, Viewport, render_frame,
};
use std::f32::consts::PI;

const FRAMES: u32 = 120;
const SPIN_PER_FRAME: f32 = PI / 140.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut scene = Scene::new();
    let cube = GeometryInfo {
        vertex_count: 36,
        center: None,
    };

    let sun = scene.spawn("sun", cube);
    {
        let t = &mut scene.node_mut(sun)?.transform;
        t.position = Vec3::new(-40.0, -60.0, -300.0);
        t.scale = Vec3::new(0.5, 0.5, 0.5);
    }

    let planet = scene.spawn_child("planet", cube, sun)?;
    {
        let t = &mut scene.node_mut(planet)?.transform;
        t.position = Vec3::new(0.0, 0.0, 140.0);
        t.scale = Vec3::new(0.5, 0.5, 0.5);
    }

    let moon = scene.spawn_child("moon", cube, planet)?;
    {
        let t = &mut scene.node_mut(moon)?.transform;
        t.position = Vec3::new(0.0, 0.0, 80.0);
        t.scale = Vec3::new(0.5, 0.5, 0.5);
    }

    scene.add_light(DirectionalLight::default());

    let camera = Camera::default();
    let viewport = Viewport {
        width: 800,
        height: 600,
    };
    let mut capture = CaptureTarget::new();
    let spinners = scene.node_ids();

    for frame in 0..FRAMES {
        for &id in &spinners {
            let t = &mut scene.node_mut(id)?.transform;
            t.rotation.y = (t.rotation.y + SPIN_PER_FRAME) % (2.0 * PI);
        }
        let stats = render_frame(&scene, &camera, viewport, &mut capture)?;
        tracing::debug!(frame, nodes = stats.nodes_drawn, "rendered");
    }

    let last = capture
        .last_frame()
        .expect("at least one frame was rendered");
    let moon_clip = last.draws[moon.0]
        .uniforms
        .world_view_projection
        .project_point(Vec3::ZERO);

    println!(
        "rendered {} frames of {} nodes; moon ended at clip position {:?}",
        capture.frames().len(),
        scene.len(),
        moon_clip
    );
    Ok(())
}
