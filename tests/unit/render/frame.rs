use super::*;
use crate::{
    math::vec3::Vec3,
    render::capture::CaptureTarget,
    scene::light::DirectionalLight,
    scene::node::{GeometryInfo, NodeId},
};
use std::f32::consts::FRAC_PI_2;

fn viewport() -> Viewport {
    Viewport {
        width: 800,
        height: 600,
    }
}

fn rig() -> (Scene, NodeId, NodeId) {
    let mut scene = Scene::new();
    let parent = scene.spawn(
        "parent",
        GeometryInfo {
            vertex_count: 36,
            center: None,
        },
    );
    {
        let t = &mut scene.node_mut(parent).unwrap().transform;
        t.position = Vec3::new(0.0, 0.0, -300.0);
        t.rotation.y = FRAC_PI_2;
    }
    let child = scene
        .spawn_child(
            "child",
            GeometryInfo {
                vertex_count: 24,
                center: None,
            },
            parent,
        )
        .unwrap();
    scene.node_mut(child).unwrap().transform.position = Vec3::new(0.0, 0.0, 140.0);
    scene.add_light(DirectionalLight::default());
    (scene, parent, child)
}

#[test]
fn frame_draws_nodes_in_insertion_order() {
    let (scene, parent, child) = rig();
    let mut capture = CaptureTarget::new();
    let stats = render_frame(&scene, &Camera::default(), viewport(), &mut capture).unwrap();

    assert_eq!(stats.nodes_drawn, 2);
    let frame = capture.last_frame().unwrap();
    assert_eq!(frame.viewport, viewport());
    assert_eq!(frame.draws.len(), 2);
    assert_eq!(frame.draws[0].node, parent);
    assert_eq!(frame.draws[1].node, child);
    assert_eq!(frame.draws[0].vertex_count, 36);
    assert_eq!(frame.draws[1].vertex_count, 24);
}

#[test]
fn frame_uniforms_follow_the_parent_chain() {
    let (scene, _, child) = rig();
    let camera = Camera::default();
    let mut capture = CaptureTarget::new();
    render_frame(&scene, &camera, viewport(), &mut capture).unwrap();

    let world = scene.world_transform(child).unwrap();
    let projection = camera.projection_matrix(viewport().aspect());
    let draw = &capture.last_frame().unwrap().draws[1];
    assert_eq!(draw.uniforms.world_view_projection, projection * world);
    assert_eq!(draw.uniforms.normal_matrix, world.invert().transpose());
}

#[test]
fn frame_validates_before_touching_the_target() {
    let (mut scene, parent, _) = rig();
    scene.node_mut(parent).unwrap().transform.position.x = f32::NAN;

    let mut capture = CaptureTarget::new();
    let err = render_frame(&scene, &Camera::default(), viewport(), &mut capture).unwrap_err();
    assert!(matches!(err, OrreryError::Validation(_)));
    assert!(capture.frames().is_empty());
}

#[test]
fn zero_viewport_is_rejected() {
    let (scene, _, _) = rig();
    let bad = Viewport {
        width: 0,
        height: 600,
    };
    let mut capture = CaptureTarget::new();
    assert!(render_frame(&scene, &Camera::default(), bad, &mut capture).is_err());
}

#[test]
fn degenerate_scale_renders_with_zero_normal_matrix() {
    let (mut scene, parent, _) = rig();
    scene.node_mut(parent).unwrap().transform.scale = Vec3::new(1.0, 0.0, 1.0);

    let mut capture = CaptureTarget::new();
    render_frame(&scene, &Camera::default(), viewport(), &mut capture).unwrap();
    let draw = &capture.last_frame().unwrap().draws[0];
    assert_eq!(draw.uniforms.normal_matrix, Mat4::ZERO);
}

#[test]
fn lights_ride_along_with_every_draw() {
    let (mut scene, _, _) = rig();
    scene.add_light(DirectionalLight::new(Vec3::new(-1.0, 0.0, 0.0)).unwrap());

    let mut capture = CaptureTarget::new();
    render_frame(&scene, &Camera::default(), viewport(), &mut capture).unwrap();
    for draw in &capture.last_frame().unwrap().draws {
        assert_eq!(draw.lights.len(), 2);
        assert_eq!(draw.lights, scene.lights().to_vec());
    }
}

#[test]
fn empty_scene_still_opens_and_closes_a_frame() {
    let scene = Scene::new();
    let mut capture = CaptureTarget::new();
    let stats = render_frame(&scene, &Camera::default(), viewport(), &mut capture).unwrap();
    assert_eq!(stats.nodes_drawn, 0);
    assert_eq!(capture.frames().len(), 1);
    assert!(capture.last_frame().unwrap().draws.is_empty());
}

#[test]
fn rendering_twice_from_the_same_state_is_deterministic() {
    let (scene, _, _) = rig();
    let mut capture = CaptureTarget::new();
    render_frame(&scene, &Camera::default(), viewport(), &mut capture).unwrap();
    render_frame(&scene, &Camera::default(), viewport(), &mut capture).unwrap();

    let first = serde_json::to_string(&capture.frames()[0]).unwrap();
    let second = serde_json::to_string(&capture.frames()[1]).unwrap();
    assert_eq!(first, second);
}
