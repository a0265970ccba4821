use super::*;
use crate::math::vec3::Vec3;
use std::f32::consts::FRAC_PI_2;

fn cube() -> GeometryInfo {
    GeometryInfo {
        vertex_count: 36,
        center: None,
    }
}

fn assert_vec3_near(a: Vec3, b: Vec3, tol: f32) {
    assert!(
        (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol && (a.z - b.z).abs() < tol,
        "{a:?} != {b:?} (tol {tol})"
    );
}

#[test]
fn spawn_hands_out_ids_in_paint_order() {
    let mut scene = Scene::new();
    let a = scene.spawn("a", cube());
    let b = scene.spawn("b", cube());
    assert_eq!(a, NodeId(0));
    assert_eq!(b, NodeId(1));
    assert_eq!(scene.node_ids(), vec![a, b]);
    assert_eq!(scene.len(), 2);
    assert!(!scene.is_empty());
}

#[test]
fn spawn_seeds_pivot_from_geometry_center() {
    let mut scene = Scene::new();
    let geometry = GeometryInfo {
        vertex_count: 16,
        center: Some(Vec3::new(0.0, 25.0, 0.0)),
    };
    let id = scene.spawn("f", geometry);
    assert_eq!(
        scene.node(id).unwrap().transform.pivot,
        Vec3::new(0.0, 25.0, 0.0)
    );

    let plain = scene.spawn("plain", cube());
    assert_eq!(scene.node(plain).unwrap().transform.pivot, Vec3::ZERO);
}

#[test]
fn world_equals_local_without_parent() {
    let mut scene = Scene::new();
    let id = scene.spawn("root", cube());
    scene.node_mut(id).unwrap().transform.position = Vec3::new(3.0, 1.0, -2.0);
    assert_eq!(
        scene.world_transform(id).unwrap(),
        scene.local_transform(id).unwrap()
    );
}

#[test]
fn world_accumulates_parent_then_child() {
    let mut scene = Scene::new();
    let parent = scene.spawn("parent", cube());
    {
        let t = &mut scene.node_mut(parent).unwrap().transform;
        t.position = Vec3::new(10.0, 0.0, 0.0);
        t.rotation.y = FRAC_PI_2;
    }
    let child = scene.spawn_child("child", cube(), parent).unwrap();
    scene.node_mut(child).unwrap().transform.position = Vec3::new(1.0, 0.0, 0.0);

    // The child's offset is rotated by the parent before the parent's
    // translation applies.
    let origin = scene
        .world_transform(child)
        .unwrap()
        .transform_point(Vec3::ZERO);
    assert_vec3_near(origin, Vec3::new(10.0, 0.0, -1.0), 1e-5);
}

#[test]
fn world_is_the_composed_chain_of_locals() {
    let mut scene = Scene::new();
    let a = scene.spawn("a", cube());
    let b = scene.spawn_child("b", cube(), a).unwrap();
    let c = scene.spawn_child("c", cube(), b).unwrap();
    scene.node_mut(a).unwrap().transform.position = Vec3::new(1.0, 0.0, 0.0);
    scene.node_mut(b).unwrap().transform.position = Vec3::new(0.0, 2.0, 0.0);
    scene.node_mut(c).unwrap().transform.position = Vec3::new(0.0, 0.0, 3.0);

    let composed = Mat4::compose(&[
        scene.local_transform(a).unwrap(),
        scene.local_transform(b).unwrap(),
        scene.local_transform(c).unwrap(),
    ]);
    assert_eq!(scene.world_transform(c).unwrap(), composed);
    assert_vec3_near(
        composed.transform_point(Vec3::ZERO),
        Vec3::new(1.0, 2.0, 3.0),
        1e-6,
    );
}

#[test]
fn reparent_rewires_the_chain() {
    let mut scene = Scene::new();
    let a = scene.spawn("a", cube());
    let b = scene.spawn("b", cube());
    let c = scene.spawn_child("c", cube(), a).unwrap();
    scene.node_mut(a).unwrap().transform.position = Vec3::new(5.0, 0.0, 0.0);
    scene.node_mut(b).unwrap().transform.position = Vec3::new(0.0, 7.0, 0.0);

    let under_a = scene.world_transform(c).unwrap();
    assert_vec3_near(under_a.transform_point(Vec3::ZERO), Vec3::new(5.0, 0.0, 0.0), 1e-6);

    scene.set_parent(c, Some(b)).unwrap();
    let under_b = scene.world_transform(c).unwrap();
    assert_vec3_near(under_b.transform_point(Vec3::ZERO), Vec3::new(0.0, 7.0, 0.0), 1e-6);

    scene.set_parent(c, None).unwrap();
    assert_eq!(scene.parent(c).unwrap(), None);
    assert_eq!(
        scene.world_transform(c).unwrap(),
        scene.local_transform(c).unwrap()
    );
}

#[test]
fn set_parent_rejects_self_parenting() {
    let mut scene = Scene::new();
    let a = scene.spawn("a", cube());
    let err = scene.set_parent(a, Some(a)).unwrap_err();
    assert!(matches!(err, OrreryError::Scene(_)));
}

#[test]
fn set_parent_rejects_two_node_cycle() {
    let mut scene = Scene::new();
    let a = scene.spawn("a", cube());
    let b = scene.spawn_child("b", cube(), a).unwrap();
    let err = scene.set_parent(a, Some(b)).unwrap_err();
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn set_parent_rejects_deep_cycle() {
    let mut scene = Scene::new();
    let a = scene.spawn("a", cube());
    let b = scene.spawn_child("b", cube(), a).unwrap();
    let c = scene.spawn_child("c", cube(), b).unwrap();
    let err = scene.set_parent(a, Some(c)).unwrap_err();
    assert!(err.to_string().contains("cycle"));
    // The rejected assignment must not have been applied.
    assert_eq!(scene.parent(a).unwrap(), None);
}

#[test]
fn unknown_ids_are_scene_errors() {
    let mut scene = Scene::new();
    let a = scene.spawn("a", cube());
    assert!(matches!(scene.node(NodeId(99)), Err(OrreryError::Scene(_))));
    assert!(scene.world_transform(NodeId(99)).is_err());
    assert!(scene.set_parent(a, Some(NodeId(99))).is_err());
    assert!(scene.set_parent(NodeId(99), None).is_err());
}

#[test]
fn sibling_worlds_are_independent() {
    let mut scene = Scene::new();
    let root = scene.spawn("root", cube());
    let a = scene.spawn_child("a", cube(), root).unwrap();
    let b = scene.spawn_child("b", cube(), root).unwrap();

    let b_before = scene.world_transform(b).unwrap();
    scene.node_mut(a).unwrap().transform.position = Vec3::new(100.0, 0.0, 0.0);
    assert_eq!(scene.world_transform(b).unwrap(), b_before);
}

#[test]
fn normal_matrix_is_world_inverse_transpose() {
    let mut scene = Scene::new();
    let id = scene.spawn("n", cube());
    {
        let t = &mut scene.node_mut(id).unwrap().transform;
        t.rotation.z = 0.6;
        t.scale = Vec3::new(2.0, 1.0, 1.0);
    }
    let world = scene.world_transform(id).unwrap();
    assert_eq!(scene.normal_matrix(id).unwrap(), world.invert().transpose());
}

#[test]
fn validate_accepts_programmatic_scene() {
    let mut scene = Scene::new();
    let root = scene.spawn("root", cube());
    scene.spawn_child("child", cube(), root).unwrap();
    scene.add_light(DirectionalLight::default());
    scene.validate().unwrap();
}

#[test]
fn validate_rejects_nonfinite_transform() {
    let mut scene = Scene::new();
    let id = scene.spawn("bad", cube());
    scene.node_mut(id).unwrap().transform.scale.x = f32::INFINITY;
    let err = scene.validate().unwrap_err();
    assert!(matches!(err, OrreryError::Validation(_)));
    assert!(err.to_string().contains("bad"));
}

#[test]
fn validate_rejects_non_unit_light() {
    let mut scene = Scene::new();
    scene.spawn("n", cube());
    scene.add_light(DirectionalLight {
        direction: Vec3::new(0.0, 0.0, -5.0),
    });
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("unit length"));
}

#[test]
fn validate_rejects_empty_name() {
    let mut scene = Scene::new();
    scene.spawn("  ", cube());
    assert!(scene.validate().is_err());
}
