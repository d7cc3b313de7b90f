use glam::{Vec2, Vec3};
use instrument_stage::core::{
    client_to_ndc, hit_test, ndc_in_viewport, ray_aabb, stage_layout, Aabb, Camera, PartKind,
    Ray, SceneRegistry,
};

fn unit_box_at(center: Vec3) -> Aabb {
    Aabb::from_center_size(center, Vec3::ONE)
}

#[test]
fn ray_aabb_hits_front_face() {
    let b = unit_box_at(Vec3::new(0.0, 0.0, -5.0));
    let t = ray_aabb(Vec3::ZERO, Vec3::NEG_Z, &b).unwrap();
    assert!((t - 4.5).abs() < 1e-5);
}

#[test]
fn ray_aabb_misses_and_ignores_boxes_behind() {
    let b = unit_box_at(Vec3::new(3.0, 0.0, -5.0));
    assert_eq!(ray_aabb(Vec3::ZERO, Vec3::NEG_Z, &b), None);
    let behind = unit_box_at(Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(ray_aabb(Vec3::ZERO, Vec3::NEG_Z, &behind), None);
}

#[test]
fn ray_aabb_from_inside_is_zero() {
    let b = unit_box_at(Vec3::ZERO);
    assert_eq!(ray_aabb(Vec3::ZERO, Vec3::X, &b), Some(0.0));
}

#[test]
fn ray_aabb_parallel_to_slab() {
    let b = unit_box_at(Vec3::new(0.0, 0.0, -5.0));
    // moving along -z exactly on the box's top plane
    assert!(ray_aabb(Vec3::new(0.0, 0.5, 0.0), Vec3::NEG_Z, &b).is_some());
    assert_eq!(ray_aabb(Vec3::new(0.0, 0.6, 0.0), Vec3::NEG_Z, &b), None);
}

#[test]
fn client_coordinates_map_to_ndc() {
    assert_eq!(client_to_ndc(0.0, 0.0, 800.0, 600.0), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(client_to_ndc(400.0, 300.0, 800.0, 600.0), Some(Vec2::ZERO));
    assert_eq!(client_to_ndc(800.0, 600.0, 800.0, 600.0), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 600.0), None);
    assert_eq!(client_to_ndc(f32::NAN, 10.0, 800.0, 600.0), None);

    let outside = client_to_ndc(900.0, 300.0, 800.0, 600.0).unwrap();
    assert!(!ndc_in_viewport(outside));
    assert!(ndc_in_viewport(Vec2::new(1.0, -1.0)));
}

#[test]
fn centre_ray_points_at_target() {
    let cam = Camera::studio(1.5);
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    let expected = (cam.target - cam.eye).normalize();
    assert!(ray.dir.abs_diff_eq(expected, 1e-4));
    assert_eq!(ray.origin, cam.eye);
}

#[test]
fn nearest_part_wins() {
    let reg = SceneRegistry::stage_default();
    let xfs = stage_layout(0, reg.len(), 1.0);
    // straight down onto a white key: the key top is hit before the keybed under it
    let piano = reg.get(0).unwrap();
    let key = piano
        .parts
        .iter()
        .position(|p| p.kind == PartKind::WhiteKey)
        .unwrap();
    let c = piano.parts[key].bounds.center();
    let ray = Ray {
        origin: Vec3::new(c.x, 20.0, c.z + 0.3),
        dir: Vec3::NEG_Y,
    };
    let hit = hit_test(&reg, &xfs, &ray).unwrap();
    assert_eq!(hit.part.entity, 0);
    assert_eq!(hit.part.part, key);
    assert!((hit.t - (20.0 - piano.parts[key].bounds.max.y)).abs() < 1e-4);
}

#[test]
fn picks_through_entity_transforms() {
    let reg = SceneRegistry::stage_default();
    let xfs = stage_layout(0, reg.len(), 1.0);
    // aim at the world position of the guitar's soundhole in its background slot
    let guitar = reg.get(1).unwrap();
    let hole = guitar.parts.iter().position(|p| p.label == "soundhole").unwrap();
    let world = xfs[1]
        .matrix()
        .transform_point3(guitar.parts[hole].bounds.center());
    let origin = world + Vec3::new(0.0, 0.0, 30.0);
    let ray = Ray {
        origin,
        dir: Vec3::NEG_Z,
    };
    let hit = hit_test(&reg, &xfs, &ray).unwrap();
    assert_eq!(hit.part.entity, 1);
    assert!((hit.t - (origin.z - world.z)).abs() < 0.5);
}

#[test]
fn empty_space_misses() {
    let reg = SceneRegistry::stage_default();
    let xfs = stage_layout(0, reg.len(), 1.0);
    let ray = Ray {
        origin: Vec3::new(0.0, 50.0, 0.0),
        dir: Vec3::Y,
    };
    assert_eq!(hit_test(&reg, &xfs, &ray), None);
}
