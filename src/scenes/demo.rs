use glam::{Vec3, Vec4};

use crate::config::{CameraConfig, EntityConfig, MaterialConfig, SceneConfig, WindowConfig};
use crate::scene::{Light, Motion};

fn material(name: &str, color_tint: Vec4, roughness: f32) -> MaterialConfig {
    MaterialConfig {
        name: name.to_string(),
        color_tint,
        roughness,
        shader: "unlit".to_string(),
    }
}

fn entity(mesh: &str, material: &str, position: Vec3, motion: Option<Motion>) -> EntityConfig {
    EntityConfig {
        mesh: mesh.to_string(),
        material: material.to_string(),
        position,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
        motion,
    }
}

/// Two sliding triangles, two pulsing diamonds (one mirrored), a spinning
/// hexagon and a turning cube, seen from a wide and a narrow camera
pub fn demo() -> SceneConfig {
    let materials = vec![
        material("warm", Vec4::new(1.0, 0.5, 0.5, 1.0), 0.5),
        material("cool", Vec4::new(0.5, 0.7, 1.0, 1.0), 0.2),
        material("plain", Vec4::ONE, 1.0),
    ];

    let entities = vec![
        entity(
            "triangle",
            "warm",
            Vec3::ZERO,
            Some(Motion::Oscillate { axis: Vec3::X, extent: 1.0, speed: 0.25 }),
        ),
        entity(
            "triangle",
            "cool",
            Vec3::ZERO,
            Some(Motion::Oscillate { axis: Vec3::Y, extent: 1.0, speed: 0.25 }),
        ),
        entity(
            "diamond",
            "warm",
            Vec3::new(0.5, 0.6, 0.0),
            Some(Motion::Pulse { min: 0.0, max: 3.0, speed: 0.6, mirror: false }),
        ),
        entity(
            "diamond",
            "cool",
            Vec3::new(0.8, 0.6, 0.0),
            Some(Motion::Pulse { min: 0.0, max: 3.0, speed: 0.6, mirror: true }),
        ),
        entity(
            "hexagon",
            "warm",
            Vec3::new(0.6, -0.7, 0.0),
            Some(Motion::Spin { rate: Vec3::new(0.0, 0.0, 1.0) }),
        ),
        entity(
            "cube",
            "plain",
            Vec3::new(-1.5, -1.0, 2.0),
            Some(Motion::Spin { rate: Vec3::new(0.0, 0.5, 0.25) }),
        ),
    ];

    SceneConfig {
        window: WindowConfig::default(),
        cameras: vec![
            CameraConfig {
                position: Vec3::new(0.0, 0.0, -10.0),
                rotation: Vec3::ZERO,
                fov_degrees: 90.0,
                movespeed: 5.0,
            },
            CameraConfig {
                position: Vec3::new(0.0, 1.0, -1.0),
                rotation: Vec3::ZERO,
                fov_degrees: 45.0,
                movespeed: 2.0,
            },
        ],
        active_camera: 0,
        materials,
        entities,
        lights: vec![
            Light::Directional {
                direction: Vec3::new(1.0, -1.0, 1.0),
                color: Vec3::ONE,
                intensity: 1.0,
            },
            Light::Point {
                position: Vec3::new(0.0, 2.0, -2.0),
                range: 10.0,
                color: Vec3::new(1.0, 0.9, 0.7),
                intensity: 0.8,
            },
        ],
        ambient: Vec3::new(0.1, 0.1, 0.15),
    }
}
