use glam::{Mat4, Vec3, Vec4};
use scene_renderer::camera::Camera;
use scene_renderer::config::SceneConfig;
use scene_renderer::core::InputSnapshot;
use scene_renderer::frame::{FrameClock, FrameInfo};
use scene_renderer::renderer::{LogBackend, RecordingBackend, Renderer};
use scene_renderer::scene::{Assets, Entity, Light, Material, Mesh, Scene};
use scene_renderer::traits::RenderBackend;
use scene_renderer::transform::Transform;
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = 1e-5;

fn first_frame() -> FrameInfo {
    FrameInfo::new(0, 0.0, 0.0)
}

/// Two cubes sharing one material, one camera
fn shared_material_scene() -> Scene {
    let mut assets = Assets::new();
    let cube = assets.add_mesh(Mesh::cube());
    let paint = assets.add_material(Material::new("paint", Vec4::new(1.0, 0.0, 0.0, 1.0), 0.4));

    let mut scene = Scene::new(assets);
    scene.add_camera(Camera::new(Vec3::new(0.0, 0.0, -10.0), FRAC_PI_2, 5.0, 16.0 / 9.0));
    scene.add_entity(
        Entity::new(cube, paint).with_transform(Transform::new().with_position(Vec3::new(-2.0, 0.0, 0.0))),
    );
    scene.add_entity(
        Entity::new(cube, paint).with_transform(Transform::new().with_position(Vec3::new(2.0, 0.0, 0.0))),
    );
    scene
}

#[cfg(test)]
mod render_frame_tests {
    use super::*;

    #[test]
    fn test_every_entity_is_drawn_in_order() {
        let mut scene = shared_material_scene();
        let mut renderer = Renderer::new();
        let mut backend = RecordingBackend::default();

        let stats = renderer
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        assert_eq!(stats.draw_calls, 2);
        assert_eq!(stats.skipped, 0);
        let frame = backend.last_frame().unwrap();
        let order: Vec<usize> = frame.draws.iter().map(|d| d.entity).collect();
        assert_eq!(order, vec![0, 1]);
        assert_eq!(frame.draws[0].mesh, "cube");
        assert_eq!(frame.draws[0].index_count, 36);
        assert_eq!(renderer.frames_rendered(), 1);
    }

    #[test]
    fn test_frame_uniform_comes_from_active_camera() {
        let mut scene = shared_material_scene();
        let mut backend = RecordingBackend::default();

        Renderer::new()
            .render_frame(&mut scene, FrameInfo::new(3, 1.5, 0.5), &mut backend)
            .unwrap();

        let camera = scene.active_camera_mut().unwrap();
        let (view, projection) = (camera.view_matrix(), camera.projection_matrix());
        let uniform = backend.last_frame().unwrap().frame;
        assert!(uniform.view_matrix().abs_diff_eq(view, EPSILON));
        assert!(uniform.projection_matrix().abs_diff_eq(projection, EPSILON));
        assert_eq!(uniform.camera_position, [0.0, 0.0, -10.0]);
        assert_eq!(uniform.time, 1.5);
    }

    #[test]
    fn test_object_uniform_holds_world_and_normal_matrices() {
        let mut scene = shared_material_scene();
        scene
            .entity_mut(1)
            .unwrap()
            .transform_mut()
            .set_scale(Vec3::new(2.0, 1.0, 1.0));
        let mut backend = RecordingBackend::default();

        Renderer::new()
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        let object = backend.last_frame().unwrap().draws[1].object;
        let world = object.world_matrix();
        assert_eq!(object.world[3], [2.0, 0.0, 0.0, 1.0]);
        assert!(object
            .world_inverse_transpose_matrix()
            .abs_diff_eq(world.inverse().transpose(), EPSILON));
        assert_eq!(object.color_tint, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(object.roughness, 0.4);
    }

    #[test]
    fn test_render_sees_latest_transform() {
        let mut scene = shared_material_scene();
        let mut renderer = Renderer::new();
        let mut backend = RecordingBackend::default();
        renderer
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        scene
            .entity_mut(0)
            .unwrap()
            .transform_mut()
            .move_absolute(Vec3::new(0.0, 1.0, 0.0));
        renderer
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        let world = backend.last_frame().unwrap().draws[0].object.world_matrix();
        let expected = Mat4::from_translation(Vec3::new(-2.0, 1.0, 0.0));
        assert!(world.abs_diff_eq(expected, EPSILON));
    }

    #[test]
    fn test_shared_material_edit_reaches_every_entity() {
        let mut scene = shared_material_scene();
        let paint = scene.entities()[0].material();
        let mut backend = RecordingBackend::default();

        scene
            .assets
            .material_mut(paint)
            .unwrap()
            .set_color_tint(Vec4::new(0.0, 1.0, 0.0, 1.0));
        Renderer::new()
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        for draw in &backend.last_frame().unwrap().draws {
            assert_eq!(draw.object.color_tint, [0.0, 1.0, 0.0, 1.0]);
            assert_eq!(draw.material, "paint");
        }
    }

    #[test]
    fn test_dangling_handles_are_skipped() {
        let mut other = Assets::new();
        other.add_mesh(Mesh::triangle());
        other.add_mesh(Mesh::diamond());
        let dangling_mesh = other.add_mesh(Mesh::hexagon());
        let material = other.add_material(Material::new("unused", Vec4::ONE, 1.0));

        let mut scene = shared_material_scene();
        scene.add_entity(Entity::new(dangling_mesh, material));
        let mut backend = RecordingBackend::default();

        let stats = Renderer::new()
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        assert_eq!(stats.draw_calls, 2);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_no_camera_is_an_error() {
        let mut scene = Scene::default();
        let mut backend = RecordingBackend::default();

        let result = Renderer::new().render_frame(&mut scene, first_frame(), &mut backend);

        assert!(result.is_err());
        assert_eq!(backend.frames_presented(), 0);
    }

    #[test]
    fn test_lights_are_uploaded() {
        let mut scene = shared_material_scene();
        scene.set_ambient(Vec3::splat(0.2));
        scene.add_light(Light::Directional {
            direction: Vec3::new(0.0, -2.0, 0.0),
            color: Vec3::ONE,
            intensity: 1.0,
        });
        let mut backend = RecordingBackend::default();

        Renderer::new()
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        let frame = backend.last_frame().unwrap();
        assert_eq!(frame.frame.light_count, 1);
        assert_eq!(frame.frame.ambient, [0.2, 0.2, 0.2]);
        assert_eq!(frame.lights[0].direction, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_log_backend_accepts_frames() {
        let mut scene = SceneConfig::default().build().unwrap();
        let mut backend = LogBackend::default();

        let stats = Renderer::new()
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        assert_eq!(stats.draw_calls, scene.entities().len());
    }
}

#[cfg(test)]
mod recording_backend_tests {
    use super::*;

    #[test]
    fn test_keeps_most_recent_frames() {
        let mut scene = shared_material_scene();
        let mut renderer = Renderer::new();
        let mut backend = RecordingBackend::new(2);

        for frame in FrameClock::fixed(0.25).take(5) {
            renderer.render_frame(&mut scene, frame, &mut backend).unwrap();
        }

        assert_eq!(backend.frames_presented(), 5);
        let times: Vec<f32> = backend.frames().map(|f| f.frame.time).collect();
        assert_eq!(times, vec![1.0, 1.25]);
    }

    #[test]
    fn test_end_without_begin_fails() {
        let mut backend = RecordingBackend::default();

        assert!(backend.end_frame().is_err());
    }

    #[test]
    fn test_headless_run_moves_camera() {
        let mut scene = SceneConfig::default().build().unwrap();
        let mut renderer = Renderer::new();
        let mut backend = RecordingBackend::default();
        let input = InputSnapshot::new().with_button(scene_renderer::traits::Button::KeyW);

        for frame in FrameClock::fixed(0.5).take(4) {
            scene.update(frame.delta, &input);
            renderer.render_frame(&mut scene, frame, &mut backend).unwrap();
        }

        let uniform = backend.last_frame().unwrap().frame;
        assert_eq!(uniform.camera_position, [0.0, 0.0, 0.0]);
        assert_eq!(renderer.frames_rendered(), 4);
    }

    #[test]
    fn test_recorded_frame_serializes() {
        let mut scene = shared_material_scene();
        let mut backend = RecordingBackend::default();
        Renderer::new()
            .render_frame(&mut scene, first_frame(), &mut backend)
            .unwrap();

        let json = serde_json::to_value(backend.last_frame().unwrap()).unwrap();

        assert_eq!(json["draws"].as_array().unwrap().len(), 2);
        assert_eq!(json["draws"][0]["shader"], "unlit");
    }
}
