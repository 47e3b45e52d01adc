use std::time::Duration;

use approx::assert_relative_eq;
use cereal_box::{
    LightControls, SceneError, SceneFlow,
    compose::{self, compose_scene},
    data_structures::{
        material::Color,
        scene_graph::{Geometry, Light},
    },
    render::{LightingUniform, resolve_ready, resolve_scene},
    resources::cache::TextureCache,
};

use crate::common::test_utils::{CountingLoader, RecordingRenderer};

mod common;

#[tokio::test]
async fn frame_submits_every_node_once_textures_are_loaded() {
    let mut flow = SceneFlow::new(CountingLoader::new());
    let mut renderer = RecordingRenderer::default();
    let controls = LightControls::default();

    flow.prepare(&controls).await.expect("textures load");
    flow.render_frame(&controls, &mut renderer)
        .await
        .expect("frame renders");

    assert_eq!(renderer.calls.len(), 18);
    assert_eq!(renderer.lights().len(), 2);
    assert_eq!(renderer.texts().len(), 5);
    // box parts, floor, marker and the five resolved panels
    assert_eq!(renderer.meshes().len(), 11);
    let textured = renderer
        .meshes()
        .into_iter()
        .filter(|mesh| mesh.material.texture().is_some())
        .count();
    assert_eq!(textured, 5);
    assert_eq!(flow.frames(), 1);
}

#[tokio::test]
async fn end_to_end_default_scene_lights() {
    let mut flow = SceneFlow::new(CountingLoader::new());
    let mut renderer = RecordingRenderer::default();
    let controls = LightControls::new(3.5, 235.0, true);

    flow.render_frame(&controls, &mut renderer)
        .await
        .expect("frame renders");

    let lights = renderer.lights();
    let ambient: Vec<_> = lights
        .iter()
        .filter(|light| matches!(light, Light::Ambient { .. }))
        .collect();
    let directional: Vec<_> = lights
        .iter()
        .filter(|light| matches!(light, Light::Directional { .. }))
        .collect();
    assert_eq!(ambient.len(), 1);
    assert_eq!(directional.len(), 1);
    assert_relative_eq!(ambient[0].intensity(), 3.5);
    assert_relative_eq!(directional[0].intensity(), 3.5);
    let Light::Directional { position, .. } = directional[0] else {
        unreachable!()
    };
    assert_relative_eq!(position.x, 3.44, epsilon = 0.01);
    assert_relative_eq!(position.y, 4.0);
    assert_relative_eq!(position.z, 4.91, epsilon = 0.01);
}

#[tokio::test]
async fn later_frames_reuse_cached_textures() {
    let mut flow = SceneFlow::new(CountingLoader::new());

    let mut drawn = Vec::new();
    for rotation in [0.0, 90.0, 180.0] {
        let mut renderer = RecordingRenderer::default();
        flow.render_frame(&LightControls::new(1.0, rotation, true), &mut renderer)
            .await
            .expect("frame renders");
        drawn.push(renderer.calls.len());
    }

    // panels appear from the second frame on, once their loads finished
    assert_eq!(drawn, vec![13, 18, 18]);
    assert_eq!(flow.cache().loader().calls(), 5);
    assert_eq!(flow.cache().len(), 5);
    assert_eq!(flow.frames(), 3);
}

#[tokio::test]
async fn missing_texture_aborts_the_whole_pass() {
    let loader = CountingLoader::new().with_missing(compose::CEREAL_BOWL);
    let mut flow = SceneFlow::new(loader);
    let controls = LightControls::default();

    // the load has not failed yet, only the panels are left out
    let mut loading = RecordingRenderer::default();
    flow.render_frame(&controls, &mut loading)
        .await
        .expect("frame renders while loading");
    assert_eq!(loading.calls.len(), 13);

    let mut renderer = RecordingRenderer::default();
    let result = flow.render_frame(&controls, &mut renderer).await;

    assert!(matches!(
        result,
        Err(SceneError::ResourceResolution { ref source_id, .. }) if source_id == compose::CEREAL_BOWL
    ));
    assert!(renderer.calls.is_empty(), "nothing is drawn for a failed pass");
    assert_eq!(flow.frames(), 1);
}

#[tokio::test]
async fn loading_panel_does_not_hold_back_the_frame() {
    let loader = CountingLoader::new().with_stalled(compose::NAME_LOGO);
    let mut flow = SceneFlow::new(loader);
    let controls = LightControls::default();

    for _ in 0..2 {
        let mut renderer = RecordingRenderer::default();
        tokio::time::timeout(
            Duration::from_millis(200),
            flow.render_frame(&controls, &mut renderer),
        )
        .await
        .expect("frame does not wait on the stalled texture")
        .expect("frame renders");
    }

    let mut renderer = RecordingRenderer::default();
    flow.render_frame(&controls, &mut renderer)
        .await
        .expect("frame renders");

    assert_eq!(renderer.calls.len(), 17);
    assert_eq!(renderer.lights().len(), 2);
    assert_eq!(renderer.texts().len(), 5);
    let panels: Vec<_> = renderer
        .meshes()
        .into_iter()
        .filter_map(|mesh| mesh.material.texture())
        .map(|texture| texture.data().label.clone())
        .collect();
    assert_eq!(panels.len(), 4);
    assert!(!panels.iter().any(|label| label == compose::NAME_LOGO));
    assert!(flow.cache().contains(compose::NAME_LOGO));
    assert!(flow.cache().peek(compose::NAME_LOGO).is_none());
    assert_eq!(flow.frames(), 3);
}

#[tokio::test]
async fn ready_resolution_reports_pending_panels() {
    let cache = TextureCache::new(CountingLoader::new().with_stalled(compose::BOX_BACK));
    let controls = LightControls::default();
    assert!(cache.is_empty());

    let first = resolve_ready(compose_scene(&controls), &cache).expect("resolved");
    assert_eq!(first.nodes.len(), 13);
    assert_eq!(first.pending.len(), 5);
    assert!(!first.is_complete());
    assert_eq!(first.meshes().count(), 6);

    let second = resolve_ready(compose_scene(&controls), &cache).expect("resolved");
    assert_eq!(second.pending, vec![compose::BOX_BACK.to_string()]);
    assert_eq!(second.meshes().count(), 10);
    assert_eq!(cache.len(), 5);
}

#[tokio::test]
async fn resolution_keeps_node_order() {
    let cache = TextureCache::new(CountingLoader::new());
    let nodes = compose_scene(&LightControls::default());

    let scene = resolve_scene(nodes.clone(), &cache).await.expect("resolved");

    assert_eq!(scene.nodes.len(), nodes.len());
    assert!(scene.is_complete());
    let panel_positions: Vec<_> = nodes
        .iter()
        .enumerate()
        .filter_map(|(i, node)| match node {
            cereal_box::data_structures::scene_graph::SceneNode::TexturedPanel(panel) => {
                Some((i, panel.width, panel.height))
            }
            _ => None,
        })
        .collect();
    for (i, width, height) in panel_positions {
        match &scene.nodes[i] {
            cereal_box::render::ResolvedNode::Mesh(mesh) => {
                assert_eq!(mesh.geometry, Geometry::Plane { width, height });
            }
            other => panic!("panel at {i} resolved to {other:?}"),
        }
    }
}

#[tokio::test]
async fn lighting_uniform_reflects_controls() {
    let flow = SceneFlow::new(CountingLoader::new());

    let scene = flow
        .prepare(&LightControls::new(2.0, 90.0, false))
        .await
        .expect("resolved");
    let lighting = scene.lighting();

    assert_relative_eq!(lighting.ambient_intensity, 2.0);
    assert_eq!(lighting.ambient_color, [1.0, 1.0, 1.0]);
    assert!(scene.lights().all(|light| light.color() == Color::WHITE));
    assert_eq!(lighting.directional_intensity, 0.0);
    assert_relative_eq!(lighting.directional_position[0], 0.0, epsilon = 1e-5);
    assert_relative_eq!(lighting.directional_position[1], 4.0);
    assert_relative_eq!(lighting.directional_position[2], -6.0, epsilon = 1e-5);
    assert_eq!(lighting.cast_shadow, 1);
}

#[test]
fn lighting_uniform_layout() {
    assert_eq!(std::mem::size_of::<LightingUniform>(), 48);
    let uniform = LightingUniform::default();
    let bytes: &[u8] = bytemuck::bytes_of(&uniform);
    assert_eq!(bytes.len(), 48);
}

#[test]
fn ambient_lights_blend_by_intensity() {
    let lights = [
        Light::Ambient {
            color: Color::WHITE,
            intensity: 1.0,
        },
        Light::Ambient {
            color: Color::BLACK,
            intensity: 3.0,
        },
    ];
    let lighting = LightingUniform::from_lights(&lights);

    assert_relative_eq!(lighting.ambient_intensity, 4.0);
    assert_relative_eq!(lighting.ambient_color[0], 0.25);
    assert_eq!(lighting.directional_intensity, 0.0);
}
