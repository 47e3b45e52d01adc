//! The cereal box scene.
//!
//! [`compose_scene`] declares every node of the scene from literal geometry,
//! text and image identifiers. Only the two lights depend on the
//! [`LightControls`]; everything else is identical on every pass.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::{
    controls::LightControls,
    data_structures::{
        material::{Color, Material},
        panel::TexturedPanel,
        scene_graph::{Geometry, Light, MeshNode, SceneNode, Shadows, TextBlock},
        transform::Transform,
    },
};

/// Distance of the directional light from the vertical axis.
pub const LIGHT_ORBIT_RADIUS: f32 = 6.0;
/// Height at which the directional light orbits.
pub const LIGHT_HEIGHT: f32 = 4.0;
/// Directional light intensity while it is switched on.
pub const DIRECTIONAL_INTENSITY: f32 = 3.5;

pub const NAME_LOGO: &str = "name.png";
pub const CEREAL_BOWL: &str = "cereal-bowl.png";
pub const NUTRITION_LABEL: &str = "nutrition-label.png";
pub const BOX_TOP_DETAILS: &str = "box-details-top.png";
pub const BOX_BACK: &str = "box-back.png";

/// Pixel size of the nutrition label image, used to keep its aspect ratio.
const NUTRITION_LABEL_SIZE: (f32, f32) = (820.0, 1489.0);

const PILLAR_RED: Color = Color::rgb(210.0 / 255.0, 76.0 / 255.0, 66.0 / 255.0);
const BODY_GREY: Color = Color::rgb(0.8, 0.8, 0.8);
const HEADER_TEAL: Color = Color::rgb(2.0 / 255.0, 106.0 / 255.0, 129.0 / 255.0);
const FLOOR_GREY: Color = Color::rgb(47.0 / 255.0, 47.0 / 255.0, 48.0 / 255.0);

const FRONT_COUNT: &str = "7, 14, 21, 28, 35, 42, 49, 56, 63, 70, 77, 84";
const SIDE_COUNT: &str = "1, 2, 3, 4, 5, 6, 7";

const SYNOPSIS: &str = "Setting:
Counting by 7s takes place in
a fictional version of
Bakersfield, CA, in the mid
2000s.
Conflict:
The conflict in Counting by 7s
is a man vs. self conflict.
Willow has to cope with the
loss of her parents, and
potentially leaving the
Nguyens for another family.
Plot/Summary:
Willow Chance, a 12 year-old
genius, has no friends going
into middle school. She only
gains popularity by getting a
perfect score on the state
test and getting sent to the
counselor, Dell Duke. One
day, Dell Duke takes Willow,
as well as Mai and Quang-ha
Nguyen around Bakersfield.
When Willow gets home, she
discovers that her parents
died. She stays with the
Nguyens at Happy Polish
Nails, and eventually the
Gardens of Glenwood.
Eventually, she has to go to a
different family. Pattie, Mai
and Quang-ha's mother,
found Jairo, Willow's taxi
driver, and they agreed on
taking in Willow. Pattie
secretly had money and plans
on buying the Gardens of
Glenwood.";

/// Position of the directional light for a rotation given in degrees.
///
/// The light moves on a circle of radius [`LIGHT_ORBIT_RADIUS`] around the
/// vertical axis at height [`LIGHT_HEIGHT`]. 0° puts it at -X, 90° at -Z.
pub fn directional_light_position(rotation_degrees: f32) -> cgmath::Vector3<f32> {
    let radians = rotation_degrees.to_radians();
    cgmath::Vector3::new(
        -LIGHT_ORBIT_RADIUS * radians.cos(),
        LIGHT_HEIGHT,
        -LIGHT_ORBIT_RADIUS * radians.sin(),
    )
}

/// The lights for the given controls.
///
/// Switching the directional light off only zeroes its intensity; the node
/// stays in the scene so shadow setup does not change between passes.
pub fn compose_lights(controls: &LightControls) -> [Light; 2] {
    let intensity = if controls.directional_light_enabled {
        DIRECTIONAL_INTENSITY
    } else {
        0.0
    };
    [
        Light::Ambient {
            color: Color::WHITE,
            intensity: controls.brightness,
        },
        Light::Directional {
            color: Color::WHITE,
            intensity,
            position: directional_light_position(controls.light_rotation_degrees),
            cast_shadow: true,
        },
    ]
}

/// Every node of the scene for one render pass.
pub fn compose_scene(controls: &LightControls) -> Vec<SceneNode> {
    let mut nodes: Vec<SceneNode> = compose_lights(controls)
        .into_iter()
        .map(SceneNode::from)
        .collect();
    nodes.extend(box_body());
    nodes.extend(box_text());
    nodes.extend(box_panels());
    nodes.extend(surroundings());
    nodes
}

fn solid(geometry: Geometry, color: Color, transform: Transform, shadows: Shadows) -> SceneNode {
    MeshNode::new(geometry, color)
        .with_transform(transform)
        .with_shadows(shadows)
        .into()
}

fn box_body() -> Vec<SceneNode> {
    vec![
        solid(
            Geometry::Box,
            PILLAR_RED,
            Transform::at(-3.5, 5.5, -3.0).scaled(1.0, 11.0, 3.0),
            Shadows::BOTH,
        ),
        solid(
            Geometry::Box,
            PILLAR_RED,
            Transform::at(3.5, 5.5, -3.0).scaled(1.0, 11.0, 3.0),
            Shadows::BOTH,
        ),
        solid(
            Geometry::Box,
            BODY_GREY,
            Transform::at(0.0, 5.5, -3.0).scaled(6.0, 11.0, 3.0),
            Shadows::BOTH,
        ),
        solid(
            Geometry::Box,
            HEADER_TEAL,
            Transform::at(0.0, 11.5, -3.0).scaled(8.0, 1.0, 3.0),
            Shadows::BOTH,
        ),
    ]
}

fn header_strip(content: &str, transform: Transform) -> SceneNode {
    TextBlock::new(content, 0.4, Color::WHITE)
        .with_weight(700)
        .with_transform(transform)
        .with_shadows(Shadows::BOTH)
        .into()
}

fn box_text() -> Vec<SceneNode> {
    vec![
        header_strip(FRONT_COUNT, Transform::at(0.0, 11.5, -1.49)),
        header_strip(FRONT_COUNT, Transform::at(0.0, 11.5, -4.52).rotated(0.0, PI, 0.0)),
        header_strip(SIDE_COUNT, Transform::at(4.01, 11.5, -3.0).rotated(0.0, FRAC_PI_2, 0.0)),
        header_strip(SIDE_COUNT, Transform::at(-4.01, 11.5, -3.0).rotated(0.0, -FRAC_PI_2, 0.0)),
        TextBlock::new(SYNOPSIS, 0.2, Color::BLACK)
            .with_max_width(2.8)
            .with_transform(Transform::at(-4.01, 5.5, -3.0).rotated(0.0, -FRAC_PI_2, 0.0))
            .into(),
    ]
}

fn box_panels() -> Vec<SceneNode> {
    let (label_width, label_height) = NUTRITION_LABEL_SIZE;
    let panel = |source: &str, width: f32, height: f32, transform: Transform| -> SceneNode {
        TexturedPanel::new(source, width, height)
            .with_transform(transform)
            .with_shadows(Shadows::BOTH)
            .into()
    };
    vec![
        panel(
            NUTRITION_LABEL,
            2.8,
            2.8 * label_height / label_width,
            Transform::at(4.01, 8.2, -3.0).rotated(0.0, FRAC_PI_2, 0.0),
        ),
        panel(NAME_LOGO, 5.5, 5.5, Transform::at(0.0, 8.0, -1.49)),
        panel(CEREAL_BOWL, 5.5, 11.0 / 3.0, Transform::at(0.0, 3.4, -1.49)),
        panel(
            BOX_TOP_DETAILS,
            8.0,
            1.7,
            Transform::at(0.0, 12.01, -3.65).rotated(-FRAC_PI_2, 0.0, 0.0),
        ),
        panel(
            BOX_BACK,
            6.0,
            10.0,
            Transform::at(0.0, 6.0, -4.51).rotated(0.0, PI, 0.0),
        ),
    ]
}

fn surroundings() -> Vec<SceneNode> {
    vec![
        solid(
            Geometry::Box,
            FLOOR_GREY,
            Transform::at(0.0, -1.0, 0.0).scaled(24.0, 2.0, 24.0),
            Shadows::RECEIVE,
        ),
        MeshNode::new(
            Geometry::Dodecahedron { radius: 0.5 },
            Material::new(Color::RED).with_wireframe(true),
        )
        .with_transform(Transform::at(11.0, 0.5, 11.0))
        .with_shadows(Shadows::BOTH)
        .into(),
    ]
}
