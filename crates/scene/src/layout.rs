//! Fixed scene layouts. Every primitive is the same unit quad or cube, placed
//! by a `translate * rotate * scale` model matrix rebuilt each frame.

use claustrophobia_math::{Mat4, Vec3, radians, rotate, scale, translate};
use serde::{Deserialize, Serialize};

/// Which demo scene to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneVariant {
    /// Long walled corridor with floor and ceiling.
    #[default]
    Corridor,
    /// A single spinning cube.
    Cube,
}

/// Texture slot the backend should bind for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Texture {
    Floor,
    Wall,
    Crate,
}

/// Mesh the backend should issue for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mesh {
    /// Unit quad in the xy plane, centred on the origin.
    Quad,
    /// Unit cube centred on the origin.
    Cube,
}

/// One draw call's worth of data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Draw {
    pub label: &'static str,
    pub mesh: Mesh,
    pub texture: Texture,
    pub model: Mat4,
}

const WALL_PAIRS: usize = 7;
const WALL_SPACING: f32 = 5.0;
const WALL_SCALE: Vec3 = Vec3::new(5.0, 5.5, 0.0);
const END_WALL_SCALE: Vec3 = Vec3::new(12.0, 5.5, 1.0);
const CUBE_SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);
/// Degrees per second.
const CUBE_SPIN_RATE: f32 = 50.0;

impl SceneVariant {
    /// Draw list for this scene at `elapsed` seconds since start.
    pub fn draws(self, elapsed: f32) -> Vec<Draw> {
        match self {
            Self::Corridor => corridor(),
            Self::Cube => cube(elapsed),
        }
    }
}

/// Side walls in pairs down -z, two end walls, ceiling and floor.
///
/// The right wall reuses the left wall's matrix through `translate`, which
/// overwrites the translation rather than offsetting it.
pub fn corridor() -> Vec<Draw> {
    let mut draws = Vec::with_capacity(WALL_PAIRS * 2 + 4);

    let side_rot = rotate(Mat4::IDENTITY, radians(90.0), Vec3::Y);
    let side_scale = scale(Mat4::IDENTITY, WALL_SCALE);

    for i in 0..WALL_PAIRS {
        let z = i as f32 * -WALL_SPACING;

        let trans = translate(Mat4::IDENTITY, Vec3::new(-0.3, 0.8, z));
        draws.push(quad("wall-left", Texture::Wall, trans * side_rot * side_scale));

        let trans = translate(trans, Vec3::new(10.0, 0.8, z));
        draws.push(quad("wall-right", Texture::Wall, trans * side_rot * side_scale));
    }

    let end_scale = scale(Mat4::IDENTITY, END_WALL_SCALE);
    for (label, z) in [("wall-far", -32.0), ("wall-near", 1.0)] {
        let trans = translate(Mat4::IDENTITY, Vec3::new(4.5, 0.8, z));
        draws.push(quad(label, Texture::Wall, trans * end_scale));
    }

    let flat = rotate(Mat4::IDENTITY, radians(-90.0), Vec3::X);

    let trans = translate(Mat4::IDENTITY, Vec3::new(4.5, 3.5, -16.0));
    let scale_m = scale(Mat4::IDENTITY, Vec3::new(12.0, 40.0, 1.0));
    draws.push(quad("ceiling", Texture::Floor, trans * flat * scale_m));

    let trans = translate(Mat4::IDENTITY, Vec3::new(4.5, -1.0, -16.0));
    let scale_m = scale(Mat4::IDENTITY, Vec3::new(12.0, 34.5, 1.0));
    draws.push(quad("floor", Texture::Floor, trans * flat * scale_m));

    draws
}

/// One cube at the origin spinning about a tilted axis.
pub fn cube(elapsed: f32) -> Vec<Draw> {
    let rot = rotate(
        Mat4::IDENTITY,
        radians(CUBE_SPIN_RATE * elapsed),
        CUBE_SPIN_AXIS,
    );
    vec![Draw {
        label: "cube",
        mesh: Mesh::Cube,
        texture: Texture::Crate,
        model: rot,
    }]
}

fn quad(label: &'static str, texture: Texture, model: Mat4) -> Draw {
    Draw {
        label,
        mesh: Mesh::Quad,
        texture,
        model,
    }
}
