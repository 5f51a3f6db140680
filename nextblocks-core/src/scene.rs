/// Scene composition: the data a renderer needs to draw the logo
use nalgebra::{Point3, Vector3};
use serde::Serialize;

use crate::config::PageConfig;
use crate::device::DeviceProfile;
use crate::error::{Error, Result};
use crate::geometry::{BlockMaterial, Color, Mesh, OutlineMaterial};
use crate::layout::{build_word, Word};
use crate::projection::{CameraConfig, OrbitControls};
use crate::transform::{GroupTransform, RotationState};

pub const MOBILE_BACKDROP_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/download3-7FArHVIJTFszlXm2045mQDPzsZqAyo.jpg";

pub const DESKTOP_BACKDROP_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/dither_it_M3_Drone_Shot_equirectangular-jpg_San_Francisco_Big_City_1287677938_12251179%20(1)-NY2qcmpjkyG6rDp1cPGIdX0bHk3hMR.jpg";

/// Environment image, also shown as the scene background
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Backdrop {
    pub url: &'static str,
    pub background: bool,
}

impl Backdrop {
    pub fn for_profile(profile: DeviceProfile) -> Self {
        let url = if profile.is_mobile {
            MOBILE_BACKDROP_URL
        } else {
            DESKTOP_BACKDROP_URL
        };
        Self {
            url,
            background: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmbientLight {
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionalLight {
    pub position: Point3<f32>,
    pub intensity: f32,
    pub color: Color,
}

impl DirectionalLight {
    /// Unit vector from the origin toward the light
    pub fn direction(&self) -> Vector3<f32> {
        self.position.coords.normalize()
    }
}

/// Materials shared by every block
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BlockStyle {
    pub surface: BlockMaterial,
    pub outline: OutlineMaterial,
}

/// Everything a renderer draws, as plain data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    pub profile: DeviceProfile,
    pub group: GroupTransform,
    pub word: Word,
    pub style: BlockStyle,
    pub ambient_light: AmbientLight,
    pub directional_light: DirectionalLight,
    pub controls: OrbitControls,
    pub camera: CameraConfig,
    pub backdrop: Backdrop,
}

impl SceneDescription {
    /// Block geometry in scene space
    pub fn mesh(&self) -> Mesh {
        self.word.mesh(&self.group)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }
}

/// Word group placement: nudged left and turned 120 degrees about +Y
pub fn word_group() -> GroupTransform {
    GroupTransform::new(
        Point3::new(-0.5, 0.0, 0.0),
        RotationState::yaw(std::f32::consts::PI / 1.5),
    )
}

/// Compose the scene for a device profile
pub fn compose(profile: DeviceProfile, config: &PageConfig) -> SceneDescription {
    let word = build_word(&config.letters(), profile);
    let backdrop = Backdrop::for_profile(profile);
    log::debug!("composed scene with {} blocks, backdrop {}", word.block_count(), backdrop.url);

    SceneDescription {
        profile,
        group: word_group(),
        word,
        style: BlockStyle::default(),
        ambient_light: AmbientLight { intensity: 0.5 },
        directional_light: DirectionalLight {
            position: Point3::new(5.0, 5.0, 5.0),
            intensity: 0.5,
            color: Color::WHITE,
        },
        controls: OrbitControls::default(),
        camera: CameraConfig::default(),
        backdrop,
    }
}
