/// NextBlocks Core Library - block logo layout and scene description
///
/// Stateless computation of the rotating block logo: glyph grids, column
/// offsets, word layout, device-dependent sizing, and the scene data handed
/// to a renderer.

pub mod config;
pub mod device;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod letters;
pub mod offset;
pub mod page;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use config::PageConfig;
pub use device::{classify, DeviceProfile, DeviceState};
pub use error::{Error, Result};
pub use geometry::{Block, Mesh, Triangle, Vertex};
pub use layout::{build_word, LetterInstance, Word};
pub use page::PageShell;
pub use projection::{Camera, OrbitControls};
pub use scene::{compose, SceneDescription};
pub use transform::{GroupTransform, RotationState, Transform};
