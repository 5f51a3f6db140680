/// Word layout: glyph grids become positioned blocks
use nalgebra::Point3;
use serde::Serialize;

use crate::device::DeviceProfile;
use crate::geometry::{self, Block, Mesh};
use crate::letters::{filled_cells, shape_of};
use crate::offset::x_offset;
use crate::transform::{GroupTransform, Transform};

/// Anchor slots along x, in units of the spacing constant. The middle gap is left open.
pub const ANCHOR_SLOTS: [f32; 4] = [-2.0, -1.0, 1.0, 2.0];

/// Height of a row in the glyph grid
pub fn row_y(row: usize) -> f32 {
    (4.0 - row as f32) * 0.5 - 1.0
}

/// Responsive sizing of the word
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParams {
    pub scale_factor: f32,
    pub spacing_unit: f32,
}

impl LayoutParams {
    pub fn for_profile(profile: DeviceProfile) -> Self {
        if profile.is_mobile {
            Self {
                scale_factor: 0.5,
                spacing_unit: 1.5,
            }
        } else {
            Self {
                scale_factor: 1.0,
                spacing_unit: 2.5,
            }
        }
    }

    /// Anchor of the letter in `slot`, `None` past the last slot
    pub fn anchor(&self, slot: usize) -> Option<Point3<f32>> {
        ANCHOR_SLOTS
            .get(slot)
            .map(|&unit| Point3::new(unit * self.spacing_unit, 0.0, 0.0))
    }
}

/// A letter placed in the word with its blocks in letter-local space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterInstance {
    pub symbol: char,
    pub anchor: Point3<f32>,
    pub scale: f32,
    pub blocks: Vec<Block>,
}

impl LetterInstance {
    pub fn new(symbol: char, anchor: Point3<f32>, scale: f32) -> Self {
        let blocks = filled_cells(shape_of(symbol))
            .map(|(row, column)| {
                geometry::instantiate(Point3::new(x_offset(symbol, column), row_y(row), 0.0))
            })
            .collect();

        Self {
            symbol,
            anchor,
            scale,
            blocks,
        }
    }

    /// Block centers in word space (anchor + scale * local)
    pub fn world_positions(&self) -> impl Iterator<Item = Point3<f32>> + '_ {
        self.blocks
            .iter()
            .map(move |block| self.anchor + block.position.coords * self.scale)
    }
}

/// The laid-out word
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub params: LayoutParams,
    pub letters: Vec<LetterInstance>,
}

impl Word {
    pub fn block_count(&self) -> usize {
        self.letters.iter().map(|letter| letter.blocks.len()).sum()
    }

    /// All block geometry in scene space, after `group` is applied
    pub fn mesh(&self, group: &GroupTransform) -> Mesh {
        let placement = group.matrix();
        let rotation = Transform::rotation_matrix(&group.rotation);
        let mut mesh = Mesh::new();

        for letter in &self.letters {
            let size = geometry::BLOCK_SIZE * letter.scale * group.scale;
            for center in letter.world_positions() {
                let center = placement.transform_point(&center);
                let orient = |p: Point3<f32>| center + rotation.transform_vector(&p.coords);

                let mut cube = Mesh::cube(Point3::origin(), size);
                for vertex in cube.triangles.iter_mut().flat_map(|t| t.vertices.iter_mut()) {
                    vertex.position = orient(vertex.position);
                    vertex.normal = rotation.transform_vector(&vertex.normal);
                }
                for edge in &mut cube.edges {
                    edge.start = orient(edge.start);
                    edge.end = orient(edge.end);
                }
                mesh.extend(cube);
            }
        }
        mesh
    }
}

/// Lay out `letters` for the given device profile.
///
/// The word has four anchor slots; extra letters are dropped.
pub fn build_word(letters: &[char], profile: DeviceProfile) -> Word {
    let params = LayoutParams::for_profile(profile);

    if letters.len() > ANCHOR_SLOTS.len() {
        log::warn!(
            "word has {} letters, only the first {} are laid out",
            letters.len(),
            ANCHOR_SLOTS.len()
        );
    }

    let letters: Vec<LetterInstance> = letters
        .iter()
        .enumerate()
        .map_while(|(slot, &symbol)| {
            let anchor = params.anchor(slot)?;
            Some(LetterInstance::new(symbol, anchor, params.scale_factor))
        })
        .collect();

    let word = Word { params, letters };
    log::debug!(
        "laid out {} letters, {} blocks (scale {}, spacing {})",
        word.letters.len(),
        word.block_count(),
        params.scale_factor,
        params.spacing_unit
    );
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::RotationState;

    const NEXT: [char; 4] = ['N', 'E', 'X', 'T'];

    fn anchors(word: &Word) -> Vec<f32> {
        word.letters.iter().map(|l| l.anchor.x).collect()
    }

    #[test]
    fn test_desktop_layout() {
        let word = build_word(&NEXT, DeviceProfile::DESKTOP);
        assert_eq!(anchors(&word), vec![-5.0, -2.5, 2.5, 5.0]);
        assert!(word.letters.iter().all(|l| l.scale == 1.0));
        assert_eq!(word.params.scale_factor, 1.0);
    }

    #[test]
    fn test_mobile_layout() {
        let word = build_word(&NEXT, DeviceProfile::MOBILE);
        assert_eq!(anchors(&word), vec![-3.0, -1.5, 1.5, 3.0]);
        assert!(word.letters.iter().all(|l| l.scale == 0.5));
    }

    #[test]
    fn test_anchor_slots_are_bounded() {
        let params = LayoutParams::for_profile(DeviceProfile::DESKTOP);
        assert_eq!(params.anchor(0), Some(Point3::new(-5.0, 0.0, 0.0)));
        assert_eq!(params.anchor(3), Some(Point3::new(5.0, 0.0, 0.0)));
        assert_eq!(params.anchor(4), None);
        assert_eq!(params.anchor(usize::MAX), None);
    }

    #[test]
    fn test_row_height_is_letter_independent() {
        let word = build_word(&NEXT, DeviceProfile::DESKTOP);
        for letter in &word.letters {
            for (block, (row, _)) in letter.blocks.iter().zip(filled_cells(shape_of(letter.symbol))) {
                assert!((block.position.y - row_y(row)).abs() < 1e-6);
                assert_eq!(block.position.z, 0.0);
            }
        }
        assert_eq!(row_y(0), 1.0);
        assert_eq!(row_y(4), -1.0);
    }

    #[test]
    fn test_block_x_uses_offset_policy() {
        let letter = LetterInstance::new('X', Point3::origin(), 1.0);
        let xs: Vec<f32> = letter.blocks.iter().take(2).map(|b| b.position.x).collect();
        assert_eq!(xs, vec![-1.0, 0.5]);
    }

    #[test]
    fn test_block_count() {
        let word = build_word(&NEXT, DeviceProfile::DESKTOP);
        assert_eq!(word.block_count(), 13 + 10 + 9 + 7);
    }

    #[test]
    fn test_idempotent() {
        let first = build_word(&NEXT, DeviceProfile::MOBILE);
        let second = build_word(&NEXT, DeviceProfile::MOBILE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extra_letters_dropped() {
        let word = build_word(&['N', 'E', 'X', 'T', 'S'], DeviceProfile::DESKTOP);
        assert_eq!(word.letters.len(), 4);
        assert_eq!(word.letters[3].symbol, 'T');
    }

    #[test]
    fn test_world_positions_scale_about_anchor() {
        let letter = LetterInstance::new('T', Point3::new(3.0, 0.0, 0.0), 0.5);
        let first = letter.world_positions().next().unwrap();
        assert!((first - Point3::new(2.5, 0.5, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_word_mesh() {
        let word = build_word(&NEXT, DeviceProfile::DESKTOP);
        let mesh = word.mesh(&GroupTransform::default());
        assert_eq!(mesh.triangles.len(), word.block_count() * 12);
        assert_eq!(mesh.edges.len(), word.block_count() * 12);
    }

    #[test]
    fn test_word_mesh_normals_follow_group_rotation() {
        let word = build_word(&NEXT, DeviceProfile::DESKTOP);
        let group = GroupTransform {
            rotation: RotationState::yaw(std::f32::consts::PI / 1.5),
            ..GroupTransform::default()
        };
        let mesh = word.mesh(&group);
        for triangle in &mesh.triangles {
            let stored = triangle.vertices[0].normal;
            assert!((stored - triangle.calculate_normal()).norm() < 1e-4);
            assert!((stored.norm() - 1.0).abs() < 1e-5);
        }
    }
}
