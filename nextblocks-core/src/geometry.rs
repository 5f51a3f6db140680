/// Block primitives: the cube every filled glyph cell becomes
use nalgebra::{Point3, Vector3};
use serde::{Serialize, Serializer};

/// Edge length of a single block
pub const BLOCK_SIZE: f32 = 0.5;

/// 24-bit RGB color, serialized as a `#rrggbb` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::from_hex(0xffffff);

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Physically based surface of a block's solid cube
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMaterial {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    pub transparent: bool,
    pub opacity: f32,
    pub transmission: f32,
    pub clearcoat: f32,
}

impl Default for BlockMaterial {
    fn default() -> Self {
        Self {
            color: Color::from_hex(0x0070f3),
            roughness: 0.1,
            metalness: 0.8,
            transparent: true,
            opacity: 0.9,
            transmission: 0.5,
            clearcoat: 1.0,
        }
    }
}

/// Line material of a block's wireframe outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineMaterial {
    pub color: Color,
    pub line_width: f32,
}

impl Default for OutlineMaterial {
    fn default() -> Self {
        Self {
            color: Color::from_hex(0x214dbd),
            line_width: 2.0,
        }
    }
}

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Face normal from the winding of the vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let [v0, v1, v2] = self.vertices.map(|v| v.position);
        (v1 - v0).cross(&(v2 - v0)).normalize()
    }
}

/// Line segment of a wireframe outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
}

/// Triangle soup plus outline segments
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
    pub edges: Vec<Edge>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn add_edge(&mut self, start: Point3<f32>, end: Point3<f32>) {
        self.edges.push(Edge { start, end });
    }

    pub fn extend(&mut self, other: Mesh) {
        self.triangles.extend(other.triangles);
        self.edges.extend(other.edges);
    }

    /// Axis-aligned cube centered on `center`, with its 12 outline edges
    pub fn cube(center: Point3<f32>, size: f32) -> Self {
        let half = size / 2.0;
        let corner = |x: f32, y: f32, z: f32| center + Vector3::new(x * half, y * half, z * half);
        let mut mesh = Self::new();

        // Each face: outward normal plus two in-plane axes, wound counter-clockwise
        for axis in 0..3 {
            for sign in [1.0f32, -1.0] {
                let mut normal = Vector3::<f32>::zeros();
                normal[axis] = sign;
                let mut u = Vector3::<f32>::zeros();
                u[(axis + 1) % 3] = 1.0;
                let mut v = Vector3::<f32>::zeros();
                v[(axis + 2) % 3] = sign;

                let point = |a: f32, b: f32| {
                    let offset = normal + u * a + v * b;
                    Vertex::new(corner(offset.x, offset.y, offset.z), normal)
                };
                let (p0, p1, p2, p3) = (point(-1.0, -1.0), point(1.0, -1.0), point(1.0, 1.0), point(-1.0, 1.0));
                mesh.add_triangle(Triangle::new(p0, p1, p2));
                mesh.add_triangle(Triangle::new(p0, p2, p3));
            }
        }

        // Edges run along each axis, one per combination of the other two signs
        for axis in 0..3 {
            for a in [-1.0f32, 1.0] {
                for b in [-1.0f32, 1.0] {
                    let mut start = Vector3::<f32>::zeros();
                    start[(axis + 1) % 3] = a;
                    start[(axis + 2) % 3] = b;
                    let mut end = start;
                    start[axis] = -1.0;
                    end[axis] = 1.0;
                    mesh.add_edge(corner(start.x, start.y, start.z), corner(end.x, end.y, end.z));
                }
            }
        }

        mesh
    }
}

/// One renderable cube: solid translucent body plus a contrasting outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Block {
    pub position: Point3<f32>,
    pub size: f32,
}

impl Block {
    /// Solid and outline geometry centered on the block's position
    pub fn mesh(&self) -> Mesh {
        Mesh::cube(self.position, self.size)
    }
}

/// Produce the block for a filled cell at `position`
pub fn instantiate(position: Point3<f32>) -> Block {
    Block {
        position,
        size: BLOCK_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate() {
        let block = instantiate(Point3::new(1.0, 2.0, 0.0));
        assert_eq!(block.position, Point3::new(1.0, 2.0, 0.0));
        assert!((block.size - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cube_counts() {
        let mesh = instantiate(Point3::origin()).mesh();
        assert_eq!(mesh.triangles.len(), 12);
        assert_eq!(mesh.edges.len(), 12);
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let center = Point3::new(3.0, -1.0, 2.0);
        let mesh = Mesh::cube(center, 0.5);
        for triangle in &mesh.triangles {
            let normal = triangle.calculate_normal();
            assert!((normal - triangle.vertices[0].normal).norm() < 1e-5);
            let centroid = triangle.vertices[0].position - center;
            assert!(normal.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn test_cube_edges_have_block_length() {
        let mesh = Mesh::cube(Point3::origin(), BLOCK_SIZE);
        for edge in &mesh.edges {
            assert!(((edge.end - edge.start).norm() - BLOCK_SIZE).abs() < 1e-6);
        }
    }

    #[test]
    fn test_default_materials() {
        let material = BlockMaterial::default();
        assert_eq!(material.color.to_hex(), "#0070f3");
        assert!((material.opacity - 0.9).abs() < 1e-6);
        assert_eq!(OutlineMaterial::default().color.to_hex(), "#214dbd");
    }
}
