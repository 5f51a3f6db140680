/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Vector3;
use nextblocks_core::geometry::{self, Edge};
use nextblocks_core::scene::SceneDescription;
use nextblocks_core::{Camera, Mesh, Triangle};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Outline glyph; drawn slightly in front of the faces it borders
const OUTLINE_CHAR: char = 'o';
const OUTLINE_DEPTH_BIAS: f32 = 0.05;

/// Lighting taken from the scene description
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
    pub direction: Vector3<f32>,
    pub surface: geometry::Color,
    pub outline: geometry::Color,
}

impl Lighting {
    pub fn from_scene(scene: &SceneDescription) -> Self {
        Self {
            ambient: scene.ambient_light.intensity,
            directional: scene.directional_light.intensity,
            direction: scene.directional_light.direction(),
            surface: scene.style.surface.color,
            outline: scene.style.outline.color,
        }
    }

    /// Brightness in [0, 1] for a face normal
    fn brightness(&self, normal: &Vector3<f32>) -> f32 {
        let diffuse = normal.dot(&self.direction).max(0.0);
        (self.ambient + self.directional * diffuse).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    character: char,
    color: Color,
}

const EMPTY: Cell = Cell {
    character: ' ',
    color: Color::Reset,
};

/// ASCII renderer that converts block meshes to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    cells: Vec<Cell>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            cells: vec![EMPTY; size],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.cells.fill(EMPTY);
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, camera: &Camera, lighting: &Lighting) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, camera, lighting);
        }
        for edge in &mesh.edges {
            self.render_edge(edge, camera, lighting);
        }
    }

    fn project(&self, camera: &Camera, point: &nalgebra::Point3<f32>) -> Option<(f32, f32, f32)> {
        camera.project_to_screen(point, self.width as u32, self.height as u32)
    }

    fn render_triangle(&mut self, triangle: &Triangle, camera: &Camera, lighting: &Lighting) {
        let mut screen_coords = [(0.0, 0.0, 0.0); 3];
        for (coord, vertex) in screen_coords.iter_mut().zip(&triangle.vertices) {
            match self.project(camera, &vertex.position) {
                Some(projected) => *coord = projected,
                None => return, // Triangle is clipped
            }
        }

        // Back-face culling against the view direction, using the normal the mesh carries
        let normal = triangle.vertices[0].normal;
        let to_camera = camera.position - triangle.vertices[0].position;
        if normal.dot(&to_camera) <= 0.0 {
            return;
        }

        let brightness = lighting.brightness(&normal);
        let index = ((brightness * (LUMINOSITY_RAMP.len() - 1) as f32) as usize).min(LUMINOSITY_RAMP.len() - 1);
        let cell = Cell {
            character: LUMINOSITY_RAMP[index],
            color: shade(lighting.surface, brightness),
        };

        self.rasterize_triangle(&screen_coords, cell);
    }

    fn render_edge(&mut self, edge: &Edge, camera: &Camera, lighting: &Lighting) {
        let (Some(start), Some(end)) = (self.project(camera, &edge.start), self.project(camera, &edge.end)) else {
            return;
        };

        let cell = Cell {
            character: OUTLINE_CHAR,
            color: shade(lighting.outline, 1.0),
        };

        // DDA line walk, one sample per covered cell
        let steps = (end.0 - start.0).abs().max((end.1 - start.1).abs()).ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let x = start.0 + (end.0 - start.0) * t;
            let y = start.1 + (end.1 - start.1) * t;
            let depth = start.2 + (end.2 - start.2) * t - OUTLINE_DEPTH_BIAS;
            self.plot(x.floor() as i32, y.floor() as i32, depth, cell);
        }
    }

    fn plot(&mut self, x: i32, y: i32, depth: f32, cell: Cell) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.cells[idx] = cell;
        }
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], cell: Cell) {
        let [v0, v1, v2] = *coords;

        // Bounding box clipped to the screen
        let min_x = v0.0.min(v1.0).min(v2.0).floor().max(0.0) as i32;
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i32).min(self.width as i32 - 1);
        let min_y = v0.1.min(v1.1).min(v2.1).floor().max(0.0) as i32;
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                let Some((w0, w1, w2)) = barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), p) else {
                    continue;
                };
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                    self.plot(x, y, depth, cell);
                }
            }
        }
    }

    /// Character at a cell, for inspection
    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x].character
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            writer.queue(MoveTo(0, y as u16))?;
            for cell in row {
                writer.queue(SetForegroundColor(cell.color))?;
                writer.queue(Print(cell.character))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn shade(color: geometry::Color, brightness: f32) -> Color {
    let scale = |channel: u8| (channel as f32 * (0.35 + 0.65 * brightness)).min(255.0) as u8;
    Color::Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(v0: (f32, f32), v1: (f32, f32), v2: (f32, f32), p: (f32, f32)) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    Some((w0, w1, 1.0 - w0 - w1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextblocks_core::{compose, DeviceProfile, PageConfig};

    #[test]
    fn test_barycentric_center() {
        let (w0, w1, w2) = barycentric((0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (1.0, 1.0)).unwrap();
        assert!(w0 > 0.0 && w1 > 0.0 && w2 > 0.0);
        assert!((w0 + w1 + w2 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_triangle() {
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (1.0, 1.0)).is_none());
    }

    #[test]
    fn test_scene_draws_something() {
        let scene = compose(DeviceProfile::DESKTOP, &PageConfig::default());
        // Terminal cells are about twice as tall as wide
        let camera = Camera::new(80, 48);
        let mut renderer = AsciiRenderer::new(80, 24);
        renderer.render_mesh(&scene.mesh(), &camera, &Lighting::from_scene(&scene));
        assert!(drawn_cells(&renderer, 80, 24) > 0);

        renderer.clear();
        assert_eq!(renderer.char_at(40, 12), ' ');
    }

    fn drawn_cells(renderer: &AsciiRenderer, width: usize, height: usize) -> usize {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| renderer.char_at(x, y) != ' ')
            .count()
    }

    #[test]
    fn test_faces_are_culled_by_stored_normals() {
        let scene = compose(DeviceProfile::DESKTOP, &PageConfig::default());
        let camera = Camera::new(80, 48);
        let lighting = Lighting::from_scene(&scene);

        let mut faces = scene.mesh();
        faces.edges.clear();
        let mut renderer = AsciiRenderer::new(80, 24);
        renderer.render_mesh(&faces, &camera, &lighting);
        assert!(drawn_cells(&renderer, 80, 24) > 0);

        // Same winding, normals turned inward: every face now points away from the camera
        for vertex in faces.triangles.iter_mut().flat_map(|t| t.vertices.iter_mut()) {
            vertex.normal = -vertex.normal;
        }
        renderer.clear();
        renderer.render_mesh(&faces, &camera, &lighting);
        assert_eq!(drawn_cells(&renderer, 80, 24), 0);
    }

    #[test]
    fn test_brightness_includes_ambient() {
        let scene = compose(DeviceProfile::DESKTOP, &PageConfig::default());
        let lighting = Lighting::from_scene(&scene);
        let away = -lighting.direction;
        assert!((lighting.brightness(&away) - 0.5).abs() < 1e-6);
        assert!((lighting.brightness(&lighting.direction) - 1.0).abs() < 1e-6);
    }
}
