/// Terminal viewer for the block logo
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use nextblocks_core::{Camera, Mesh, OrbitControls, PageShell, SceneDescription};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::{AsciiRenderer, Lighting};

/// Orbit step for one arrow key press, in radians
const ROTATE_STEP: f32 = 0.1;
/// Distance factor for one zoom key press
const ZOOM_STEP: f32 = 0.9;
/// Pan distance for one key press, in scene units
const PAN_STEP: f32 = 0.5;

/// Terminal cells are roughly twice as tall as they are wide
fn camera_for(width: u16, height: u16) -> Camera {
    Camera::new(width as u32, height as u32 * 2)
}

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    mesh: Mesh,
    lighting: Lighting,
    caption: String,
    camera: Camera,
    controls: OrbitControls,
    renderer: AsciiRenderer,
    running: bool,
    target_fps: u32,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: &SceneDescription, shell: &PageShell, target_fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            mesh: scene.mesh(),
            lighting: Lighting::from_scene(scene),
            caption: shell.caption(),
            camera: camera_for(width, height),
            controls: scene.controls,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            target_fps: target_fps.max(1),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / self.target_fps as u64);
        let mut previous = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.controls
                .update(&mut self.camera, (frame_start - previous).as_secs_f32());
            previous = frame_start;

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_key(code),
            Event::Resize(width, height) => {
                self.camera.resize(width as u32, height as u32 * 2);
                self.renderer.resize(width as usize, height as usize);
                log::debug!("resized to {}x{}", width, height);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        let (controls, camera) = (&self.controls, &mut self.camera);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Left => controls.rotate(camera, -ROTATE_STEP, 0.0),
            KeyCode::Right => controls.rotate(camera, ROTATE_STEP, 0.0),
            KeyCode::Up => controls.rotate(camera, 0.0, -ROTATE_STEP),
            KeyCode::Down => controls.rotate(camera, 0.0, ROTATE_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => controls.zoom(camera, ZOOM_STEP),
            KeyCode::Char('-') => controls.zoom(camera, 1.0 / ZOOM_STEP),
            KeyCode::Char('a') => controls.pan(camera, -PAN_STEP, 0.0),
            KeyCode::Char('d') => controls.pan(camera, PAN_STEP, 0.0),
            KeyCode::Char('w') => controls.pan(camera, 0.0, PAN_STEP),
            KeyCode::Char('s') => controls.pan(camera, 0.0, -PAN_STEP),
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer.render_mesh(&self.mesh, &self.camera, &self.lighting);

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Page overlay and status line
        let (_, height) = terminal::size()?;
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::White),
            Print(&self.caption),
            cursor::MoveTo(0, height.saturating_sub(1)),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "NextBlocks | FPS: {:.1} | Arrows=Orbit +/-=Zoom WASD=Pan Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
