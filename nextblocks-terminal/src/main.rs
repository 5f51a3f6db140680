/// NextBlocks Terminal - the rotating block logo as ASCII art
///
/// Controls:
///   - Arrow Keys: Orbit the camera
///   - +/-: Zoom
///   - WASD: Pan
///   - Q/ESC: Quit
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nextblocks_core::{compose, DeviceProfile, DeviceState, PageConfig, PageShell};
use nextblocks_terminal::TerminalApp;
use std::path::PathBuf;

/// Environment variable standing in for a browser user agent
const USER_AGENT_VAR: &str = "NEXTBLOCKS_USER_AGENT";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DeviceArg {
    /// Classify from NEXTBLOCKS_USER_AGENT; desktop when unset
    Auto,
    Mobile,
    Desktop,
}

#[derive(Debug, Parser)]
#[command(name = "nextblocks", version, about = "Render the NEXT block logo in the terminal")]
struct Args {
    /// Page configuration JSON (links, logo, word)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "auto")]
    device: DeviceArg,

    /// Frame rate target
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Print the scene description as JSON and exit
    #[arg(long)]
    print_scene: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<PageConfig> {
    let Some(path) = path else {
        return Ok(PageConfig::default());
    };
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    PageConfig::from_json(&input).with_context(|| format!("failed to parse config {}", path.display()))
}

fn resolve_device(device: DeviceArg) -> DeviceProfile {
    match device {
        DeviceArg::Mobile => DeviceProfile::MOBILE,
        DeviceArg::Desktop => DeviceProfile::DESKTOP,
        DeviceArg::Auto => {
            let user_agent = std::env::var(USER_AGENT_VAR).ok();
            let mut state = DeviceState::new();
            state.attach(user_agent.as_deref());
            state.profile()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let profile = resolve_device(args.device);
    let scene = compose(profile, &config);
    log::info!("scene ready: {} blocks, mobile={}", scene.word.block_count(), profile.is_mobile);

    if args.print_scene {
        println!("{}", scene.to_json()?);
        return Ok(());
    }

    let shell = PageShell::new(&config);
    let mut app = TerminalApp::new(&scene, &shell, args.fps).context("failed to query terminal size")?;
    app.run().context("terminal renderer failed")?;

    Ok(())
}
