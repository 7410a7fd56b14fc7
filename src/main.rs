use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use scanlab::config::SceneConfig;
use scanlab::render::Canvas;
use scanlab::scene::Scene;
use scanlab::window::{FrameLimiter, Window, WindowEvent};
use scanlab::Result;

#[derive(Parser, Debug)]
#[command(name = "scanlab")]
#[command(version)]
#[command(about = "Line, curve, clipping and transformation demos on a software canvas", long_about = None)]
struct Cli {
    /// JSON scene configuration; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scene to show first, or the only scene to export
    #[arg(short, long)]
    scene: Option<Scene>,

    /// Render to PNG files in this directory instead of opening a window
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print the scene names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        for scene in Scene::ALL {
            println!("{:<32} {}", scene, scene.title());
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            SceneConfig::from_file(path)?
        }
        None => SceneConfig::default(),
    };

    match &cli.export {
        Some(dir) => export(&config, dir, cli.scene),
        None => run_window(&config, cli.scene.unwrap_or(Scene::Lines)),
    }
}

fn export(config: &SceneConfig, dir: &Path, only: Option<Scene>) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut canvas = Canvas::new(config.width, config.height)?;

    let scenes: Vec<Scene> = match only {
        Some(scene) => vec![scene],
        None => Scene::ALL.to_vec(),
    };
    for scene in scenes {
        scene.render(config, &mut canvas)?;
        canvas.save_png(dir.join(format!("{}.png", scene)))?;
    }
    Ok(())
}

fn run_window(config: &SceneConfig, first: Scene) -> Result<()> {
    let mut window = Window::new(&first.title(), config.width, config.height)?;
    let mut canvas = Canvas::new(config.width, config.height)?;
    let texture_creator = window.texture_creator();
    let mut texture = window.create_frame_texture(&texture_creator)?;
    let mut frame_limiter = FrameLimiter::new(&window);

    let mut scene = first;
    let mut dirty = true;
    info!("Keys: 1-9 select a scene, Left/Right cycle, Esc quits");

    loop {
        let next = match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::SelectScene(index) => Scene::ALL.get(index).copied(),
            WindowEvent::NextScene => Some(scene.next()),
            WindowEvent::PreviousScene => Some(scene.previous()),
            WindowEvent::None => None,
        };
        if let Some(next) = next {
            if next != scene {
                scene = next;
                dirty = true;
            }
        }

        if dirty {
            info!("Scene: {}", scene.title());
            scene.render(config, &mut canvas)?;
            window.set_title(&scene.title())?;
            dirty = false;
        }

        window.present(&mut texture, canvas.as_bytes())?;
        frame_limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
