//! What you SEE:
//! * Camera feed (or black) with your drawing laid over it.
//! * Point with the index finger to draw; hold a fist to open the color picker,
//!   point at a swatch to pick; hold the thumb out to toggle drawing.
//! * C clears, S saves a PNG, Q/ESC quits.
//! Without a landmark detector attached, the mouse stands in for the hand
//! (see `simulate`), or a recorded session can be replayed with --replay.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use air_canvas::config::SessionConfig;
use air_canvas::draw::Drawer;
use air_canvas::render::Renderer;
use air_canvas::session::{Command, Session};
use air_canvas::simulate::SimulatedSource;
use air_canvas::source::{LandmarkSource, PointerInput, ReplaySource};
use air_canvas::types::FrameBuffer;

#[derive(Parser, Debug)]
#[command(name = "air-canvas", about = "Draw in the air with hand gestures")]
struct Cli {
    /// Frame width when no camera is used
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Frame height when no camera is used
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Camera device index
    #[arg(long, default_value_t = 0)]
    camera_index: u32,

    /// Do not open a camera; draw on a black backdrop
    #[arg(long)]
    no_camera: bool,

    /// Replay landmarks from a JSON-lines file instead of the mouse
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Run the replay without a window and save the result
    #[arg(long, requires = "replay")]
    headless: bool,

    /// Directory for saved drawings
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Gesture hold time in milliseconds
    #[arg(long, default_value_t = 500)]
    hold_ms: u64,

    /// Brush thickness in pixels
    #[arg(long, default_value_t = 5)]
    brush: i32,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            hold_duration: Duration::from_millis(self.hold_ms),
            brush_thickness: self.brush.max(1),
            ..SessionConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "air_canvas=info".into()),
        )
        .init();

    info!("air-canvas v{} starting", env!("CARGO_PKG_VERSION"));

    if cli.headless {
        run_headless(&cli)
    } else {
        run_window(&cli)
    }
}

fn print_instructions() {
    println!();
    println!("=== AIR DRAWING APP ===");
    println!("Instructions:");
    println!("- Point with INDEX FINGER to draw");
    println!("- Hold FIST for 0.5s to open/close color picker");
    println!("- Point at colors to select them");
    println!("- Hold THUMB OUT for 0.5s to toggle drawing on/off");
    println!("- Press 'C' to clear canvas");
    println!("- Press 'S' to save drawing");
    println!("- Press 'Q' to quit");
    println!("Mouse stand-in: hold LMB = point, F = fist, T = thumb out, RMB = hide hand");
    println!("========================");
    println!();
}

/// `drawing_<unix-millis>.png`, with a counter suffix if that name is taken.
fn save_path(dir: &Path) -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    unique_path(dir, &format!("drawing_{millis}"))
}

fn unique_path(dir: &Path, stem: &str) -> PathBuf {
    let mut path = dir.join(format!("{stem}.png"));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{stem}_{n}.png"));
        n += 1;
    }
    path
}

/* ------------------------------ Headless replay ------------------------------ */

fn run_headless(cli: &Cli) -> anyhow::Result<()> {
    let path = cli.replay.as_deref().context("--headless needs --replay")?;
    let mut source = ReplaySource::open(path).context("loading replay")?;
    let mut session = Session::new(&cli.session_config(), cli.width as usize, cli.height as usize);

    // The recording's timestamps are the clock.
    let start = Instant::now();
    let mut now = start;
    let mut frames = 0usize;
    let mut segments = 0usize;
    while let Some(sample) = source.poll(&PointerInput::default())? {
        now = match sample.due(start).context("replay timestamp")? {
            Some(due) => due,
            None => now + Duration::from_millis(33),
        };
        let report = session.process_frame(sample.hand.as_ref(), now);
        segments += report.segment.is_some() as usize;
        frames += 1;
    }

    let mode = session.mode();
    info!(
        frames,
        segments,
        drawing_enabled = mode.drawing_enabled,
        palette_open = mode.palette_open,
        "replay finished"
    );

    let out = save_path(&cli.output_dir);
    session.execute(Command::Save(out)).context("saving drawing")?;
    Ok(())
}

/* ------------------------------ Interactive window ------------------------------ */

/// Optional live camera image under the canvas.
struct Backdrop {
    #[cfg(feature = "camera")]
    cam: Option<air_canvas::camera::CameraCapture>,
}

impl Backdrop {
    #[cfg(feature = "camera")]
    fn open(cli: &Cli) -> Self {
        if cli.no_camera {
            return Self { cam: None };
        }
        match air_canvas::camera::CameraCapture::new(cli.camera_index, cli.width, cli.height) {
            Ok(cam) => Self { cam: Some(cam) },
            Err(e) => {
                warn!("{e}; continuing without camera");
                Self { cam: None }
            }
        }
    }

    #[cfg(not(feature = "camera"))]
    fn open(cli: &Cli) -> Self {
        if !cli.no_camera {
            warn!("built without the `camera` feature; drawing on a black backdrop");
        }
        Self {}
    }

    fn resolution(&self, cli: &Cli) -> (usize, usize) {
        #[cfg(feature = "camera")]
        if let Some(cam) = &self.cam {
            let (w, h) = cam.resolution();
            return (w as usize, h as usize);
        }
        (cli.width as usize, cli.height as usize)
    }

    fn next_frame(&mut self) -> anyhow::Result<Option<FrameBuffer>> {
        #[cfg(feature = "camera")]
        if let Some(cam) = &mut self.cam {
            return Ok(Some(cam.next_frame()?));
        }
        Ok(None)
    }
}

fn run_window(cli: &Cli) -> anyhow::Result<()> {
    let mut backdrop = Backdrop::open(cli);
    let (w, h) = backdrop.resolution(cli);

    let mut drawer = Drawer::new("Air Canvas", w, h).context("opening window")?;
    let mut session = Session::new(&cli.session_config(), w, h);
    let renderer = Renderer::new();
    let mut screen = FrameBuffer::filled(w, h, 0);

    let mut source: Box<dyn LandmarkSource> = match &cli.replay {
        Some(path) => Box::new(ReplaySource::open(path).context("loading replay")?),
        None => Box::new(SimulatedSource::new()),
    };

    print_instructions();

    let start = Instant::now();
    let mut replay_done = false;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.quit_pressed() {
        // 1) Camera frame (blocks until the next one is ready).
        let live = backdrop.next_frame()?.filter(|f| f.width == w && f.height == h);

        // 2) Landmarks for this cycle.
        let sample = if replay_done { None } else { source.poll(&drawer.pointer_input())? };
        if sample.is_none() && !replay_done {
            replay_done = true;
            info!("landmark source finished; canvas stays until you quit");
        }
        let hand = sample.as_ref().and_then(|s| s.hand);

        // Recorded samples carry their own timing; wait for it.
        let due = match &sample {
            Some(s) => s.due(start).context("replay timestamp")?,
            None => None,
        };
        let now = match due {
            Some(due) => {
                if let Some(wait) = due.checked_duration_since(Instant::now()) {
                    thread::sleep(wait);
                }
                due
            }
            None => Instant::now(),
        };

        // 3) Gestures → mode → palette or stroke.
        let report = session.process_frame(hand.as_ref(), now);

        // 4) Commands.
        if drawer.clear_pressed_once() {
            session.execute(Command::Clear)?;
        }
        if drawer.save_pressed_once() {
            if let Err(e) = session.execute(Command::Save(save_path(&cli.output_dir))) {
                error!("{e}");
            }
        }

        // 5) Compose and present.
        renderer.render(&mut screen, live.as_ref(), hand.as_ref(), &session, &report);
        drawer.present(&screen)?;
    }

    Ok(())
}
