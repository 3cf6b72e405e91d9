// What you SEE:
// • A dark window with 20 pink discs chasing the mouse, largest at the head.
// • Hold the mouse still and the whole chain collapses onto the pointer.
// • ESC or closing the window quits.
// • --headless renders offscreen along a scripted path (optionally saving a PNG).

use clap::Parser;
use cursor_trail::animator::Animator;
use cursor_trail::config::{Args, Config, Mode};
use cursor_trail::draw::Drawer;
use cursor_trail::error::Error;
use cursor_trail::pointer::ScriptedPointer;
use cursor_trail::snapshot::save_png;
use cursor_trail::surface::Headless;
use cursor_trail::trail::{EASE, TRAIL_LEN};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .init();

    let config = Config::try_from(&args)?;
    info!(
        width = config.width,
        height = config.height,
        markers = TRAIL_LEN,
        ease = EASE,
        "starting cursor trail"
    );

    let mut animator = Animator::new(config.width, config.height);
    let token = CancellationToken::new();

    match config.mode {
        Mode::Window { fps } => {
            /* Visual: window opens; discs sit at the top-left until the mouse moves in. */
            let mut drawer = Drawer::new("Cursor Trail", config.width, config.height, fps)?;
            info!(fps, "window open");
            animator.run(&mut drawer, &token, None)?;
        }
        Mode::Headless { frames, snapshot } => {
            // Two horizontal sweeps per second at 60 FPS
            let pointer = ScriptedPointer::lissajous(config.width as f32, config.height as f32, 120);
            let mut headless = Headless::new(pointer);
            let summary = animator.run(&mut headless, &token, Some(frames))?;
            info!(
                frames = summary.frames,
                presented = headless.screen.frames_presented(),
                wrap_x = animator.trail().wrap_point().x,
                wrap_y = animator.trail().wrap_point().y,
                "headless run finished"
            );

            if let Some(path) = snapshot {
                save_png(animator.screen(), &path)?;
                info!(path = %path.display(), "snapshot written");
            }
        }
    }

    Ok(())
}
