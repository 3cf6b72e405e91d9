// The frame loop: poll pointer, step the trail, draw, present, repeat.
// Visual: one iteration is one displayed frame of the trail.

use crate::draw::{render_trail, BACKGROUND};
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::pointer::PointerSource;
use crate::surface::Surface;
use crate::trail::{Cursor, Trail};
use crate::types::FrameBuffer;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Someone else cancelled the token.
    Cancelled,
    /// The window was closed or ESC pressed.
    SurfaceClosed,
    /// The frame budget ran out.
    FrameBudget,
}

#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub frames: u64,
    pub reason: StopReason,
}

pub struct Animator {
    cursor: Cursor,
    trail: Trail,
    screen: FrameBuffer, // reused every frame
    lut: GammaLut,
}

impl Animator {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cursor: Cursor::new(),
            trail: Trail::new(),
            screen: FrameBuffer::filled(width, height, BACKGROUND),
            lut: GammaLut::new(),
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn screen(&self) -> &FrameBuffer {
        &self.screen
    }

    /// One frame: take the newest pointer move, step, render, present.
    pub fn frame<F: Surface + PointerSource>(&mut self, frontend: &mut F) -> Result<(), Error> {
        if let Some(p) = frontend.poll() {
            self.cursor.move_to(p.x, p.y);
        }
        self.trail.step(self.cursor.position());
        render_trail(&mut self.screen, &self.trail, &self.lut);
        frontend.present(&self.screen)
    }

    /// Run frames until `token` is cancelled. Closing the surface or hitting
    /// `max_frames` cancels the token itself.
    pub fn run<F: Surface + PointerSource>(
        &mut self,
        frontend: &mut F,
        token: &CancellationToken,
        max_frames: Option<u64>,
    ) -> Result<RunSummary, Error> {
        let mut frames: u64 = 0;
        let mut reason = StopReason::Cancelled;

        let mut last_fps_time = Instant::now();
        let mut frames_this_second: u32 = 0;

        while !token.is_cancelled() {
            if !frontend.is_open() {
                reason = StopReason::SurfaceClosed;
                token.cancel();
                break;
            }
            if max_frames.is_some_and(|max| frames >= max) {
                reason = StopReason::FrameBudget;
                token.cancel();
                break;
            }

            self.frame(frontend)?;
            frames += 1;

            frames_this_second += 1;
            let now = Instant::now();
            if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
                let secs = now.duration_since(last_fps_time).as_secs_f32();
                debug!(fps = %format!("{:.1}", frames_this_second as f32 / secs), "frame rate");
                frames_this_second = 0;
                last_fps_time = now;
            }
        }

        info!(frames, ?reason, "trail loop stopped");
        Ok(RunSummary { frames, reason })
    }
}
