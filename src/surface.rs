// Where finished frames go: a real window, or memory for headless runs.

use crate::error::Error;
use crate::pointer::{PointerSource, ScriptedPointer};
use crate::types::{FrameBuffer, Point};

pub trait Surface {
    /// False once the user closed the surface (the loop should stop).
    fn is_open(&self) -> bool;

    /// Show `framebuffer` as the current frame.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error>;
}

/// Keeps the last presented frame. Never closes on its own.
#[derive(Default)]
pub struct Offscreen {
    last: Option<FrameBuffer>,
    presented: u64,
}

impl Offscreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }
}

impl Surface for Offscreen {
    fn is_open(&self) -> bool {
        true
    }

    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.last = Some(framebuffer.clone());
        self.presented += 1;
        Ok(())
    }
}

/// Offscreen output driven by a scripted pointer.
pub struct Headless {
    pub screen: Offscreen,
    pub pointer: ScriptedPointer,
}

impl Headless {
    pub fn new(pointer: ScriptedPointer) -> Self {
        Self { screen: Offscreen::new(), pointer }
    }
}

impl Surface for Headless {
    fn is_open(&self) -> bool {
        self.screen.is_open()
    }

    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.screen.present(framebuffer)
    }
}

impl PointerSource for Headless {
    fn poll(&mut self) -> Option<Point> {
        self.pointer.poll()
    }
}
