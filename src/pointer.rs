// Sources of pointer-move positions.
// Visual: whatever this reports is where the head of the trail goes next frame.

use crate::types::Point;

pub trait PointerSource {
    /// A new pointer position since the last poll, or None if it did not move
    /// (or is outside the surface). The cursor keeps its last value on None.
    fn poll(&mut self) -> Option<Point>;
}

/// A deterministic pointer for headless runs.
pub enum ScriptedPointer {
    /// Never moves after the first poll.
    Hold { at: Point, reported: bool },
    /// A Lissajous figure filling `width` x `height`, one sample per poll.
    Lissajous { width: f32, height: f32, tick: u64, period: u64 },
}

impl ScriptedPointer {
    pub fn hold(at: Point) -> Self {
        ScriptedPointer::Hold { at, reported: false }
    }

    /// `period` polls trace the horizontal lobe once.
    pub fn lissajous(width: f32, height: f32, period: u64) -> Self {
        ScriptedPointer::Lissajous { width, height, tick: 0, period: period.max(1) }
    }
}

impl PointerSource for ScriptedPointer {
    fn poll(&mut self) -> Option<Point> {
        match self {
            ScriptedPointer::Hold { at, reported } => {
                if *reported {
                    return None;
                }
                *reported = true;
                Some(*at)
            }
            ScriptedPointer::Lissajous { width, height, tick, period } => {
                let t = (*tick % *period) as f32 / *period as f32 * std::f32::consts::TAU;
                *tick += 1;
                // 3:2 figure, inset so the discs stay on screen
                let cx = *width * 0.5;
                let cy = *height * 0.5;
                let x = cx + cx * 0.8 * (3.0 * t).sin();
                let y = cy + cy * 0.8 * (2.0 * t).sin();
                Some(Point::new(x, y))
            }
        }
    }
}
