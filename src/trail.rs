// The trail itself: a fixed chain of markers that lags behind the cursor.
// Visual: a string of discs follows the mouse, shrinking toward the tail.
//
// Each frame walks the chain head to tail. Marker i is placed at the running
// point, then the running point eases EASE of the way toward where marker i+1
// sat on the previous frame. The tail eases toward the head's previous
// position; that last point is kept as `wrap_point` but no marker shows it.

use crate::types::Point;

/// Number of markers in the chain.
pub const TRAIL_LEN: usize = 20;

/// Fraction of the remaining distance covered per link per frame.
pub const EASE: f32 = 0.3;

/// Scale of the marker at `index`: 1.0 for the head, down to 1/N for the tail.
pub fn scale_for(index: usize) -> f32 {
    1.0 - index as f32 / TRAIL_LEN as f32
}

/// Latest observed pointer position. Last write wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor {
    pos: Point,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pos = Point::new(x, y);
    }

    pub fn position(&self) -> Point {
        self.pos
    }
}

/// One disc in the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub pos: Point,  // centre of the disc in window pixels
    pub scale: f32,  // 1.0 = full size
}

pub struct Trail {
    markers: [Marker; TRAIL_LEN],
    wrap: Point,
}

impl Trail {
    /// All markers start at the origin with their final scales.
    pub fn new() -> Self {
        let markers = std::array::from_fn(|i| Marker { pos: Point::ORIGIN, scale: scale_for(i) });
        Self { markers, wrap: Point::ORIGIN }
    }

    /// Advance one animation frame toward `cursor`.
    pub fn step(&mut self, cursor: Point) {
        // The head's position before this walk; the tail aims here.
        let head_prev = self.markers[0].pos;
        let mut p = cursor;

        for i in 0..TRAIL_LEN {
            let target = match self.markers.get(i + 1) {
                Some(next) => next.pos, // not yet moved this frame
                None => head_prev,
            };

            let m = &mut self.markers[i];
            m.pos = p;
            m.scale = scale_for(i);

            p = p.ease_toward(target, EASE);
        }

        self.wrap = p;
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Where the tail was easing to on the last frame (toward the head's old spot).
    pub fn wrap_point(&self) -> Point {
        self.wrap
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
