// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the trail and reports where the mouse is.
// 2) Soft-edged discs, one per marker, sized by the marker's scale.

use crate::error::Error;
use crate::gamma::GammaLut;
use crate::pointer::PointerSource;
use crate::surface::Surface;
use crate::trail::Trail;
use crate::types::{FrameBuffer, Point};
use minifb::{Key, MouseMode, Window, WindowOptions};

/// Page background behind the trail.
pub const BACKGROUND: u32 = 0x00_14_14_1E;
/// Fill colour of every marker.
pub const MARKER_COLOR: u32 = 0x00_FF_5C_8A;
/// Radius of a marker at scale 1.0 (a 24px disc).
pub const MARKER_RADIUS: f32 = 12.0;
/// Opacity of a marker's solid interior.
pub const MARKER_ALPHA: f32 = 0.85;

pub struct Drawer {
    window: Window,            // the on-screen window you see
    last_mouse: Option<Point>, // last position handed to the trail
}

impl Drawer {
    /// Create a window and cap its refresh to `fps`.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // update_with_buffer now sleeps to keep one loop turn per frame
        window.set_target_fps(fps);
        Ok(Self { window, last_mouse: None })
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels, or None while the pointer is outside.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x, y))
    }
}

impl Surface for Drawer {
    /// Returns false when the user closes the window or presses ESC.
    fn is_open(&self) -> bool {
        self.window.is_open() && !self.esc_pressed()
    }

    /// Visual: the window immediately displays the new frame.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}

/// The live mouse over the window; only reports actual moves.
impl PointerSource for Drawer {
    fn poll(&mut self) -> Option<Point> {
        let pos = self.mouse_pos()?;
        if self.last_mouse == Some(pos) {
            return None;
        }
        self.last_mouse = Some(pos);
        Some(pos)
    }
}

/* ---------- Software drawing ---------- */

/// Draw a filled disc centred at `center` with a one-pixel feathered rim.
/// Pixels outside the frame are clipped; a disc entirely off-frame draws nothing.
pub fn fill_disc(
    fb: &mut FrameBuffer,
    center: Point,
    radius: f32,
    color: u32,
    alpha: f32,
    lut: &GammaLut,
) {
    if radius <= 0.0 || alpha <= 0.0 || fb.width == 0 || fb.height == 0 {
        return;
    }

    // Bounding box, clamped to the frame
    let reach = radius + 1.0;
    let x0 = (center.x - reach).floor().max(0.0);
    let y0 = (center.y - reach).floor().max(0.0);
    let x1 = (center.x + reach).ceil().min(fb.width as f32 - 1.0);
    let y1 = (center.y + reach).ceil().min(fb.height as f32 - 1.0);
    if x0 > x1 || y0 > y1 {
        return;
    }

    for y in (y0 as usize)..=(y1 as usize) {
        for x in (x0 as usize)..=(x1 as usize) {
            let d = Point::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
            // 1 inside, 0 outside, linear ramp across the rim
            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let idx = y * fb.width + x;
            fb.pixels[idx] = lut.blend(fb.pixels[idx], color, coverage * alpha);
        }
    }
}

/// Paint one frame of the trail into `fb`.
/// Visual: background, then tail-first discs so the biggest one sits on top.
pub fn render_trail(fb: &mut FrameBuffer, trail: &Trail, lut: &GammaLut) {
    fb.clear(BACKGROUND);
    for marker in trail.markers().iter().rev() {
        fill_disc(fb, marker.pos, MARKER_RADIUS * marker.scale, MARKER_COLOR, MARKER_ALPHA, lut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::TRAIL_LEN;

    #[test]
    fn head_pixel_is_tinted_and_far_pixels_are_background() {
        let lut = GammaLut::new();
        let mut fb = FrameBuffer::filled(200, 150, 0);
        let mut trail = Trail::new();
        for _ in 0..60 {
            trail.step(Point::new(100.0, 75.0));
        }
        render_trail(&mut fb, &trail, &lut);

        let centre = fb.get(100, 75).unwrap();
        assert_ne!(centre, BACKGROUND);
        // Red channel rises toward the marker colour
        assert!((centre >> 16) & 0xFF > (BACKGROUND >> 16) & 0xFF);

        assert_eq!(fb.get(0, 0), Some(BACKGROUND));
        assert_eq!(fb.get(199, 149), Some(BACKGROUND));
        assert_eq!(fb.get(100, 75 + MARKER_RADIUS as usize + 3), Some(BACKGROUND));
    }

    #[test]
    fn off_frame_discs_are_clipped() {
        let lut = GammaLut::new();
        let mut fb = FrameBuffer::filled(32, 32, BACKGROUND);
        fill_disc(&mut fb, Point::new(-500.0, -500.0), 12.0, MARKER_COLOR, 1.0, &lut);
        fill_disc(&mut fb, Point::new(1e6, 16.0), 12.0, MARKER_COLOR, 1.0, &lut);
        assert!(fb.pixels.iter().all(|&p| p == BACKGROUND));

        // Half on the left edge: the inside column is painted
        fill_disc(&mut fb, Point::new(0.0, 16.0), 6.0, MARKER_COLOR, 1.0, &lut);
        assert_eq!(fb.get(0, 16), Some(MARKER_COLOR));
        assert_eq!(fb.get(20, 16), Some(BACKGROUND));
    }

    #[test]
    fn rendered_disc_size_follows_marker_scale() {
        let lut = GammaLut::new();
        let mut fb = FrameBuffer::filled(100, 100, 0);

        // Whole chain on one spot: only the head's radius matters
        let mut trail = Trail::new();
        for _ in 0..100 {
            trail.step(Point::new(50.0, 50.0));
        }
        render_trail(&mut fb, &trail, &lut);
        assert_ne!(fb.get(60, 50), Some(BACKGROUND));
        assert_eq!(fb.get(63, 50), Some(BACKGROUND));

        // Jerk the cursor far to the right: the head leaves the frame and the
        // tail end of the chain spreads out along y = 50
        for _ in 0..100 {
            trail.step(Point::new(20.0, 50.0));
        }
        trail.step(Point::new(8020.0, 50.0));
        render_trail(&mut fb, &trail, &lut);

        let m = trail.markers();
        let tail = m[TRAIL_LEN - 1].pos;
        assert!((tail.x - 29.12).abs() < 0.05, "tail at {:?}", tail);
        // Tail (scale 0.05) is barely a pixel wide
        assert_ne!(fb.get(29, 50), Some(BACKGROUND));
        assert_eq!(fb.get(27, 50), Some(BACKGROUND));
        assert_eq!(fb.get(30, 50), Some(BACKGROUND));

        // Marker 14 (scale 0.3) reaches further than the tail does
        let mid = m[14].pos;
        assert!((mid.x - 74.26).abs() < 0.05, "marker 14 at {:?}", mid);
        assert_ne!(fb.get(70, 50), Some(BACKGROUND));
        assert_eq!(fb.get(79, 50), Some(BACKGROUND));
    }

    #[test]
    fn smaller_scale_paints_fewer_pixels() {
        let lut = GammaLut::new();
        let painted = |radius: f32| {
            let mut fb = FrameBuffer::filled(64, 64, BACKGROUND);
            fill_disc(&mut fb, Point::new(32.0, 32.0), radius, MARKER_COLOR, 1.0, &lut);
            fb.pixels.iter().filter(|&&p| p != BACKGROUND).count()
        };
        assert!(painted(MARKER_RADIUS) > painted(MARKER_RADIUS * 0.5));
        assert!(painted(MARKER_RADIUS * 0.5) > painted(MARKER_RADIUS * 0.05));
    }
}
