use super::params::IdleMotion;
use glam::DVec2;

/// Latest pointer sample, written by the input adapters and read once per frame.
///
/// Until the first real mouse/touch sample arrives the target follows the idle
/// wander path. After that the latch stays set for the rest of the session,
/// even when input stops.
#[derive(Clone, Copy, Debug)]
pub struct PointerSource {
    pos: DVec2,
    moved: bool,
}

impl PointerSource {
    pub fn new(initial: DVec2) -> Self {
        Self {
            pos: initial,
            moved: false,
        }
    }

    /// Pointer starting at the middle of the viewport.
    pub fn centered(viewport: DVec2) -> Self {
        Self::new(viewport * 0.5)
    }

    pub fn record_input(&mut self, x: f64, y: f64) {
        self.moved = true;
        self.pos = DVec2::new(x, y);
    }

    #[inline]
    pub fn has_real_input(&self) -> bool {
        self.moved
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.pos
    }

    /// Target for the frame at `t_ms`. Consults the idle path only while no
    /// real input has been seen; the idle position is stored so the pointer
    /// cell always reflects what the trail is chasing.
    pub fn current_target(&mut self, t_ms: f64, viewport: DVec2, idle: &IdleMotion) -> DVec2 {
        if !self.moved {
            self.pos = idle_position(idle, t_ms, viewport);
        }
        self.pos
    }
}

/// Lissajous-like wander around the viewport centre.
#[inline]
pub fn idle_position(idle: &IdleMotion, t_ms: f64, viewport: DVec2) -> DVec2 {
    let fx = idle.center
        + idle.x_amplitude * (idle.x_freq_cos * t_ms).cos() * (idle.x_freq_sin * t_ms).sin();
    let fy = idle.center
        + idle.y_amplitude_1 * (idle.y_freq_1 * t_ms).cos()
        + idle.y_amplitude_2 * (idle.y_freq_2 * t_ms).cos();
    DVec2::new(fx * viewport.x, fy * viewport.y)
}
