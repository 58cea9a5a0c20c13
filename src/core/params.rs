use super::constants::*;

/// Parameters of the idle wander path, expressed as fractions of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleMotion {
    pub center: f64,
    pub x_amplitude: f64,
    pub x_freq_cos: f64,
    pub x_freq_sin: f64,
    pub y_amplitude_1: f64,
    pub y_freq_1: f64,
    pub y_amplitude_2: f64,
    pub y_freq_2: f64,
}

impl Default for IdleMotion {
    fn default() -> Self {
        Self {
            center: IDLE_CENTER,
            x_amplitude: IDLE_X_AMPLITUDE,
            x_freq_cos: IDLE_X_FREQ_COS,
            x_freq_sin: IDLE_X_FREQ_SIN,
            y_amplitude_1: IDLE_Y_AMPLITUDE_1,
            y_freq_1: IDLE_Y_FREQ_1,
            y_amplitude_2: IDLE_Y_AMPLITUDE_2,
            y_freq_2: IDLE_Y_FREQ_2,
        }
    }
}

/// Session-wide trail configuration.
///
/// `spring` and `friction` must both lie in (0, 1) for the chain to settle on
/// a stationary pointer. The chain does not check this; call [`TrailParams::check`]
/// when the values come from outside the crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParams {
    pub points_number: usize,
    pub width_factor: f64,
    pub spring: f64,
    pub friction: f64,
    pub idle: IdleMotion,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            points_number: DEFAULT_POINTS_NUMBER,
            width_factor: DEFAULT_WIDTH_FACTOR,
            spring: DEFAULT_SPRING,
            friction: DEFAULT_FRICTION,
            idle: IdleMotion::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("trail needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("spring must be in (0, 1), got {0}")]
    SpringOutOfRange(f64),
    #[error("friction must be in (0, 1), got {0}")]
    FrictionOutOfRange(f64),
    #[error("width factor must be positive, got {0}")]
    NonPositiveWidth(f64),
}

#[inline]
fn in_unit_open(v: f64) -> bool {
    v > 0.0 && v < 1.0
}

impl TrailParams {
    pub fn check(&self) -> Result<(), ParamsError> {
        if self.points_number < 2 {
            return Err(ParamsError::TooFewPoints(self.points_number));
        }
        if !in_unit_open(self.spring) {
            return Err(ParamsError::SpringOutOfRange(self.spring));
        }
        if !in_unit_open(self.friction) {
            return Err(ParamsError::FrictionOutOfRange(self.friction));
        }
        if !(self.width_factor > 0.0) {
            return Err(ParamsError::NonPositiveWidth(self.width_factor));
        }
        Ok(())
    }

    /// Spring coefficient for node `index`; the head uses a reduced one.
    #[inline]
    pub fn spring_for(&self, index: usize) -> f64 {
        if index == 0 {
            HEAD_SPRING_SCALE * self.spring
        } else {
            self.spring
        }
    }

    /// Stroke width of segment `index`, tapering linearly toward the tail.
    #[inline]
    pub fn segment_width(&self, index: usize) -> f64 {
        let n = self.points_number as f64;
        self.width_factor * (n - index as f64) / n
    }
}

/// `data-*` attribute names that may override the defaults on the trail canvas.
pub const OVERRIDE_ATTRS: [&str; 4] = ["data-points", "data-width", "data-spring", "data-friction"];

/// Apply page-supplied overrides on top of `base`.
///
/// `lookup` returns the raw attribute value for a name in [`OVERRIDE_ATTRS`].
/// Values that fail to parse are skipped and reported in the returned list.
pub fn with_overrides(
    base: TrailParams,
    lookup: impl Fn(&str) -> Option<String>,
) -> (TrailParams, Vec<String>) {
    let mut params = base;
    let mut rejected = Vec::new();
    for attr in OVERRIDE_ATTRS {
        let Some(raw) = lookup(attr) else {
            continue;
        };
        let raw = raw.trim();
        let applied = match attr {
            "data-points" => raw.parse::<usize>().map(|v| params.points_number = v).is_ok(),
            "data-width" => raw.parse::<f64>().map(|v| params.width_factor = v).is_ok(),
            "data-spring" => raw.parse::<f64>().map(|v| params.spring = v).is_ok(),
            "data-friction" => raw.parse::<f64>().map(|v| params.friction = v).is_ok(),
            _ => false,
        };
        if !applied {
            rejected.push(format!("{attr}={raw:?}"));
        }
    }
    (params, rejected)
}
