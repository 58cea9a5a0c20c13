// Trail tuning defaults shared by the session and the host-side tests.

// Chain shape
pub const DEFAULT_POINTS_NUMBER: usize = 40;
pub const DEFAULT_WIDTH_FACTOR: f64 = 10.0; // stroke width at the head, in px

// Spring coupling between neighbouring nodes
pub const DEFAULT_SPRING: f64 = 0.25;
pub const DEFAULT_FRICTION: f64 = 0.5;
pub const HEAD_SPRING_SCALE: f64 = 0.4; // node 0 follows the pointer more softly

// Idle wander used until the first real pointer sample:
// x = (0.5 + AX * cos(FX1 * t) * sin(FX2 * t)) * width
// y = (0.5 + AY1 * cos(FY1 * t) + AY2 * cos(FY2 * t)) * height
pub const IDLE_CENTER: f64 = 0.5;
pub const IDLE_X_AMPLITUDE: f64 = 0.3;
pub const IDLE_X_FREQ_COS: f64 = 0.002;
pub const IDLE_X_FREQ_SIN: f64 = 0.005;
pub const IDLE_Y_AMPLITUDE_1: f64 = 0.2;
pub const IDLE_Y_FREQ_1: f64 = 0.005;
pub const IDLE_Y_AMPLITUDE_2: f64 = 0.1;
pub const IDLE_Y_FREQ_2: f64 = 0.01;

// Stroke gradient stops, from the top-left to the bottom-right corner
pub const GRADIENT_START: &str = "rgb(154, 7, 98)";
pub const GRADIENT_END: &str = "rgba(57, 34, 115, 1)";
