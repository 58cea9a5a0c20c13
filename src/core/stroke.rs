use super::constants::{GRADIENT_END, GRADIENT_START};
use super::params::TrailParams;
use super::trail::TrailChain;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_css(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Backend-neutral 2D drawing instruction. The web renderer replays these
/// against a `CanvasRenderingContext2d`.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: DVec2,
    },
    /// Linear gradient from `from` to `to`, set as the stroke style.
    StrokeGradient {
        from: DVec2,
        to: DVec2,
        stops: [(f64, &'static str); 2],
    },
    LineCap(LineCap),
    BeginPath,
    MoveTo(DVec2),
    LineWidth(f64),
    QuadraticCurveTo {
        ctrl: DVec2,
        end: DVec2,
    },
    Stroke,
}

/// Commands for one frame of the trail on a surface of `surface` px.
///
/// Segment `i` (for `i` in `1..=len-2`) is a quadratic curve with node `i` as
/// control point, ending at the midpoint between nodes `i` and `i + 1`. A
/// stroke follows every segment so its width can taper; the path is not
/// restarted between segments.
pub fn trail_commands(chain: &TrailChain, params: &TrailParams, surface: DVec2) -> Vec<DrawCommand> {
    let nodes = chain.nodes();
    let segments = nodes.len().saturating_sub(2);
    let mut out = Vec::with_capacity(6 + 3 * segments);

    out.push(DrawCommand::Clear { size: surface });
    out.push(DrawCommand::StrokeGradient {
        from: DVec2::ZERO,
        to: surface,
        stops: [(0.0, GRADIENT_START), (1.0, GRADIENT_END)],
    });
    out.push(DrawCommand::LineCap(LineCap::Round));
    out.push(DrawCommand::BeginPath);

    let Some(head) = nodes.first() else {
        return out;
    };
    out.push(DrawCommand::MoveTo(head.pos));

    for (i, pair) in nodes.windows(2).enumerate().skip(1) {
        let ctrl = pair[0].pos;
        let end = (pair[0].pos + pair[1].pos) * 0.5;
        out.push(DrawCommand::LineWidth(params.segment_width(i)));
        out.push(DrawCommand::QuadraticCurveTo { ctrl, end });
        out.push(DrawCommand::Stroke);
    }
    out
}
