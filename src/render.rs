use crate::core::DrawCommand;
use web_sys as web;

/// Replays trail drawing commands on a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn paint(&self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        for cmd in commands {
            match cmd {
                DrawCommand::Clear { size } => ctx.clear_rect(0.0, 0.0, size.x, size.y),
                DrawCommand::StrokeGradient { from, to, stops } => {
                    let gradient = ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                    for (offset, color) in stops {
                        _ = gradient.add_color_stop(*offset as f32, color);
                    }
                    ctx.set_stroke_style_canvas_gradient(&gradient);
                }
                DrawCommand::LineCap(cap) => ctx.set_line_cap(cap.as_css()),
                DrawCommand::BeginPath => ctx.begin_path(),
                DrawCommand::MoveTo(p) => ctx.move_to(p.x, p.y),
                DrawCommand::LineWidth(w) => ctx.set_line_width(*w),
                DrawCommand::QuadraticCurveTo { ctrl, end } => {
                    ctx.quadratic_curve_to(ctrl.x, ctrl.y, end.x, end.y)
                }
                DrawCommand::Stroke => ctx.stroke(),
            }
        }
    }
}
