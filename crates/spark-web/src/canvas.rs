use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use spark_engine::{DrawCommand, DrawKind, DrawList, Viewport};

use crate::error::BindError;

const INK: &str = "#000000";
const OVERLAY_FONT: &str = "10px \"JetBrains Mono\", monospace";

/// A `<canvas>` plus its 2D context. Replays engine draw lists.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, id: &str) -> Result<Self, BindError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| BindError::NoContext(id.to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BindError::NoContext(id.to_string()))?;
        Ok(Self {
            canvas,
            ctx,
            viewport: Viewport::default(),
        })
    }

    /// Match the backing store to the CSS size times the device pixel ratio
    /// and scale the context so drawing stays in CSS pixels.
    pub fn resize(&mut self, window: &Window) -> Result<Viewport, BindError> {
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = Viewport::new(
            rect.width() as f32,
            rect.height() as f32,
            window.device_pixel_ratio() as f32,
        );
        let (w, h) = viewport.device_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let dpr = viewport.pixel_ratio as f64;
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        self.viewport = viewport;
        Ok(viewport)
    }

    /// Convert client (page viewport) coordinates to surface coordinates.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        Vec2::new((client_x - rect.left()) as f32, (client_y - rect.top()) as f32)
    }

    /// Replay one frame.
    pub fn paint(&self, list: &DrawList) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(INK);
        self.ctx.set_fill_style_str(INK);
        self.ctx.set_line_cap("round");
        for cmd in list.commands() {
            match cmd.kind() {
                Some(kind) => self.replay(kind, cmd)?,
                None => log::trace!("unknown draw kind {}", cmd.kind),
            }
        }
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn replay(&self, kind: DrawKind, cmd: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (x0, y0) = (cmd.x0 as f64, cmd.y0 as f64);
        ctx.set_global_alpha(cmd.alpha as f64);
        match kind {
            DrawKind::Clear => {
                ctx.clear_rect(0.0, 0.0, cmd.x1 as f64, cmd.y1 as f64);
            }
            DrawKind::Line => {
                ctx.set_line_width(cmd.width as f64);
                ctx.begin_path();
                ctx.move_to(x0, y0);
                ctx.line_to(cmd.x1 as f64, cmd.y1 as f64);
                ctx.stroke();
            }
            DrawKind::StrokeCircle => {
                ctx.set_line_width(cmd.width as f64);
                ctx.begin_path();
                ctx.arc(x0, y0, cmd.x1.max(0.0) as f64, 0.0, TAU)?;
                ctx.stroke();
            }
            DrawKind::FillCircle => {
                ctx.begin_path();
                ctx.arc(x0, y0, cmd.x1.max(0.0) as f64, 0.0, TAU)?;
                ctx.fill();
            }
            DrawKind::FillRect => {
                let side = cmd.x1 as f64;
                ctx.fill_rect(x0 - side / 2.0, y0 - side / 2.0, side, side);
            }
            DrawKind::Overlay => {
                ctx.set_font(OVERLAY_FONT);
                let text = format!("[FIELD] INTENSITY: {:.0}%", cmd.aux);
                ctx.fill_text(&text, x0, y0)?;
            }
        }
        Ok(())
    }

    /// Wipe the surface, used on destroy.
    pub fn clear(&self) {
        let size = self.viewport.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }
}
