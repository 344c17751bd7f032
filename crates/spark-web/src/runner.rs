use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlCanvasElement, MouseEvent, Window};

use spark_engine::{FieldConfig, RenderLoop, Trigger};

use crate::canvas::CanvasSurface;
use crate::dom::DomAnchorSource;
use crate::error::BindError;
use crate::listeners::EventListener;
use crate::scheduler::RafScheduler;
use crate::with_runner;

const FILTER_BUTTON_SELECTOR: &str = ".category-btn";

/// Binds a [`RenderLoop`] to one canvas, the page's cards and its pointer events.
///
/// wasm-bindgen cannot export generic structs, so the crate keeps a single
/// `thread_local!` runner and exposes free functions that forward to it.
pub struct FieldRunner {
    window: Window,
    field: RenderLoop<RafScheduler>,
    surface: CanvasSurface,
    listeners: Vec<EventListener>,
    last_timestamp: Option<f64>,
    paint_failed: bool,
}

impl FieldRunner {
    /// Resolve the canvas, size it and attach listeners. The loop is not started.
    pub fn bind(canvas_id: &str, mut config: FieldConfig) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or_else(|| BindError::MissingSurface("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| BindError::MissingSurface("no document".into()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| BindError::MissingSurface(format!("#{}", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BindError::NotACanvas(canvas_id.to_string()))?;

        let mut surface = CanvasSurface::new(canvas.clone(), canvas_id)?;
        let viewport = surface.resize(&window)?;

        if config.seed == 0 {
            config.seed = (js_sys::Math::random() * u32::MAX as f64) as u64 | 1;
        }
        let scheduler = RafScheduler::new(window.clone(), |timestamp| {
            with_runner(|r| r.on_animation_frame(timestamp));
        });
        let source = DomAnchorSource::new(document.clone(), canvas.clone());
        let field = RenderLoop::new(config, viewport, scheduler).with_anchor_source(Box::new(source));
        let listeners = attach_listeners(&window, &document, &canvas)?;

        Ok(Self {
            window,
            field,
            surface,
            listeners,
            last_timestamp: None,
            paint_failed: false,
        })
    }

    pub fn start(&mut self) {
        self.last_timestamp = None;
        self.field.start();
    }

    pub fn stop(&mut self) {
        self.field.stop();
    }

    /// Cancel the pending frame, detach every listener and wipe the canvas.
    pub fn destroy(&mut self) {
        self.field.destroy();
        self.listeners.clear();
        self.surface.clear();
    }

    /// `requestAnimationFrame` callback.
    pub fn on_animation_frame(&mut self, timestamp: f64) {
        let dt = match self.last_timestamp {
            Some(prev) => ((timestamp - prev) / 1000.0) as f32,
            None => self.field.config().frame_loop.fixed_dt,
        };
        self.last_timestamp = Some(timestamp);

        if !self.field.on_frame(dt) {
            return;
        }
        if let Err(err) = self.surface.paint(self.field.draw_list()) {
            // Log once; a broken context fails every frame.
            if !self.paint_failed {
                log::error!("canvas paint failed: {:?}", err);
                self.paint_failed = true;
            }
        }
    }

    pub fn resize(&mut self) {
        match self.surface.resize(&self.window) {
            Ok(viewport) => self.field.on_resize(viewport),
            Err(err) => log::warn!("resize failed: {}", err),
        }
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        let p = self.surface.to_local(client_x, client_y);
        self.field.on_trigger(Trigger::PointerMove(p));
    }

    pub fn click(&mut self, client_x: f64, client_y: f64) {
        let p = self.surface.to_local(client_x, client_y);
        self.field.on_trigger(Trigger::Click(p));
    }

    pub fn push(&mut self, trigger: Trigger) {
        self.field.on_trigger(trigger);
    }

    pub fn set_target_intensity(&mut self, target: f32) {
        self.field.set_target_intensity(target);
    }

    pub fn field(&self) -> &RenderLoop<RafScheduler> {
        &self.field
    }
}

fn attach_listeners(
    window: &Window,
    document: &Document,
    canvas: &HtmlCanvasElement,
) -> Result<Vec<EventListener>, BindError> {
    Ok(vec![
        EventListener::new(window, "resize", |_| {
            with_runner(FieldRunner::resize);
        })?,
        EventListener::new(document, "mousemove", |event| {
            if let Some(m) = event.dyn_ref::<MouseEvent>() {
                let (x, y) = (m.client_x() as f64, m.client_y() as f64);
                with_runner(|r| r.pointer_move(x, y));
            }
        })?,
        EventListener::new(document, "click", |event| {
            if let Some(m) = event.dyn_ref::<MouseEvent>() {
                let (x, y) = (m.client_x() as f64, m.client_y() as f64);
                with_runner(|r| r.click(x, y));
            }
            if is_filter_button(&event) {
                with_runner(|r| r.push(Trigger::FilterChanged));
            }
        })?,
        EventListener::new(canvas, "mouseenter", |_| {
            with_runner(|r| r.push(Trigger::PointerEnter));
        })?,
        EventListener::new(canvas, "mouseleave", |_| {
            with_runner(|r| r.push(Trigger::PointerLeave));
        })?,
    ])
}

fn is_filter_button(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(FILTER_BUTTON_SELECTOR).ok().flatten())
        .is_some()
}
