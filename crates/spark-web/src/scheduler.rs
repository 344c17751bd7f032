use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use spark_engine::{FrameScheduler, FrameToken};

/// `requestAnimationFrame`-backed scheduler. The callback receives the
/// browser's high-resolution timestamp in milliseconds.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new<F>(window: Window, on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        Self {
            window,
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FrameToken {
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => FrameToken(id),
            Err(err) => {
                log::error!("requestAnimationFrame failed: {:?}", err);
                FrameToken(0)
            }
        }
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if token.0 == 0 {
            return;
        }
        if let Err(err) = self.window.cancel_animation_frame(token.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", err);
        }
    }
}
