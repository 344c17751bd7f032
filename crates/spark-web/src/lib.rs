pub mod canvas;
pub mod dom;
pub mod error;
pub mod listeners;
pub mod runner;
pub mod scheduler;

pub use error::BindError;
pub use runner::FieldRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use spark_engine::{DrawCommand, FieldConfig, Trigger};

thread_local! {
    static RUNNER: RefCell<Option<FieldRunner>> = RefCell::new(None);
}

/// Run `f` against the bound runner. Returns `None` when nothing is bound
/// (init failed or destroy was called), so every export degrades to a no-op.
pub(crate) fn with_runner<R>(f: impl FnOnce(&mut FieldRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

fn install_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn bind(canvas_id: &str, config: FieldConfig) -> bool {
    spark_destroy();
    match FieldRunner::bind(canvas_id, config) {
        Ok(runner) => {
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            with_runner(|r| r.start());
            log::info!("spark field: bound to #{}", canvas_id);
            true
        }
        Err(err) => {
            log::warn!("spark field disabled: {}", err);
            false
        }
    }
}

/// Bind to `<canvas id=canvas_id>` with default tuning and start animating.
/// Returns false (and leaves the field disabled) when binding fails.
#[wasm_bindgen]
pub fn spark_init(canvas_id: &str) -> bool {
    install_logging();
    bind(canvas_id, FieldConfig::default())
}

/// Like [`spark_init`], with a partial JSON [`FieldConfig`].
#[wasm_bindgen]
pub fn spark_init_with_config(canvas_id: &str, config_json: &str) -> bool {
    install_logging();
    match FieldConfig::from_json(config_json) {
        Ok(config) => bind(canvas_id, config),
        Err(err) => {
            log::warn!("spark field disabled: {}", BindError::from(err));
            false
        }
    }
}

#[wasm_bindgen]
pub fn spark_start() {
    with_runner(|r| r.start());
}

#[wasm_bindgen]
pub fn spark_stop() {
    with_runner(|r| r.stop());
}

/// Stop, detach listeners and release the runner. Safe to call repeatedly.
#[wasm_bindgen]
pub fn spark_destroy() {
    let runner = RUNNER.with(|cell| cell.try_borrow_mut().ok().and_then(|mut slot| slot.take()));
    if let Some(mut runner) = runner {
        runner.destroy();
    }
}

#[wasm_bindgen]
pub fn spark_notify_filter_changed() {
    with_runner(|r| r.push(Trigger::FilterChanged));
}

#[wasm_bindgen]
pub fn spark_set_target_intensity(target: f32) {
    with_runner(|r| r.set_target_intensity(target));
}

// ---- Draw list accessors ----

#[wasm_bindgen]
pub fn spark_draw_list_ptr() -> *const f32 {
    with_runner(|r| r.field().draw_list().as_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn spark_draw_command_count() -> u32 {
    with_runner(|r| r.field().draw_list().len() as u32).unwrap_or(0)
}

#[wasm_bindgen]
pub fn spark_draw_command_floats() -> u32 {
    DrawCommand::FLOATS as u32
}
