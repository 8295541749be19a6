//! # glspin-webgl
//!
//! Browser-facing renderer for the spinning-triangle demo, built on
//! WebGL 1 via `web-sys`.
//!
//! ## Architecture
//!
//! ```text
//!  mount(canvas)                  ◀─── called once by the host on mount
//!       │
//!       ▼
//!  context::acquire()             ◀─── WebGL context, acquired once
//!       │
//!       ▼
//!  TrianglePipeline::new()        ◀─── compile + link + static VBO
//!       │
//!       ▼
//!  FrameDriver::spin()            ◀─── requestAnimationFrame loop
//!       │
//!       ▼
//!  FrameHandle::cancel()          ◀─── host stops the loop on teardown
//! ```
//!
//! ## Crate modules
//!
//! - [`context`] — WebGL context acquisition
//! - [`program`] — shader-stage compilation and program linking
//! - [`pipeline`] — the triangle pipeline (geometry + bind points)
//! - [`driver`] — per-frame update and the animation-frame loop

pub mod context;
pub mod driver;
pub mod pipeline;
pub mod program;

// Re-exports for convenience
pub use context::ContextError;
pub use driver::{DriverError, FrameDriver, FrameHandle};
pub use pipeline::TrianglePipeline;
pub use program::{LinkedProgram, ProgramError, StageKind};

use std::sync::Once;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Initialize-once entry point called by the hosting component on mount.
///
/// Acquires the WebGL context, builds the shader program, uploads the
/// triangle, and starts the frame loop. The host keeps the returned
/// [`FrameHandle`] and calls `cancel()` on it when the component is torn
/// down.
///
/// On any setup failure the diagnostic is logged to the console once and
/// the error is returned; the frame loop never starts and nothing is
/// drawn.
#[wasm_bindgen]
pub fn mount(canvas: &HtmlCanvasElement) -> Result<FrameHandle, JsValue> {
    init_hooks();

    let gl = context::acquire(canvas).map_err(log_and_convert)?;
    gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);

    let pipeline = TrianglePipeline::new(&gl).map_err(log_and_convert)?;
    FrameDriver::new(gl, pipeline).spin().map_err(log_and_convert)
}

/// Install the panic hook and console logger. Safe to call repeatedly.
fn init_hooks() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        let _ = console_log::init_with_level(log::Level::Info);
    });
}

/// Setup failures are logged exactly once, here. The builders themselves
/// never log.
fn log_and_convert<E: std::error::Error>(err: E) -> JsValue {
    log::error!("{err}");
    JsValue::from_str(&err.to_string())
}
