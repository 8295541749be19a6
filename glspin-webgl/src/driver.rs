//! Per-frame update and the animation-frame loop.
//!
//! The driver owns the one piece of cross-frame state, the rotation
//! accumulator, and advances it exactly once per scheduled callback. The
//! loop is a cancellable repeating task: the host keeps the returned
//! [`FrameHandle`] and cancels it on teardown, at which point the loop
//! stops renewing itself.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glspin_scene::RotationState;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::WebGlRenderingContext;

use crate::pipeline::TrianglePipeline;

/// Opaque black, set before every clear.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("no window to schedule animation frames on")]
    NoWindow,
    #[error("failed to schedule animation frame: {0}")]
    Schedule(String),
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives the render loop once setup has succeeded.
pub struct FrameDriver {
    gl: WebGlRenderingContext,
    pipeline: TrianglePipeline,
    rotation: RotationState,
}

impl FrameDriver {
    pub fn new(gl: WebGlRenderingContext, pipeline: TrianglePipeline) -> Self {
        Self {
            gl,
            pipeline,
            rotation: RotationState::new(),
        }
    }

    /// Current rotation angle in radians.
    pub fn angle(&self) -> f32 {
        self.rotation.angle()
    }

    /// Render one frame.
    ///
    /// Advances the rotation by one step (so the first rendered frame
    /// already shows one step of rotation), clears to opaque black,
    /// recomputes the model-view matrix from scratch, uploads it, and
    /// issues the draw call.
    pub fn tick(&mut self) {
        self.rotation.advance();

        let [r, g, b, a] = CLEAR_COLOR;
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(WebGlRenderingContext::COLOR_BUFFER_BIT);

        let model_view = self.rotation.model_view();
        self.pipeline.draw(&self.gl, &model_view);
    }

    /// Start the self-rescheduling `requestAnimationFrame` loop.
    ///
    /// Each callback runs [`tick`](Self::tick) and schedules the next
    /// invocation, unless the returned handle has been cancelled in the
    /// meantime. All of this runs on the UI thread, one callback at a
    /// time; a missed deadline just delays the next draw.
    pub fn spin(mut self) -> Result<FrameHandle, DriverError> {
        let cancelled = Rc::new(Cell::new(false));
        // The closure holds a clone of its own slot so it can hand itself
        // to `request_animation_frame` again.
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        let flag = Rc::clone(&cancelled);
        let inner = Rc::clone(&slot);
        let callback = Closure::wrap(Box::new(move || {
            if flag.get() {
                return; // cancelled: stop renewing the schedule
            }
            self.tick();
            if let Some(cb) = inner.borrow().as_ref() {
                if let Err(e) = schedule(cb) {
                    // Nothing sensible can be done from inside a callback.
                    log::error!("animation loop stopped: {e}");
                }
            }
        }) as Box<dyn FnMut()>);

        schedule(&callback)?;
        *slot.borrow_mut() = Some(callback);

        Ok(FrameHandle {
            cancelled,
            _callback: slot,
        })
    }
}

fn schedule(callback: &Closure<dyn FnMut()>) -> Result<(), DriverError> {
    web_sys::window()
        .ok_or(DriverError::NoWindow)?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map(|_handle| ())
        .map_err(|e| DriverError::Schedule(format!("{e:?}")))
}

/// Host-side handle to the running loop.
///
/// Keeps the frame callback alive while the loop runs. The hosting
/// component calls [`cancel`](Self::cancel) on teardown; the loop then
/// stops at its next scheduled callback instead of rescheduling forever.
#[wasm_bindgen]
pub struct FrameHandle {
    cancelled: Rc<Cell<bool>>,
    _callback: FrameSlot,
}

#[wasm_bindgen]
impl FrameHandle {
    /// Stop the loop at the next scheduled callback. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether `cancel` has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_is_opaque_black() {
        assert_eq!(CLEAR_COLOR, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_handle_cancel_is_idempotent() {
        let handle = FrameHandle {
            cancelled: Rc::new(Cell::new(false)),
            _callback: Rc::new(RefCell::new(None)),
        };
        assert!(!handle.is_cancelled());
        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_schedule_error_messages() {
        assert_eq!(
            DriverError::NoWindow.to_string(),
            "no window to schedule animation frames on"
        );
        let err = DriverError::Schedule("TypeError".into());
        assert!(err.to_string().contains("TypeError"));
    }
}
