//! WebGL context acquisition.
//!
//! One context per canvas, acquired once on mount and owned by the
//! hosting component for its lifetime. Never recreated.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

#[derive(Error, Debug)]
pub enum ContextError {
    /// The canvas yields no WebGL context at all.
    #[error("WebGL is not supported by this canvas")]
    Unsupported,
    /// The `getContext` call itself threw.
    #[error("failed to acquire WebGL context: {0}")]
    Acquire(String),
}

/// Ask `canvas` for its `"webgl"` context.
pub fn acquire(canvas: &HtmlCanvasElement) -> Result<WebGlRenderingContext, ContextError> {
    let ctx = canvas
        .get_context("webgl")
        .map_err(|e| ContextError::Acquire(format!("{e:?}")))?
        .ok_or(ContextError::Unsupported)?;

    ctx.dyn_into::<WebGlRenderingContext>()
        .map_err(|_| ContextError::Unsupported)
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message() {
        // The message is what the browser console shows to the user.
        assert_eq!(
            ContextError::Unsupported.to_string(),
            "WebGL is not supported by this canvas"
        );
    }

    #[test]
    fn test_acquire_message_carries_cause() {
        let err = ContextError::Acquire("SecurityError".into());
        assert!(err.to_string().contains("SecurityError"));
    }
}
