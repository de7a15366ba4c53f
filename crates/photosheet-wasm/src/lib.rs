//! Photosheet WASM - WebAssembly bindings for Photosheet
//!
//! This crate exposes the photosheet-core layout engine to a
//! JavaScript/TypeScript host. The host translates its native pointer and
//! keyboard events into the engine's event vocabulary and paints pages
//! from the render-state snapshot.
//!
//! # Usage
//!
//! ```typescript
//! import init, { Session } from '@photosheet/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new Session();
//! session.set_photos([{ id: 'a/1.jpg', name: '1.jpg', source: blobUrl }]);
//! const state = session.render_state();
//! ```

use wasm_bindgen::prelude::*;

mod options;
mod session;

// Re-export public types
pub use session::{preview_scale, Session};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
