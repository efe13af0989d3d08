//! Concrete browser bindings for the host traits. Everything here talks to
//! the page through `web-sys`/`js-sys` and only compiles for wasm32.

pub mod embed;
pub mod host;
pub mod input;

pub use embed::{JsCore, JsHandle, JsPort};
pub use host::{BrowserDisplay, Dom, MathRandom, UrlTable};
pub use input::register_wheel_listener;

use wasm_bindgen::JsValue;

/// Best-effort readable form of a JS exception.
pub(crate) fn js_error_string(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
