use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::boot::UiTree;
use crate::config::{DisplaySurface, RandomSource, ViewportSize};
use crate::manifest::AssetLocator;

/// The page's UI tree; mount lookup goes through `document.getElementById`.
pub struct Dom {
    document: web_sys::Document,
}

impl Dom {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl UiTree for Dom {
    type Node = web_sys::Element;

    fn find(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }
}

/// Reads the viewport from the window's inner dimensions. Read once at
/// compose time; there is no resize path.
pub struct BrowserDisplay {
    window: web_sys::Window,
}

impl BrowserDisplay {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }

    fn dimension(value: Result<JsValue, JsValue>) -> u32 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32
    }
}

impl DisplaySurface for BrowserDisplay {
    fn viewport(&self) -> ViewportSize {
        ViewportSize::new(
            Self::dimension(self.window.inner_width()),
            Self::dimension(self.window.inner_height()),
        )
    }
}

/// `Math.random`-backed seed source.
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_int(&mut self, max_inclusive: u32) -> u32 {
        // random() < 1.0, so the truncation stays within bounds.
        let draw = js_sys::Math::random() * (max_inclusive as f64 + 1.0);
        (draw as u32).min(max_inclusive)
    }
}

/// Bundler-produced table of asset name to URL, handed in by the embedding
/// page as a plain object.
pub struct UrlTable {
    table: js_sys::Object,
}

impl UrlTable {
    pub fn new(table: js_sys::Object) -> Self {
        Self { table }
    }
}

impl AssetLocator for UrlTable {
    fn locate(&self, name: &str) -> Option<String> {
        Reflect::get(&self.table, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_string())
    }
}
