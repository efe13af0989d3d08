pub mod boot;
pub mod bridge;
pub mod config;
pub mod error;
pub mod manifest;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
mod entry {
    use wasm_bindgen::prelude::*;

    use crate::boot::{self, HostContext};
    use crate::bridge::InputBridge;
    use crate::config;
    use crate::error::HostError;
    use crate::manifest::{Resolver, required_assets};
    use crate::web;

    fn fatal(err: HostError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    /// Browser entry point. Construct once per page with the reactive core
    /// module and the bundler's asset URL table; the host then runs
    /// resolve, compose, bootstrap, and bridge registration in order and
    /// listens for the rest of the page's life.
    #[wasm_bindgen]
    pub struct RampartHost {
        _context: HostContext<web::JsHandle>,
    }

    #[wasm_bindgen]
    impl RampartHost {
        #[wasm_bindgen(constructor)]
        pub fn new(core: js_sys::Object, asset_urls: js_sys::Object) -> Result<RampartHost, JsValue> {
            wasm_logger::init(wasm_logger::Config::default());
            log::info!("rampart host starting");

            let resolver = Resolver::new(web::UrlTable::new(asset_urls));
            let models = resolver.resolve(required_assets()).map_err(fatal)?;

            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let document = window
                .document()
                .ok_or_else(|| JsValue::from_str("no document"))?;
            let config = config::compose(
                models,
                &web::BrowserDisplay::new(window.clone()),
                &mut web::MathRandom,
            );

            let core = web::JsCore::new(core).map_err(fatal)?;
            let context = boot::bootstrap(&web::Dom::new(document), &core, config).map_err(fatal)?;

            if let Some(bridge) = InputBridge::attach(context.handle()) {
                web::register_wheel_listener(&window, bridge)?;
            }

            Ok(RampartHost { _context: context })
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use entry::RampartHost;
