//! Adapters over the reactive core's embedding surface.
//!
//! The core is a JS module exposing `init({ node, flags })` and returning an
//! app object whose ports live under `app.ports.<name>.send`. Everything is
//! reached through `Reflect` so the core stays fully opaque to this crate.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::js_error_string;
use crate::boot::{ApplicationHandle, Port, ReactiveCore};
use crate::config::InitConfig;
use crate::error::{HostError, PortError};

/// The core's `init` entry point, captured once at startup.
pub struct JsCore {
    this: JsValue,
    init: Function,
}

impl JsCore {
    pub fn new(core: Object) -> Result<Self, HostError> {
        let init = Reflect::get(&core, &JsValue::from_str("init"))
            .map_err(|e| HostError::InitFailed(js_error_string(e)))?
            .dyn_into::<Function>()
            .map_err(|_| HostError::InitFailed("core exposes no init function".to_string()))?;
        Ok(Self {
            this: core.into(),
            init,
        })
    }

    fn flags_object(config: &InitConfig) -> Result<Object, JsValue> {
        let viewport = Object::new();
        Reflect::set(
            &viewport,
            &JsValue::from_str("width"),
            &JsValue::from(config.viewport.width()),
        )?;
        Reflect::set(
            &viewport,
            &JsValue::from_str("height"),
            &JsValue::from(config.viewport.height()),
        )?;

        let models = Object::new();
        for (name, url) in config.models.iter() {
            Reflect::set(&models, &JsValue::from_str(name), &JsValue::from_str(url))?;
        }

        let flags = Object::new();
        Reflect::set(&flags, &JsValue::from_str("viewport"), &viewport)?;
        Reflect::set(&flags, &JsValue::from_str("models"), &models)?;
        Reflect::set(&flags, &JsValue::from_str("seed"), &JsValue::from(config.seed))?;
        Ok(flags)
    }
}

impl ReactiveCore for JsCore {
    type Node = web_sys::Element;
    type Handle = JsHandle;

    fn init(&self, node: web_sys::Element, config: &InitConfig) -> Result<JsHandle, HostError> {
        let run = || -> Result<JsValue, JsValue> {
            let options = Object::new();
            Reflect::set(&options, &JsValue::from_str("node"), node.as_ref())?;
            Reflect::set(
                &options,
                &JsValue::from_str("flags"),
                &Self::flags_object(config)?,
            )?;
            self.init.call1(&self.this, &options)
        };
        let app = run().map_err(|e| HostError::InitFailed(js_error_string(e)))?;
        Ok(JsHandle { app })
    }
}

/// Opaque app object returned by `init`. Port lookup walks `app.ports.<name>`
/// and succeeds only when a callable `send` is present.
pub struct JsHandle {
    app: JsValue,
}

impl ApplicationHandle for JsHandle {
    fn port(&self, name: &str) -> Option<Box<dyn Port>> {
        let ports = Reflect::get(&self.app, &JsValue::from_str("ports")).ok()?;
        if ports.is_undefined() || ports.is_null() {
            return None;
        }
        let port = Reflect::get(&ports, &JsValue::from_str(name)).ok()?;
        if port.is_undefined() || port.is_null() {
            return None;
        }
        let send = Reflect::get(&port, &JsValue::from_str("send"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some(Box::new(JsPort { this: port, send }))
    }
}

/// One named inbound channel on the app object.
pub struct JsPort {
    this: JsValue,
    send: Function,
}

impl Port for JsPort {
    fn send(&self, value: f64) -> Result<(), PortError> {
        self.send
            .call1(&self.this, &JsValue::from(value))
            .map(|_| ())
            .map_err(|e| PortError::Send(js_error_string(e)))
    }
}
