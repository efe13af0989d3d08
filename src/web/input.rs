use wasm_bindgen::prelude::*;

use crate::bridge::InputBridge;

/// Installs the one global wheel listener for the page lifetime.
///
/// The closure takes ownership of the bridge and is leaked deliberately:
/// the listener is never detached, there is no teardown path.
pub fn register_wheel_listener(
    window: &web_sys::Window,
    bridge: InputBridge,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(web_sys::WheelEvent)>::new(move |event: web_sys::WheelEvent| {
        bridge.forward(event.delta_y());
    });
    window.add_event_listener_with_callback("wheel", callback.as_ref().unchecked_ref())?;
    callback.forget();
    log::info!("wheel listener registered");
    Ok(())
}
