use crate::boot::{ApplicationHandle, Port};

/// Name of the core port that takes raw wheel deltas.
pub const WHEEL_PORT: &str = "onWheel";

/// Forwards raw vertical scroll deltas into the core, one call per event,
/// in generation order. No batching, debouncing, or coalescing.
pub struct InputBridge {
    port: Box<dyn Port>,
}

impl InputBridge {
    /// Capability check at registration time: earlier core revisions do not
    /// expose `onWheel`, in which case there is nothing to bridge and no
    /// listener should be installed.
    pub fn attach(handle: &dyn ApplicationHandle) -> Option<Self> {
        match handle.port(WHEEL_PORT) {
            Some(port) => {
                log::info!("wheel bridge attached to port \"{WHEEL_PORT}\"");
                Some(Self { port })
            }
            None => {
                log::warn!("core exposes no \"{WHEEL_PORT}\" port, wheel input disabled");
                None
            }
        }
    }

    /// Sends the signed delta through unmodified. A failed send drops that
    /// event only: stale scroll input has no value, so there is no retry or
    /// buffering, and later events still go through.
    pub fn forward(&self, delta_y: f64) {
        if let Err(err) = self.port.send(delta_y) {
            log::debug!("wheel delta {delta_y} dropped: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every delta it receives; fails sends on request.
    struct RecordingPort {
        sent: Rc<RefCell<Vec<f64>>>,
        fail_on: Option<f64>,
    }

    impl Port for RecordingPort {
        fn send(&self, value: f64) -> Result<(), PortError> {
            if self.fail_on == Some(value) {
                return Err(PortError::Send("core gone".to_string()));
            }
            self.sent.borrow_mut().push(value);
            Ok(())
        }
    }

    struct PortedHandle {
        sent: Rc<RefCell<Vec<f64>>>,
        fail_on: Option<f64>,
    }

    impl ApplicationHandle for PortedHandle {
        fn port(&self, name: &str) -> Option<Box<dyn Port>> {
            (name == WHEEL_PORT).then(|| {
                Box::new(RecordingPort {
                    sent: self.sent.clone(),
                    fail_on: self.fail_on,
                }) as Box<dyn Port>
            })
        }
    }

    struct PortlessHandle;

    impl ApplicationHandle for PortlessHandle {
        fn port(&self, _name: &str) -> Option<Box<dyn Port>> {
            None
        }
    }

    fn ported(fail_on: Option<f64>) -> (PortedHandle, Rc<RefCell<Vec<f64>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        (
            PortedHandle {
                sent: sent.clone(),
                fail_on,
            },
            sent,
        )
    }

    #[test]
    fn every_event_forwards_in_order_unmodified() {
        let (handle, sent) = ported(None);
        let bridge = InputBridge::attach(&handle).unwrap();

        let deltas = [3.0, -120.0, 0.0, 53.75, -0.25];
        for d in deltas {
            bridge.forward(d);
        }
        assert_eq!(*sent.borrow(), deltas);
    }

    #[test]
    fn negative_delta_passes_through_untouched() {
        let (handle, sent) = ported(None);
        let bridge = InputBridge::attach(&handle).unwrap();

        bridge.forward(-120.0);
        assert_eq!(*sent.borrow(), [-120.0]);
    }

    #[test]
    fn attach_skips_registration_without_the_port() {
        assert!(InputBridge::attach(&PortlessHandle).is_none());
    }

    #[test]
    fn failed_send_drops_that_event_only() {
        let (handle, sent) = ported(Some(-2.0));
        let bridge = InputBridge::attach(&handle).unwrap();

        bridge.forward(1.0);
        bridge.forward(-2.0);
        bridge.forward(3.0);
        assert_eq!(*sent.borrow(), [1.0, 3.0]);
    }
}
