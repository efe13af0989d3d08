use crate::config::InitConfig;
use crate::error::{HostError, PortError};

/// The one id the core ever mounts under. No alternate mount is attempted.
pub const MOUNT_ID: &str = "root";

/// Lookup into the host UI tree. Browser: `document.getElementById`.
pub trait UiTree {
    type Node;

    fn find(&self, id: &str) -> Option<Self::Node>;
}

/// One-directional named channel into the core's message loop.
/// Fire-and-forget: no acknowledgment, no return value from the core.
pub trait Port {
    fn send(&self, value: f64) -> Result<(), PortError>;
}

/// Opaque handle returned by core initialization. The host never touches
/// core state through it; it only queries for named ports.
pub trait ApplicationHandle {
    /// Capability check: `Some` only if this core revision exposes the port.
    fn port(&self, name: &str) -> Option<Box<dyn Port>>;
}

/// The reactive core's embedding surface: one init call, one handle back.
pub trait ReactiveCore {
    type Node;
    type Handle: ApplicationHandle;

    fn init(&self, node: Self::Node, config: &InitConfig) -> Result<Self::Handle, HostError>;
}

/// Process-scoped context created once at startup. Immutable after creation;
/// the input bridge is its only later consumer.
#[derive(Debug)]
pub struct HostContext<H: ApplicationHandle> {
    handle: H,
}

impl<H: ApplicationHandle> HostContext<H> {
    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// Initializes the core exactly once against the fixed mount point.
///
/// Consumes the config by value so no later code path can hand it to the
/// core a second time. An absent mount point is fatal: rendering is
/// impossible without it and there is nothing to retry.
pub fn bootstrap<T, C>(
    tree: &T,
    core: &C,
    config: InitConfig,
) -> Result<HostContext<C::Handle>, HostError>
where
    T: UiTree,
    C: ReactiveCore<Node = T::Node>,
{
    let node = tree
        .find(MOUNT_ID)
        .ok_or_else(|| HostError::MissingMountPoint(MOUNT_ID.to_string()))?;
    let handle = core.init(node, &config)?;
    log::info!("core initialized at mount \"{MOUNT_ID}\"");
    Ok(HostContext { handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InitConfig, ViewportSize};
    use crate::manifest::{Resolver, required_assets};
    use std::cell::Cell;
    use std::collections::{HashMap, HashSet};
    use std::rc::Rc;

    struct FakeTree {
        ids: HashSet<&'static str>,
    }

    impl UiTree for FakeTree {
        type Node = &'static str;

        fn find(&self, id: &str) -> Option<&'static str> {
            self.ids.get(id).copied()
        }
    }

    #[derive(Debug)]
    struct FakeHandle;

    impl ApplicationHandle for FakeHandle {
        fn port(&self, _name: &str) -> Option<Box<dyn Port>> {
            None
        }
    }

    struct FakeCore {
        init_calls: Rc<Cell<u32>>,
    }

    impl ReactiveCore for FakeCore {
        type Node = &'static str;
        type Handle = FakeHandle;

        fn init(&self, node: &'static str, _config: &InitConfig) -> Result<FakeHandle, HostError> {
            assert_eq!(node, MOUNT_ID);
            self.init_calls.set(self.init_calls.get() + 1);
            Ok(FakeHandle)
        }
    }

    fn sample_config() -> InitConfig {
        let table: HashMap<String, String> = required_assets()
            .map(|n| (n.to_string(), format!("/static/{n}.glb")))
            .collect();
        InitConfig {
            viewport: ViewportSize::new(800, 600),
            models: Resolver::new(table).resolve(required_assets()).unwrap(),
            seed: 17,
        }
    }

    #[test]
    fn bootstrap_calls_init_exactly_once() {
        let tree = FakeTree {
            ids: HashSet::from(["root", "sidebar"]),
        };
        let calls = Rc::new(Cell::new(0));
        let core = FakeCore {
            init_calls: calls.clone(),
        };

        let context = bootstrap(&tree, &core, sample_config()).unwrap();
        assert_eq!(calls.get(), 1);

        // The context only hands out a shared reference to the handle.
        let _ = context.handle();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn missing_mount_point_is_fatal() {
        let tree = FakeTree {
            ids: HashSet::from(["sidebar"]),
        };
        let calls = Rc::new(Cell::new(0));
        let core = FakeCore {
            init_calls: calls.clone(),
        };

        let err = bootstrap(&tree, &core, sample_config()).unwrap_err();
        assert_eq!(err, HostError::MissingMountPoint("root".to_string()));
        assert_eq!(calls.get(), 0, "core must not be initialized without a mount");
    }

    #[test]
    fn core_init_failure_propagates() {
        struct RejectingCore;
        impl ReactiveCore for RejectingCore {
            type Node = &'static str;
            type Handle = FakeHandle;

            fn init(
                &self,
                _node: &'static str,
                _config: &InitConfig,
            ) -> Result<FakeHandle, HostError> {
                Err(HostError::InitFailed("out of memory".to_string()))
            }
        }

        let tree = FakeTree {
            ids: HashSet::from(["root"]),
        };
        let err = bootstrap(&tree, &RejectingCore, sample_config()).unwrap_err();
        assert!(matches!(err, HostError::InitFailed(_)));
    }
}
