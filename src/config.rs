use crate::manifest::AssetManifest;

/// Upper bound (inclusive) for the game seed handed to the core.
pub const SEED_MAX: u32 = 1_000_000;

/// Viewport dimensions read once at bootstrap. The host never re-reads them:
/// the core frames the game world against this initial size and there is no
/// resize path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    width: u32,
    height: u32,
}

impl ViewportSize {
    /// Dimensions are clamped to at least 1 pixel; the core has no meaningful
    /// behavior for a zero-area viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Where the composer reads the current viewport from. Browser: the window's
/// inner dimensions. Tests: a fixed size.
pub trait DisplaySurface {
    fn viewport(&self) -> ViewportSize;
}

impl DisplaySurface for ViewportSize {
    fn viewport(&self) -> ViewportSize {
        *self
    }
}

/// Host random source, one draw per process. Not cryptographic; the core
/// only uses it to vary track generation between runs.
pub trait RandomSource {
    /// Uniform-ish integer in `[0, max_inclusive]`.
    fn next_int(&mut self, max_inclusive: u32) -> u32;
}

/// The one-shot init payload for the reactive core. Composed once, handed
/// over once, never mutated.
#[derive(Debug, Clone)]
pub struct InitConfig {
    pub viewport: ViewportSize,
    pub models: AssetManifest,
    pub seed: u32,
}

/// Merges the resolved manifest with a fresh viewport reading and a fresh
/// seed draw. Pure and single-shot: no retries, no partial states.
pub fn compose(
    models: AssetManifest,
    display: &impl DisplaySurface,
    rng: &mut impl RandomSource,
) -> InitConfig {
    let viewport = display.viewport();
    let seed = rng.next_int(SEED_MAX).min(SEED_MAX);
    log::info!(
        "composed init config: {}x{} viewport, {} models, seed {}",
        viewport.width(),
        viewport.height(),
        models.len(),
        seed
    );
    InitConfig {
        viewport,
        models,
        seed,
    }
}
