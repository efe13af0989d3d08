pub mod names;
pub mod resolver;

pub use names::{STRUCTURE_ASSETS, TRACK_ASSETS, required_assets};
pub use resolver::{AssetLocator, AssetManifest, Resolver};
