//! Logical names of the 3D models the core needs before it can render.
//!
//! The set is versioned with the game itself: the track tiles came first,
//! the tower pieces and the skeleton were added as the game grew. The core
//! refuses to start without every name resolved, so these lists are the
//! single source of truth for what the page bundler must supply.

/// Road-track tiles, the original asset set.
pub const TRACK_ASSETS: [&str; 5] = ["tile", "spawn", "straight", "corner", "end"];

/// Tower pieces and the walker model added in later revisions.
pub const STRUCTURE_ASSETS: [&str; 5] = [
    "orcTowerBase",
    "orcTowerBottom",
    "orcTowerMiddle",
    "orcTowerTop",
    "characterSkeleton",
];

/// Every asset the current core revision requires, in declaration order.
pub fn required_assets() -> impl Iterator<Item = &'static str> {
    TRACK_ASSETS.into_iter().chain(STRUCTURE_ASSETS)
}
