//! Client-side interaction layer for the marketing site, plus the bundler
//! entry-point manifest.
//!
//! This crate is intentionally a stub by default so the page models and the
//! manifest build and unit-test on the host without a wasm toolchain.
//!
//! Enable the real browser wiring with: `--features web` (and a wasm32 target).

pub mod anchors;
pub mod manifest;
pub mod menu;
pub mod reveal;
pub mod selectors;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
