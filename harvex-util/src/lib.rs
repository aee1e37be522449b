#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub mod project;

#[cfg(all(feature = "settings", not(target_arch = "wasm32")))]
pub mod settings;
