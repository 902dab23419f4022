pub mod settings;
pub mod logging;
pub mod signal;
pub mod dock;
pub mod surface;
pub mod overlay;
pub mod presence;
pub mod host;
pub mod gui;
