pub mod host;
pub mod keyboard;
pub mod pointer;

pub use host::{wire_host_events, NativeBridge};
pub use keyboard::wire_background_keys;
pub use pointer::{wire_input_handlers, InputWiring};
