pub mod pointer;
pub mod slider;

pub use pointer::wire_pointer_input;
pub use slider::wire_swipe_handlers;
