pub mod constants;
pub mod params;
pub mod pointer;
pub mod reveal;
pub mod session;
pub mod slider;
pub mod stroke;
pub mod trail;

pub use params::*;
pub use pointer::*;
pub use session::*;
pub use slider::*;
pub use stroke::*;
pub use trail::*;
