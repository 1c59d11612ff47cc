pub mod clock;
pub mod intro;
pub mod resolve;
pub mod wheel;

pub use clock::*;
pub use intro::*;
pub use resolve::*;
pub use wheel::*;
