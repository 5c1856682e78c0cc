pub mod session;
pub mod talk;
pub mod time;
pub mod track;

pub use session::*;
pub use talk::*;
pub use time::*;
pub use track::*;
