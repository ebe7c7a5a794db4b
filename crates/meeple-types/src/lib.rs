pub mod collection;
pub mod game;
pub mod play;
pub mod tags;

pub use collection::*;
pub use game::*;
pub use play::*;
pub use tags::*;
