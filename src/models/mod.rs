pub mod camp;
pub mod participant;
pub mod user;

pub use camp::*;
pub use participant::*;
pub use user::*;
