mod input;
mod user;

pub use input::*;
pub use user::*;
