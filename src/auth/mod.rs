pub mod gate;

pub use gate::{Authenticated, SESSION_COOKIE};
