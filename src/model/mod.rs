//! Pure data structures served by the sample controllers.

pub mod user;

pub use user::*;
