#![forbid(unsafe_code)]

pub mod keyboard;
pub mod model;
pub mod time;

pub use time::Clock;
