#![forbid(unsafe_code)]

pub mod builtin;
pub mod error;
pub mod model;
pub mod navigation;
pub mod session;
pub mod time;

pub use builtin::builtin_catalog;
pub use error::Error;
pub use time::Clock;
