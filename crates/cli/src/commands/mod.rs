pub mod exports;
pub mod info;

pub use exports::*;
pub use info::*;
