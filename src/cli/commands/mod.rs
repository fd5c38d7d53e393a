pub mod prepare;

pub use prepare::*;
