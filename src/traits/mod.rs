pub mod backend;
pub mod controller;

pub use backend::*;
pub use controller::*;
