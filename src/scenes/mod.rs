mod demo;

pub use demo::demo;
