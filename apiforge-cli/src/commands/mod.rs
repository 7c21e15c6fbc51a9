//! CLI command implementations

pub mod make;

pub use make::MakeModuleCommand;
