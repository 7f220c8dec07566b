//! Trait definitions for Postcraft provider adapters.

mod driver;

pub use driver::CompletionDriver;
