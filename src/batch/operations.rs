//! Operations module (atomic side effects)

pub mod invoke;

pub use invoke::{Invoker, invoker_for};
