//! Common Smart Contracts utilities.
pub mod math;
pub mod reentrant_call_handler;

pub use reentrant_call_handler::ReentrantCallHandler;
