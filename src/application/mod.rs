//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod recognize;

// Re-export use cases
pub use recognize::{
    RecognizeCallbacks, RecognizeInput, RecognizeOutcome, RecognizeUseCase, SHUTDOWN_TIMEOUT,
};
