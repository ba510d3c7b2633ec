// Feature vector and raw input types
pub mod features;

// Port interfaces
pub mod ports;

// Prediction result and allocation signal
pub mod prediction;

// Domain-specific error types
pub mod errors;
