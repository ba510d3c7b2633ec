// Raw input validation and feature transform
pub mod normalizer;

// Model binding and inference
pub mod invoker;

// Per-request orchestration
pub mod pipeline;
