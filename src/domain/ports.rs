use crate::domain::errors::PredictionError;

/// Capability contract of the opaque pre-trained regressor. Loaded once per
/// process and read-only afterwards; determinism of the underlying artifact
/// is a precondition, not something this trait enforces.
pub trait ReturnModel: Send + Sync {
    /// Feature names in the exact order the model expects its input vector.
    fn feature_order(&self) -> &[String];

    /// Runs inference on a vector already arranged in `feature_order`.
    /// Output is a daily return as a fraction (0.013 means 1.3%).
    fn predict(&self, ordered: &[f64]) -> Result<f64, PredictionError>;

    /// Model name/type for logs.
    fn name(&self) -> &str;
}
