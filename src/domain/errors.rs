use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the input normalizer. All are recoverable by re-entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid volume delta {value}: volume cannot drop by 100% or more")]
    InvalidVolumeDelta { value: f64 },

    #[error("input '{field}' is not a finite number")]
    NonFiniteInput { field: &'static str },
}

/// Errors raised while loading the model artifact. Fatal for the session:
/// the store caches the outcome and replays it, so these are `Clone`.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("model artifact not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("model artifact at {path:?} could not be read: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

/// Errors raised while binding a feature record to a live model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// The record and the model's declared feature order disagree.
    /// Indicates a deployment bug: the model was trained on different
    /// features than the form sends.
    #[error("feature mismatch on '{field}': record and model feature sets disagree")]
    FeatureMismatch { field: String },

    #[error("model inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("model returned no prediction")]
    EmptyOutput,
}

/// Top-level error for a single prediction request.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_formatting() {
        let err = ValidationError::InvalidVolumeDelta { value: -1.5 };
        let msg = err.to_string();
        assert!(msg.contains("-1.5"));
        assert!(msg.contains("100%"));

        let err = ValidationError::NonFiniteInput { field: "sp500" };
        assert!(err.to_string().contains("sp500"));
    }

    #[test]
    fn test_load_error_formatting() {
        let err = LoadError::NotFound {
            path: PathBuf::from("models/retornos.json"),
        };
        assert!(err.to_string().contains("retornos.json"));
    }

    #[test]
    fn test_feature_mismatch_names_the_field() {
        let err = PredictionError::FeatureMismatch {
            field: "ret_usd_yuan".to_string(),
        };
        assert!(err.to_string().contains("ret_usd_yuan"));
    }

    #[test]
    fn test_request_error_is_transparent() {
        let inner = ValidationError::InvalidVolumeDelta { value: -2.0 };
        let outer: RequestError = inner.clone().into();
        assert_eq!(outer.to_string(), inner.to_string());
    }
}
