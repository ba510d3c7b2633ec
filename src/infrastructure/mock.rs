use crate::domain::errors::PredictionError;
use crate::domain::ports::ReturnModel;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic stand-in for a trained artifact: a fixed linear model over
/// a configurable feature order. `weights[i]` applies to the i-th feature of
/// the declared order, so tests can detect whether reordering actually
/// happened. Tracks how many times inference ran.
pub struct MockReturnModel {
    order: Vec<String>,
    weights: Vec<f64>,
    intercept: f64,
    calls: AtomicUsize,
}

impl MockReturnModel {
    pub fn new(order: Vec<String>, weights: Vec<f64>, intercept: f64) -> Self {
        Self {
            order,
            weights,
            intercept,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `predict` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReturnModel for MockReturnModel {
    fn feature_order(&self) -> &[String] {
        &self.order
    }

    fn predict(&self, ordered: &[f64]) -> Result<f64, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if ordered.len() != self.weights.len() {
            return Err(PredictionError::InferenceFailed {
                reason: format!(
                    "expected {} features, got {}",
                    self.weights.len(),
                    ordered.len()
                ),
            });
        }

        let dot: f64 = ordered
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();
        Ok(self.intercept + dot)
    }

    fn name(&self) -> &str {
        "mock linear model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_is_a_linear_model() {
        let model = MockReturnModel::new(
            vec!["a".to_string(), "b".to_string()],
            vec![2.0, -1.0],
            0.5,
        );
        assert_eq!(model.predict(&[1.0, 3.0]).unwrap(), 0.5 + 2.0 - 3.0);
        assert_eq!(model.calls(), 1);
    }

    #[test]
    fn test_mock_rejects_wrong_vector_length() {
        let model = MockReturnModel::new(vec!["a".to_string()], vec![1.0], 0.0);
        assert!(matches!(
            model.predict(&[1.0, 2.0]),
            Err(PredictionError::InferenceFailed { .. })
        ));
    }
}
