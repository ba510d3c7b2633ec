use crate::application::{invoker, normalizer};
use crate::domain::errors::RequestError;
use crate::domain::features::RawFactorInputs;
use crate::domain::ports::ReturnModel;
use crate::domain::prediction::Prediction;
use std::sync::Arc;
use tracing::debug;

/// One prediction request, start to finish: normalize the raw deltas, then
/// bind the record to the loaded model. The first failure is terminal for
/// the request; there are no retries and no partial results. Each `run`
/// call is an independent request.
pub struct PredictionPipeline {
    model: Arc<dyn ReturnModel>,
}

impl PredictionPipeline {
    pub fn new(model: Arc<dyn ReturnModel>) -> Self {
        Self { model }
    }

    pub fn run(&self, raw: &RawFactorInputs) -> Result<Prediction, RequestError> {
        let record = normalizer::normalize(raw)?;
        let prediction = invoker::invoke(self.model.as_ref(), &record)?;
        debug!(
            model = self.model.name(),
            fraction = prediction.fraction(),
            "prediction complete"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;
    use crate::domain::features::FEATURE_NAMES;
    use crate::domain::prediction::Signal;
    use crate::infrastructure::mock::MockReturnModel;

    fn canonical_order() -> Vec<String> {
        FEATURE_NAMES.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_all_zero_request_predicts_the_intercept() {
        let model = Arc::new(MockReturnModel::new(
            canonical_order(),
            vec![0.2; 10],
            0.013,
        ));
        let pipeline = PredictionPipeline::new(model.clone());

        let prediction = pipeline.run(&RawFactorInputs::default()).unwrap();
        assert!((prediction.fraction() - 0.013).abs() < 1e-12);
        assert!((prediction.percent() - 1.3).abs() < 1e-10);
        assert_eq!(prediction.display_percent(), "1.30%");
        assert_eq!(prediction.signal(), Signal::Long);
        assert_eq!(model.calls(), 1);
    }

    #[test]
    fn test_invalid_volume_suppresses_prediction_entirely() {
        let model = Arc::new(MockReturnModel::new(canonical_order(), vec![0.2; 10], 0.0));
        let pipeline = PredictionPipeline::new(model.clone());

        let raw = RawFactorInputs {
            ret_volumen: -1.0,
            ..Default::default()
        };
        match pipeline.run(&raw) {
            Err(RequestError::Validation(ValidationError::InvalidVolumeDelta { value })) => {
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidVolumeDelta, got {:?}", other),
        }
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn test_fresh_request_after_failure_succeeds() {
        let model = Arc::new(MockReturnModel::new(canonical_order(), vec![0.0; 10], 0.002));
        let pipeline = PredictionPipeline::new(model);

        let bad = RawFactorInputs {
            ret_volumen: -1.5,
            ..Default::default()
        };
        assert!(pipeline.run(&bad).is_err());

        // The failed request leaves no state behind
        let good = RawFactorInputs::default();
        assert!(pipeline.run(&good).is_ok());
    }
}
