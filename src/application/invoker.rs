use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureRecord;
use crate::domain::ports::ReturnModel;
use crate::domain::prediction::Prediction;
use tracing::error;

/// Binds a validated feature record to a live model and runs inference.
///
/// The model's declared feature order is authoritative: the record is
/// rearranged to it behind a checked set-equality precondition, so a model
/// trained on a different feature set fails loudly here instead of being
/// fed a partial vector.
pub fn invoke(
    model: &dyn ReturnModel,
    record: &FeatureRecord,
) -> Result<Prediction, PredictionError> {
    let ordered = record.to_ordered(model.feature_order()).inspect_err(|e| {
        error!("feature reconciliation failed for {}: {}", model.name(), e);
    })?;

    let fraction = model.predict(&ordered)?;
    Ok(Prediction::new(fraction))
}
