use crate::domain::errors::ValidationError;
use crate::domain::features::{FeatureRecord, RawFactorInputs};

/// Turns raw user-supplied deltas into a validated feature record.
///
/// Nine fields pass through unchanged; the volume delta is stored as
/// `ln(1 + raw)`. The log is only defined for raw > -1 (volume cannot drop
/// by 100% or more), so the domain is checked up front and a violation is
/// returned as a typed error instead of letting a NaN reach the model.
///
/// Pure function: same inputs, same record or same error, every call.
pub fn normalize(raw: &RawFactorInputs) -> Result<FeatureRecord, ValidationError> {
    for (field, value) in raw.fields() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteInput { field });
        }
    }

    if raw.ret_volumen <= -1.0 {
        return Err(ValidationError::InvalidVolumeDelta {
            value: raw.ret_volumen,
        });
    }

    Ok(FeatureRecord::new([
        raw.ret_precio_apertura,
        raw.ret_precio_maximo,
        raw.ret_precio_minimo,
        raw.ret_volumen.ln_1p(),
        raw.sp500,
        raw.ret_petroleo_usd,
        raw.d_tasa_tesoro_10y,
        raw.ret_cobre_usd,
        raw.d_tasa_tesoro_3m,
        raw.ret_usd_yuan,
    ]))
}
