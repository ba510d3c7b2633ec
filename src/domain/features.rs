use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};

/// Ordered list of feature names.
/// This order MUST match exactly with the column order used in the training
/// notebooks. Any change here is a breaking change for deployed artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "ret_precio_apertura",
    "ret_precio_maximo",
    "ret_precio_minimo",
    "ret_volumen",
    "sp500",
    "ret_petroleo_usd",
    "d_tasa_tesoro_10y",
    "ret_cobre_usd",
    "d_tasa_tesoro_3m",
    "ret_usd_yuan",
];

/// Raw macro-factor deltas exactly as the form sends them, defaults 0.0.
/// `ret_volumen` here is the untransformed relative volume change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFactorInputs {
    pub ret_precio_apertura: f64,
    pub ret_precio_maximo: f64,
    pub ret_precio_minimo: f64,
    pub ret_volumen: f64,
    pub sp500: f64,
    pub ret_petroleo_usd: f64,
    pub d_tasa_tesoro_10y: f64,
    pub ret_cobre_usd: f64,
    pub d_tasa_tesoro_3m: f64,
    pub ret_usd_yuan: f64,
}

impl RawFactorInputs {
    /// Field values paired with their names, in canonical order.
    pub fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("ret_precio_apertura", self.ret_precio_apertura),
            ("ret_precio_maximo", self.ret_precio_maximo),
            ("ret_precio_minimo", self.ret_precio_minimo),
            ("ret_volumen", self.ret_volumen),
            ("sp500", self.sp500),
            ("ret_petroleo_usd", self.ret_petroleo_usd),
            ("d_tasa_tesoro_10y", self.d_tasa_tesoro_10y),
            ("ret_cobre_usd", self.ret_cobre_usd),
            ("d_tasa_tesoro_3m", self.d_tasa_tesoro_3m),
            ("ret_usd_yuan", self.ret_usd_yuan),
        ]
    }
}

/// Validated feature vector in canonical order. The stored `ret_volumen` is
/// the log1p-transformed volume delta, never the raw user entry; the only
/// way to build one is through the normalizer, so that invariant holds for
/// every live record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    values: [f64; 10],
}

impl FeatureRecord {
    pub(crate) fn new(values: [f64; 10]) -> Self {
        Self { values }
    }

    /// Value of a feature by name, `None` for names outside the canonical set.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// (name, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES
            .iter()
            .zip(self.values.iter())
            .map(|(n, v)| (*n, *v))
    }

    /// Arranges the record's values in the order a model declares.
    ///
    /// The declared order is authoritative and may differ from the canonical
    /// order, but it must name exactly the same feature set. Any unknown,
    /// missing or duplicated name is a `FeatureMismatch`; no partial or
    /// zero-filled vector is ever produced.
    pub fn to_ordered(&self, order: &[String]) -> Result<Vec<f64>, PredictionError> {
        if let Some(unknown) = order.iter().find(|n| !FEATURE_NAMES.contains(&n.as_str())) {
            return Err(PredictionError::FeatureMismatch {
                field: unknown.clone(),
            });
        }
        if let Some(missing) = FEATURE_NAMES
            .iter()
            .find(|n| !order.iter().any(|o| o == *n))
        {
            return Err(PredictionError::FeatureMismatch {
                field: (*missing).to_string(),
            });
        }
        if let Some(duplicated) = order
            .iter()
            .find(|n| order.iter().filter(|o| o == n).count() > 1)
        {
            return Err(PredictionError::FeatureMismatch {
                field: duplicated.clone(),
            });
        }

        // Set equality established above, so every lookup succeeds.
        Ok(order
            .iter()
            .map(|n| self.get(n).unwrap_or_default())
            .collect())
    }
}
