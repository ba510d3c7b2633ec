use crate::domain::errors::{LoadError, PredictionError};
use crate::domain::ports::ReturnModel;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{error, info, warn};

/// Serialized artifact layout: the trained regressor together with the
/// feature order it was fitted on. The order travels with the model so a
/// retrained artifact can rearrange features without a code change.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelBundle {
    pub feature_names: Vec<String>,
    pub model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

/// The opaque pre-trained return model, deserialized from a JSON bundle.
/// Nothing in the bundle is interpreted beyond deserialization and the two
/// `ReturnModel` capabilities.
#[derive(Debug)]
pub struct SmartcoreReturnModel {
    bundle: ModelBundle,
}

impl SmartcoreReturnModel {
    /// Loads the artifact. A missing path is `NotFound` (checked before any
    /// open attempt); an unreadable or undeserializable file is `Corrupt`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            warn!("model artifact not found at {:?}", path);
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| {
            error!("failed to open model artifact {:?}: {}", path, e);
            LoadError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let bundle: ModelBundle = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            error!("failed to deserialize model artifact {:?}: {}", path, e);
            LoadError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        info!(
            "loaded return model from {:?} ({} features)",
            path,
            bundle.feature_names.len()
        );
        Ok(Self { bundle })
    }
}

impl ReturnModel for SmartcoreReturnModel {
    fn feature_order(&self) -> &[String] {
        &self.bundle.feature_names
    }

    fn predict(&self, ordered: &[f64]) -> Result<f64, PredictionError> {
        let matrix =
            DenseMatrix::from_2d_vec(&vec![ordered.to_vec()]).map_err(|e| {
                PredictionError::InferenceFailed {
                    reason: format!("matrix creation failed: {}", e),
                }
            })?;

        let predictions =
            self.bundle
                .model
                .predict(&matrix)
                .map_err(|e| PredictionError::InferenceFailed {
                    reason: e.to_string(),
                })?;

        predictions
            .first()
            .copied()
            .ok_or(PredictionError::EmptyOutput)
    }

    fn name(&self) -> &str {
        "smartcore random forest"
    }
}
