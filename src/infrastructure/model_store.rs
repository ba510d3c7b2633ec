use crate::domain::errors::LoadError;
use crate::infrastructure::smartcore_model::SmartcoreReturnModel;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Single-initialization handle for the model artifact.
///
/// The artifact is the only shared resource in the system: it is loaded at
/// most once per store lifetime and read-only afterwards. The `OnceLock`
/// makes the one load attempt safe even if a host lets requests arrive
/// concurrently during warm-up. The first outcome, success or failure, is
/// replayed to every later caller; a fresh attempt requires a fresh store
/// (i.e. a new process or session).
#[derive(Default)]
pub struct ModelStore {
    slot: OnceLock<Result<Arc<SmartcoreReturnModel>, LoadError>>,
}

impl ModelStore {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    pub fn get_or_load(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Arc<SmartcoreReturnModel>, LoadError> {
        self.slot
            .get_or_init(|| SmartcoreReturnModel::load(path).map(Arc::new))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_failure_is_cached_for_the_store_lifetime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modelo_rendimientos.json");

        let store = ModelStore::new();
        assert!(matches!(
            store.get_or_load(&path),
            Err(LoadError::NotFound { .. })
        ));

        // Creating the file afterwards changes nothing: the store replays
        // the first outcome until the process restarts.
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{}").unwrap();
        assert!(matches!(
            store.get_or_load(&path),
            Err(LoadError::NotFound { .. })
        ));
    }

    #[test]
    fn test_second_call_returns_the_same_handle() {
        let store = ModelStore::new();
        let first = store.get_or_load("missing.json").unwrap_err();
        let second = store.get_or_load("missing.json").unwrap_err();
        assert_eq!(first.to_string(), second.to_string());
    }
}
