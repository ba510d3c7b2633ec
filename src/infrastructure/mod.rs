pub mod mock;
pub mod model_store;
pub mod smartcore_model;

pub use model_store::ModelStore;
pub use smartcore_model::SmartcoreReturnModel;
