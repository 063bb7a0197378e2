mod commission_engine;
mod errors;

pub use commission_engine::{CommissionEngine, RunSummary};
pub use errors::{CommissionError, EngineError, LineFailure};
