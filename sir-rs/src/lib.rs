//! Deterministic SIR epidemic simulator: forward-Euler integration of the
//! susceptible/infected/recovered compartments plus derived summary
//! statistics, with thin config and output glue for front ends.

pub mod environment;
pub mod error;
pub mod metrics;
pub mod model;
pub mod parameters;
pub mod report;
pub mod trajectory;

pub use environment::{Environment, OutputConfig, RunConfig};
pub use error::SirError;
pub use metrics::Metrics;
pub use model::SirModel;
pub use parameters::Parameters;
pub use trajectory::Trajectory;
