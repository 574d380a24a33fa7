//! Pipeline services.

pub mod roast;

pub use roast::{
    RoastError, RoastMailer, RoastModel, RoastReport, RoastRun, RoastService, TargetOutcome,
};
