//! HTTP request handlers.

mod health;
mod roast;

pub use health::{health_check, metrics_handler};
pub use roast::trigger_roast;
