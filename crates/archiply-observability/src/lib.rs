//! Observability for the Archiply storefront.
//!
//! Library crates log through `tracing` macros only. The embedding
//! application calls [`init_logging`] once to install a subscriber:
//! - `LogLevel` - Minimum level, overridable through `ARCHIPLY_LOG`
//! - `LogFormat` - JSON for aggregation, human-readable for development

mod logging;

pub use logging::*;
