pub mod cs;

pub use cs::error::{Error, Result};
pub use cs::hashing::{
    ChainedTable, Diagnostics, GrowthEvent, GrowthPolicy, LogDiagnostics, NoDiagnostics,
    TableBuilder,
};
