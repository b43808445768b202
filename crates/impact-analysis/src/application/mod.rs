//! Analysis Application Layer
//!
//! Contains ports (traits) and use cases: impact models, the per-size
//! simulator and the per-symbol analysis pipeline.

pub mod analyzer;
pub mod impact_models;
pub mod ports;
pub mod simulator;

pub use analyzer::{ImpactAnalyzer, RunSummary, SymbolReport};
pub use ports::{CurveWriter, LoadSummary, LoadedSymbol, ReportSink, SnapshotSource};
pub use simulator::{ImpactSimulator, SimulatorConfig};
