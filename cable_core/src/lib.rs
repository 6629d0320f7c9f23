//! # cable_core - Cable Sizing Calculation Engine
//!
//! `cable_core` sizes a single power cable: it finds the smallest catalogue
//! cross-section that carries the derated load current, keeps the running
//! voltage drop within limits, and survives the specified fault. All inputs
//! and outputs are JSON-serializable, making the engine easy to wrap in an
//! HTTP handler, a CLI, or an LLM tool call.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error type, not just strings
//! - **Data over exceptions**: "no size qualifies" is an answer, not an error
//!
//! ## Quick Start
//!
//! ```rust
//! use cable_core::sizing::{calculate_with_standard_catalogue, CableSizingInput};
//!
//! let input: CableSizingInput = serde_json::from_str(r#"{
//!     "cable_number": "FDR-01",
//!     "load_kw": 100.0,
//!     "voltage_v": 415.0,
//!     "length_m": 50.0
//! }"#).unwrap();
//!
//! let result = calculate_with_standard_catalogue(&input).unwrap();
//! println!("{} -> {:?} mm²", result.cable_number, result.selected_size_mm2());
//! ```
//!
//! ## Modules
//!
//! - [`sizing`] - The single-cable calculation entry point
//! - [`formulas`] - Pure electrical formulas (FLC, derating, Vd%, adiabatic)
//! - [`derating`] - Table-driven derating factor resolver
//! - [`selection`] - Catalogue-scanning cable selector
//! - [`catalogue`] - The injected, immutable size table
//! - [`materials`] - Conductor/insulation enums and k-constant lookup
//! - [`schedule`] - Job-level container of cable rows
//! - [`errors`] - Structured error type

pub mod catalogue;
pub mod derating;
pub mod errors;
pub mod formulas;
pub mod materials;
pub mod schedule;
pub mod selection;
pub mod sizing;

// Re-export commonly used types at crate root for convenience
pub use catalogue::{Catalogue, CatalogueEntry};
pub use derating::{DeratingFactors, InstallationMethod, SoilConditions};
pub use errors::{SizingError, SizingResult};
pub use selection::{Selection, SelectionStatus, ShortCircuitSpec};
pub use sizing::{calculate, calculate_with_standard_catalogue, CableSizingInput, CableSizingResult};
