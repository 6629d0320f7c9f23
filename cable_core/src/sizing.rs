//! # Single-Cable Sizing Calculation
//!
//! The orchestrator tying the formula library, derating resolver, and cable
//! selector into one calculation per request. Stateless: the same input and
//! catalogue always produce a bit-identical result.
//!
//! ## Pipeline
//!
//! 1. Full-load current from the supplied load representation (kW wins when
//!    both are given; neither is an error).
//! 2. Derating factors - resolved automatically from the installation
//!    context, or taken positionally from the caller.
//! 3. Rated current = FLC divided by the factor product.
//! 4. Short-circuit k-constant - explicit value, or looked up from the
//!    conductor/insulation pair when fault data is present without one.
//! 5. Catalogue scan and result assembly.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "cable_number": "FDR-01",
//!   "load_kw": 100.0,
//!   "voltage_v": 415.0,
//!   "length_m": 50.0,
//!   "installation_method": "TRAY_AIR",
//!   "ambient_temp_c": 40.0
//! }
//! ```
//!
//! Omitted fields take the documented defaults (pf 0.85, efficiency 0.95,
//! allowable drop 5.0 %, Cu/XLPE, IEC, one circuit, auto-derating on).

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::derating::{
    resolve_derating_factors, DeratingFactors, InstallationMethod, SoilConditions,
};
use crate::errors::{SizingError, SizingResult};
use crate::formulas::{
    apply_derating, full_load_current_from_apparent_power, full_load_current_from_power,
};
use crate::materials::{adiabatic_k_constant, StandardMode};
use crate::selection::{select_cable_size, Selection, SelectionStatus, ShortCircuitSpec};

// Serde defaults matching the documented field-level defaults
fn default_pf() -> f64 {
    0.85
}
fn default_efficiency() -> f64 {
    0.95
}
fn default_conductor() -> String {
    "CU".to_string()
}
fn default_insulation() -> String {
    "XLPE".to_string()
}
fn default_cores() -> f64 {
    3.5
}
fn default_ambient() -> f64 {
    40.0
}
fn default_one() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_allowable_vdrop() -> f64 {
    5.0
}

/// Which load representation produced the full-load current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadBasis {
    /// Active power in kW (with power factor and efficiency)
    #[serde(rename = "kW")]
    Kw,
    /// Apparent power in kVA
    #[serde(rename = "kVA")]
    Kva,
}

impl std::fmt::Display for LoadBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadBasis::Kw => write!(f, "kW"),
            LoadBasis::Kva => write!(f, "kVA"),
        }
    }
}

/// Input parameters for a single-cable sizing calculation.
///
/// Conductor material and insulation arrive as free text, as they do over
/// the wire; unrecognized values degrade to the conservative k-constant
/// rather than failing. Soil parameters are flattened so the JSON shape
/// stays flat (`ground_temp_c`, `depth_of_laying_mm`, `soil_resistivity`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableSizingInput {
    /// Cable identifier / tag (e.g., "FDR-01")
    pub cable_number: String,

    /// Load in kW (use either kW or kVA; kW wins when both are given)
    #[serde(default)]
    pub load_kw: Option<f64>,
    /// Load in kVA
    #[serde(default)]
    pub load_kva: Option<f64>,
    /// System line-to-line voltage (V)
    pub voltage_v: f64,
    /// Power factor (default 0.85)
    #[serde(default = "default_pf")]
    pub pf: f64,
    /// Efficiency as a decimal (default 0.95)
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,

    /// Cable route length in metres
    pub length_m: f64,

    /// Standard mode (default IEC)
    #[serde(default)]
    pub standard_mode: StandardMode,
    /// Conductor material text, e.g. "CU" or "AL" (default "CU")
    #[serde(default = "default_conductor")]
    pub conductor_material: String,
    /// Insulation type text, e.g. "XLPE" or "PVC" (default "XLPE")
    #[serde(default = "default_insulation")]
    pub insulation_type: String,
    /// Core count, e.g. 1, 3.5, 4 (default 3.5)
    #[serde(default = "default_cores")]
    pub cores: f64,

    /// Installation method (default TRAY_AIR)
    #[serde(default)]
    pub installation_method: InstallationMethod,
    /// Ambient air temperature in °C (default 40.0)
    #[serde(default = "default_ambient")]
    pub ambient_temp_c: f64,
    /// Number of loaded circuits in the same group (default 1)
    #[serde(default = "default_one")]
    pub num_circuits: u32,
    /// Number of parallel runs per phase, echoed for reporting (default 1)
    #[serde(default = "default_one")]
    pub num_runs: u32,
    /// Buried-installation soil parameters (ignored for air methods)
    #[serde(flatten)]
    pub soil: SoilConditions,

    /// Resolve derating from installation context (default true)
    #[serde(default = "default_true")]
    pub use_auto_derating: bool,
    /// Manual positional factors D1..D5, used when auto-derating is off
    #[serde(default)]
    pub derating_factors: Option<Vec<f64>>,

    /// Allowable running voltage drop in percent (default 5.0)
    #[serde(default = "default_allowable_vdrop")]
    pub allowable_vdrop_percent: f64,
    /// Short-circuit fault current in kA (optional)
    #[serde(default)]
    pub isc_ka: Option<f64>,
    /// Short-circuit duration in seconds (optional)
    #[serde(default)]
    pub sc_duration_s: Option<f64>,
    /// Explicit k-constant (optional; looked up from materials when absent)
    #[serde(default)]
    pub k_const: Option<f64>,
}

impl CableSizingInput {
    /// Validate input parameters.
    ///
    /// Only the load-representation rule lives here; numeric divisors are
    /// validated by the formulas that divide by them, so the error names
    /// the exact field that failed.
    pub fn validate(&self) -> SizingResult<()> {
        if self.load_kw.is_none() && self.load_kva.is_none() {
            return Err(SizingError::invalid_parameter(
                "load_kw/load_kva",
                "null",
                "Either load_kw or load_kva must be provided",
            ));
        }
        Ok(())
    }
}

/// Results from a single-cable sizing calculation.
///
/// Echoes the inputs alongside the derived currents, the derating
/// breakdown, and the selection outcome, so a report row can be rendered
/// from this struct alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableSizingResult {
    /// Cable identifier, echoed
    pub cable_number: String,
    /// Which load representation was used
    pub load_basis: LoadBasis,
    /// Full-load current before derating (A)
    pub flc_a: f64,
    /// Rated (derated) current the selector sized for (A)
    pub irated_a: f64,

    /// System voltage, echoed (V)
    pub voltage_v: f64,
    /// Route length, echoed (m)
    pub length_m: f64,
    /// Standard mode, echoed
    pub standard_mode: StandardMode,
    /// Conductor material text, echoed
    pub conductor_material: String,
    /// Insulation type text, echoed
    pub insulation_type: String,
    /// Core count, echoed
    pub cores: f64,
    /// Installation method, echoed
    pub installation_method: InstallationMethod,
    /// Circuit count, echoed
    pub num_circuits: u32,
    /// Parallel runs per phase, echoed
    pub num_runs: u32,

    /// The five derating coefficients and their product
    pub derating: DeratingFactors,

    /// Allowable voltage drop, echoed (%)
    pub allowable_vdrop_percent: f64,
    /// Fault current, echoed (kA)
    pub isc_ka: Option<f64>,
    /// Fault duration, echoed (s)
    pub sc_duration_s: Option<f64>,
    /// k-constant actually used (explicit or looked up), if any
    pub k_const: Option<f64>,

    /// Ampacity verdict of the reported candidate, if one exists
    pub cca_ok: Option<bool>,
    /// Voltage-drop verdict of the reported candidate, if one exists
    pub vdrop_ok: Option<bool>,
    /// Short-circuit verdict of the reported candidate, if one exists
    pub sc_ok: Option<bool>,
    /// Overall outcome of the catalogue scan
    pub overall_status: SelectionStatus,
    /// The full selection record (status plus candidate detail)
    pub selection: Selection,
}

impl CableSizingResult {
    /// True when a size passed all three criteria
    pub fn is_fully_ok(&self) -> bool {
        self.overall_status == SelectionStatus::Ok
    }

    /// Selected (or fallback) size in mm², if any
    pub fn selected_size_mm2(&self) -> Option<f64> {
        self.selection.candidate.map(|c| c.size_mm2)
    }
}

/// Run one sizing calculation against an injected catalogue.
///
/// Pure function: no hidden state, no side effects. Fails only on malformed
/// numeric inputs; every other situation is reported as a data outcome in
/// the result.
pub fn calculate(
    input: &CableSizingInput,
    catalogue: &Catalogue,
) -> SizingResult<CableSizingResult> {
    input.validate()?;

    // 1. Full-load current; power-based representation takes priority
    let (flc_a, load_basis) = match (input.load_kw, input.load_kva) {
        (Some(load_kw), _) => (
            full_load_current_from_power(load_kw, input.voltage_v, input.pf, input.efficiency)?,
            LoadBasis::Kw,
        ),
        (None, Some(load_kva)) => (
            full_load_current_from_apparent_power(load_kva, input.voltage_v)?,
            LoadBasis::Kva,
        ),
        (None, None) => {
            return Err(SizingError::invalid_parameter(
                "load_kw/load_kva",
                "null",
                "Either load_kw or load_kva must be provided",
            ));
        }
    };

    // 2. Derating factors
    let derating = if input.use_auto_derating {
        resolve_derating_factors(
            input.installation_method,
            input.ambient_temp_c,
            input.num_circuits,
            &input.soil,
        )
    } else {
        DeratingFactors::from_manual(input.derating_factors.as_deref().unwrap_or(&[]))
    };

    // 3. Rated current
    let irated_a = apply_derating(flc_a, &derating.as_list())?;

    // 4. Short-circuit constant: explicit value wins, otherwise material
    //    lookup when fault data is present
    let k_const = match (input.isc_ka, input.sc_duration_s, input.k_const) {
        (Some(_), Some(_), None) => Some(adiabatic_k_constant(
            &input.conductor_material,
            &input.insulation_type,
        )),
        _ => input.k_const,
    };
    let short_circuit = match (input.isc_ka, input.sc_duration_s, k_const) {
        (Some(isc_ka), Some(duration_s), Some(k)) => Some(ShortCircuitSpec {
            isc_ka,
            duration_s,
            k_const: k,
        }),
        _ => None,
    };

    // 5. Catalogue scan
    let selection = select_cable_size(
        catalogue,
        irated_a,
        input.allowable_vdrop_percent,
        input.length_m,
        input.voltage_v,
        short_circuit,
    )?;

    let flags = selection.candidate;
    Ok(CableSizingResult {
        cable_number: input.cable_number.clone(),
        load_basis,
        flc_a,
        irated_a,
        voltage_v: input.voltage_v,
        length_m: input.length_m,
        standard_mode: input.standard_mode,
        conductor_material: input.conductor_material.clone(),
        insulation_type: input.insulation_type.clone(),
        cores: input.cores,
        installation_method: input.installation_method,
        num_circuits: input.num_circuits,
        num_runs: input.num_runs,
        derating,
        allowable_vdrop_percent: input.allowable_vdrop_percent,
        isc_ka: input.isc_ka,
        sc_duration_s: input.sc_duration_s,
        k_const,
        cca_ok: flags.map(|c| c.cca_ok),
        vdrop_ok: flags.map(|c| c.vd_ok),
        sc_ok: flags.map(|c| c.sc_ok),
        overall_status: selection.status,
        selection,
    })
}

/// Convenience wrapper over the shared demo catalogue.
pub fn calculate_with_standard_catalogue(
    input: &CableSizingInput,
) -> SizingResult<CableSizingResult> {
    calculate(input, Catalogue::standard())
}
