//! # Electrical Formula Library
//!
//! Pure functions for the three-phase sizing calculations. Every function
//! validates its divisors and fails with a structured error on a
//! non-positive value; no function touches shared state.
//!
//! ## Formulas
//!
//! ```text
//! FLC (kW)     I  = P(kW)·1000 / (√3 · V · pf · eff)
//! FLC (kVA)    I  = S(kVA)·1000 / (√3 · V)
//! Derating     Ir = I / (D1 · D2 · ...)
//! Voltage drop Vd% = √3 · I · L · (mV/A/m / 1000) / V · 100
//! SC area      A  = Isc(A) · √t / k
//! ```

use crate::errors::{SizingError, SizingResult};

/// Full-load current from active power.
///
/// `I = load_kw·1000 / (√3·V·pf·eff)`
pub fn full_load_current_from_power(
    load_kw: f64,
    voltage_v: f64,
    pf: f64,
    eff: f64,
) -> SizingResult<f64> {
    if voltage_v <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "voltage_v",
            voltage_v.to_string(),
            "Voltage must be > 0",
        ));
    }
    if pf <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "pf",
            pf.to_string(),
            "Power factor must be > 0",
        ));
    }
    if eff <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "efficiency",
            eff.to_string(),
            "Efficiency must be > 0",
        ));
    }
    Ok(load_kw * 1000.0 / (3.0_f64.sqrt() * voltage_v * pf * eff))
}

/// Full-load current from apparent power.
///
/// `I = load_kva·1000 / (√3·V)`
pub fn full_load_current_from_apparent_power(load_kva: f64, voltage_v: f64) -> SizingResult<f64> {
    if voltage_v <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "voltage_v",
            voltage_v.to_string(),
            "Voltage must be > 0",
        ));
    }
    Ok(load_kva * 1000.0 / (3.0_f64.sqrt() * voltage_v))
}

/// Divide a current by the product of derating coefficients.
///
/// An empty factor list is a no-op: the input current is returned unchanged.
pub fn apply_derating(current_a: f64, factors: &[f64]) -> SizingResult<f64> {
    if factors.is_empty() {
        return Ok(current_a);
    }
    let denominator: f64 = factors.iter().product();
    if denominator <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "derating_factors",
            format!("{factors:?}"),
            "Derating factor product must be > 0",
        ));
    }
    Ok(current_a / denominator)
}

/// Percentage voltage drop over a run at the given current.
///
/// `mv_per_amp_per_m` is the line-to-line constant in mV per A per m.
pub fn voltage_drop_percent(
    current_a: f64,
    length_m: f64,
    mv_per_amp_per_m: f64,
    voltage_v: f64,
) -> SizingResult<f64> {
    if voltage_v <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "voltage_v",
            voltage_v.to_string(),
            "Voltage must be > 0",
        ));
    }
    let vd_volts = 3.0_f64.sqrt() * current_a * length_m * (mv_per_amp_per_m / 1000.0);
    Ok(vd_volts / voltage_v * 100.0)
}

/// Minimum conductor cross-section surviving a fault (adiabatic check).
///
/// `A = Isc(kA)·1000 · √duration / k`
pub fn short_circuit_area_required(isc_ka: f64, duration_s: f64, k_const: f64) -> SizingResult<f64> {
    if isc_ka <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "isc_ka",
            isc_ka.to_string(),
            "Short-circuit current must be > 0",
        ));
    }
    if duration_s <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "duration_s",
            duration_s.to_string(),
            "Fault duration must be > 0",
        ));
    }
    if k_const <= 0.0 {
        return Err(SizingError::invalid_parameter(
            "k_const",
            k_const.to_string(),
            "k constant must be > 0",
        ));
    }
    Ok(isc_ka * 1000.0 * duration_s.sqrt() / k_const)
}
