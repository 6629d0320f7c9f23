//! # Cable Selector
//!
//! Scans an injected catalogue in ascending size order and evaluates each
//! entry against three criteria:
//!
//! 1. **Ampacity** - admissible current ≥ rated current. A hard gate: an
//!    undersized conductor is never acceptable, not even as a fallback.
//! 2. **Voltage drop** - computed Vd% ≤ the allowable percentage.
//! 3. **Short circuit** - entry size ≥ the required adiabatic area, when
//!    fault data is supplied.
//!
//! The first entry passing all three wins immediately (smallest adequate
//! size, since the catalogue is size-ordered). Otherwise the first
//! ampacity-passing entry is retained as a diagnosed fallback - voltage drop
//! and short circuit are soft criteria an engineer may resolve by other
//! means (parallel runs, shorter route) instead of a larger size.

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::errors::SizingResult;
use crate::formulas::{short_circuit_area_required, voltage_drop_percent};

/// Optional short-circuit withstand inputs for the selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortCircuitSpec {
    /// Fault current in kA
    pub isc_ka: f64,
    /// Fault duration in seconds
    pub duration_s: f64,
    /// Adiabatic k-constant for the conductor/insulation pair
    pub k_const: f64,
}

/// Outcome tag for a selection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    /// A size passed all three criteria
    Ok,
    /// A size carries the current but fails voltage drop and/or short circuit
    NoSizeFullyOk,
    /// No catalogue size can carry the rated current
    NoCatalogMatch,
}

impl SelectionStatus {
    /// Display name matching the wire format
    pub fn display_name(&self) -> &'static str {
        match self {
            SelectionStatus::Ok => "OK",
            SelectionStatus::NoSizeFullyOk => "NO_SIZE_FULLY_OK",
            SelectionStatus::NoCatalogMatch => "NO_CATALOG_MATCH",
        }
    }
}

impl std::fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One evaluated catalogue entry with its per-criterion verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionCandidate {
    /// Conductor cross-section in mm²
    pub size_mm2: f64,
    /// Admissible continuous current in A
    pub cca_a: f64,
    /// Voltage-drop constant used for this entry (mV/A/m)
    pub mv_per_amp_per_m: f64,
    /// Computed voltage drop at the rated current (%)
    pub voltage_drop_percent: f64,
    /// Required adiabatic area (mm²) when short-circuit data was supplied
    pub short_circuit_area_required_mm2: Option<f64>,
    /// Ampacity criterion verdict (always true for a reported candidate)
    pub cca_ok: bool,
    /// Voltage-drop criterion verdict
    pub vd_ok: bool,
    /// Short-circuit criterion verdict (true when no fault data supplied)
    pub sc_ok: bool,
}

impl SelectionCandidate {
    /// True when all three criteria pass
    pub fn fully_ok(&self) -> bool {
        self.cca_ok && self.vd_ok && self.sc_ok
    }
}

/// Result of a catalogue scan.
///
/// `candidate` is present for `Ok` and `NoSizeFullyOk`, absent for
/// `NoCatalogMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Overall outcome of the scan
    pub status: SelectionStatus,
    /// The selected (or best-effort fallback) size, if any
    pub candidate: Option<SelectionCandidate>,
}

/// Scan the catalogue for the smallest size satisfying all criteria.
///
/// Entries whose ampacity is below `irated_a` are skipped outright. Among
/// the rest, the first entry passing voltage drop and short circuit is
/// returned with status `Ok`; failing that, the first ampacity-passing
/// entry is returned with status `NoSizeFullyOk` so the caller can see
/// which soft criteria missed. When nothing carries the current the status
/// is `NoCatalogMatch` with no candidate.
pub fn select_cable_size(
    catalogue: &Catalogue,
    irated_a: f64,
    allowable_vdrop_percent: f64,
    length_m: f64,
    voltage_v: f64,
    short_circuit: Option<ShortCircuitSpec>,
) -> SizingResult<Selection> {
    let mut fallback: Option<SelectionCandidate> = None;

    for entry in catalogue.entries() {
        if entry.cca_a < irated_a {
            continue;
        }

        let vd_percent =
            voltage_drop_percent(irated_a, length_m, entry.mv_per_amp_per_m, voltage_v)?;
        let vd_ok = vd_percent <= allowable_vdrop_percent;

        let (sc_area, sc_ok) = match short_circuit {
            Some(sc) => {
                let area = short_circuit_area_required(sc.isc_ka, sc.duration_s, sc.k_const)?;
                (Some(area), entry.size_mm2 >= area)
            }
            None => (None, true),
        };

        let candidate = SelectionCandidate {
            size_mm2: entry.size_mm2,
            cca_a: entry.cca_a,
            mv_per_amp_per_m: entry.mv_per_amp_per_m,
            voltage_drop_percent: vd_percent,
            short_circuit_area_required_mm2: sc_area,
            cca_ok: true,
            vd_ok,
            sc_ok,
        };

        if candidate.fully_ok() {
            return Ok(Selection {
                status: SelectionStatus::Ok,
                candidate: Some(candidate),
            });
        }

        // Keep the smallest ampacity-passing size; never overwritten
        if fallback.is_none() {
            fallback = Some(candidate);
        }
    }

    match fallback {
        Some(candidate) => Ok(Selection {
            status: SelectionStatus::NoSizeFullyOk,
            candidate: Some(candidate),
        }),
        None => Ok(Selection {
            status: SelectionStatus::NoCatalogMatch,
            candidate: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::CatalogueEntry;

    fn standard() -> &'static Catalogue {
        Catalogue::standard()
    }

    #[test]
    fn test_smallest_adequate_size_wins() {
        // 183.3 A: 70 mm² (175 A) is skipped, 95 mm² (215 A) qualifies
        let selection =
            select_cable_size(standard(), 183.3, 5.0, 50.0, 415.0, None).unwrap();
        assert_eq!(selection.status, SelectionStatus::Ok);
        let candidate = selection.candidate.unwrap();
        assert_eq!(candidate.size_mm2, 95.0);
        assert!(candidate.fully_ok());
    }

    #[test]
    fn test_never_returns_ampacity_failing_size() {
        let selection =
            select_cable_size(standard(), 100.0, 5.0, 50.0, 415.0, None).unwrap();
        let candidate = selection.candidate.unwrap();
        assert!(candidate.cca_a >= 100.0);
        assert!(candidate.cca_ok);
    }

    #[test]
    fn test_voltage_drop_promotes_larger_size() {
        // 100 A over a long run: 35 mm² carries the current but drops too
        // much voltage, so a bigger size with a smaller mV/A/m wins.
        let short = select_cable_size(standard(), 100.0, 5.0, 20.0, 415.0, None).unwrap();
        let long = select_cable_size(standard(), 100.0, 5.0, 150.0, 415.0, None).unwrap();
        assert_eq!(short.status, SelectionStatus::Ok);
        assert_eq!(long.status, SelectionStatus::Ok);
        assert!(long.candidate.unwrap().size_mm2 > short.candidate.unwrap().size_mm2);
    }

    #[test]
    fn test_short_circuit_gates_size() {
        // 25 kA for 1 s with k = 143 requires 174.83 mm²
        let sc = ShortCircuitSpec {
            isc_ka: 25.0,
            duration_s: 1.0,
            k_const: 143.0,
        };
        let selection =
            select_cable_size(standard(), 100.0, 5.0, 20.0, 415.0, Some(sc)).unwrap();
        assert_eq!(selection.status, SelectionStatus::Ok);
        let candidate = selection.candidate.unwrap();
        assert_eq!(candidate.size_mm2, 185.0);
        let area = candidate.short_circuit_area_required_mm2.unwrap();
        assert!((area - 174.83).abs() < 0.01);
    }

    #[test]
    fn test_fallback_retains_first_ampacity_pass() {
        // Only the 150 mm² entry exists but the run is too long for it:
        // fallback reports it with vd_ok = false.
        let catalogue = Catalogue::new(vec![CatalogueEntry::new(150.0, 280.0, 0.32)]);
        let selection =
            select_cable_size(&catalogue, 200.0, 1.0, 500.0, 415.0, None).unwrap();
        assert_eq!(selection.status, SelectionStatus::NoSizeFullyOk);
        let candidate = selection.candidate.unwrap();
        assert_eq!(candidate.size_mm2, 150.0);
        assert!(candidate.cca_ok);
        assert!(!candidate.vd_ok);
    }

    #[test]
    fn test_fallback_not_overwritten_by_later_sizes() {
        // Both entries fail voltage drop; the fallback must be the smaller.
        let catalogue = Catalogue::new(vec![
            CatalogueEntry::new(150.0, 280.0, 0.32),
            CatalogueEntry::new(240.0, 365.0, 0.22),
        ]);
        let selection =
            select_cable_size(&catalogue, 200.0, 0.1, 500.0, 415.0, None).unwrap();
        assert_eq!(selection.status, SelectionStatus::NoSizeFullyOk);
        assert_eq!(selection.candidate.unwrap().size_mm2, 150.0);
    }

    #[test]
    fn test_no_catalog_match() {
        // 400 A exceeds every CCA in the demo table (max 365 A)
        let selection =
            select_cable_size(standard(), 400.0, 5.0, 50.0, 415.0, None).unwrap();
        assert_eq!(selection.status, SelectionStatus::NoCatalogMatch);
        assert!(selection.candidate.is_none());
    }

    #[test]
    fn test_sc_fails_but_ampacity_fallback_reported() {
        // Catalogue capped at 150 mm²: ampacity and Vd pass but the
        // adiabatic check cannot, so sc_ok = false on the fallback.
        let catalogue = Catalogue::new(vec![
            CatalogueEntry::new(120.0, 245.0, 0.39),
            CatalogueEntry::new(150.0, 280.0, 0.32),
        ]);
        let sc = ShortCircuitSpec {
            isc_ka: 25.0,
            duration_s: 1.0,
            k_const: 143.0,
        };
        let selection =
            select_cable_size(&catalogue, 200.0, 5.0, 20.0, 415.0, Some(sc)).unwrap();
        assert_eq!(selection.status, SelectionStatus::NoSizeFullyOk);
        let candidate = selection.candidate.unwrap();
        assert_eq!(candidate.size_mm2, 120.0);
        assert!(candidate.vd_ok);
        assert!(!candidate.sc_ok);
    }

    #[test]
    fn test_invalid_voltage_propagates() {
        let result = select_cable_size(standard(), 100.0, 5.0, 50.0, 0.0, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&SelectionStatus::NoSizeFullyOk).unwrap();
        assert_eq!(json, "\"NO_SIZE_FULLY_OK\"");
        assert_eq!(SelectionStatus::NoCatalogMatch.to_string(), "NO_CATALOG_MATCH");
    }
}
