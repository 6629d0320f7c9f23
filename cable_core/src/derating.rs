//! # Derating Factor Resolver
//!
//! Table-driven derating logic producing the five independent coefficients
//! applied to the full-load current:
//!
//! | Factor | Description               | Applies to          |
//! |--------|---------------------------|---------------------|
//! | k1     | Ambient air temperature   | All installations   |
//! | k2     | Circuit grouping          | All installations   |
//! | k3     | Ground temperature        | Buried methods only |
//! | k4     | Depth of laying           | Buried methods only |
//! | k5     | Soil thermal resistivity  | Buried methods only |
//!
//! The tables are simplified IEC 60287 / IS 3961 approximations, expressed
//! as ordered `(threshold, coefficient)` breakpoint slices with a single
//! shared lookup. Brackets are closed at the upper boundary: ambient 30 °C
//! resolves to 1.00, 35 °C to 0.96.
//!
//! The resolver has no error paths; every branch carries a defined default,
//! and non-buried methods force k3 = k4 = k5 = 1.0 regardless of any
//! supplied soil parameters.

use serde::{Deserialize, Serialize};

// ============================================================================
// Breakpoint Tables
// ============================================================================

/// Ambient air temperature °C -> k1
const K1_AMBIENT: &[(f64, f64)] = &[
    (30.0, 1.00),
    (35.0, 0.96),
    (40.0, 0.94),
    (45.0, 0.90),
    (50.0, 0.87),
    (55.0, 0.83),
];
const K1_ABOVE_TABLE: f64 = 0.80;

/// Ground temperature °C -> k3 (buried methods)
const K3_GROUND_TEMP: &[(f64, f64)] = &[(20.0, 1.04), (25.0, 1.00), (30.0, 0.96), (35.0, 0.93)];
const K3_ABOVE_TABLE: f64 = 0.90;

/// Depth of laying mm -> k4 (buried methods, 900-1200 mm reference)
const K4_DEPTH: &[(f64, f64)] = &[(800.0, 1.02), (1000.0, 1.00)];
const K4_ABOVE_TABLE: f64 = 0.98;

/// Soil thermal resistivity K·m/W -> k5 (buried methods)
const K5_SOIL: &[(f64, f64)] = &[(1.0, 1.03), (1.2, 1.00), (1.5, 0.96)];
const K5_ABOVE_TABLE: f64 = 0.93;

/// First coefficient whose threshold is not exceeded, else the default.
///
/// Tables are ordered ascending; the bracket is closed at its upper edge
/// (`value <= threshold` matches).
fn breakpoint(table: &[(f64, f64)], value: f64, above_table: f64) -> f64 {
    table
        .iter()
        .find(|(threshold, _)| value <= *threshold)
        .map(|(_, k)| *k)
        .unwrap_or(above_table)
}

// ============================================================================
// Installation Context
// ============================================================================

/// How the cable is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallationMethod {
    /// Perforated cable tray in free air
    #[default]
    TrayAir,
    /// Ladder-type cable tray
    LadderTray,
    /// Conduit in free air
    ConduitAir,
    /// Open cable trench
    Trench,
    /// Directly buried in ground
    BuriedDirect,
    /// Buried duct bank
    Ductbank,
}

impl InstallationMethod {
    /// All installation methods for UI selection
    pub const ALL: [InstallationMethod; 6] = [
        InstallationMethod::TrayAir,
        InstallationMethod::LadderTray,
        InstallationMethod::ConduitAir,
        InstallationMethod::Trench,
        InstallationMethod::BuriedDirect,
        InstallationMethod::Ductbank,
    ];

    /// True for methods where the soil-related factors k3/k4/k5 apply
    pub fn is_buried(&self) -> bool {
        matches!(
            self,
            InstallationMethod::BuriedDirect | InstallationMethod::Ductbank | InstallationMethod::Trench
        )
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            InstallationMethod::TrayAir => "TRAY_AIR",
            InstallationMethod::LadderTray => "LADDER_TRAY",
            InstallationMethod::ConduitAir => "CONDUIT_AIR",
            InstallationMethod::Trench => "TRENCH",
            InstallationMethod::BuriedDirect => "BURIED_DIRECT",
            InstallationMethod::Ductbank => "DUCTBANK",
        }
    }
}

impl std::fmt::Display for InstallationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Soil parameters for buried installations.
///
/// Each field is optional; the resolver substitutes the documented default
/// when a value is absent. For non-buried methods the whole struct is
/// ignored, not merely defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SoilConditions {
    /// Ground temperature in °C (default 25.0)
    pub ground_temp_c: Option<f64>,
    /// Depth of laying in mm (default 900.0)
    pub depth_of_laying_mm: Option<f64>,
    /// Soil thermal resistivity in K·m/W (default 1.2)
    pub soil_resistivity: Option<f64>,
}

impl SoilConditions {
    /// Default ground temperature when unspecified (°C)
    pub const DEFAULT_GROUND_TEMP_C: f64 = 25.0;
    /// Default depth of laying when unspecified (mm)
    pub const DEFAULT_DEPTH_MM: f64 = 900.0;
    /// Default soil thermal resistivity when unspecified (K·m/W)
    pub const DEFAULT_RESISTIVITY: f64 = 1.2;
}

// ============================================================================
// Derating Factors
// ============================================================================

/// The five derating coefficients and their product.
///
/// Invariant: `overall` is always the product of the five coefficients, and
/// non-buried installations carry k3 = k4 = k5 = 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeratingFactors {
    /// Ambient air temperature factor
    pub k1_ambient: f64,
    /// Circuit grouping factor
    pub k2_group: f64,
    /// Ground temperature factor (1.0 unless buried)
    pub k3_ground_temp: f64,
    /// Depth of laying factor (1.0 unless buried)
    pub k4_depth: f64,
    /// Soil thermal resistivity factor (1.0 unless buried)
    pub k5_soil: f64,
    /// Product of the five coefficients
    pub overall: f64,
}

impl DeratingFactors {
    fn from_components(k1: f64, k2: f64, k3: f64, k4: f64, k5: f64) -> Self {
        Self {
            k1_ambient: k1,
            k2_group: k2,
            k3_ground_temp: k3,
            k4_depth: k4,
            k5_soil: k5,
            overall: k1 * k2 * k3 * k4 * k5,
        }
    }

    /// Unity factors (no derating)
    pub fn unity() -> Self {
        Self::from_components(1.0, 1.0, 1.0, 1.0, 1.0)
    }

    /// Build from up to five caller-supplied positional coefficients.
    ///
    /// Missing positions default to 1.0; extra entries beyond five are
    /// ignored. The product matches the resolver's `overall` exactly.
    pub fn from_manual(factors: &[f64]) -> Self {
        let at = |i: usize| factors.get(i).copied().unwrap_or(1.0);
        Self::from_components(at(0), at(1), at(2), at(3), at(4))
    }

    /// The coefficients as a slice-friendly array, in k1..k5 order
    pub fn as_list(&self) -> [f64; 5] {
        [
            self.k1_ambient,
            self.k2_group,
            self.k3_ground_temp,
            self.k4_depth,
            self.k5_soil,
        ]
    }
}

/// Resolve the five derating coefficients from installation context.
///
/// Pure function: always returns all five factors plus their product, never
/// a partial result and never an error.
pub fn resolve_derating_factors(
    installation_method: InstallationMethod,
    ambient_temp_c: f64,
    num_circuits: u32,
    soil: &SoilConditions,
) -> DeratingFactors {
    let k1 = breakpoint(K1_AMBIENT, ambient_temp_c, K1_ABOVE_TABLE);

    let k2 = match num_circuits.max(1) {
        1 => 1.00,
        2 => 0.80,
        3 => 0.75,
        4..=5 => 0.70,
        _ => 0.65,
    };

    let (k3, k4, k5) = if installation_method.is_buried() {
        let gt = soil
            .ground_temp_c
            .unwrap_or(SoilConditions::DEFAULT_GROUND_TEMP_C);
        let depth = soil
            .depth_of_laying_mm
            .unwrap_or(SoilConditions::DEFAULT_DEPTH_MM);
        let rho = soil
            .soil_resistivity
            .unwrap_or(SoilConditions::DEFAULT_RESISTIVITY);
        (
            breakpoint(K3_GROUND_TEMP, gt, K3_ABOVE_TABLE),
            breakpoint(K4_DEPTH, depth, K4_ABOVE_TABLE),
            breakpoint(K5_SOIL, rho, K5_ABOVE_TABLE),
        )
    } else {
        (1.0, 1.0, 1.0)
    };

    DeratingFactors::from_components(k1, k2, k3, k4, k5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn air(ambient: f64, circuits: u32) -> DeratingFactors {
        resolve_derating_factors(
            InstallationMethod::TrayAir,
            ambient,
            circuits,
            &SoilConditions::default(),
        )
    }

    #[test]
    fn test_k1_breakpoints_closed_at_upper_boundary() {
        assert_eq!(air(30.0, 1).k1_ambient, 1.00);
        assert_eq!(air(30.1, 1).k1_ambient, 0.96);
        assert_eq!(air(35.0, 1).k1_ambient, 0.96);
        assert_eq!(air(40.0, 1).k1_ambient, 0.94);
        assert_eq!(air(45.0, 1).k1_ambient, 0.90);
        assert_eq!(air(50.0, 1).k1_ambient, 0.87);
        assert_eq!(air(55.0, 1).k1_ambient, 0.83);
        assert_eq!(air(56.0, 1).k1_ambient, 0.80);
    }

    #[test]
    fn test_k2_grouping() {
        assert_eq!(air(40.0, 1).k2_group, 1.00);
        assert_eq!(air(40.0, 2).k2_group, 0.80);
        assert_eq!(air(40.0, 3).k2_group, 0.75);
        assert_eq!(air(40.0, 4).k2_group, 0.70);
        assert_eq!(air(40.0, 5).k2_group, 0.70);
        assert_eq!(air(40.0, 6).k2_group, 0.65);
        // Circuit count floors at 1
        assert_eq!(air(40.0, 0).k2_group, 1.00);
    }

    #[test]
    fn test_non_buried_ignores_soil_values() {
        let hostile_soil = SoilConditions {
            ground_temp_c: Some(60.0),
            depth_of_laying_mm: Some(2000.0),
            soil_resistivity: Some(3.0),
        };
        for method in [
            InstallationMethod::TrayAir,
            InstallationMethod::LadderTray,
            InstallationMethod::ConduitAir,
        ] {
            let factors = resolve_derating_factors(method, 40.0, 1, &hostile_soil);
            assert_eq!(factors.k3_ground_temp, 1.0);
            assert_eq!(factors.k4_depth, 1.0);
            assert_eq!(factors.k5_soil, 1.0);
        }
    }

    #[test]
    fn test_buried_defaults() {
        let factors = resolve_derating_factors(
            InstallationMethod::BuriedDirect,
            40.0,
            1,
            &SoilConditions::default(),
        );
        // Defaults: ground 25 °C, depth 900 mm, resistivity 1.2
        assert_eq!(factors.k3_ground_temp, 1.00);
        assert_eq!(factors.k4_depth, 1.00);
        assert_eq!(factors.k5_soil, 1.00);
    }

    #[test]
    fn test_buried_hostile_conditions() {
        let factors = resolve_derating_factors(
            InstallationMethod::BuriedDirect,
            40.0,
            1,
            &SoilConditions {
                ground_temp_c: Some(30.0),
                depth_of_laying_mm: Some(1200.0),
                soil_resistivity: Some(1.5),
            },
        );
        assert_eq!(factors.k3_ground_temp, 0.96);
        assert_eq!(factors.k4_depth, 0.98);
        assert_eq!(factors.k5_soil, 0.96);
        let expected = 0.94 * 1.0 * 0.96 * 0.98 * 0.96;
        assert!((factors.overall - expected).abs() < 1e-9);
    }

    #[test]
    fn test_trench_counts_as_buried() {
        let factors = resolve_derating_factors(
            InstallationMethod::Trench,
            40.0,
            1,
            &SoilConditions {
                ground_temp_c: Some(18.0),
                ..SoilConditions::default()
            },
        );
        assert_eq!(factors.k3_ground_temp, 1.04);
    }

    #[test]
    fn test_overall_is_product() {
        let factors = resolve_derating_factors(
            InstallationMethod::Ductbank,
            48.0,
            3,
            &SoilConditions {
                soil_resistivity: Some(2.0),
                ..SoilConditions::default()
            },
        );
        let product: f64 = factors.as_list().iter().product();
        assert!((factors.overall - product).abs() < 1e-12);
    }

    #[test]
    fn test_from_manual_pads_with_unity() {
        let factors = DeratingFactors::from_manual(&[0.9, 0.8]);
        assert_eq!(factors.k1_ambient, 0.9);
        assert_eq!(factors.k2_group, 0.8);
        assert_eq!(factors.k3_ground_temp, 1.0);
        assert_eq!(factors.k4_depth, 1.0);
        assert_eq!(factors.k5_soil, 1.0);
        assert!((factors.overall - 0.72).abs() < 1e-12);

        let empty = DeratingFactors::from_manual(&[]);
        assert_eq!(empty, DeratingFactors::unity());
    }

    #[test]
    fn test_serialization() {
        let factors = air(42.0, 2);
        let json = serde_json::to_string(&factors).unwrap();
        assert!(json.contains("k1_ambient"));
        let roundtrip: DeratingFactors = serde_json::from_str(&json).unwrap();
        assert_eq!(factors, roundtrip);
    }

    #[test]
    fn test_installation_method_wire_names() {
        let json = serde_json::to_string(&InstallationMethod::BuriedDirect).unwrap();
        assert_eq!(json, "\"BURIED_DIRECT\"");
        let parsed: InstallationMethod = serde_json::from_str("\"TRAY_AIR\"").unwrap();
        assert_eq!(parsed, InstallationMethod::TrayAir);
    }
}
