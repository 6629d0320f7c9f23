//! # Conductor and Insulation Materials
//!
//! Material definitions for cable construction and the adiabatic k-constant
//! lookup used by the short-circuit withstand check.
//!
//! ## k-Constant
//!
//! The adiabatic constant k relates fault current, fault duration, and the
//! minimum conductor cross-section that survives the fault:
//!
//! ```text
//! A_required = Isc(A) × √t / k
//! ```
//!
//! Values are typical IEC 60949 approximations:
//!
//! | Conductor | Insulation | k   |
//! |-----------|------------|-----|
//! | Cu        | XLPE       | 143 |
//! | Cu        | PVC        | 115 |
//! | Al        | XLPE       | 94  |
//! | Al        | PVC        | 76  |
//!
//! Unrecognized combinations fall back to the conservative 115 without
//! raising an error.

use serde::{Deserialize, Serialize};

/// Conservative fallback k-constant for unrecognized material/insulation text.
pub const DEFAULT_K_CONSTANT: f64 = 115.0;

/// Conductor material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConductorMaterial {
    /// Copper
    #[default]
    Cu,
    /// Aluminium
    Al,
}

impl ConductorMaterial {
    /// All conductor materials for UI selection
    pub const ALL: [ConductorMaterial; 2] = [ConductorMaterial::Cu, ConductorMaterial::Al];

    /// Parse from free text ("CU", "cu", "Al", ...). Returns None when the
    /// text matches no known material.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_uppercase().as_str() {
            "CU" | "COPPER" => Some(ConductorMaterial::Cu),
            "AL" | "ALUMINIUM" | "ALUMINUM" => Some(ConductorMaterial::Al),
            _ => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorMaterial::Cu => "CU",
            ConductorMaterial::Al => "AL",
        }
    }
}

impl std::fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Cable insulation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InsulationType {
    /// Cross-linked polyethylene (90 °C conductor temperature)
    #[default]
    Xlpe,
    /// Polyvinyl chloride (70 °C conductor temperature)
    Pvc,
}

impl InsulationType {
    /// All insulation types for UI selection
    pub const ALL: [InsulationType; 2] = [InsulationType::Xlpe, InsulationType::Pvc];

    /// Parse from free text. Returns None when the text matches no known type.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_uppercase().as_str() {
            "XLPE" => Some(InsulationType::Xlpe),
            "PVC" => Some(InsulationType::Pvc),
            _ => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            InsulationType::Xlpe => "XLPE",
            InsulationType::Pvc => "PVC",
        }
    }
}

impl std::fmt::Display for InsulationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sizing standard the caller is working to.
///
/// The simplified derating tables in this release are shared by both
/// standards; the mode is echoed through results so downstream reports can
/// cite the intended standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum StandardMode {
    /// IEC 60364 / 60287 style tables
    #[default]
    Iec,
    /// IS 3961 style tables
    Is,
}

impl StandardMode {
    /// All standard modes for UI selection
    pub const ALL: [StandardMode; 2] = [StandardMode::Iec, StandardMode::Is];

    /// Parse from free text. Returns None when the text matches no known mode.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_uppercase().as_str() {
            "IEC" => Some(StandardMode::Iec),
            "IS" => Some(StandardMode::Is),
            _ => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            StandardMode::Iec => "IEC",
            StandardMode::Is => "IS",
        }
    }
}

impl std::fmt::Display for StandardMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// k-constant for a typed conductor/insulation pair.
pub fn k_constant(material: ConductorMaterial, insulation: InsulationType) -> f64 {
    match (material, insulation) {
        (ConductorMaterial::Cu, InsulationType::Xlpe) => 143.0,
        (ConductorMaterial::Cu, InsulationType::Pvc) => 115.0,
        (ConductorMaterial::Al, InsulationType::Xlpe) => 94.0,
        (ConductorMaterial::Al, InsulationType::Pvc) => 76.0,
    }
}

/// k-constant lookup from free text, as received over the wire.
///
/// Unrecognized text on either side silently falls back to the conservative
/// [`DEFAULT_K_CONSTANT`]. The engine treats bad material text as a data
/// condition, not an input error.
pub fn adiabatic_k_constant(conductor_material: &str, insulation_type: &str) -> f64 {
    match (
        ConductorMaterial::parse(conductor_material),
        InsulationType::parse(insulation_type),
    ) {
        (Some(material), Some(insulation)) => k_constant(material, insulation),
        _ => DEFAULT_K_CONSTANT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_constant_table() {
        assert_eq!(k_constant(ConductorMaterial::Cu, InsulationType::Xlpe), 143.0);
        assert_eq!(k_constant(ConductorMaterial::Cu, InsulationType::Pvc), 115.0);
        assert_eq!(k_constant(ConductorMaterial::Al, InsulationType::Xlpe), 94.0);
        assert_eq!(k_constant(ConductorMaterial::Al, InsulationType::Pvc), 76.0);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ConductorMaterial::parse("cu"), Some(ConductorMaterial::Cu));
        assert_eq!(ConductorMaterial::parse(" AL "), Some(ConductorMaterial::Al));
        assert_eq!(InsulationType::parse("xlpe"), Some(InsulationType::Xlpe));
        assert_eq!(StandardMode::parse("is"), Some(StandardMode::Is));
        assert_eq!(ConductorMaterial::parse("gold"), None);
    }

    #[test]
    fn test_adiabatic_lookup_from_text() {
        assert_eq!(adiabatic_k_constant("CU", "XLPE"), 143.0);
        assert_eq!(adiabatic_k_constant("al", "pvc"), 76.0);
    }

    #[test]
    fn test_unrecognized_combination_falls_back() {
        // Conservative default, no error raised
        assert_eq!(adiabatic_k_constant("AG", "XLPE"), DEFAULT_K_CONSTANT);
        assert_eq!(adiabatic_k_constant("CU", "EPR"), DEFAULT_K_CONSTANT);
        assert_eq!(adiabatic_k_constant("", ""), DEFAULT_K_CONSTANT);
    }

    #[test]
    fn test_serialization() {
        let material = ConductorMaterial::Al;
        let json = serde_json::to_string(&material).unwrap();
        let parsed: ConductorMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(material, parsed);

        let mode_json = serde_json::to_string(&StandardMode::Iec).unwrap();
        assert_eq!(mode_json, "\"IEC\"");
    }
}
