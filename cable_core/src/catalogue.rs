//! # Cable Catalogue
//!
//! The ordered table of cable sizes the selector scans. Each entry carries
//! the admissible continuous current (CCA) and the line-to-line voltage-drop
//! constant in mV per A per m.
//!
//! The catalogue is an explicit immutable collection constructed once and
//! injected into the selector, so alternate tables (IEC vs IS, future
//! revisions) can be swapped in without touching selection logic. The
//! bundled table is a simple demo catalogue, not a certified standards
//! database.
//!
//! ## Example
//!
//! ```rust
//! use cable_core::catalogue::Catalogue;
//!
//! let catalogue = Catalogue::standard();
//! let entry = catalogue.entries().first().unwrap();
//! assert_eq!(entry.size_mm2, 2.5);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One cable size in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    /// Conductor cross-section in mm²
    pub size_mm2: f64,
    /// Admissible continuous current (CCA) in A
    pub cca_a: f64,
    /// Line-to-line voltage-drop constant in mV per A per m
    pub mv_per_amp_per_m: f64,
}

impl CatalogueEntry {
    /// Create a catalogue entry
    pub const fn new(size_mm2: f64, cca_a: f64, mv_per_amp_per_m: f64) -> Self {
        Self {
            size_mm2,
            cca_a,
            mv_per_amp_per_m,
        }
    }
}

/// Demo catalogue table: (size mm², CCA A, mV/A/m).
const STANDARD_TABLE: [CatalogueEntry; 14] = [
    CatalogueEntry::new(2.5, 21.0, 18.0),
    CatalogueEntry::new(4.0, 28.0, 11.0),
    CatalogueEntry::new(6.0, 36.0, 7.3),
    CatalogueEntry::new(10.0, 50.0, 4.4),
    CatalogueEntry::new(16.0, 68.0, 2.8),
    CatalogueEntry::new(25.0, 89.0, 1.75),
    CatalogueEntry::new(35.0, 110.0, 1.25),
    CatalogueEntry::new(50.0, 140.0, 0.95),
    CatalogueEntry::new(70.0, 175.0, 0.65),
    CatalogueEntry::new(95.0, 215.0, 0.50),
    CatalogueEntry::new(120.0, 245.0, 0.39),
    CatalogueEntry::new(150.0, 280.0, 0.32),
    CatalogueEntry::new(185.0, 315.0, 0.27),
    CatalogueEntry::new(240.0, 365.0, 0.22),
];

static STANDARD_CATALOGUE: Lazy<Catalogue> =
    Lazy::new(|| Catalogue::new(STANDARD_TABLE.to_vec()));

/// Immutable, ascending-ordered cable catalogue.
///
/// Sizes are unique and totally ordered; construction sorts the supplied
/// entries and drops duplicate sizes, so the selector can rely on a strictly
/// ascending scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
}

impl Catalogue {
    /// Build a catalogue from arbitrary entries.
    ///
    /// Entries are sorted ascending by size; a later duplicate size is
    /// dropped in favour of the first occurrence.
    pub fn new(mut entries: Vec<CatalogueEntry>) -> Self {
        entries.sort_by(|a, b| a.size_mm2.total_cmp(&b.size_mm2));
        entries.dedup_by(|b, a| a.size_mm2 == b.size_mm2);
        Self { entries }
    }

    /// The process-wide demo catalogue, built once.
    pub fn standard() -> &'static Catalogue {
        &STANDARD_CATALOGUE
    }

    /// Entries in strictly ascending size order
    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// Number of sizes in the catalogue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalogue holds no sizes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by exact size
    pub fn get(&self, size_mm2: f64) -> Option<&CatalogueEntry> {
        self.entries.iter().find(|e| e.size_mm2 == size_mm2)
    }

    /// Largest admissible current in the catalogue, if any
    pub fn max_cca_a(&self) -> Option<f64> {
        self.entries.last().map(|e| e.cca_a)
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Catalogue::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalogue_ascending() {
        let catalogue = Catalogue::standard();
        assert_eq!(catalogue.len(), 14);
        for pair in catalogue.entries().windows(2) {
            assert!(pair[0].size_mm2 < pair[1].size_mm2);
            // CCA also grows with size in the demo table
            assert!(pair[0].cca_a < pair[1].cca_a);
        }
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let catalogue = Catalogue::new(vec![
            CatalogueEntry::new(16.0, 68.0, 2.8),
            CatalogueEntry::new(4.0, 28.0, 11.0),
            CatalogueEntry::new(16.0, 999.0, 9.9), // duplicate size, dropped
        ]);
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.entries()[0].size_mm2, 4.0);
        assert_eq!(catalogue.get(16.0).unwrap().cca_a, 68.0);
    }

    #[test]
    fn test_lookup() {
        let catalogue = Catalogue::standard();
        assert_eq!(catalogue.get(95.0).unwrap().cca_a, 215.0);
        assert!(catalogue.get(3.0).is_none());
        assert_eq!(catalogue.max_cca_a(), Some(365.0));
    }

    #[test]
    fn test_serialization() {
        let catalogue = Catalogue::standard().clone();
        let json = serde_json::to_string(&catalogue).unwrap();
        let roundtrip: Catalogue = serde_json::from_str(&json).unwrap();
        assert_eq!(catalogue, roundtrip);
    }
}
