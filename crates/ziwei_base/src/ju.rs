//! Five-element phase (Ju) of the Life palace.
//!
//! The phase is read from a 5×3 matrix indexed by the Life palace stem
//! pair (Jia/Yi, Bing/Ding, ...) and its branch pair group (Zi/Chou and
//! Wu/Wei, Yin/Mao and Shen/You, Chen/Si and Xu/Hai). Its number seeds the
//! Zi Wei placement.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::ganzhi::{Branch, GanZhi, Stem};

/// Five-element phase with its divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Ju {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

/// All phases in divisor order.
pub const ALL_JU: [Ju; 5] = [Ju::Water2, Ju::Wood3, Ju::Metal4, Ju::Earth5, Ju::Fire6];

/// Phase numbers, rows by stem pair, columns by branch group.
const JU_MATRIX: [[u8; 3]; 5] = [
    [4, 2, 6],
    [2, 6, 5],
    [6, 5, 3],
    [5, 3, 4],
    [3, 4, 2],
];

impl Ju {
    /// Divisor used for Zi Wei placement (2..=6).
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Phase with the given divisor.
    pub fn from_value(value: u8) -> Result<Self, BaseError> {
        match value {
            2..=6 => Ok(ALL_JU[(value - 2) as usize]),
            _ => Err(BaseError::TableLookup(format!("no phase with number {value}"))),
        }
    }

    /// Element name.
    pub const fn element(self) -> &'static str {
        match self {
            Self::Water2 => "Water",
            Self::Wood3 => "Wood",
            Self::Metal4 => "Metal",
            Self::Earth5 => "Earth",
            Self::Fire6 => "Fire",
        }
    }

    /// Traditional label, e.g. `水二局`.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }
}

impl std::fmt::Display for Ju {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.element(), self.value())
    }
}

/// Phase of a Life palace given as a sexagenary pair.
pub fn ju_for(life: GanZhi) -> Ju {
    let row = (life.stem.index() / 2) as usize;
    let col = ((life.branch.index() / 2) % 3) as usize;
    // Matrix entries are all in 2..=6.
    ALL_JU[(JU_MATRIX[row][col] - 2) as usize]
}

/// Phase from raw stem and branch indices.
///
/// Fails with [`BaseError::TableLookup`] when an index is out of range or
/// the pair is not part of the sexagenary cycle.
pub fn ju_from_indices(stem: u8, branch: u8) -> Result<Ju, BaseError> {
    if stem >= 10 || branch >= 12 {
        return Err(BaseError::TableLookup(format!(
            "phase lookup outside table: stem {stem}, branch {branch}"
        )));
    }
    let life = GanZhi::new(Stem::from_index(stem), Branch::from_index(branch))?;
    Ok(ju_for(life))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ju(s: &str) -> Ju {
        ju_for(s.parse().unwrap())
    }

    #[test]
    fn values() {
        assert_eq!(Ju::Water2.value(), 2);
        assert_eq!(Ju::Fire6.value(), 6);
        assert_eq!(Ju::from_value(5), Ok(Ju::Earth5));
        assert!(Ju::from_value(7).is_err());
        assert!(Ju::from_value(0).is_err());
    }

    #[test]
    fn known_entries() {
        assert_eq!(ju("甲子"), Ju::Metal4);
        assert_eq!(ju("丙寅"), Ju::Fire6);
        assert_eq!(ju("丁丑"), Ju::Water2);
        assert_eq!(ju("戊辰"), Ju::Wood3);
        assert_eq!(ju("庚午"), Ju::Earth5);
        assert_eq!(ju("壬戌"), Ju::Water2);
        assert_eq!(ju("癸卯"), Ju::Metal4);
    }

    #[test]
    fn raw_indices_checked() {
        assert_eq!(ju_from_indices(3, 1), Ok(Ju::Water2));
        assert!(matches!(ju_from_indices(10, 0), Err(BaseError::TableLookup(_))));
        assert!(matches!(ju_from_indices(0, 12), Err(BaseError::TableLookup(_))));
        assert!(matches!(ju_from_indices(0, 1), Err(BaseError::TableLookup(_))));
    }

    #[test]
    fn every_pair_has_a_phase() {
        for i in 0..60 {
            let gz = GanZhi::from_cycle_index(i);
            assert_eq!(
                ju_from_indices(gz.stem.index(), gz.branch.index()),
                Ok(ju_for(gz))
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(Ju::Water2.to_string(), "Water 2");
        assert_eq!(Ju::Metal4.glyph(), "金四局");
    }
}
