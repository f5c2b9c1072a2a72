//! Heavenly Stems, Earthly Branches, and the 60-pair sexagenary cycle.
//!
//! Stems cycle mod 10 and Branches mod 12. A (Stem, Branch) pair belongs to
//! the cycle only when both indices share parity, giving 60 valid pairs.
//! Cycle index 0 is JiaZi; CE 1984 is a JiaZi year.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;

/// The 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_GLYPHS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`, taken mod 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Stem `steps` positions away, wrapping in either direction.
    pub fn offset(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(10) as u8)
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> char {
        STEM_GLYPHS[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }
}

/// The 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_GLYPHS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// The four three-branch harmony groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trine {
    /// Shen, Zi, Chen.
    Water,
    /// Si, You, Chou.
    Metal,
    /// Yin, Wu, Xu.
    Fire,
    /// Hai, Mao, Wei.
    Wood,
}

/// The four seasonal groups of three consecutive branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Yin, Mao, Chen.
    Spring,
    /// Si, Wu, Wei.
    Summer,
    /// Shen, You, Xu.
    Autumn,
    /// Hai, Zi, Chou.
    Winter,
}

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index`, taken mod 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Branch `steps` positions away, wrapping in either direction.
    pub fn offset(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(12) as u8)
    }

    /// Branch directly across the wheel.
    pub fn opposite(self) -> Self {
        self.offset(6)
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> char {
        BRANCH_GLYPHS[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Harmony trine containing this branch.
    pub const fn trine(self) -> Trine {
        match self.index() % 4 {
            0 => Trine::Water,
            1 => Trine::Metal,
            2 => Trine::Fire,
            _ => Trine::Wood,
        }
    }

    /// Seasonal group containing this branch.
    pub const fn season(self) -> Season {
        match ((self.index() + 10) % 12) / 3 {
            0 => Season::Spring,
            1 => Season::Summer,
            2 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

/// A valid (Stem, Branch) pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanZhi {
    /// Pair at position `index` of the 60-cycle (taken mod 60, 0 = JiaZi).
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// Pair from its parts; fails when stem and branch differ in parity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaseError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(BaseError::TableLookup(format!(
                "{}{} is not a sexagenary pair",
                stem.name(),
                branch.name()
            )));
        }
        Ok(Self { stem, branch })
    }

    /// Position in the 60-cycle (0 = JiaZi .. 59 = GuiHai).
    pub const fn cycle_index(self) -> u8 {
        // Solves i ≡ stem (mod 10), i ≡ branch (mod 12).
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Pair `steps` positions away in the 60-cycle.
    pub fn offset(self, steps: i32) -> Self {
        Self::from_cycle_index((self.cycle_index() as i32 + steps).rem_euclid(60) as u8)
    }

    /// Pinyin name, e.g. `JiaZi`.
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl FromStr for GanZhi {
    type Err = BaseError;

    /// Parse the two-glyph form, e.g. `甲子`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BaseError::TableLookup(format!("not a stem-branch pair: {s:?}")));
        };
        let stem = ALL_STEMS
            .into_iter()
            .find(|st| st.glyph() == sc)
            .ok_or_else(|| BaseError::TableLookup(format!("unknown stem glyph {sc:?}")))?;
        let branch = ALL_BRANCHES
            .into_iter()
            .find(|br| br.glyph() == bc)
            .ok_or_else(|| BaseError::TableLookup(format!("unknown branch glyph {bc:?}")))?;
        Self::new(stem, branch)
    }
}

impl From<GanZhi> for String {
    fn from(gz: GanZhi) -> Self {
        gz.to_string()
    }
}

impl TryFrom<String> for GanZhi {
    type Error = BaseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Reference epoch: CE 1984 = JiaZi (cycle index 0).
pub const GANZHI_EPOCH_YEAR: i32 = 1984;

/// Sexagenary pair of a year counted from the JiaZi epoch.
pub fn ganzhi_from_year(year: i32) -> GanZhi {
    GanZhi::from_cycle_index((year - GANZHI_EPOCH_YEAR).rem_euclid(60) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(ALL_STEMS.len(), 10);
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn branch_offsets_wrap() {
        assert_eq!(Branch::Zi.offset(-1), Branch::Hai);
        assert_eq!(Branch::Hai.offset(1), Branch::Zi);
        assert_eq!(Branch::Yin.offset(-14), Branch::Zi);
        assert_eq!(Branch::Yin.opposite(), Branch::Shen);
        assert_eq!(Stem::Jia.offset(-1), Stem::Gui);
    }

    #[test]
    fn cycle_index_roundtrip() {
        for i in 0..60u8 {
            let gz = GanZhi::from_cycle_index(i);
            assert_eq!(gz.cycle_index(), i);
            assert_eq!(gz.stem.index() % 2, gz.branch.index() % 2);
        }
    }

    #[test]
    fn known_pairs() {
        assert_eq!(GanZhi::from_cycle_index(0).to_string(), "甲子");
        assert_eq!(GanZhi::from_cycle_index(10).to_string(), "甲戌");
        assert_eq!(GanZhi::from_cycle_index(54).to_string(), "戊午");
        assert_eq!(GanZhi::from_cycle_index(59).to_string(), "癸亥");
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert!(matches!(
            GanZhi::new(Stem::Jia, Branch::Chou),
            Err(BaseError::TableLookup(_))
        ));
        assert!(GanZhi::new(Stem::Yi, Branch::Chou).is_ok());
    }

    #[test]
    fn parse_glyphs() {
        let gz: GanZhi = "庚午".parse().unwrap();
        assert_eq!(gz.stem, Stem::Geng);
        assert_eq!(gz.branch, Branch::Wu);
        assert!("甲丑".parse::<GanZhi>().is_err());
        assert!("甲".parse::<GanZhi>().is_err());
        assert!("甲子丑".parse::<GanZhi>().is_err());
    }

    #[test]
    fn trines_and_seasons() {
        assert_eq!(Branch::Shen.trine(), Trine::Water);
        assert_eq!(Branch::Chen.trine(), Trine::Water);
        assert_eq!(Branch::Chou.trine(), Trine::Metal);
        assert_eq!(Branch::Xu.trine(), Trine::Fire);
        assert_eq!(Branch::Wei.trine(), Trine::Wood);
        assert_eq!(Branch::Yin.season(), Season::Spring);
        assert_eq!(Branch::Wei.season(), Season::Summer);
        assert_eq!(Branch::Xu.season(), Season::Autumn);
        assert_eq!(Branch::Chou.season(), Season::Winter);
    }

    #[test]
    fn epoch_year_is_jiazi() {
        assert_eq!(ganzhi_from_year(1984), GanZhi::from_cycle_index(0));
    }

    #[test]
    fn year_1989_is_jisi() {
        assert_eq!(ganzhi_from_year(1989).to_string(), "己巳");
    }

    #[test]
    fn year_before_epoch() {
        // 1983: rem_euclid(60) = 59 → GuiHai
        assert_eq!(ganzhi_from_year(1983).to_string(), "癸亥");
    }
}
