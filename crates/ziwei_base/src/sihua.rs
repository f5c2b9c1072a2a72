//! Four Transformations (Sihua).
//!
//! Each year stem selects four stars that receive the Lu, Quan, Ke and Ji
//! transformations. The tags annotate placed stars in a chart; the catalog
//! itself never carries them.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::ganzhi::{ALL_STEMS, Stem};
use crate::star::StarId;

/// One of the four transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transformation {
    /// Prosperity.
    Lu,
    /// Authority.
    Quan,
    /// Fame.
    Ke,
    /// Obstruction.
    Ji,
}

/// All transformations in table column order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// 0-based column index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "Lu",
            Self::Quan => "Quan",
            Self::Ke => "Ke",
            Self::Ji => "Ji",
        }
    }

    /// Chinese tag, e.g. `化禄`.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Lu => "化禄",
            Self::Quan => "化权",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }
}

/// (Lu, Quan, Ke, Ji) targets by year stem.
const SIHUA_TABLE: [[StarId; 4]; 10] = [
    [StarId::LianZhen, StarId::PoJun, StarId::WuQu, StarId::TaiYang],
    [StarId::TianJi, StarId::TianLiang, StarId::ZiWei, StarId::TaiYin],
    [StarId::TianTong, StarId::TianJi, StarId::WenChang, StarId::LianZhen],
    [StarId::TaiYin, StarId::TianTong, StarId::TianJi, StarId::JuMen],
    [StarId::TanLang, StarId::TaiYin, StarId::YouBi, StarId::TianJi],
    [StarId::WuQu, StarId::TanLang, StarId::TianLiang, StarId::WenQu],
    [StarId::TaiYang, StarId::WuQu, StarId::TaiYin, StarId::TianTong],
    [StarId::JuMen, StarId::TaiYang, StarId::WenQu, StarId::WenChang],
    [StarId::TianLiang, StarId::ZiWei, StarId::ZuoFu, StarId::WuQu],
    [StarId::PoJun, StarId::JuMen, StarId::TaiYin, StarId::TanLang],
];

/// The four target stars of a year stem, in Lu, Quan, Ke, Ji order.
pub fn sihua_targets(year_stem: Stem) -> [(Transformation, StarId); 4] {
    let row = SIHUA_TABLE[year_stem.index() as usize];
    [
        (Transformation::Lu, row[0]),
        (Transformation::Quan, row[1]),
        (Transformation::Ke, row[2]),
        (Transformation::Ji, row[3]),
    ]
}

/// Transformation carried by `star` in a year of `year_stem`, if any.
pub fn transformation_for(year_stem: Stem, star: StarId) -> Option<Transformation> {
    sihua_targets(year_stem)
        .into_iter()
        .find(|&(_, target)| target == star)
        .map(|(t, _)| t)
}

/// Check that every stem maps to four distinct stars.
pub fn validate_sihua_table() -> Result<(), BaseError> {
    for stem in ALL_STEMS {
        let row = SIHUA_TABLE[stem.index() as usize];
        for i in 0..row.len() {
            for j in (i + 1)..row.len() {
                if row[i] == row[j] {
                    return Err(BaseError::TableLookup(format!(
                        "{} transforms {} twice",
                        stem.name(),
                        row[i].name()
                    )));
                }
            }
        }
    }
    Ok(())
}
