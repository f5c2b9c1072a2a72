//! The twelve palaces and the Life/Body palace locator.
//!
//! The Life palace starts at Yin, advances one branch per lunar month and
//! retreats one per hour branch; the Body palace advances for both. Palace
//! labels then run backward through the branches from the Life palace.

use serde::{Deserialize, Serialize};

use crate::bazi::first_month_stem;
use crate::error::BaseError;
use crate::ganzhi::{ALL_BRANCHES, Branch, GanZhi, Stem};

/// The 12 life-domain palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palace {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Happiness,
    Parents,
}

/// Canonical palace order, starting at Life.
pub const PALACE_SEQUENCE: [Palace; 12] = [
    Palace::Life,
    Palace::Siblings,
    Palace::Spouse,
    Palace::Children,
    Palace::Wealth,
    Palace::Health,
    Palace::Travel,
    Palace::Friends,
    Palace::Career,
    Palace::Property,
    Palace::Happiness,
    Palace::Parents,
];

impl Palace {
    /// 0-based position in [`PALACE_SEQUENCE`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::Happiness => "Happiness",
            Self::Parents => "Parents",
        }
    }

    /// Chinese name.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Happiness => "福德",
            Self::Parents => "父母",
        }
    }
}

fn month_steps(lunar_month: u8) -> Result<i32, BaseError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(BaseError::InvalidLunar(format!(
            "lunar month {lunar_month} outside 1..=12"
        )));
    }
    Ok(lunar_month as i32 - 1)
}

/// Branch of the Life palace.
pub fn life_palace_branch(lunar_month: u8, hour: Branch) -> Result<Branch, BaseError> {
    Ok(Branch::Yin.offset(month_steps(lunar_month)? - hour.index() as i32))
}

/// Branch of the Body palace.
pub fn body_palace_branch(lunar_month: u8, hour: Branch) -> Result<Branch, BaseError> {
    Ok(Branch::Yin.offset(month_steps(lunar_month)? + hour.index() as i32))
}

/// Palace label occupying `branch` when the Life palace sits at `life`.
pub fn palace_at(life: Branch, branch: Branch) -> Palace {
    let diff = (life.index() as i32 - branch.index() as i32).rem_euclid(12);
    PALACE_SEQUENCE[diff as usize]
}

/// Branch holding `palace` when the Life palace sits at `life`.
pub fn branch_of(life: Branch, palace: Palace) -> Branch {
    life.offset(-(palace.index() as i32))
}

/// Stem of the palace at `branch`, by the Five Tigers rule.
///
/// Yin takes the first-month stem and each following branch advances one
/// stem, so Zi and Chou repeat the stems of Yin and Mao.
pub fn palace_stem(year_stem: Stem, branch: Branch) -> Stem {
    let steps_from_yin = (branch.index() as i32 - Branch::Yin.index() as i32).rem_euclid(12);
    first_month_stem(year_stem).offset(steps_from_yin)
}

/// Stem-branch label of the palace at `branch`.
pub fn palace_ganzhi(year_stem: Stem, branch: Branch) -> GanZhi {
    GanZhi {
        stem: palace_stem(year_stem, branch),
        branch,
    }
}

/// All 12 (branch, palace) assignments in branch order.
pub fn palace_layout(life: Branch) -> [(Branch, Palace); 12] {
    ALL_BRANCHES.map(|b| (b, palace_at(life, b)))
}
