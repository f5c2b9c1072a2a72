//! Star placement.
//!
//! Every star lands on a branch chosen by a fixed counting rule from the
//! lunar day, lunar month, hour branch, year stem, year branch or Ju:
//!
//! - Zi Wei: with `q = ⌈day / ju⌉` and `r = ju·q − day`, count `q` steps
//!   from Yin (Yin is step one), then move `r` branches forward when `r` is
//!   even or backward when it is odd. The Zi Wei group trails it backward.
//! - Tian Fu: the mirror of Zi Wei about the Yin–Shen axis. The Tian Fu
//!   group runs forward from it.
//! - Assistant and minor stars: start branches from stem, trine and season
//!   tables, then count by month, hour, year branch or day.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::ganzhi::{Branch, Season, Stem, Trine};
use crate::ju::Ju;
use crate::star::{STAR_COUNT, StarId};

/// Inputs that fully determine every star position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementInput {
    /// Lunar day of month, 1..=30.
    pub lunar_day: u8,
    /// Lunar month after leap folding, 1..=12.
    pub lunar_month: u8,
    /// Birth hour branch.
    pub hour: Branch,
    /// Year stem used for the stem tables.
    pub year_stem: Stem,
    /// Year branch used for the branch tables.
    pub year_branch: Branch,
    /// Life palace phase.
    pub ju: Ju,
}

impl PlacementInput {
    /// Check the lunar day and month ranges.
    pub fn validate(&self) -> Result<(), BaseError> {
        if !(1..=30).contains(&self.lunar_day) {
            return Err(BaseError::InvalidLunar(format!(
                "lunar day {} outside 1..=30",
                self.lunar_day
            )));
        }
        if !(1..=12).contains(&self.lunar_month) {
            return Err(BaseError::InvalidLunar(format!(
                "lunar month {} outside 1..=12",
                self.lunar_month
            )));
        }
        Ok(())
    }

    fn month_steps(&self) -> i32 {
        self.lunar_month as i32 - 1
    }

    fn hour_steps(&self) -> i32 {
        self.hour.index() as i32
    }

    fn year_steps(&self) -> i32 {
        self.year_branch.index() as i32
    }
}

/// Offsets of the Zi Wei group, walking backward from Zi Wei.
const ZIWEI_GROUP: [(StarId, i32); 6] = [
    (StarId::ZiWei, 0),
    (StarId::TianJi, -1),
    (StarId::TaiYang, -3),
    (StarId::WuQu, -4),
    (StarId::TianTong, -5),
    (StarId::LianZhen, -8),
];

/// Offsets of the Tian Fu group, walking forward from Tian Fu.
const TIANFU_GROUP: [(StarId, i32); 8] = [
    (StarId::TianFu, 0),
    (StarId::TaiYin, 1),
    (StarId::TanLang, 2),
    (StarId::JuMen, 3),
    (StarId::TianXiang, 4),
    (StarId::TianLiang, 5),
    (StarId::QiSha, 6),
    (StarId::PoJun, 10),
];

/// Tian Kui and Tian Yue by year stem.
const KUI_YUE: [(Branch, Branch); 10] = [
    (Branch::Chou, Branch::Wei),
    (Branch::Zi, Branch::Shen),
    (Branch::Hai, Branch::You),
    (Branch::Hai, Branch::You),
    (Branch::Chou, Branch::Wei),
    (Branch::Zi, Branch::Shen),
    (Branch::Chou, Branch::Wei),
    (Branch::Wu, Branch::Yin),
    (Branch::Mao, Branch::Si),
    (Branch::Mao, Branch::Si),
];

/// Lu Cun by year stem.
const LU_CUN: [Branch; 10] = [
    Branch::Yin,
    Branch::Mao,
    Branch::Si,
    Branch::Wu,
    Branch::Si,
    Branch::Wu,
    Branch::Shen,
    Branch::You,
    Branch::Hai,
    Branch::Zi,
];

/// Starting branches of Huo Xing and Ling Xing for the Zi hour.
const fn huo_ling_start(trine: Trine) -> (Branch, Branch) {
    match trine {
        Trine::Fire => (Branch::Chou, Branch::Mao),
        Trine::Water => (Branch::Yin, Branch::Xu),
        Trine::Metal => (Branch::Mao, Branch::Xu),
        Trine::Wood => (Branch::You, Branch::Xu),
    }
}

const fn tian_ma(trine: Trine) -> Branch {
    match trine {
        Trine::Fire => Branch::Shen,
        Trine::Water => Branch::Yin,
        Trine::Metal => Branch::Hai,
        Trine::Wood => Branch::Si,
    }
}

const fn hua_gai(trine: Trine) -> Branch {
    match trine {
        Trine::Fire => Branch::Xu,
        Trine::Water => Branch::Chen,
        Trine::Metal => Branch::Chou,
        Trine::Wood => Branch::Wei,
    }
}

const fn xian_chi(trine: Trine) -> Branch {
    match trine {
        Trine::Fire => Branch::Mao,
        Trine::Water => Branch::You,
        Trine::Metal => Branch::Wu,
        Trine::Wood => Branch::Zi,
    }
}

/// Gu Chen and Gua Su by season of the year branch.
const fn gu_chen_gua_su(season: Season) -> (Branch, Branch) {
    match season {
        Season::Spring => (Branch::Si, Branch::Chou),
        Season::Summer => (Branch::Shen, Branch::Chen),
        Season::Autumn => (Branch::Hai, Branch::Wei),
        Season::Winter => (Branch::Yin, Branch::Xu),
    }
}

/// Branch of Zi Wei for a lunar day and phase.
pub fn ziwei_branch(lunar_day: u8, ju: Ju) -> Branch {
    let day = lunar_day as i32;
    let divisor = ju.value() as i32;
    let quotient = (day + divisor - 1) / divisor;
    let remainder = divisor * quotient - day;
    let base = Branch::Yin.offset(quotient - 1);
    if remainder % 2 == 0 {
        base.offset(remainder)
    } else {
        base.offset(-remainder)
    }
}

/// Branch of Tian Fu, mirroring Zi Wei about the Yin–Shen axis.
pub fn tianfu_branch(ziwei: Branch) -> Branch {
    Branch::from_index(((4 - ziwei.index() as i32).rem_euclid(12)) as u8)
}

/// The 14 major stars from the Zi Wei branch.
pub fn major_stars(ziwei: Branch) -> [(StarId, Branch); 14] {
    let tianfu = tianfu_branch(ziwei);
    let mut out = [(StarId::ZiWei, Branch::Zi); 14];
    let placed = ZIWEI_GROUP
        .iter()
        .map(|&(star, off)| (star, ziwei.offset(off)))
        .chain(TIANFU_GROUP.iter().map(|&(star, off)| (star, tianfu.offset(off))));
    for (slot, entry) in out.iter_mut().zip(placed) {
        *slot = entry;
    }
    out
}

/// The 14 assistant stars.
pub fn assistant_stars(input: &PlacementInput) -> [(StarId, Branch); 14] {
    let month = input.month_steps();
    let hour = input.hour_steps();
    let stem = input.year_stem.index() as usize;
    let trine = input.year_branch.trine();
    let (kui, yue) = KUI_YUE[stem];
    let lu_cun = LU_CUN[stem];
    let (huo, ling) = huo_ling_start(trine);
    [
        (StarId::ZuoFu, Branch::Chen.offset(month)),
        (StarId::YouBi, Branch::Xu.offset(-month)),
        (StarId::WenChang, Branch::Xu.offset(-hour)),
        (StarId::WenQu, Branch::Chen.offset(hour)),
        (StarId::TianKui, kui),
        (StarId::TianYue, yue),
        (StarId::LuCun, lu_cun),
        (StarId::QingYang, lu_cun.offset(1)),
        (StarId::TuoLuo, lu_cun.offset(-1)),
        (StarId::HuoXing, huo.offset(hour)),
        (StarId::LingXing, ling.offset(hour)),
        (StarId::DiKong, Branch::Hai.offset(-hour)),
        (StarId::DiJie, Branch::Hai.offset(hour)),
        (StarId::TianMa, tian_ma(trine)),
    ]
}

/// The 19 minor stars.
pub fn minor_stars(input: &PlacementInput) -> [(StarId, Branch); 19] {
    let month = input.month_steps();
    let hour = input.hour_steps();
    let year = input.year_steps();
    let day = input.lunar_day as i32;
    let trine = input.year_branch.trine();
    let (gu_chen, gua_su) = gu_chen_gua_su(input.year_branch.season());

    let hong_luan = Branch::Mao.offset(-year);
    let zuo_fu = Branch::Chen.offset(month);
    let you_bi = Branch::Xu.offset(-month);
    let wen_chang = Branch::Xu.offset(-hour);
    let wen_qu = Branch::Chen.offset(hour);
    [
        (StarId::HongLuan, hong_luan),
        (StarId::TianXi, hong_luan.opposite()),
        (StarId::YinSha, Branch::Yin.offset(-2 * month)),
        (StarId::TianXing, Branch::You.offset(month)),
        (StarId::TianYao, Branch::Chou.offset(month)),
        (StarId::TianKu, Branch::Wu.offset(-year)),
        (StarId::TianXu, Branch::Wu.offset(year)),
        (StarId::LongChi, Branch::Chen.offset(year)),
        (StarId::FengGe, Branch::Xu.offset(-year)),
        (StarId::GuChen, gu_chen),
        (StarId::GuaSu, gua_su),
        (StarId::HuaGai, hua_gai(trine)),
        (StarId::XianChi, xian_chi(trine)),
        (StarId::TaiFu, Branch::Wu.offset(hour)),
        (StarId::FengGao, Branch::Yin.offset(hour)),
        (StarId::SanTai, zuo_fu.offset(day - 1)),
        (StarId::BaZuo, you_bi.offset(-(day - 1))),
        (StarId::EnGuang, wen_chang.offset(day - 2)),
        (StarId::TianGui, wen_qu.offset(day - 2)),
    ]
}

/// Place every catalog star, in catalog order.
pub fn place_all(input: &PlacementInput) -> Result<Vec<(StarId, Branch)>, BaseError> {
    input.validate()?;
    let ziwei = ziwei_branch(input.lunar_day, input.ju);
    let mut out = Vec::with_capacity(STAR_COUNT);
    out.extend(major_stars(ziwei));
    out.extend(assistant_stars(input));
    out.extend(minor_stars(input));
    Ok(out)
}
