//! Star catalog: identifiers, names and rank tiers.
//!
//! The catalog carries no positions; placement lives in
//! [`crate::placement`]. Catalog order is the order stars are placed and
//! listed within a palace of the same rank.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;

/// Rank tier of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarRank {
    /// The 14 principal stars.
    Major,
    /// Auspicious and malefic helper stars.
    Assistant,
    /// Lower-tier stars.
    Minor,
}

/// Stable star identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum StarId {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    ZuoFu,
    YouBi,
    WenChang,
    WenQu,
    TianKui,
    TianYue,
    LuCun,
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
    TianMa,
    HongLuan,
    TianXi,
    YinSha,
    TianXing,
    TianYao,
    TianKu,
    TianXu,
    LongChi,
    FengGe,
    GuChen,
    GuaSu,
    HuaGai,
    XianChi,
    TaiFu,
    FengGao,
    SanTai,
    BaZuo,
    EnGuang,
    TianGui,
}

/// Number of stars in the catalog.
pub const STAR_COUNT: usize = 47;

/// All stars in catalog order.
pub const ALL_STARS: [StarId; STAR_COUNT] = [
    StarId::ZiWei,
    StarId::TianJi,
    StarId::TaiYang,
    StarId::WuQu,
    StarId::TianTong,
    StarId::LianZhen,
    StarId::TianFu,
    StarId::TaiYin,
    StarId::TanLang,
    StarId::JuMen,
    StarId::TianXiang,
    StarId::TianLiang,
    StarId::QiSha,
    StarId::PoJun,
    StarId::ZuoFu,
    StarId::YouBi,
    StarId::WenChang,
    StarId::WenQu,
    StarId::TianKui,
    StarId::TianYue,
    StarId::LuCun,
    StarId::QingYang,
    StarId::TuoLuo,
    StarId::HuoXing,
    StarId::LingXing,
    StarId::DiKong,
    StarId::DiJie,
    StarId::TianMa,
    StarId::HongLuan,
    StarId::TianXi,
    StarId::YinSha,
    StarId::TianXing,
    StarId::TianYao,
    StarId::TianKu,
    StarId::TianXu,
    StarId::LongChi,
    StarId::FengGe,
    StarId::GuChen,
    StarId::GuaSu,
    StarId::HuaGai,
    StarId::XianChi,
    StarId::TaiFu,
    StarId::FengGao,
    StarId::SanTai,
    StarId::BaZuo,
    StarId::EnGuang,
    StarId::TianGui,
];

const STAR_GLYPHS: [&str; STAR_COUNT] = [
    "紫微", "天机", "太阳", "武曲", "天同", "廉贞", "天府", "太阴", "贪狼", "巨门", "天相", "天梁",
    "七杀", "破军", "左辅", "右弼", "文昌", "文曲", "天魁", "天钺", "禄存", "擎羊", "陀罗", "火星",
    "铃星", "地空", "地劫", "天马", "红鸾", "天喜", "阴煞", "天刑", "天姚", "天哭", "天虚", "龙池",
    "凤阁", "孤辰", "寡宿", "华盖", "咸池", "台辅", "封诰", "三台", "八座", "恩光", "天贵",
];

impl StarId {
    /// 0-based catalog index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stable lowercase identifier, e.g. `ziwei`.
    pub const fn id(self) -> &'static str {
        match self {
            Self::ZiWei => "ziwei",
            Self::TianJi => "tianji",
            Self::TaiYang => "taiyang",
            Self::WuQu => "wuqu",
            Self::TianTong => "tiantong",
            Self::LianZhen => "lianzhen",
            Self::TianFu => "tianfu",
            Self::TaiYin => "taiyin",
            Self::TanLang => "tanlang",
            Self::JuMen => "jumen",
            Self::TianXiang => "tianxiang",
            Self::TianLiang => "tianliang",
            Self::QiSha => "qisha",
            Self::PoJun => "pojun",
            Self::ZuoFu => "zuofu",
            Self::YouBi => "youbi",
            Self::WenChang => "wenchang",
            Self::WenQu => "wenqu",
            Self::TianKui => "tiankui",
            Self::TianYue => "tianyue",
            Self::LuCun => "lucun",
            Self::QingYang => "qingyang",
            Self::TuoLuo => "tuoluo",
            Self::HuoXing => "huoxing",
            Self::LingXing => "lingxing",
            Self::DiKong => "dikong",
            Self::DiJie => "dijie",
            Self::TianMa => "tianma",
            Self::HongLuan => "hongluan",
            Self::TianXi => "tianxi",
            Self::YinSha => "yinsha",
            Self::TianXing => "tianxing",
            Self::TianYao => "tianyao",
            Self::TianKu => "tianku",
            Self::TianXu => "tianxu",
            Self::LongChi => "longchi",
            Self::FengGe => "fengge",
            Self::GuChen => "guchen",
            Self::GuaSu => "guasu",
            Self::HuaGai => "huagai",
            Self::XianChi => "xianchi",
            Self::TaiFu => "taifu",
            Self::FengGao => "fenggao",
            Self::SanTai => "santai",
            Self::BaZuo => "bazuo",
            Self::EnGuang => "enguang",
            Self::TianGui => "tiangui",
        }
    }

    /// Pinyin name, e.g. `Zi Wei`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "Zi Wei",
            Self::TianJi => "Tian Ji",
            Self::TaiYang => "Tai Yang",
            Self::WuQu => "Wu Qu",
            Self::TianTong => "Tian Tong",
            Self::LianZhen => "Lian Zhen",
            Self::TianFu => "Tian Fu",
            Self::TaiYin => "Tai Yin",
            Self::TanLang => "Tan Lang",
            Self::JuMen => "Ju Men",
            Self::TianXiang => "Tian Xiang",
            Self::TianLiang => "Tian Liang",
            Self::QiSha => "Qi Sha",
            Self::PoJun => "Po Jun",
            Self::ZuoFu => "Zuo Fu",
            Self::YouBi => "You Bi",
            Self::WenChang => "Wen Chang",
            Self::WenQu => "Wen Qu",
            Self::TianKui => "Tian Kui",
            Self::TianYue => "Tian Yue",
            Self::LuCun => "Lu Cun",
            Self::QingYang => "Qing Yang",
            Self::TuoLuo => "Tuo Luo",
            Self::HuoXing => "Huo Xing",
            Self::LingXing => "Ling Xing",
            Self::DiKong => "Di Kong",
            Self::DiJie => "Di Jie",
            Self::TianMa => "Tian Ma",
            Self::HongLuan => "Hong Luan",
            Self::TianXi => "Tian Xi",
            Self::YinSha => "Yin Sha",
            Self::TianXing => "Tian Xing",
            Self::TianYao => "Tian Yao",
            Self::TianKu => "Tian Ku",
            Self::TianXu => "Tian Xu",
            Self::LongChi => "Long Chi",
            Self::FengGe => "Feng Ge",
            Self::GuChen => "Gu Chen",
            Self::GuaSu => "Gua Su",
            Self::HuaGai => "Hua Gai",
            Self::XianChi => "Xian Chi",
            Self::TaiFu => "Tai Fu",
            Self::FengGao => "Feng Gao",
            Self::SanTai => "San Tai",
            Self::BaZuo => "Ba Zuo",
            Self::EnGuang => "En Guang",
            Self::TianGui => "Tian Gui",
        }
    }

    /// Chinese name.
    pub const fn glyph(self) -> &'static str {
        STAR_GLYPHS[self.index() as usize]
    }

    /// Rank tier.
    pub const fn rank(self) -> StarRank {
        match self.index() {
            0..=13 => StarRank::Major,
            14..=27 => StarRank::Assistant,
            _ => StarRank::Minor,
        }
    }

    /// Star with the given identifier.
    pub fn from_id(id: &str) -> Result<Self, BaseError> {
        ALL_STARS
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| BaseError::TableLookup(format!("unknown star id {id:?}")))
    }
}

impl std::fmt::Display for StarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StarId {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STARS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn tier_counts() {
        let count = |r| ALL_STARS.iter().filter(|s| s.rank() == r).count();
        assert_eq!(count(StarRank::Major), 14);
        assert_eq!(count(StarRank::Assistant), 14);
        assert_eq!(count(StarRank::Minor), 19);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(StarId::PoJun.rank(), StarRank::Major);
        assert_eq!(StarId::ZuoFu.rank(), StarRank::Assistant);
        assert_eq!(StarId::TianMa.rank(), StarRank::Assistant);
        assert_eq!(StarId::HongLuan.rank(), StarRank::Minor);
    }

    #[test]
    fn ids_unique_and_lowercase() {
        let mut ids: Vec<_> = ALL_STARS.iter().map(|s| s.id()).collect();
        assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_lowercase())));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), STAR_COUNT);
    }

    #[test]
    fn id_roundtrip() {
        for s in ALL_STARS {
            assert_eq!(StarId::from_id(s.id()), Ok(s));
        }
        assert!("beidou".parse::<StarId>().is_err());
    }

    #[test]
    fn serde_uses_id() {
        for s in ALL_STARS {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.id()));
        }
    }
}
