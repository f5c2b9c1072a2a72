//! Golden placement for a birth on 1990-01-01 at 00:00 (UTC+8).
//!
//! Lunar date 1989-12-05, Zi hour, year JiSi, Life palace DingChou
//! (Water 2).

use ziwei_base::{
    Branch, Ju, PlacementInput, StarId, Stem, Transformation, body_palace_branch, ju_for,
    life_palace_branch, palace_ganzhi, place_all, sihua_targets,
};

fn input() -> PlacementInput {
    PlacementInput {
        lunar_day: 5,
        lunar_month: 12,
        hour: Branch::Zi,
        year_stem: Stem::Ji,
        year_branch: Branch::Si,
        ju: Ju::Water2,
    }
}

fn position(star: StarId) -> u8 {
    let placed = place_all(&input()).unwrap();
    placed
        .iter()
        .find(|(s, _)| *s == star)
        .map(|(_, b)| b.index())
        .unwrap()
}

#[test]
fn life_palace_and_phase() {
    let life = life_palace_branch(12, Branch::Zi).unwrap();
    assert_eq!(life, Branch::Chou);
    assert_eq!(body_palace_branch(12, Branch::Zi), Ok(Branch::Chou));
    let gz = palace_ganzhi(Stem::Ji, life);
    assert_eq!(gz.to_string(), "丁丑");
    assert_eq!(ju_for(gz), Ju::Water2);
}

#[test]
fn major_stars() {
    let expected = [
        (StarId::ZiWei, 3),
        (StarId::TianJi, 2),
        (StarId::TaiYang, 0),
        (StarId::WuQu, 11),
        (StarId::TianTong, 10),
        (StarId::LianZhen, 7),
        (StarId::TianFu, 1),
        (StarId::TaiYin, 2),
        (StarId::TanLang, 3),
        (StarId::JuMen, 4),
        (StarId::TianXiang, 5),
        (StarId::TianLiang, 6),
        (StarId::QiSha, 7),
        (StarId::PoJun, 11),
    ];
    for (star, branch) in expected {
        assert_eq!(position(star), branch, "{}", star.name());
    }
}

#[test]
fn assistant_stars() {
    let expected = [
        (StarId::ZuoFu, 3),
        (StarId::YouBi, 11),
        (StarId::WenChang, 10),
        (StarId::WenQu, 4),
        (StarId::TianKui, 0),
        (StarId::TianYue, 8),
        (StarId::LuCun, 6),
        (StarId::QingYang, 7),
        (StarId::TuoLuo, 5),
        (StarId::HuoXing, 3),
        (StarId::LingXing, 10),
        (StarId::DiKong, 11),
        (StarId::DiJie, 11),
        (StarId::TianMa, 11),
    ];
    for (star, branch) in expected {
        assert_eq!(position(star), branch, "{}", star.name());
    }
}

#[test]
fn minor_stars() {
    let expected = [
        (StarId::HongLuan, 10),
        (StarId::TianXi, 4),
        (StarId::YinSha, 4),
        (StarId::TianXing, 8),
        (StarId::TianYao, 0),
        (StarId::TianKu, 1),
        (StarId::TianXu, 11),
        (StarId::LongChi, 9),
        (StarId::FengGe, 5),
        (StarId::GuChen, 8),
        (StarId::GuaSu, 4),
        (StarId::HuaGai, 1),
        (StarId::XianChi, 6),
        (StarId::TaiFu, 6),
        (StarId::FengGao, 2),
        (StarId::SanTai, 7),
        (StarId::BaZuo, 7),
        (StarId::EnGuang, 1),
        (StarId::TianGui, 7),
    ];
    for (star, branch) in expected {
        assert_eq!(position(star), branch, "{}", star.name());
    }
}

#[test]
fn transformations_for_ji_year() {
    assert_eq!(
        sihua_targets(Stem::Ji),
        [
            (Transformation::Lu, StarId::WuQu),
            (Transformation::Quan, StarId::TanLang),
            (Transformation::Ke, StarId::TianLiang),
            (Transformation::Ji, StarId::WenQu),
        ]
    );
}
