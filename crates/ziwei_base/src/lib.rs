//! Sexagenary and star-placement rules for Zi Wei Dou Shu charts.
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches and the 60-pair cycle
//! - Four Pillars (Bazi) from a civil moment
//! - Life/Body palace location and palace stems
//! - The five-element phase (Ju) of the Life palace
//! - The star catalog and classical placement rules
//! - The Four Transformations (Sihua) table
//!
//! Every function is pure; lookup tables are `const` data.

pub mod bazi;
pub mod error;
pub mod ganzhi;
pub mod ju;
pub mod palace;
pub mod placement;
pub mod sihua;
pub mod star;

pub use bazi::{
    Bazi, DAY_CYCLE_OFFSET, bazi_year, compute_bazi, day_pillar, first_month_stem, hour_branch,
    hour_pillar, month_pillar, year_pillar, zi_hour_stem,
};
pub use error::BaseError;
pub use ganzhi::{
    ALL_BRANCHES, ALL_STEMS, Branch, GANZHI_EPOCH_YEAR, GanZhi, Season, Stem, Trine,
    ganzhi_from_year,
};
pub use ju::{ALL_JU, Ju, ju_for, ju_from_indices};
pub use palace::{
    PALACE_SEQUENCE, Palace, body_palace_branch, branch_of, life_palace_branch, palace_at,
    palace_ganzhi, palace_layout, palace_stem,
};
pub use placement::{
    PlacementInput, assistant_stars, major_stars, minor_stars, place_all, tianfu_branch,
    ziwei_branch,
};
pub use sihua::{
    ALL_TRANSFORMATIONS, Transformation, sihua_targets, transformation_for, validate_sihua_table,
};
pub use star::{ALL_STARS, STAR_COUNT, StarId, StarRank};
