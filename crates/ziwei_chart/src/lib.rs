//! Zi Wei Dou Shu chart generation.
//!
//! Turns a Gregorian birth date, a two-hour bucket and a timezone into a
//! complete chart: twelve palaces with their stems, labels and placed stars,
//! plus the Four Pillars, the lunar date, the Ju phase and the Sihua tags.
//!
//! # Quick start
//!
//! ```rust
//! use ziwei_chart::{Palace, StarId, generate_chart_from_strs};
//!
//! let chart = generate_chart_from_strs("1990-01-01", 1, "UTC+8").unwrap();
//! assert_eq!(chart.meta.bazi.to_string(), "己巳 丙子 丙寅 戊子");
//! assert_eq!(chart.palace(Palace::Life).ganzhi().to_string(), "丁丑");
//! let (palace, _) = chart.find_star(StarId::ZiWei).unwrap();
//! println!("Zi Wei sits in the {} palace", palace.palace.name());
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod render;

pub use chart::{
    Chart, ChartMeta, InputEcho, PalaceRecord, PlacedStar, generate_chart,
    generate_chart_from_strs,
};
pub use config::{ChartConfig, YearBoundary};
pub use error::ChartError;
pub use input::{ChartRequest, HourBucket, TimeZoneSpec, parse_date};
pub use render::render_text;

// Re-export the vocabulary types so callers don't need the lower crates.
pub use ziwei_base::{Bazi, Branch, GanZhi, Ju, Palace, StarId, StarRank, Stem, Transformation};
pub use ziwei_time::{LeapMonthPolicy, LunarDate};
