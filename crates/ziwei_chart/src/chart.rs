//! Chart assembly.
//!
//! A chart is built top-down from the request: civil time → Bazi and lunar
//! date → Life/Body palaces → Ju → star placement → Sihua tags. Nothing is
//! mutated after assembly.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace};
use ziwei_base::{
    ALL_BRANCHES, Bazi, Branch, GanZhi, Ju, Palace, PlacementInput, StarId, StarRank, Stem,
    Transformation, body_palace_branch, compute_bazi, ganzhi_from_year, ju_for,
    life_palace_branch, palace_at, palace_ganzhi, place_all, transformation_for,
    validate_sihua_table,
};
use ziwei_time::{LunarDate, lunar_from_solar};

use crate::config::{ChartConfig, YearBoundary};
use crate::error::ChartError;
use crate::input::{ChartRequest, HourBucket};

/// A star placed in one palace of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedStar {
    pub id: StarId,
    pub name: String,
    pub glyph: String,
    pub rank: StarRank,
    /// Sihua tag for this chart's year stem.
    pub transformation: Option<Transformation>,
}

impl PlacedStar {
    fn new(id: StarId, year_stem: Stem) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            glyph: id.glyph().to_string(),
            rank: id.rank(),
            transformation: transformation_for(year_stem, id),
        }
    }
}

/// One of the twelve chart sectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceRecord {
    pub branch: Branch,
    pub stem: Stem,
    pub palace: Palace,
    pub is_body_palace: bool,
    /// Stars ordered by rank, then catalog order.
    pub stars: Vec<PlacedStar>,
}

impl PalaceRecord {
    /// Stem-branch label of the sector.
    pub fn ganzhi(&self) -> GanZhi {
        GanZhi {
            stem: self.stem,
            branch: self.branch,
        }
    }

    /// Stars of one rank tier.
    pub fn stars_of_rank(&self, rank: StarRank) -> impl Iterator<Item = &PlacedStar> {
        self.stars.iter().filter(move |s| s.rank == rank)
    }
}

/// Input as received, echoed into the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEcho {
    pub date: chrono::NaiveDate,
    pub hour_bucket: HourBucket,
    /// Timezone label, e.g. `Asia/Shanghai` or `UTC+08:00`.
    pub timezone: String,
    /// UTC offset in force at the birth time.
    pub offset_hours: f64,
}

/// Chart-wide derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMeta {
    pub ju: Ju,
    pub bazi: Bazi,
    pub lunar: LunarDate,
    /// E.g. `己巳年腊月初五 子时`.
    pub lunar_display: String,
    /// Year pair keying the year-stem and year-branch tables.
    pub chart_year: GanZhi,
    /// Month number used for placement after leap folding.
    pub placement_month: u8,
    pub life_branch: Branch,
    pub body_branch: Branch,
    pub input: InputEcho,
}

/// A complete Zi Wei Dou Shu chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Sectors in branch order, Zi first.
    pub palaces: [PalaceRecord; 12],
    pub meta: ChartMeta,
}

impl Chart {
    /// Sector at a branch.
    pub fn palace_at(&self, branch: Branch) -> &PalaceRecord {
        &self.palaces[branch.index() as usize]
    }

    /// Sector carrying a palace label.
    pub fn palace(&self, label: Palace) -> &PalaceRecord {
        let branch = ziwei_base::branch_of(self.meta.life_branch, label);
        self.palace_at(branch)
    }

    pub fn life_palace(&self) -> &PalaceRecord {
        self.palace_at(self.meta.life_branch)
    }

    pub fn body_palace(&self) -> &PalaceRecord {
        self.palace_at(self.meta.body_branch)
    }

    /// Sector and entry of a star.
    pub fn find_star(&self, id: StarId) -> Option<(&PalaceRecord, &PlacedStar)> {
        self.palaces
            .iter()
            .find_map(|p| p.stars.iter().find(|s| s.id == id).map(|s| (p, s)))
    }

    /// All stars carrying a transformation, in Lu, Quan, Ke, Ji order.
    pub fn transformed_stars(&self) -> Vec<(&PalaceRecord, &PlacedStar)> {
        let mut out: Vec<_> = self
            .palaces
            .iter()
            .flat_map(|p| p.stars.iter().map(move |s| (p, s)))
            .filter(|(_, s)| s.transformation.is_some())
            .collect();
        out.sort_by_key(|(_, s)| s.transformation);
        out
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Lunar date string with the year pair and hour branch.
fn lunar_display(lunar: &LunarDate, hour: Branch) -> String {
    format!(
        "{}年{} {}时",
        ganzhi_from_year(lunar.year),
        lunar,
        hour.glyph()
    )
}

/// Generate a chart for a validated request.
pub fn generate_chart(request: &ChartRequest, config: &ChartConfig) -> Result<Chart, ChartError> {
    let _span = debug_span!(
        "generate_chart",
        date = %request.date,
        hour = request.hour.get(),
        tz = %request.timezone
    )
    .entered();

    let civil = request.civil_time()?;
    let bazi = compute_bazi(&civil);
    debug!(%civil, %bazi, "four pillars");

    let calendar_offset = config.calendar_offset(civil.offset_hours);
    let lunar = lunar_from_solar(civil.year, civil.month, civil.day, calendar_offset)?;
    let month = lunar.effective_month(config.leap_month);
    debug!(%lunar, lunar_year = lunar.year, month, calendar_offset, "lunar date");

    let chart_year = match config.year_boundary {
        YearBoundary::SolarTerm => bazi.year,
        YearBoundary::LunarNewYear => ganzhi_from_year(lunar.year),
    };

    let hour = request.hour.branch();
    let life_branch = life_palace_branch(month, hour)?;
    let body_branch = body_palace_branch(month, hour)?;
    let ju = ju_for(palace_ganzhi(chart_year.stem, life_branch));
    debug!(
        %chart_year,
        life = life_branch.name(),
        body = body_branch.name(),
        %ju,
        "palaces"
    );

    validate_sihua_table()?;
    let placements = place_all(&PlacementInput {
        lunar_day: lunar.day,
        lunar_month: month,
        hour,
        year_stem: chart_year.stem,
        year_branch: chart_year.branch,
        ju,
    })?;

    let palaces = ALL_BRANCHES.map(|branch| {
        let mut stars: Vec<_> = placements
            .iter()
            .filter(|(_, b)| *b == branch)
            .map(|&(id, _)| PlacedStar::new(id, chart_year.stem))
            .collect();
        stars.sort_by_key(|s| (s.rank, s.id.index()));
        trace!(branch = branch.name(), count = stars.len(), "sector");
        PalaceRecord {
            branch,
            stem: palace_ganzhi(chart_year.stem, branch).stem,
            palace: palace_at(life_branch, branch),
            is_body_palace: branch == body_branch,
            stars,
        }
    });

    Ok(Chart {
        palaces,
        meta: ChartMeta {
            ju,
            bazi,
            lunar,
            lunar_display: lunar_display(&lunar, hour),
            chart_year,
            placement_month: month,
            life_branch,
            body_branch,
            input: InputEcho {
                date: request.date,
                hour_bucket: request.hour,
                timezone: request.timezone.to_string(),
                offset_hours: civil.offset_hours,
            },
        },
    })
}

/// Generate a chart from raw strings with the default configuration.
///
/// `date` is `YYYY-MM-DD`, `hour_bucket` is 1..=12 (1 = Zi) and
/// `timezone` is an IANA name or a UTC offset such as `UTC+8`.
pub fn generate_chart_from_strs(
    date: &str,
    hour_bucket: i64,
    timezone: &str,
) -> Result<Chart, ChartError> {
    let request = ChartRequest::parse(date, hour_bucket, timezone)?;
    generate_chart(&request, &ChartConfig::default())
}
