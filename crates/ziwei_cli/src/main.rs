use std::fmt::Display;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ziwei_base::compute_bazi;
use ziwei_chart::{
    ChartConfig, ChartRequest, LeapMonthPolicy, TimeZoneSpec, YearBoundary, generate_chart,
    parse_date, render_text,
};
use ziwei_time::{CivilTime, lunar_from_solar, solar_terms_for_year};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Hour bucket 1-12 (1 = Zi, 23:00-01:00)
        #[arg(long)]
        hour: i64,
        /// IANA zone or UTC offset (e.g. Asia/Shanghai, UTC+8, -0530)
        #[arg(long, default_value = "UTC+8")]
        tz: String,
        /// JSON file with a chart configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Boundary starting the chart year
        #[arg(long, value_enum)]
        year_boundary: Option<YearBoundaryArg>,
        /// Leap-month folding policy
        #[arg(long, value_enum)]
        leap_month: Option<LeapMonthArg>,
        /// UTC offset (hours) for the lunar calendar
        #[arg(long, allow_hyphen_values = true)]
        calendar_offset: Option<f64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Four Pillars for a birth hour bucket
    Bazi {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Hour bucket 1-12
        #[arg(long)]
        hour: i64,
        /// IANA zone or UTC offset
        #[arg(long, default_value = "UTC+8")]
        tz: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Lunisolar date for a civil date
    Lunar {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// IANA zone or UTC offset on which months are reckoned
        #[arg(long, default_value = "UTC+8")]
        tz: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// The 24 solar terms of a year
    SolarTerms {
        /// Civil year
        #[arg(long)]
        year: i32,
        /// IANA zone or UTC offset for the printed times
        #[arg(long, default_value = "UTC+8")]
        tz: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum YearBoundaryArg {
    SolarTerm,
    LunarNewYear,
}

impl From<YearBoundaryArg> for YearBoundary {
    fn from(arg: YearBoundaryArg) -> Self {
        match arg {
            YearBoundaryArg::SolarTerm => Self::SolarTerm,
            YearBoundaryArg::LunarNewYear => Self::LunarNewYear,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LeapMonthArg {
    Split,
    Base,
    Next,
}

impl From<LeapMonthArg> for LeapMonthPolicy {
    fn from(arg: LeapMonthArg) -> Self {
        match arg {
            LeapMonthArg::Split => Self::SplitAtMidMonth,
            LeapMonthArg::Base => Self::AsBaseMonth,
            LeapMonthArg::Next => Self::AsNextMonth,
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{what}: {e}");
        std::process::exit(1);
    })
}

fn load_config(path: Option<&PathBuf>) -> ChartConfig {
    let Some(path) = path else {
        return ChartConfig::default();
    };
    let text = or_exit(std::fs::read_to_string(path), "Failed to read config");
    or_exit(serde_json::from_str(&text), "Invalid config")
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!(
        "{}",
        or_exit(serde_json::to_string_pretty(value), "Serialization failed")
    );
}

/// Offset in force at local noon of `date`.
fn noon_offset(tz: &TimeZoneSpec, date: NaiveDate) -> f64 {
    or_exit(tz.offset_hours_at(date, 12), "Invalid timezone")
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chart {
            date,
            hour,
            tz,
            config,
            year_boundary,
            leap_month,
            calendar_offset,
            json,
        } => {
            let request = or_exit(ChartRequest::parse(&date, hour, &tz), "Invalid input");
            let mut config = load_config(config.as_ref());
            if let Some(b) = year_boundary {
                config = config.with_year_boundary(b.into());
            }
            if let Some(p) = leap_month {
                config = config.with_leap_month(p.into());
            }
            if let Some(offset) = calendar_offset {
                config = config.with_calendar_offset(offset);
            }
            debug!(?config, "chart config");
            let chart = or_exit(generate_chart(&request, &config), "Chart generation failed");
            if json {
                print_json(&chart);
            } else {
                print!("{}", render_text(&chart));
            }
        }

        Commands::Bazi {
            date,
            hour,
            tz,
            json,
        } => {
            let request = or_exit(ChartRequest::parse(&date, hour, &tz), "Invalid input");
            let civil = or_exit(request.civil_time(), "Invalid input");
            let bazi = compute_bazi(&civil);
            if json {
                print_json(&bazi);
            } else {
                println!("Civil: {civil}");
                for (label, p) in ["Year", "Month", "Day", "Hour"].iter().zip(bazi.pillars()) {
                    println!("{label:<6} {p} ({})", p.name());
                }
            }
        }

        Commands::Lunar { date, tz, json } => {
            let date = or_exit(parse_date(&date), "Invalid date");
            let tz = or_exit(TimeZoneSpec::parse(&tz), "Invalid timezone");
            let offset = noon_offset(&tz, date);
            let lunar = or_exit(
                lunar_from_solar(date.year(), date.month(), date.day(), offset),
                "Lunar conversion failed",
            );
            if json {
                print_json(&lunar);
            } else {
                println!(
                    "{}-{:02}-{:02}{} {} ({}年)",
                    lunar.year,
                    lunar.month,
                    lunar.day,
                    if lunar.is_leap { " leap" } else { "" },
                    lunar,
                    ziwei_base::ganzhi_from_year(lunar.year)
                );
            }
        }

        Commands::SolarTerms { year, tz, json } => {
            let tz = or_exit(TimeZoneSpec::parse(&tz), "Invalid timezone");
            let events = or_exit(solar_terms_for_year(year, 0.0), "Solar term search failed");
            let events: Vec<_> = events
                .into_iter()
                .map(|mut ev| {
                    let utc = NaiveDate::from_ymd_opt(ev.local.year, ev.local.month, ev.local.day)
                        .and_then(|d| d.and_hms_opt(ev.local.hour, ev.local.minute, 0));
                    let offset = utc.map_or(0.0, |utc| tz.offset_hours_at_utc(utc));
                    ev.local = CivilTime::from_jd_ut(ev.jd_ut, offset);
                    ev
                })
                .collect();
            if json {
                print_json(&events);
            } else {
                for ev in &events {
                    println!(
                        "{:<12} {} {:>5.1}°  {}",
                        ev.term.name(),
                        ev.term.glyph(),
                        ev.term.longitude_deg(),
                        ev.local
                    );
                }
            }
        }
    }
}
