//! Plain-text rendering of a chart.

use crate::chart::{Chart, PalaceRecord, PlacedStar};

fn star_label(star: &PlacedStar) -> String {
    match star.transformation {
        Some(t) => format!("{}[{}]", star.glyph, t.glyph()),
        None => star.glyph.clone(),
    }
}

fn palace_line(p: &PalaceRecord) -> String {
    let body = if p.is_body_palace { "身" } else { "  " };
    let stars: Vec<_> = p.stars.iter().map(star_label).collect();
    format!(
        "{} {:<9} {}  {}",
        p.ganzhi(),
        p.palace.name(),
        body,
        stars.join(" ")
    )
}

/// Header lines followed by one line per sector in branch order.
pub fn render_text(chart: &Chart) -> String {
    let m = &chart.meta;
    let mut out = format!(
        "Date:   {} bucket {} ({}) {}\n",
        m.input.date,
        m.input.hour_bucket.get(),
        m.input.hour_bucket.window(),
        m.input.timezone
    );
    out.push_str(&format!("Lunar:  {}\n", m.lunar_display));
    out.push_str(&format!("Bazi:   {}\n", m.bazi));
    out.push_str(&format!("Ju:     {} ({})\n", m.ju.glyph(), m.ju));
    out.push_str(&format!(
        "Life:   {}    Body: {}\n",
        m.life_branch.glyph(),
        m.body_branch.glyph()
    ));
    out.push('\n');
    for p in &chart.palaces {
        out.push_str(palace_line(p).trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::generate_chart_from_strs;

    #[test]
    fn renders_header_and_twelve_rows() {
        let chart = generate_chart_from_strs("1990-01-01", 1, "UTC+8").unwrap();
        let text = render_text(&chart);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5 + 1 + 12);
        assert_eq!(lines[0], "Date:   1990-01-01 bucket 1 (23:00-01:00) UTC+08:00");
        assert_eq!(lines[2], "Bazi:   己巳 丙子 丙寅 戊子");
        assert_eq!(lines[3], "Ju:     水二局 (Water 2)");
        assert!(lines[6].starts_with("丙子 Siblings"));
        assert!(lines[7].starts_with("丁丑 Life      身"));
    }

    #[test]
    fn tags_follow_glyph() {
        let chart = generate_chart_from_strs("1990-01-01", 1, "UTC+8").unwrap();
        let text = render_text(&chart);
        assert!(text.contains("武曲[化禄]"));
        assert!(text.contains("文曲[化忌]"));
    }
}
