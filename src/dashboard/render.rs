//! Plain-text rendering of a dashboard report

use std::fmt::{self, Write};

use super::report::{DashboardReport, Reading};

/// Shown in place of any value that could not be produced
pub const DATA_PENDING: &str = "Data Pending";

/// Two decimals with thousands separators, e.g. `$12,345.68`
pub fn format_amount(value: f64, prefix: &str, suffix: &str) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && !formatted.trim_matches(&['0', '.'][..]).is_empty() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}{}", sign, prefix, grouped, fraction, suffix)
}

fn reading_text<T>(reading: &Reading<T>, show: impl FnOnce(&T) -> String) -> String {
    match reading {
        Reading::Ready { value } => show(value),
        Reading::Pending { .. } | Reading::Failed { .. } => DATA_PENDING.to_string(),
    }
}

/// Render the report as plain text
pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails.
    let _ = write_report(&mut out, report);
    out
}

/// Write the text rendering of `report` into `out`
pub fn write_report<W: Write>(out: &mut W, report: &DashboardReport) -> fmt::Result {
    let sentiment = reading_text(&report.sentiment, |s| {
        format!("{} (VIX {:.2})", s.label, s.input)
    });
    writeln!(out, "Market Sentiment: {}", sentiment)?;
    writeln!(out)?;

    writeln!(out, "Cross-Asset Overlay")?;
    for row in &report.overlay {
        let i = &row.instrument;
        let line = reading_text(&row.reading, |s| {
            format!(
                "{}  SMA{} {}  ({:+.2}%)  RSI{} {:.1}  {} / {}",
                format_amount(s.price, &i.prefix, &i.suffix),
                s.sma_window,
                format_amount(s.sma, &i.prefix, &i.suffix),
                s.deviation_pct,
                s.rsi_window,
                s.rsi,
                s.momentum.label,
                s.oscillator.label,
            )
        });
        writeln!(out, "  {:<16} {}", i.label, line)?;
    }
    writeln!(out)?;

    writeln!(out, "Scorecard")?;
    for row in &report.overlay {
        let rating = row
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| DATA_PENDING.to_string());
        writeln!(out, "  {:<16} {}", row.instrument.label, rating)?;
    }
    writeln!(out)?;

    if !report.ratios.is_empty() {
        writeln!(out, "Ratios")?;
        for row in &report.ratios {
            let value = reading_text(&row.reading, |v| format!("{:.4}", v));
            writeln!(out, "  {:<16} {}", row.pair.label(), value)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Sector Leaderboard (RSI)")?;
    for entry in &report.leaderboard.entries {
        writeln!(
            out,
            "  {:>2}. {:<6} RSI {:>5.1}  {:+.2}% vs SMA  {}",
            entry.rank, entry.symbol, entry.rsi, entry.deviation_pct, entry.oscillator
        )?;
    }
    for symbol in &report.leaderboard.unranked {
        writeln!(out, "   -  {:<6} {}", symbol.symbol, DATA_PENDING)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Last update: {} | range {} / {}",
        report.generated_at.format("%Y-%m-%d %H:%M"),
        report.lookback,
        report.interval
    )
}
