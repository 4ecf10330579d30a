use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::{MarkerMode, MarkerPolicy, MarkerSpec, marker_glyph};
use crate::errors::{AppError, AppResult};
use crate::models::DaySummary;
use crate::ui::report::report_rejected;
use crate::utils::colors::{bold, grey, paint_dot};
use crate::utils::date;
use crate::utils::table::pad;
use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        month,
        kind,
        mode,
        max_dots,
    } = cmd
    {
        let zone = cfg.zone()?;
        let (first, last) = match month {
            Some(m) if m.trim().len() == 7 => date::parse_period(m)?,
            Some(m) => return Err(AppError::InvalidPeriod(m.clone())),
            None => date::current_month(zone)?,
        };

        let outcome = Core::load_configured(cfg, first, last, *kind)?;
        let policy = cfg.marker_policy(*kind, *mode, *max_dots)?;

        println!("{}", bold(&first.format("%B %Y").to_string()));
        print!("{}", render_month(first, last, &policy, |d| outcome.index.summarize(d)));
        print_legend(&policy);

        report_rejected(&outcome);
    }
    Ok(())
}

fn cell_width(policy: &MarkerPolicy) -> usize {
    // "dd " plus the widest marker
    3 + policy.max_dots.max(4)
}

pub(crate) fn render_marker(spec: &MarkerSpec) -> String {
    match spec {
        MarkerSpec::Count(0) => String::new(),
        MarkerSpec::Count(n) => format!("({n})"),
        MarkerSpec::Dots(dots) => dots
            .iter()
            .map(|d| paint_dot(&d.status, d.present))
            .collect(),
    }
}

/// Week rows Monday to Sunday, one cell per day with its marker.
fn render_month<F>(first: NaiveDate, last: NaiveDate, policy: &MarkerPolicy, summarize: F) -> String
where
    F: Fn(NaiveDate) -> DaySummary,
{
    let width = cell_width(policy);
    let lead = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec![String::new(); lead];

    for day in date::days_between(first, last) {
        let spec = marker_glyph(&summarize(day), policy);
        let number = format!("{:>2}", day.day());
        let number = if spec.is_blank() { grey(&number) } else { number };
        cells.push(format!("{number} {}", render_marker(&spec)));
    }

    let mut out = String::new();
    let head: Vec<String> = WEEKDAYS.iter().map(|w| pad(&format!("{w:>2}"), width)).collect();
    out.push_str(head.join(" ").trim_end());
    out.push('\n');

    for week in cells.chunks(7) {
        let row: Vec<String> = week.iter().map(|c| pad(c, width)).collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn print_legend(policy: &MarkerPolicy) {
    if policy.mode == MarkerMode::StatusDots {
        let legend: Vec<String> = policy
            .priority
            .iter()
            .take(policy.max_dots)
            .map(|s| format!("{} {s}", paint_dot(s, true)))
            .collect();
        if !legend.is_empty() {
            println!("\n{}", legend.join("  "));
        }
    }
}
