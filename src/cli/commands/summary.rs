use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::DaySummary;
use crate::ui::messages::info;
use crate::ui::report::report_rejected;
use crate::utils::date;
use crate::utils::formatting::counts_inline;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        period,
        kind,
        all_days,
    } = cmd
    {
        let (start, end) = date::resolve_period(period, cfg.zone()?)?;
        let outcome = Core::load_configured(cfg, start, end, *kind)?;
        let index = &outcome.index;

        let rows: Vec<(chrono::NaiveDate, DaySummary)> = if *all_days {
            index.summaries_between(start, end)
        } else {
            index
                .days_in(start, end)
                .map(|(d, b)| (d, b.summary()))
                .collect()
        };

        if rows.is_empty() {
            info(format!("No records between {start} and {end}."));
        } else {
            let mut table = Table::new(vec!["DATE", "COUNT", "STATUSES", "TOTAL QTY"]);
            let mut total = 0usize;
            let mut total_qty = 0u64;
            for (day, summary) in &rows {
                total += summary.count;
                total_qty += summary.total_secondary_quantity;
                table.add_row(vec![
                    day.format("%Y-%m-%d").to_string(),
                    summary.count.to_string(),
                    counts_inline(&summary.counts_by_status),
                    summary.total_secondary_quantity.to_string(),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
            println!("Total: {total} record(s), quantity {total_qty}");
        }

        report_rejected(&outcome);
    }
    Ok(())
}
