use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::DatedRecord;
use crate::ui::messages::{header, info};
use crate::ui::report::report_rejected;
use crate::utils::colors::paint_status;
use crate::utils::date;
use crate::utils::formatting::{counts_inline, quantity};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, kind } = cmd {
        let (start, end) = date::resolve_period(period, cfg.zone()?)?;
        let outcome = Core::load_configured(cfg, start, end, *kind)?;

        if outcome.index.is_empty() {
            info(format!("No records between {start} and {end}."));
        }

        for (day, bucket) in outcome.index.days() {
            header(
                format!(
                    "{}  {}  qty {}",
                    day.format("%Y-%m-%d %a"),
                    counts_inline(bucket.counts_by_status()),
                    bucket.total_secondary_quantity()
                ),
                &cfg.separator_char,
            );

            let mut table = Table::new(vec!["ID", "KIND", "STATUS", "QTY", "DETAILS"]);
            for r in bucket.records() {
                table.add_row(vec![
                    r.id().to_string(),
                    r.kind().as_str().to_string(),
                    paint_status(r.status()),
                    quantity(r.secondary_quantity()),
                    r.label(),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        report_rejected(&outcome);
    }
    Ok(())
}
