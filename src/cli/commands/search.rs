use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::{SearchQuery, search_by_day};
use crate::errors::AppResult;
use crate::models::DatedRecord;
use crate::ui::messages::{info, warning};
use crate::ui::report::report_rejected;
use crate::utils::colors::paint_status;
use crate::utils::date;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search {
        query,
        fields,
        period,
        kind,
    } = cmd
    {
        // nothing to look for: do not even fetch
        if SearchQuery::parse(query).is_err() {
            warning("Empty search query, nothing to do.");
            return Ok(());
        }

        let (start, end) = match period {
            Some(p) => date::parse_period(p)?,
            None => (NaiveDate::MIN, NaiveDate::MAX),
        };
        let fields = if fields.is_empty() {
            cfg.search_fields()?
        } else {
            fields.clone()
        };

        let outcome = Core::load_configured(cfg, start, end, *kind)?;
        let matches = search_by_day(&outcome.index, query, &fields);

        if matches.is_empty() {
            info(format!("No matches for '{}'.", query.trim()));
        } else {
            let mut table = Table::new(vec!["DATE", "ID", "KIND", "STATUS", "DETAILS"]);
            for (day, r) in &matches {
                table.add_row(vec![
                    day.format("%Y-%m-%d").to_string(),
                    r.id().to_string(),
                    r.kind().as_str().to_string(),
                    paint_status(r.status()),
                    r.label(),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
            println!("{} match(es)", matches.len());
        }

        report_rejected(&outcome);
    }
    Ok(())
}
