use std::fmt;

use copytrace_types::DelayClass;
use owo_colors::Style;

use crate::presentation::formatters::{
    format_delay, format_unix, format_usd, paint, truncate_hash,
};
use crate::presentation::presenters::transactions::EMPTY_TRANSACTIONS_MESSAGE;
use crate::presentation::view_models::{
    CreateView, DisplayOptions, TransactionsViewModel, ViewMode,
};

impl CreateView for TransactionsViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(TransactionsView {
            data: self,
            options,
        })
    }
}

struct TransactionsView<'a> {
    data: &'a TransactionsViewModel,
    options: DisplayOptions,
}

fn delay_style(class: DelayClass) -> Style {
    match class {
        DelayClass::VeryFast => Style::new().green().bold(),
        DelayClass::Fast => Style::new().green(),
        DelayClass::Average => Style::new().yellow(),
        DelayClass::Slow => Style::new().red(),
    }
}

impl<'a> fmt::Display for TransactionsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let color = self.options.enable_color;

        if self.options.mode == ViewMode::Minimal {
            for tx in &data.transactions {
                writeln!(f, "{}", tx.follower.signature)?;
            }
            return Ok(());
        }

        if self.options.mode != ViewMode::Compact {
            writeln!(f, "Leader:   {}", data.leader)?;
            writeln!(f, "Follower: {}", data.follower)?;
            writeln!(f)?;
        }

        if data.transactions.is_empty() {
            writeln!(f, "{}", EMPTY_TRANSACTIONS_MESSAGE)?;
            return Ok(());
        }

        if self.options.mode != ViewMode::Compact {
            if let Some(last) = &data.last_copy_at {
                writeln!(f, "Last copy on {}", last)?;
            }
            if let Some(avg) = data.average_delay_slots {
                writeln!(f, "Average delay: {}", format_delay(avg))?;
            }
            let parts: Vec<String> = DelayClass::ALL
                .iter()
                .map(|class| {
                    paint(
                        format!("{} {}", class.label(), data.delays.count(*class)),
                        delay_style(*class),
                        color,
                    )
                })
                .collect();
            writeln!(f, "Delays: {}", parts.join(" | "))?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "{:<10} {:<22} {:<20} {:<20} {:<14} {:<14}",
            "TOKEN", "DELAY", "LEADER TX", "FOLLOWER TX", "LEADER USD", "FOLLOWER USD"
        )?;
        writeln!(f, "{}", "-".repeat(105))?;

        for tx in &data.transactions {
            let delay = paint(
                format!("{:<22}", format!("{} ({})", tx.delay_slots, tx.delay_class)),
                delay_style(tx.delay_class),
                color,
            );
            writeln!(
                f,
                "{:<10} {} {:<20} {:<20} {:<14} {}",
                tx.token_symbol,
                delay,
                truncate_hash(&tx.leader.signature),
                truncate_hash(&tx.follower.signature),
                format_usd(tx.leader.usd_amount),
                format_usd(tx.follower.usd_amount),
            )?;

            if self.options.mode == ViewMode::Verbose {
                writeln!(
                    f,
                    "           leader   {} {} {}",
                    format_unix(tx.leader.timestamp),
                    tx.leader.amount,
                    tx.leader.url
                )?;
                writeln!(
                    f,
                    "           follower {} {} {}",
                    format_unix(tx.follower.timestamp),
                    tx.follower.amount,
                    tx.follower.url
                )?;
            }
        }

        Ok(())
    }
}
