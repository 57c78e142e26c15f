use log::{info, warn};
use std::time::Duration;

use crate::delay_manager::{self, Sleeper};
use crate::results::{DetailLink, ResultTable};
use crate::fetcher::{Fetcher, Transport};

/// Fetches every identifier in order and collects the results.
///
/// After each identifier, found or not, a politeness delay of `politeness` plus up to a
/// second is taken on `sleeper`. Repeated identifiers are fetched again and overwrite
/// the earlier result.
pub fn run_batch<T, S, P>(
    identifiers: &[String],
    fetcher: &Fetcher<T, S>,
    sleeper: &P,
    politeness: Duration,
) -> ResultTable
where
    T: Transport,
    S: Sleeper,
    P: Sleeper + ?Sized,
{
    let mut table = ResultTable::new();
    let total = identifiers.len();

    for (i, identifier) in identifiers.iter().enumerate() {
        info!("[{}/{}] {} Processing...", i + 1, total, identifier);

        let link = fetcher.fetch(identifier);
        match &link {
            DetailLink::Found(_) => info!("{} Completed", identifier),
            DetailLink::NotFound => warn!("{} Failed", identifier),
        }

        if table.insert(identifier.clone(), link).is_some() {
            warn!(
                "{} appears more than once in the input; keeping the latest result",
                identifier
            );
        }

        delay_manager::politeness_delay(sleeper, politeness);
    }

    info!(
        "Processed {} identifiers, {} with a detail link.",
        total,
        table.found_count()
    );
    table
}
