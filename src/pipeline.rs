use tracing::{info, warn};

use crate::filter::{format_records, unique_candidates};
use crate::matcher::extract_candidates;
use crate::record::Record;
use crate::source::TextSource;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub sources: usize,
    pub failed_sources: usize,
    pub text_units: usize,
    pub candidates: usize,
    pub unique_candidates: usize,
    pub records: usize,
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub stats: RunStats,
}

/// Fetch every source in order and turn their posts into records.
///
/// A source that fails is logged and skipped; it never stops the run.
pub fn run<S, U>(source: &S, urls: &[U]) -> Extraction
where
    S: TextSource + ?Sized,
    U: AsRef<str>,
{
    let mut stats = RunStats::default();
    let mut candidates = Vec::new();

    for url in urls {
        let url = url.as_ref();
        stats.sources += 1;
        println!("Fetching {url}...");

        let units = match source.fetch_text_units(url) {
            Ok(units) => units,
            Err(e) => {
                warn!(url, error = %e, "source skipped");
                println!("  skipped: {e}");
                stats.failed_sources += 1;
                continue;
            }
        };

        let before = candidates.len();
        for unit in &units {
            candidates.extend(extract_candidates(unit));
        }
        info!(
            url,
            posts = units.len(),
            candidates = candidates.len() - before,
            "source processed"
        );
        stats.text_units += units.len();
    }

    stats.candidates = candidates.len();
    let unique = unique_candidates(candidates);
    stats.unique_candidates = unique.len();

    let records = format_records(&unique);
    stats.records = records.len();
    info!(?stats, "extraction finished");

    Extraction { records, stats }
}
