// src/scrape/matches.rs
use std::{path::PathBuf, sync::mpsc, thread, time::Duration};

use crate::{
    config::options::{AppOptions, ScrapeLimits},
    core::{browser, net},
    data::{Dataset, Match},
    error::{PanelError, Result},
    progress::Progress,
    specs::match_list::{self, RawMatch},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListPage {
    Upcoming,
    Finished,
}

impl ListPage {
    fn label(self) -> &'static str {
        match self {
            ListPage::Upcoming => "Upcoming",
            ListPage::Finished => "Finished",
        }
    }
}

/// Plain HTTP first; the rendered DOM when that yields nothing and a browser exists.
fn fetch_list(
    url: &str,
    limit: usize,
    browser_bin: Option<&PathBuf>,
    timeout: Duration,
) -> Result<Vec<RawMatch>> {
    match net::http_get(url) {
        Ok(html) => {
            let rows = match_list::parse_doc(&html, limit);
            if !rows.is_empty() || browser_bin.is_none() {
                return Ok(rows);
            }
            logd!("{url}: no rows over plain HTTP, retrying with the browser");
        }
        Err(e) if browser_bin.is_none() => return Err(e),
        Err(e) => logw!("{e}; retrying with the browser"),
    }

    let Some(bin) = browser_bin else { return Ok(Vec::new()) };
    let dom = browser::dump_dom(bin, url, timeout)?;
    Ok(match_list::parse_doc(&dom, limit))
}

/// Light scrape of the fixture and result lists, fetched concurrently.
///
/// A page that fails contributes an empty list; only when both fail is the
/// whole refresh an error.
pub fn collect_matches(
    opts: &AppOptions,
    limits: ScrapeLimits,
    progress: Option<&mut dyn Progress>,
) -> Result<Dataset> {
    collect_matches_with(opts, browser::find_browser(&opts.browser), limits, progress)
}

/// `collect_matches` with an already-resolved browser (`None`: plain HTTP only).
pub fn collect_matches_with(
    opts: &AppOptions,
    browser_bin: Option<PathBuf>,
    limits: ScrapeLimits,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset> {
    let timeout = opts.browser.timeout();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
        p.log("Refreshing match lists…");
    }

    let jobs = [
        (ListPage::Upcoming, opts.source.upcoming_url(), limits.upcoming),
        (ListPage::Finished, opts.source.finished_url(), limits.finished),
    ];

    let (tx, rx) = mpsc::channel::<(ListPage, Result<Vec<RawMatch>>)>();
    for (page, url, limit) in jobs {
        let tx = tx.clone();
        let bin = browser_bin.clone();
        thread::spawn(move || {
            let result = fetch_list(&url, limit, bin.as_ref(), timeout);
            let _ = tx.send((page, result));
        });
    }
    drop(tx); // main thread is sole receiver now

    let mut ds = Dataset::empty();
    let mut failures = 0usize;
    for (page, result) in rx.iter() {
        match result {
            Ok(rows) => {
                let matches: Vec<Match> = rows.iter().map(RawMatch::to_match).collect();
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(page.label(), matches.len());
                }
                match page {
                    ListPage::Upcoming => ds.upcoming = matches,
                    ListPage::Finished => ds.finished = matches,
                }
            }
            Err(e) => {
                failures += 1;
                loge!("{} list: {e}", page.label());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(page.label(), &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    if failures >= 2 {
        return Err(PanelError::NothingScraped);
    }
    let (u, f) = ds.counts();
    logf!("Light scrape: {u} upcoming, {f} finished");
    Ok(ds)
}
