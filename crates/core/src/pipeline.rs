//! The provision, fetch, select and download sequence.

use std::time::Instant;

use log::info;

use crate::{
    catalogue::{CatalogueStats, fetch_catalogue},
    config::Config,
    download::{DownloadReport, download_all},
    error::Result,
    http::Fetch,
    io::{Provisioned, ensure_directory},
    selection::{DownloadTask, Selector},
};

/// What a completed [`run`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub directory: Provisioned,
    pub catalogue: CatalogueStats,
    pub selected: usize,
    pub download: DownloadReport,
}

fn stage<T>(name: &str, step: usize, total: usize, f: impl FnOnce() -> Result<T>) -> Result<T> {
    println!("\n[{step}/{total}] {name}");
    let start = Instant::now();
    let value = f()?;
    info!("{name} finished in {:.2}s", start.elapsed().as_secs_f64());
    Ok(value)
}

fn print_indented(text: impl ToString) {
    for line in text.to_string().lines() {
        println!("    {line}");
    }
}

fn fetch_and_select(
    config: &Config,
    selector: &Selector,
    fetcher: &impl Fetch,
    offset: usize,
    total: usize,
) -> Result<(CatalogueStats, Vec<DownloadTask>)> {
    let (catalogue, stats) = stage("Catalogue", offset + 1, total, || {
        let catalogue = fetch_catalogue(fetcher, &config.catalogue_url())?;
        let stats = catalogue.stats();
        println!("  Downloaded");
        println!("  Contains");
        print_indented(stats);
        Ok((catalogue, stats))
    })?;

    let tasks = stage("Selection", offset + 2, total, || {
        println!("  Regex criteria");
        print_indented(&config.criteria);
        let tasks = selector.select(catalogue.records());
        println!("  Found {} matching font files", tasks.len());
        Ok(tasks)
    })?;

    Ok((stats, tasks))
}

/// Run all four stages against `config`, stopping at the first error.
pub fn run(config: &Config, fetcher: &impl Fetch) -> Result<RunSummary> {
    // Bad patterns are reported before anything touches disk or network.
    let selector = Selector::new(&config.criteria)?;

    let directory = stage("Directory", 1, 4, || {
        println!("  Name \"{}\"", config.output_dir.display());
        let provisioned = ensure_directory(&config.output_dir)?;
        match provisioned {
            Provisioned::Created => println!("  Created"),
            Provisioned::AlreadyPresent => println!("  Is already present, creation skipped"),
        }
        Ok(provisioned)
    })?;

    let (catalogue, tasks) = fetch_and_select(config, &selector, fetcher, 1, 4)?;

    let download = stage("Download", 4, 4, || download_all(fetcher, &tasks, &config.output_dir))?;

    Ok(RunSummary { directory, catalogue, selected: tasks.len(), download })
}

/// Fetch and select only; nothing is written to disk.
pub fn list(config: &Config, fetcher: &impl Fetch) -> Result<Vec<DownloadTask>> {
    let selector = Selector::new(&config.criteria)?;
    let (_, tasks) = fetch_and_select(config, &selector, fetcher, 0, 2)?;
    Ok(tasks)
}
