//! Sequential download of selected font files.

use std::{
    fs::write,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    config::FONT_EXTENSION,
    error::{Error, Result},
    http::Fetch,
    selection::DownloadTask,
};

/// Target file for a family/variant pair inside `dir`.
///
/// `Saira Semi Condensed` + `100italic` becomes `saira_semi_condensed-100italic.ttf`.
pub fn target_path(dir: &Path, family: &str, variant: &str) -> PathBuf {
    let family = family.to_lowercase().replace(' ', "_");
    let variant = variant.to_lowercase();
    dir.join(format!("{family}-{variant}.{FONT_EXTENSION}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded { path: PathBuf, bytes: usize },
    /// The target file already existed; nothing was fetched.
    Skipped { path: PathBuf },
}

impl DownloadOutcome {
    pub fn path(&self) -> &Path {
        match self {
            DownloadOutcome::Downloaded { path, .. } | DownloadOutcome::Skipped { path } => path,
        }
    }
}

/// Per-task outcomes of [`download_all`], in task order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub outcomes: Vec<DownloadOutcome>,
}

impl DownloadReport {
    pub fn downloaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DownloadOutcome::Downloaded { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.downloaded()
    }

    pub fn bytes(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                DownloadOutcome::Downloaded { bytes, .. } => *bytes,
                DownloadOutcome::Skipped { .. } => 0,
            })
            .sum()
    }
}

fn download_task(
    fetcher: &impl Fetch,
    task: &DownloadTask,
    output_dir: &Path,
) -> Result<DownloadOutcome> {
    let path = target_path(output_dir, &task.family, &task.variant);
    if path.is_file() {
        println!("    Is already present in file \"{}\"", path.display());
        println!("    Download skipped");
        return Ok(DownloadOutcome::Skipped { path });
    }

    let bytes = fetcher.get(&task.url)?;
    write(&path, &bytes).map_err(|source| Error::FileWrite { path: path.clone(), source })?;

    println!("    Received {} bytes", bytes.len());
    println!("    Saved to file \"{}\"", path.display());
    info!("{} {} -> {}", task.family, task.variant, path.display());
    Ok(DownloadOutcome::Downloaded { path, bytes: bytes.len() })
}

/// Download every task into `output_dir`, skipping files already on disk.
///
/// Stops at the first failure; files written before it stay in place.
pub fn download_all(
    fetcher: &impl Fetch,
    tasks: &[DownloadTask],
    output_dir: &Path,
) -> Result<DownloadReport> {
    let total = tasks.len();
    println!("  Got {total} font files to download");

    let mut report = DownloadReport::default();
    for (i, task) in tasks.iter().enumerate() {
        println!("  File {} of {total}", i + 1);
        println!("    Family {:?}", task.family);
        println!("    Variant {:?}", task.variant);
        report.outcomes.push(download_task(fetcher, task, output_dir)?);
    }

    info!("Downloaded {} files, skipped {}", report.downloaded(), report.skipped());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, read};

    use super::*;
    use crate::test_support::FakeFetcher;

    fn task(family: &str, variant: &str, url: &str) -> DownloadTask {
        DownloadTask { family: family.into(), variant: variant.into(), url: url.into() }
    }

    #[test]
    fn test_target_path() {
        let dir = Path::new("fonts");
        assert_eq!(
            target_path(dir, "Saira Semi Condensed", "100italic"),
            PathBuf::from("fonts/saira_semi_condensed-100italic.ttf")
        );
        assert_eq!(target_path(dir, "Tourney", "Regular"), PathBuf::from("fonts/tourney-regular.ttf"));
    }

    #[test]
    fn test_target_path_is_deterministic() {
        let dir = Path::new("out");
        assert_eq!(target_path(dir, "Open Sans", "italic"), target_path(dir, "Open Sans", "italic"));
    }

    #[test]
    fn test_downloads_and_writes_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::default().with("http://x/r.ttf", b"regular-bytes".to_vec());

        let report =
            download_all(&fetcher, &[task("Tourney", "regular", "http://x/r.ttf")], tmp.path())
                .unwrap();

        let path = tmp.path().join("tourney-regular.ttf");
        assert_eq!(report.outcomes, [DownloadOutcome::Downloaded { path: path.clone(), bytes: 13 }]);
        assert_eq!(read(path).unwrap(), b"regular-bytes");
    }

    #[test]
    fn test_second_run_skips_everything() {
        let tmp = tempfile::tempdir().unwrap();
        let tasks = [
            task("Tourney", "regular", "http://x/r.ttf"),
            task("Tourney", "italic", "http://x/i.ttf"),
        ];
        let first = FakeFetcher::default()
            .with("http://x/r.ttf", b"r".to_vec())
            .with("http://x/i.ttf", b"i".to_vec());
        download_all(&first, &tasks, tmp.path()).unwrap();

        let second = FakeFetcher::default();
        let report = download_all(&second, &tasks, tmp.path()).unwrap();

        assert!(second.requests().is_empty());
        assert_eq!(report.skipped(), 2);
        assert_eq!(report.bytes(), 0);
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tourney-regular.ttf");
        write(&path, b"old").unwrap();
        let fetcher = FakeFetcher::default().with("http://x/r.ttf", b"new".to_vec());

        download_all(&fetcher, &[task("Tourney", "regular", "http://x/r.ttf")], tmp.path()).unwrap();

        assert_eq!(read(&path).unwrap(), b"old");
        assert!(fetcher.requests().is_empty());
    }

    #[test]
    fn test_network_error_aborts_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::default().with("http://x/c.ttf", b"c".to_vec());
        let tasks = [
            task("Tourney", "regular", "http://x/missing.ttf"),
            task("Tourney", "italic", "http://x/c.ttf"),
        ];

        let err = download_all(&fetcher, &tasks, tmp.path()).unwrap_err();

        assert!(err.is_network());
        assert_eq!(fetcher.requests(), ["http://x/missing.ttf"]);
        assert!(!tmp.path().join("tourney-italic.ttf").exists());
    }

    #[test]
    fn test_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("not-created");
        let fetcher = FakeFetcher::default().with("http://x/r.ttf", b"r".to_vec());

        let err = download_all(&fetcher, &[task("Tourney", "regular", "http://x/r.ttf")], &missing)
            .unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }

    #[test]
    fn test_directory_at_target_is_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        create_dir(tmp.path().join("tourney-regular.ttf")).unwrap();
        let fetcher = FakeFetcher::default().with("http://x/r.ttf", b"r".to_vec());

        let err = download_all(&fetcher, &[task("Tourney", "regular", "http://x/r.ttf")], tmp.path())
            .unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}
