//! The statistics artifact on disk and its lifecycle
//!
//! A [`StatisticsArtifact`] is just a path with the operations a run needs:
//! delete any stale file before the first sample, append samples, read them
//! all back for plotting, and move the finished file aside.

use super::{parse_statistics_line, Sample};
use crate::error::{OrreryError, Result};
use crate::loader::is_skippable;
use log::{debug, info};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Handle to an append-only statistics file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatisticsArtifact {
    path: PathBuf,
}

impl StatisticsArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Deletes the artifact so that a new run starts from nothing
    ///
    /// Succeeds when the file is already absent, so calling it twice is
    /// harmless. Any other filesystem error is returned unchanged.
    ///
    /// # Returns
    /// Whether a file was actually removed
    pub fn reset(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed statistics file {}", self.path.display());
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Opens the artifact for appending, creating it if needed
    pub(crate) fn open_append(&self) -> Result<File> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(file)
    }

    /// Appends samples, one line each, and closes the file again
    pub fn append(&self, samples: &[Sample]) -> Result<()> {
        let mut writer = BufWriter::new(self.open_append()?);
        for sample in samples {
            writeln!(writer, "{}", sample)?;
        }
        writer.flush()?;
        debug!(
            "Appended {} samples to {}",
            samples.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Reads every sample in file order
    ///
    /// Blank and `#` comment lines are skipped. Any other line that is not
    /// exactly three real numbers fails the whole read.
    pub fn read_samples(&self) -> Result<Vec<Sample>> {
        let file = File::open(&self.path)?;
        read_samples_from(BufReader::new(file))
    }

    /// Moves the artifact to `destination` and returns a handle to it
    pub fn archive(&self, destination: impl Into<PathBuf>) -> Result<StatisticsArtifact> {
        let destination = destination.into();
        fs::rename(&self.path, &destination)?;
        info!(
            "Archived statistics {} -> {}",
            self.path.display(),
            destination.display()
        );
        Ok(StatisticsArtifact::new(destination))
    }
}

/// Reads samples from any buffered source using the artifact line rules
pub fn read_samples_from<R: BufRead>(reader: R) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if is_skippable(&line) {
            continue;
        }
        let sample = parse_statistics_line(&line).map_err(|source| OrreryError::Statistics {
            line: index + 1,
            source,
        })?;
        samples.push(sample);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64) -> Sample {
        Sample {
            speed: 1.5,
            distance: 2.5,
            time,
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = StatisticsArtifact::new(dir.path().join("stats.txt"));

        artifact.append(&[sample(0.0)]).unwrap();
        assert!(artifact.exists());

        assert!(artifact.reset().unwrap());
        assert!(!artifact.exists());
        assert!(!artifact.reset().unwrap());
        assert!(matches!(artifact.read_samples(), Err(OrreryError::Io(_))));
    }

    #[test]
    fn test_append_accumulates_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = StatisticsArtifact::new(dir.path().join("stats.txt"));

        artifact.append(&[sample(0.0), sample(1.0)]).unwrap();
        artifact.append(&[sample(2.0)]).unwrap();
        artifact.append(&[]).unwrap();

        let times: Vec<f64> = artifact
            .read_samples()
            .unwrap()
            .iter()
            .map(|s| s.time)
            .collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_read_skips_comments_and_reports_bad_lines() {
        let good = "# speed distance time\n\n1 2 3\n";
        let samples = read_samples_from(io::Cursor::new(good)).unwrap();
        assert_eq!(samples.len(), 1);

        let bad = "1 2 3\n4 5\n";
        let err = read_samples_from(io::Cursor::new(bad)).unwrap_err();
        match err {
            OrreryError::Statistics { line, source } => {
                assert_eq!(line, 2);
                assert!(source.is_format());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_archive_moves_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = StatisticsArtifact::new(dir.path().join("stats.txt"));
        artifact.append(&[sample(4.0)]).unwrap();

        let archived = artifact.archive(dir.path().join("run-1.txt")).unwrap();
        assert!(!artifact.exists());
        assert_eq!(archived.read_samples().unwrap(), vec![sample(4.0)]);
    }
}
