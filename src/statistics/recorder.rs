//! Run-scoped statistics writing
//!
//! [`StatisticsRecorder`] keeps one buffered append handle open instead of
//! reopening the artifact for every sample. [`StatisticsRun`] ties that
//! handle to a fresh artifact: starting a run deletes stale samples,
//! finishing it flushes and optionally archives the file.

use super::{compute_samples, ReferencePolicy, StatisticsArtifact};
use crate::body::Body;
use crate::error::Result;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Buffered sample writer holding the artifact open
///
/// Buffered lines reach the file on [`finish`](Self::finish), when the
/// buffer fills, or when the recorder is dropped.
pub struct StatisticsRecorder {
    writer: BufWriter<File>,
    policy: ReferencePolicy,
    samples_written: usize,
}

impl StatisticsRecorder {
    /// Opens `artifact` in append mode, creating it if absent
    pub fn open(artifact: &StatisticsArtifact, policy: ReferencePolicy) -> Result<Self> {
        let writer = BufWriter::new(artifact.open_append()?);
        Ok(Self {
            writer,
            policy,
            samples_written: 0,
        })
    }

    /// Total samples written through this recorder
    pub fn samples_written(&self) -> usize {
        self.samples_written
    }

    /// Samples every non-star body at `time`
    ///
    /// # Returns
    /// Number of samples written by this call
    pub fn record(&mut self, bodies: &[Body], time: f64) -> Result<usize> {
        let samples = compute_samples(bodies, time, self.policy)?;
        for sample in &samples {
            writeln!(self.writer, "{}", sample)?;
        }
        self.samples_written += samples.len();
        debug!("Recorded {} samples at t={}", samples.len(), time);
        Ok(samples.len())
    }

    /// Flushes buffered samples and closes the file
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for StatisticsRecorder {
    fn drop(&mut self) {
        if let Err(err) = self.writer.flush() {
            warn!("Failed to flush statistics on close: {}", err);
        }
    }
}

/// One simulation run's ownership of a statistics artifact
pub struct StatisticsRun {
    artifact: StatisticsArtifact,
    recorder: StatisticsRecorder,
}

impl StatisticsRun {
    /// Starts a run: removes stale samples, then opens the artifact
    ///
    /// # Arguments
    /// * `artifact` - Where the run's samples go
    /// * `policy` - Reference body selection for every sample
    pub fn start(artifact: StatisticsArtifact, policy: ReferencePolicy) -> Result<Self> {
        artifact.reset()?;
        let recorder = StatisticsRecorder::open(&artifact, policy)?;
        info!("Started statistics run at {}", artifact.path().display());
        Ok(Self { artifact, recorder })
    }

    pub fn artifact(&self) -> &StatisticsArtifact {
        &self.artifact
    }

    pub fn samples_written(&self) -> usize {
        self.recorder.samples_written()
    }

    /// Samples every non-star body at `time`
    pub fn record(&mut self, bodies: &[Body], time: f64) -> Result<usize> {
        self.recorder.record(bodies, time)
    }

    /// Flushes and closes the artifact, handing it back for reading
    pub fn finish(self) -> Result<StatisticsArtifact> {
        let StatisticsRun { artifact, recorder } = self;
        let written = recorder.samples_written();
        recorder.finish()?;
        info!(
            "Finished statistics run: {} samples in {}",
            written,
            artifact.path().display()
        );
        Ok(artifact)
    }

    /// Finishes the run and moves the artifact to `destination`
    pub fn finish_and_archive(self, destination: impl Into<PathBuf>) -> Result<StatisticsArtifact> {
        let artifact = self.finish()?;
        artifact.archive(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyKind;
    use crate::error::OrreryError;
    use cgmath::Vector2;

    fn system() -> Vec<Body> {
        vec![
            Body::new(
                BodyKind::Star,
                10.0,
                "red",
                1000.0,
                Vector2::new(0.0, 0.0),
                Vector2::new(0.0, 0.0),
            ),
            Body::new(
                BodyKind::Planet,
                5.0,
                "blue",
                10.0,
                Vector2::new(3.0, 4.0),
                Vector2::new(0.0, 1.0),
            ),
        ]
    }

    #[test]
    fn test_run_discards_stale_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.txt");
        std::fs::write(&path, "9 9 9\n9 9 9\n").unwrap();

        let mut run = StatisticsRun::start(StatisticsArtifact::new(&path), ReferencePolicy::default())
            .unwrap();
        run.record(&system(), 0.0).unwrap();
        run.record(&system(), 0.5).unwrap();
        assert_eq!(run.samples_written(), 2);

        let artifact = run.finish().unwrap();
        let samples = artifact.read_samples().unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].time, 0.5);
        assert_eq!(samples[1].distance, 5.0);
        assert_eq!(samples[1].speed, 1.0);
    }

    #[test]
    fn test_dropped_recorder_flushes() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = StatisticsArtifact::new(dir.path().join("stats.txt"));
        {
            let mut recorder = StatisticsRecorder::open(&artifact, ReferencePolicy::LastStar).unwrap();
            recorder.record(&system(), 1.0).unwrap();
        }
        assert_eq!(artifact.read_samples().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_record_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = StatisticsArtifact::new(dir.path().join("stats.txt"));
        let mut run = StatisticsRun::start(artifact, ReferencePolicy::SingleStar).unwrap();

        let planets_only = vec![system().remove(1)];
        let err = run.record(&planets_only, 0.0).unwrap_err();
        assert!(matches!(err, OrreryError::MissingReference));

        let artifact = run.finish().unwrap();
        assert!(artifact.read_samples().unwrap().is_empty());
    }

    #[test]
    fn test_finish_and_archive() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = StatisticsArtifact::new(dir.path().join("stats.txt"));
        let mut run = StatisticsRun::start(artifact.clone(), ReferencePolicy::SingleStar).unwrap();
        run.record(&system(), 2.0).unwrap();

        let archived = run.finish_and_archive(dir.path().join("archive.txt")).unwrap();
        assert!(!artifact.exists());
        assert_eq!(archived.read_samples().unwrap().len(), 1);
    }
}
