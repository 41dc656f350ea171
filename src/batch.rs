use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lib_ffmpeg::{EncodeSettings, Transcoder, WEB_OPTIMIZED};

/// The videos expected in the source directory, in the order they are converted.
pub const VIDEO_FILES: &[&str] = &[
    "Christmas_Work.mp4",
    "Christmas_Sick.mp4",
    "Christmas_Period.mp4",
    "Christmas_Freaky.mp4",
    "Christmas_Mad.mp4",
    "Christmas_Sad.mp4",
    "Christmas_Missing.mp4",
    "Christmas_Hungry.mp4",
    "Christmas_Obsessed.mp4",
    "Christmas_Freaky_2.mp4",
    "Christmas_Stubborn.mp4",
    "Christmas_Overwhelmed.mp4",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub name: String,
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl WorkItem {
    pub fn new(name: &str, source_dir: &Path, dest_dir: &Path) -> WorkItem {
        Self {
            name: name.to_string(),
            source: source_dir.join(name),
            dest: dest_dir.join(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted,
    /// Encoder exited unsuccessfully, with whatever it wrote to stderr.
    Failed(String),
    SourceMissing,
}

/// Re-encodes a list of videos from one directory into another, one at a time.
pub struct BatchConverter<T> {
    transcoder: T,
    settings: EncodeSettings,
    source_dir: PathBuf,
    dest_dir: PathBuf,
}

impl<T: Transcoder> BatchConverter<T> {
    pub fn new(transcoder: T, source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            transcoder,
            settings: WEB_OPTIMIZED,
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
        }
    }

    pub fn transcoder(&self) -> &T {
        &self.transcoder
    }

    pub fn work_item(&self, name: &str) -> WorkItem {
        WorkItem::new(name, &self.source_dir, &self.dest_dir)
    }

    /// Converts every file in `files`, writing status lines to `out`.
    ///
    /// Missing sources and encoder failures are reported and skipped. Only
    /// faults like an unrunnable encoder or an uncreatable destination
    /// directory end the run early.
    pub async fn run(&self, files: &[&str], out: &mut impl Write) -> Result<()> {
        tokio::fs::create_dir_all(&self.dest_dir)
            .await
            .with_context(|| format!("failed to create {}", self.dest_dir.display()))?;

        for name in files {
            let item = self.work_item(name);
            self.convert_one(&item, out).await?;
        }

        writeln!(out)?;
        writeln!(out, "Conversion complete!")?;
        writeln!(out, "Converted videos are in: {}", self.dest_dir.display())?;
        Ok(())
    }

    /// Expects the destination directory to exist already.
    pub async fn convert_one(&self, item: &WorkItem, out: &mut impl Write) -> Result<Outcome> {
        let exists = tokio::fs::try_exists(&item.source)
            .await
            .with_context(|| format!("failed to check {}", item.source.display()))?;
        if !exists {
            tracing::info!(source = %item.source.display(), "source missing");
            writeln!(out, "✗ File not found: {}", item.source.display())?;
            return Ok(Outcome::SourceMissing);
        }

        writeln!(out, "Converting {}...", item.name)?;
        let invocation = self
            .transcoder
            .transcode(&self.settings, &item.source, &item.dest)
            .await?;

        if invocation.success() {
            tracing::info!(file = %item.name, dest = %item.dest.display(), "converted");
            writeln!(out, "✓ Converted {}", item.name)?;
            Ok(Outcome::Converted)
        } else {
            let stderr = invocation.stderr.trim_end().to_string();
            tracing::info!(file = %item.name, status = ?invocation.status, %stderr, "conversion failed");
            writeln!(out, "✗ Failed to convert {}: {}", item.name, stderr)?;
            Ok(Outcome::Failed(stderr))
        }
    }
}
