//! Command-line interface for batch recovery of PNG files

use crate::io::configuration::{
    DEFAULT_DISTANCE_THRESHOLD, DEFAULT_HEALTH_LIMIT, DEFAULT_LOG_LEVEL, DEFAULT_MAX_DEPTH,
    MASK_SUFFIX, OUTPUT_SUFFIX,
};
use crate::io::error::{ErrorContext, Result, WithContext, invalid_source};
use crate::io::image::{load_grayscale, save_grayscale};
use crate::io::progress::{FileStage, ProgressManager};
use crate::io::visualization::export_mask;
use crate::recovery::{IntensityCeiling, RecoveryConfig, RecoveryReport, recover};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pixel-recovery")]
#[command(
    author,
    version,
    about = "Repair stuck and saturated pixels in grayscale images"
)]
/// Command-line arguments for the pixel recovery tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Maximum number of steps each directional search takes
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Largest tolerated distance difference between the two anchors of a line
    #[arg(short = 't', long, default_value_t = DEFAULT_DISTANCE_THRESHOLD)]
    pub distance_threshold: f64,

    /// Intensities at or above this value are treated as unhealthy
    #[arg(short = 'l', long, default_value_t = DEFAULT_HEALTH_LIMIT)]
    pub health_limit: u8,

    /// Skip the second pass over pixels still unhealthy after the first
    #[arg(short, long)]
    pub single_pass: bool,

    /// Also write a mask overlay highlighting recovered pixels
    #[arg(short, long)]
    pub mask: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter to install, lowered to warnings when quiet
    pub fn effective_log_level(&self) -> &str {
        if self.quiet { "warn" } else { &self.log_level }
    }

    /// Recovery configuration described by the flags
    pub const fn recovery_config(&self) -> RecoveryConfig {
        RecoveryConfig {
            max_depth: self.max_depth,
            distance_threshold: self.distance_threshold,
            second_pass: !self.single_pass,
        }
    }

    /// Health predicate described by the flags
    pub const fn health_predicate(&self) -> IntensityCeiling {
        IntensityCeiling::new(self.health_limit)
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the report of every processed file, in processing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, target validation
    /// fails or a file cannot be processed
    pub fn process(&mut self) -> Result<Vec<(PathBuf, RecoveryReport)>> {
        self.cli.recovery_config().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "Nothing to process");
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let report = self.process_file(file, index)?;
            reports.push((file.clone(), report));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_png(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_source(&"Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let context = || ErrorContext {
                path: Some(self.cli.target.clone()),
                operation: Some("read directory"),
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).with_context(context())? {
                let path = entry.with_context(context())?.path();
                if Self::is_png(&path)
                    && !Self::is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_source(&"Target must be a PNG file or directory"))
        }
    }

    fn is_png(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
    }

    /// Whether a file was written by an earlier run of this tool
    pub fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(MASK_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            tracing::info!(input = %input_path.display(), "Skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<RecoveryReport> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let mut image = load_grayscale(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, FileStage::Recover);
        }

        let config = self.cli.recovery_config();
        let predicate = self.cli.health_predicate();
        let report = recover(&mut image, &predicate, &config)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, FileStage::Save);
        }

        save_grayscale(&image, &output_path)?;

        if self.cli.mask {
            export_mask(&image, &report, &Self::get_mask_path(input_path))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        tracing::info!(
            input = %input_path.display(),
            output = %output_path.display(),
            unhealthy = report.unhealthy,
            changed = report.changed,
            unrecovered = report.unrecovered.count(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "Recovered image"
        );

        Ok(report)
    }

    /// Path of the recovered image written for `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, OUTPUT_SUFFIX)
    }

    /// Path of the mask overlay written for `input_path`
    pub fn get_mask_path(input_path: &Path) -> PathBuf {
        Self::sibling_with_suffix(input_path, MASK_SUFFIX)
    }

    fn sibling_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            suffix,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
