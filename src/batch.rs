use crate::model::TrainerRecord;
use crate::resolver::resolve;
use crate::tables::LookupTables;
use anyhow::Context;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Write the untouched record when its name cannot be localized.
    pub copy_unresolved: bool,
    pub parallel: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub discovered: usize,
    pub processed: usize,
    pub skipped: usize,
}

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Localized { original: String, localized: String },
    Unresolved { reason: String, original: String },
    MissingName,
    Failed { file: String, error: String },
}

impl FileOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, FileOutcome::Localized { .. })
    }

    /// Report line for stdout, if this outcome prints one.
    pub fn report_line(&self) -> Option<String> {
        match self {
            FileOutcome::Localized {
                original,
                localized,
            } => Some(format!("[ok] {original} -> {localized}")),
            FileOutcome::Unresolved { reason, original } => {
                Some(format!("[skip] {reason}: {original}"))
            }
            FileOutcome::MissingName => None,
            FileOutcome::Failed { file, error } => Some(format!("[skip] {file}: {error}")),
        }
    }
}

/// Non-recursive list of `*.json` files, sorted by file name.
pub fn discover_inputs(input_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read input directory {}", input_dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", input_dir.display()))?
            .path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

pub fn process_file(
    src: &Path,
    output_dir: &Path,
    tables: &LookupTables,
    copy_unresolved: bool,
) -> FileOutcome {
    let file = src
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| src.display().to_string());

    let mut trainer = match read_record(src) {
        Ok(trainer) => trainer,
        Err(err) => {
            return FileOutcome::Failed {
                file,
                error: format!("unreadable: {err:#}"),
            }
        }
    };

    let Some(original) = trainer.name().map(str::to_string) else {
        tracing::debug!(file = %file, "no name field");
        return FileOutcome::MissingName;
    };

    let outcome = match resolve(&original, &trainer, tables) {
        Ok(localized) => {
            trainer.set_name(localized.clone());
            FileOutcome::Localized {
                original,
                localized,
            }
        }
        Err(unresolved) => FileOutcome::Unresolved {
            reason: unresolved.to_string(),
            original,
        },
    };
    if !outcome.is_processed() && !copy_unresolved {
        return outcome;
    }

    let out = output_dir.join(&file);
    if let Err(err) = write_record(&out, &trainer) {
        return FileOutcome::Failed {
            file,
            error: format!("write failed: {err:#}"),
        };
    }
    tracing::debug!(path = %out.display(), "wrote trainer");
    outcome
}

pub fn run_batch(opts: &BatchOptions, tables: &LookupTables) -> anyhow::Result<Summary> {
    std::fs::create_dir_all(&opts.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            opts.output_dir.display()
        )
    })?;
    let files = discover_inputs(&opts.input_dir)?;
    println!("json files found: {}", files.len());

    let processed = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let handle = |src: &PathBuf| {
        let outcome = process_file(src, &opts.output_dir, tables, opts.copy_unresolved);
        if let Some(line) = outcome.report_line() {
            println!("{line}");
        }
        let counter = if outcome.is_processed() {
            &processed
        } else {
            &skipped
        };
        counter.fetch_add(1, Ordering::Relaxed);
    };

    if opts.parallel {
        files.par_iter().for_each(handle);
    } else {
        files.iter().for_each(handle);
    }

    let summary = Summary {
        discovered: files.len(),
        processed: processed.into_inner(),
        skipped: skipped.into_inner(),
    };
    println!("----");
    println!("processed: {}", summary.processed);
    println!("skipped:   {}", summary.skipped);
    Ok(summary)
}

fn read_record(path: &Path) -> anyhow::Result<TrainerRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    TrainerRecord::from_value(value)
}

fn write_record(path: &Path, trainer: &TrainerRecord) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(trainer)?;
    std::fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
