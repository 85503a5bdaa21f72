//! Localizes trainer display names in per-trainer JSON records.
//!
//! The entry point for the batch is [`run`]; the name policy itself is the
//! pure function [`resolver::resolve`].

pub mod batch;
pub mod gender;
pub mod model;
pub mod resolver;
pub mod tables;

pub use crate::batch::{BatchOptions, FileOutcome, Summary};
pub use crate::model::{Gender, TrainerRecord};
pub use crate::resolver::{resolve, Unresolved};
pub use crate::tables::{LookupTables, TitleEntry};

use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "trainers_original";
pub const DEFAULT_OUTPUT_DIR: &str = "data/rctmod/trainers";
pub const DEFAULT_TITLE_MAP: &str = "title_map.json";
pub const DEFAULT_PROPER_NAME_MAP: &str = "proper_name_map.json";

/// Run configuration. Paths left as `None` fall back to the fixed layout
/// under `base_dir`.
#[derive(Debug, Clone)]
pub struct Options {
    pub base_dir: PathBuf,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub title_map: Option<PathBuf>,
    pub proper_name_map: Option<PathBuf>,
    pub copy_unresolved: bool,
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            input_dir: None,
            output_dir: None,
            title_map: None,
            proper_name_map: None,
            copy_unresolved: false,
            parallel: false,
        }
    }
}

impl Options {
    fn or_base(&self, path: &Option<PathBuf>, default: &str) -> PathBuf {
        path.clone().unwrap_or_else(|| self.base_dir.join(default))
    }

    pub fn title_map_path(&self) -> PathBuf {
        self.or_base(&self.title_map, DEFAULT_TITLE_MAP)
    }

    pub fn proper_name_map_path(&self) -> PathBuf {
        self.or_base(&self.proper_name_map, DEFAULT_PROPER_NAME_MAP)
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            input_dir: self.or_base(&self.input_dir, DEFAULT_INPUT_DIR),
            output_dir: self.or_base(&self.output_dir, DEFAULT_OUTPUT_DIR),
            copy_unresolved: self.copy_unresolved,
            parallel: self.parallel,
        }
    }
}

pub fn run(opts: &Options) -> anyhow::Result<Summary> {
    println!("trainer name localization started");
    let tables = LookupTables::load(&opts.title_map_path(), &opts.proper_name_map_path())?;
    let batch = opts.batch_options();
    tracing::info!(
        input = %batch.input_dir.display(),
        output = %batch.output_dir.display(),
        parallel = batch.parallel,
        "starting batch"
    );
    batch::run_batch(&batch, &tables)
}
