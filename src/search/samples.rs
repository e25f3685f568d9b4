//! Samples data lookup.
//!
//! Looks for a file in the samples data tree: explicitly added search
//! paths, the directory named by `OPENCV_SAMPLES_DATA_PATH`, and
//! `samples/data` under the working directory or any of its ancestors.
//! Subdirectories are never searched.

use crate::constants::{env, search};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Search configuration for samples data.
#[derive(Debug, Clone, Default)]
pub struct SamplesSearch {
    search_paths: Vec<PathBuf>,
    data_root: Option<PathBuf>,
    start_dir: Option<PathBuf>,
}

impl SamplesSearch {
    /// An empty search that finds nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search configured from the process environment and working directory.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            search_paths: Vec::new(),
            data_root: std::env::var_os(env::SAMPLES_DATA_PATH).map(PathBuf::from),
            start_dir: std::env::current_dir().ok(),
        }
    }

    /// Add a directory to search. Later additions are searched first.
    #[must_use]
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Set the samples data root.
    #[must_use]
    pub fn with_data_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_root = Some(path.into());
        self
    }

    /// Set the directory whose ancestors are walked for `samples/data`.
    #[cfg(test)]
    #[must_use]
    pub fn with_start_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(path.into());
        self
    }

    /// Candidate locations for `filename`, in search order.
    fn candidates(&self, filename: &str) -> Vec<PathBuf> {
        let mut out: Vec<PathBuf> = self
            .search_paths
            .iter()
            .rev()
            .map(|dir| dir.join(filename))
            .collect();

        if let Some(root) = &self.data_root {
            out.push(root.join(filename));
        }

        if let Some(start) = &self.start_dir {
            let [samples, data] = search::SAMPLES_DATA_DIR;
            out.extend(
                start
                    .ancestors()
                    .map(|dir| dir.join(samples).join(data).join(filename)),
            );
        }

        out
    }

    /// Find `filename`, returning the first existing candidate.
    #[must_use]
    pub fn find(&self, filename: &str) -> Option<PathBuf> {
        if Path::new(filename).is_absolute() {
            return None;
        }
        self.candidates(filename).into_iter().find(|path| {
            debug!("Checking samples data: {}", path.display());
            path.exists()
        })
    }
}
