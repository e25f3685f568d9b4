//! Input file resolution across the DNN data locations.

use crate::constants::{env, search};
use crate::error::{Error, Result};
use crate::search::SamplesSearch;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where [`FileFinder::find`] looks, in order after the path itself.
#[derive(Debug, Clone, Default)]
pub struct FileFinder {
    samples: SamplesSearch,
    local_data_dir: Option<PathBuf>,
    data_roots: Vec<PathBuf>,
}

impl FileFinder {
    /// A finder that only accepts paths that exist as given.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finder configured from the process environment.
    ///
    /// The local data directory is `../data/dnn` next to the running
    /// executable; data roots come from `OPENCV_DNN_TEST_DATA_PATH` and
    /// `OPENCV_TEST_DATA_PATH`, in that order.
    #[must_use]
    pub fn from_env() -> Self {
        let local_data_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(local_data_dir));
        let data_roots = env::DATA_ROOTS
            .iter()
            .filter_map(std::env::var_os)
            .map(PathBuf::from)
            .collect();

        Self {
            samples: SamplesSearch::from_env(),
            local_data_dir,
            data_roots,
        }
    }

    /// Replace the samples data search.
    #[must_use]
    pub fn with_samples(mut self, samples: SamplesSearch) -> Self {
        self.samples = samples;
        self
    }

    /// Set the local data directory.
    #[must_use]
    pub fn with_local_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_data_dir = Some(dir.into());
        self
    }

    /// Append an external data root; its `dnn` subdirectory is searched.
    #[must_use]
    pub fn with_data_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.data_roots.push(root.into());
        self
    }

    /// Resolve `filename` to an existing path.
    ///
    /// An empty name is returned unchanged without touching the
    /// filesystem. The first of these that exists wins: the name itself,
    /// the samples data search, the local data directory, then each data
    /// root's `dnn` subdirectory.
    pub fn find(&self, filename: &str) -> Result<PathBuf> {
        if filename.is_empty() {
            return Ok(PathBuf::new());
        }

        let path = Path::new(filename);
        if path.exists() {
            debug!("Found {filename} as given");
            return Ok(path.to_path_buf());
        }

        if let Some(found) = self.samples.find(filename) {
            info!("Resolved {filename} -> {}", found.display());
            return Ok(found);
        }

        let fallbacks = self.local_data_dir.iter().cloned().chain(
            self.data_roots
                .iter()
                .map(|root| root.join(search::DNN_SUBDIR)),
        );
        for dir in fallbacks {
            let candidate = dir.join(filename);
            debug!("Probing {}", candidate.display());
            if candidate.exists() {
                info!("Resolved {filename} -> {}", candidate.display());
                return Ok(candidate);
            }
        }

        Err(Error::FileNotFound {
            filename: filename.to_string(),
        })
    }
}

fn local_data_dir(base: &Path) -> PathBuf {
    search::LOCAL_DATA_DIR
        .iter()
        .fold(base.to_path_buf(), |dir, part| dir.join(part))
}

/// Resolve `filename` using the default search locations.
pub fn find_file(filename: &str) -> Result<PathBuf> {
    FileFinder::from_env().find(filename)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, unsafe_code)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_name_returned_unchanged() {
        assert_eq!(FileFinder::new().find("").unwrap(), PathBuf::new());
    }

    #[test]
    fn test_existing_path_returned_as_is() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("model.onnx");
        fs::write(&file, b"x").unwrap();

        let name = file.to_string_lossy().into_owned();
        assert_eq!(FileFinder::new().find(&name).unwrap(), file);
    }

    #[test]
    fn test_samples_search_before_local_dir() {
        let samples = tempdir().unwrap();
        let local = tempdir().unwrap();
        fs::write(samples.path().join("net.pb"), b"a").unwrap();
        fs::write(local.path().join("net.pb"), b"b").unwrap();

        let finder = FileFinder::new()
            .with_samples(SamplesSearch::new().with_data_root(samples.path()))
            .with_local_data_dir(local.path());
        assert_eq!(finder.find("net.pb").unwrap(), samples.path().join("net.pb"));
    }

    #[test]
    fn test_local_dir_before_data_roots() {
        let local = tempdir().unwrap();
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("dnn")).unwrap();
        fs::write(local.path().join("net.pb"), b"a").unwrap();
        fs::write(root.path().join("dnn").join("net.pb"), b"b").unwrap();

        let finder = FileFinder::new()
            .with_local_data_dir(local.path())
            .with_data_root(root.path());
        assert_eq!(finder.find("net.pb").unwrap(), local.path().join("net.pb"));
    }

    #[test]
    fn test_data_roots_in_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::create_dir_all(second.path().join("dnn")).unwrap();
        fs::write(second.path().join("dnn").join("weights.bin"), b"x").unwrap();

        let finder = FileFinder::new()
            .with_data_root(first.path())
            .with_data_root(second.path());
        assert_eq!(
            finder.find("weights.bin").unwrap(),
            second.path().join("dnn").join("weights.bin")
        );
    }

    #[test]
    fn test_data_root_without_dnn_subdir_is_skipped() {
        let root = tempdir().unwrap();
        fs::write(root.path().join("weights.bin"), b"x").unwrap();

        let finder = FileFinder::new().with_data_root(root.path());
        assert!(matches!(
            finder.find("weights.bin"),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = FileFinder::new().find("missing.bin").unwrap_err();
        assert_eq!(
            err.to_string(),
            "File missing.bin not found! Please specify a valid path."
        );
    }

    #[test]
    fn test_local_data_dir_layout() {
        let dir = local_data_dir(Path::new("/opt/samples/bin"));
        assert_eq!(dir, Path::new("/opt/samples/bin/../data/dnn"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_data_roots() {
        let dnn_root = tempdir().unwrap();
        let test_root = tempdir().unwrap();
        fs::create_dir_all(test_root.path().join("dnn")).unwrap();
        fs::write(test_root.path().join("dnn").join("env_only.bin"), b"x").unwrap();

        let original: Vec<_> = env::DATA_ROOTS
            .iter()
            .map(|name| std::env::var_os(name))
            .collect();

        unsafe {
            std::env::set_var(env::DATA_ROOTS[0], dnn_root.path());
            std::env::set_var(env::DATA_ROOTS[1], test_root.path());
        }

        let result = find_file("env_only.bin");

        unsafe {
            for (name, value) in env::DATA_ROOTS.iter().zip(original) {
                match value {
                    Some(v) => std::env::set_var(name, v),
                    None => std::env::remove_var(name),
                }
            }
        }

        assert_eq!(
            result.unwrap(),
            test_root.path().join("dnn").join("env_only.bin")
        );
    }
}
