//! Application-wide constants.
//!
//! Names of files, directories and environment variables that the catalog
//! lookup and file search rely on.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "dnn-preproc";

/// File name of the model catalog.
pub const CATALOG_FILE_NAME: &str = "models.yml";

/// Sample tag used when `--sample` is not given.
pub const DEFAULT_SAMPLE: &str = "object_detection";

/// Catalog field holding the sample tag of an entry.
pub const SAMPLE_FIELD: &str = "sample";

/// Name of the positional argument selecting a catalog entry.
pub const ALIAS_ARG: &str = "alias";

/// Environment variables read by the CLI.
pub mod env {
    /// Overrides the catalog path.
    pub const ZOO: &str = "DNN_PREPROC_ZOO";

    /// Overrides the sample tag.
    pub const SAMPLE: &str = "DNN_PREPROC_SAMPLE";

    /// Root of the samples data tree searched by the samples helper.
    pub const SAMPLES_DATA_PATH: &str = "OPENCV_SAMPLES_DATA_PATH";

    /// External test-data roots, searched in this order.
    pub const DATA_ROOTS: [&str; 2] = ["OPENCV_DNN_TEST_DATA_PATH", "OPENCV_TEST_DATA_PATH"];
}

/// Directory layout used by the file search.
pub mod search {
    /// Subdirectory of each external data root holding DNN files.
    pub const DNN_SUBDIR: &str = "dnn";

    /// Local data directory, relative to the executable's directory.
    pub const LOCAL_DATA_DIR: [&str; 3] = ["..", "data", "dnn"];

    /// Samples data directory looked up under the working directory and
    /// its ancestors.
    pub const SAMPLES_DATA_DIR: [&str; 2] = ["samples", "data"];
}

/// Defaults of the preprocessing option set.
pub mod preproc {
    /// Per-channel mean subtracted from the input.
    pub const DEFAULT_MEAN: [i64; 3] = [0, 0, 0];

    /// Scale factor applied to the input.
    pub const DEFAULT_SCALE: f64 = 1.0;
}
