use std::{fs, path::Path};

use crate::{
    error::{Error, Result},
    similarity::SimilarityScore,
};

/// Formats a score as a percentage with two decimals, e.g. `87.56`.
pub fn format_percent(score: SimilarityScore) -> String {
    format!("{:.2}", score.percent())
}

/// Writes the percentage to `path`, creating parent directories as needed.
pub fn write_result(path: &Path, score: SimilarityScore) -> Result<()> {
    let write_failure = |source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_failure)?;
    }

    fs::write(path, format_percent(score)).map_err(write_failure)
}
