use cifsort_core::config::Settings;
use cifsort_core::error::SortError;
use cifsort_core::session::Upload;
use std::path::{Path, PathBuf};

use crate::commands::extractor;
use crate::{output, Backend};

pub fn run(
    files: &[PathBuf],
    out: &Path,
    password: &str,
    codes_file: Option<&Path>,
    backend: Backend,
    output_format: &str,
) -> Result<(), SortError> {
    let settings = Settings::from_env(codes_file)?;

    let uploads = files
        .iter()
        .map(|path| Upload::from_path(path))
        .collect::<Result<Vec<_>, _>>()?;

    let extractor = extractor(backend);
    let report = cifsort_core::run_batch(&settings, password, extractor.as_ref(), &uploads, out)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_run(&report),
    }

    Ok(())
}
