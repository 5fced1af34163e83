use cifsort_core::config::Settings;
use cifsort_core::error::SortError;
use std::path::Path;

use crate::commands::extractor;
use crate::{output, Backend};

pub fn run(
    input_file: &Path,
    password: &str,
    codes_file: Option<&Path>,
    backend: Backend,
    output_format: &str,
) -> Result<(), SortError> {
    if !input_file.is_file() {
        return Err(SortError::io(
            "read",
            input_file,
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
    }

    let settings = Settings::from_env(codes_file)?;
    let extractor = extractor(backend);
    let report = cifsort_core::scan_pdf(&settings, password, extractor.as_ref(), input_file)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_scan(&report),
    }

    Ok(())
}
