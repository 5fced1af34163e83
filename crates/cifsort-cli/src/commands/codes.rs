use cifsort_core::codes::{self, builtin, RecognizedCodeSet};
use cifsort_core::config::Settings;
use cifsort_core::error::SortError;
use std::path::Path;

pub fn list(codes_file: Option<&Path>) -> Result<(), SortError> {
    let settings = Settings::from_env(codes_file)?;
    print_codes(&settings.codes);
    println!();
    println!("Documents without any of these go to '{}'.", settings.unidentified_dir);

    if codes_file.is_none() {
        if let Some(desc) = builtin::builtin_def()?.description {
            println!("Built-in list: {desc}");
        }
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), SortError> {
    let set = codes::load_code_set(file)?;
    println!("OK: '{}' with {} code(s)", set.name(), set.len());
    Ok(())
}

fn print_codes(set: &RecognizedCodeSet) {
    println!("{} ({} codes):\n", set.name(), set.len());
    for code in set.iter() {
        println!("  {code}");
    }
}
