use cifsort_core::error::SortError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), SortError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
