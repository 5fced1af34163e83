use cifsort_core::classify::outcome::Destination;
use cifsort_core::{RunReport, ScanReport};

pub fn print_run(report: &RunReport) {
    println!("=== Documents ===\n");

    if report.documents.is_empty() {
        println!("  (no PDFs in the batch)\n");
    } else {
        let max_name = report
            .documents
            .iter()
            .map(|d| d.file_name.len())
            .max()
            .unwrap_or(10);

        for doc in &report.documents {
            let marker = match doc.destination {
                Destination::Pair { .. } => " (multiple CIFs)",
                _ => "",
            };
            println!(
                "  {:<width$}  -> {}{}",
                doc.file_name,
                doc.folder,
                marker,
                width = max_name
            );
            for extra in doc.moved_files.iter().filter(|f| **f != doc.file_name) {
                println!("  {:<width$}     + {}", "", extra, width = max_name);
            }
        }
        println!();
    }

    println!("=== Log ===\n");
    for line in report.log.lines() {
        println!("  {line}");
    }
    println!();

    println!(
        "Archive: {} ({} file(s), {} bytes)",
        report.archive.path.display(),
        report.archive.entries.len(),
        report.archive.size_bytes
    );
}

pub fn print_scan(report: &ScanReport) {
    println!("=== {} ===\n", report.file_name);
    println!("  Backend:     {}", report.backend);
    println!("  Text chars:  {}", report.normalized_chars);

    if report.found_codes.is_empty() {
        println!("  CIFs found:  none");
    } else {
        let codes: Vec<&str> = report.found_codes.iter().collect();
        println!("  CIFs found:  {}", codes.join(", "));
    }

    let reason = match &report.destination {
        Destination::Unidentified => "no recognized CIF".to_string(),
        Destination::Single { primary } => format!("single CIF {primary}"),
        Destination::Pair { primary, secondary } => {
            format!("primary {primary}, secondary {secondary}")
        }
    };
    println!("  Primary:     {}", report.destination.primary().unwrap_or("-"));
    println!("  Destination: {} ({})", report.folder, reason);
}
