//! Integration tests for the run_batch() end-to-end pipeline.
//!
//! Uses a MockExtractor that treats a file's bytes as its text (after a
//! `%PDF-mock` marker), so no real PDFs are needed.

use cifsort_core::classify::outcome::Destination;
use cifsort_core::codes::builtin::builtin_codes;
use cifsort_core::config::Settings;
use cifsort_core::error::SortError;
use cifsort_core::extraction::native::PdfExtractBackend;
use cifsort_core::extraction::{PageContent, PdfExtractor};
use cifsort_core::organize::{prune_empty_dirs, Organizer};
use cifsort_core::session::Upload;
use cifsort_core::trace::{LogEntry, RunLog};
use cifsort_core::{run_batch, scan_pdf};
use std::fs::{self, File};
use std::path::Path;

const MARKER: &str = "%PDF-mock\n";
const PASSWORD: &str = "correct horse";

struct MockExtractor;

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SortError> {
        let text = std::str::from_utf8(pdf_bytes)
            .ok()
            .and_then(|t| t.strip_prefix(MARKER))
            .ok_or_else(|| SortError::Extraction("not a mock pdf".into()))?;
        Ok(text
            .split('\x0c')
            .enumerate()
            .map(|(i, t)| PageContent {
                page_number: i + 1,
                text: t.to_string(),
            })
            .collect())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn pdf(name: &str, text: &str) -> Upload {
    Upload::new(name, format!("{MARKER}{text}"))
}

fn settings() -> Settings {
    let mut settings = Settings::with_codes(builtin_codes().unwrap());
    settings.access_secret = Some(PASSWORD.to_string());
    settings
}

fn archive_entries(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Single recognized code: PDF and sidecar land together, unused folders pruned
// ---------------------------------------------------------------------------
#[test]
fn single_code_with_sidecar() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    let report = run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[
            pdf("invoice1.pdf", "Factura\nCIF proveedor: B85536134\nTotal 120,00"),
            Upload::new("invoice1.xlsx", b"PK\x03\x04 spreadsheet".to_vec()),
        ],
        &out,
    )
    .unwrap();

    assert_eq!(
        archive_entries(&out),
        vec!["B85536134/invoice1.pdf", "B85536134/invoice1.xlsx"]
    );

    assert_eq!(report.documents.len(), 1);
    let doc = &report.documents[0];
    assert_eq!(
        doc.destination,
        Destination::Single {
            primary: "B85536134".into()
        }
    );
    assert_eq!(doc.moved_files, vec!["invoice1.pdf", "invoice1.xlsx"]);

    // Every other recognized folder and the unidentified folder were pruned.
    let pruned: Vec<&LogEntry> = report
        .log
        .entries()
        .iter()
        .filter(|e| matches!(e, LogEntry::Pruned { .. }))
        .collect();
    assert_eq!(pruned.len(), 11);
    assert_eq!(report.archive.path, out);
}

// ---------------------------------------------------------------------------
// Unparseable PDF goes to the unidentified folder, run keeps going
// ---------------------------------------------------------------------------
#[test]
fn unreadable_pdf_goes_to_unidentified() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    let report = run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[
            Upload::new("bad.pdf", b"\xff\xfe garbage".to_vec()),
            pdf("good.pdf", "A80652928"),
        ],
        &out,
    )
    .unwrap();

    assert_eq!(
        archive_entries(&out),
        vec!["A80652928/good.pdf", "Sin identificar/bad.pdf"]
    );
    assert_eq!(report.documents[0].destination, Destination::Unidentified);
}

#[test]
fn unreadable_pdf_with_real_backend() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    run_batch(
        &settings(),
        PASSWORD,
        &PdfExtractBackend::new(),
        &[Upload::new("bad.pdf", b"definitely not a pdf".to_vec())],
        &out,
    )
    .unwrap();

    assert_eq!(archive_entries(&out), vec!["Sin identificar/bad.pdf"]);
}

// ---------------------------------------------------------------------------
// Secondary codes
// ---------------------------------------------------------------------------
#[test]
fn non_cif_letter_is_not_a_secondary_code() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    let report = run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[pdf(
            "multi.pdf",
            "Emisor A80652928\x0cCliente Z99999999 (not a real CIF letter)",
        )],
        &out,
    )
    .unwrap();

    // Z is not one of A, B or G, so Z99999999 is never matched.
    assert_eq!(archive_entries(&out), vec!["A80652928/multi.pdf"]);
    assert_eq!(report.documents[0].found_codes.len(), 1);
}

#[test]
fn unrecognized_secondary_code_used_as_subfolder() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    let report = run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[
            pdf("multi.pdf", "Emisor A80652928\x0cCliente B99999999"),
            Upload::new("multi.docx", "notes"),
        ],
        &out,
    )
    .unwrap();

    assert_eq!(
        archive_entries(&out),
        vec!["A80652928/B99999999/multi.docx", "A80652928/B99999999/multi.pdf"]
    );
    assert_eq!(report.documents[0].folder, "A80652928/B99999999");
}

#[test]
fn spaced_code_and_trimmed_names() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    let report = run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[
            pdf("  factura marzo.pdf ", "C.I.F.: G-8384 4316"),
            Upload::new("factura marzo.xlsx", "data"),
        ],
        &out,
    )
    .unwrap();

    assert_eq!(
        archive_entries(&out),
        vec![
            "G83844316/factura marzo.pdf",
            "G83844316/factura marzo.xlsx"
        ]
    );
    assert!(matches!(
        report.log.entries().first(),
        Some(LogEntry::Renamed { .. })
    ));
}

#[test]
fn only_unrecognized_codes_go_to_unidentified() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[pdf("other.pdf", "B11111111 A22222222 G33333333")],
        &out,
    )
    .unwrap();

    assert_eq!(archive_entries(&out), vec!["Sin identificar/other.pdf"]);
}

#[test]
fn orphan_sidecars_stay_at_root() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[
            pdf("a.pdf", "B85536134"),
            Upload::new("notes.txt", "no matching pdf"),
        ],
        &out,
    )
    .unwrap();

    assert_eq!(archive_entries(&out), vec!["B85536134/a.pdf", "notes.txt"]);
}

#[test]
fn same_base_name_pdfs_travel_with_the_first() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    // "a.PDF" sorts before "a.pdf" and claims it as a sidecar.
    let report = run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[pdf("a.PDF", "B85536134"), pdf("a.pdf", "A80652928")],
        &out,
    )
    .unwrap();

    assert_eq!(archive_entries(&out), vec!["B85536134/a.PDF", "B85536134/a.pdf"]);
    assert_eq!(report.documents.len(), 1);
}

// ---------------------------------------------------------------------------
// Access gate
// ---------------------------------------------------------------------------
#[test]
fn wrong_password_blocks_run() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    let result = run_batch(
        &settings(),
        "wrong",
        &MockExtractor,
        &[pdf("a.pdf", "B85536134")],
        &out,
    );

    assert!(matches!(result, Err(SortError::AccessDenied)));
    assert!(!out.exists());
}

#[test]
fn missing_secret_blocks_run() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");
    let mut settings = settings();
    settings.access_secret = None;

    let result = run_batch(&settings, "", &MockExtractor, &[], &out);
    assert!(matches!(result, Err(SortError::AccessDenied)));
    assert!(!out.exists());
}

#[test]
fn invalid_upload_leaves_no_archive() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    let result = run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[pdf("../escape.pdf", "B85536134")],
        &out,
    );

    assert!(matches!(result, Err(SortError::InvalidUpload(_))));
    assert!(!out.exists());
}

#[test]
fn upload_named_like_code_folder_is_rejected() {
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("result.zip");

    let result = run_batch(
        &settings(),
        PASSWORD,
        &MockExtractor,
        &[pdf("x.pdf", "B85536134"), Upload::new("B85536134", "raw")],
        &out,
    );

    assert!(matches!(result, Err(SortError::InvalidUpload(_))));
    assert!(!out.exists());
}

// ---------------------------------------------------------------------------
// Organizer on an explicit directory
// ---------------------------------------------------------------------------
#[test]
fn organizer_then_prune_twice_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("x.pdf"), format!("{MARKER}B47384649")).unwrap();

    let settings = settings();
    let mut log = RunLog::new();
    Organizer::new(&MockExtractor, &settings)
        .run(root, &mut log)
        .unwrap();

    let after_first: Vec<_> = fs::read_dir(root).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(prune_empty_dirs(root, &mut log).unwrap(), 0);
    let after_second: Vec<_> = fs::read_dir(root).unwrap().map(|e| e.unwrap().file_name()).collect();

    assert_eq!(after_first, after_second);
    assert!(root.join("B47384649").join("x.pdf").is_file());
}

#[test]
fn scan_reports_destination_without_moving() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.pdf");
    fs::write(&path, format!("{MARKER}a80652928 and B 8553 6134")).unwrap();

    let report = scan_pdf(&settings(), PASSWORD, &MockExtractor, &path).unwrap();

    assert_eq!(report.file_name, "scan.pdf");
    assert_eq!(report.backend, "mock");
    assert_eq!(
        report.found_codes.iter().collect::<Vec<_>>(),
        vec!["A80652928", "B85536134"]
    );
    assert_eq!(report.folder, "A80652928/B85536134");
    assert!(path.is_file());
}
