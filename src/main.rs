use quire::blank::{A4, blank_document, next_free_number};
use quire::{DocumentInfo, ObjectId, QuireError, WriterConfig};
use std::env;
use std::fs;

/// Writes a document of blank A4 pages, optionally with metadata read
/// from a JSON file.
fn main() -> Result<(), QuireError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Writes a document of blank pages.");
        eprintln!();
        eprintln!("Usage: {} <path/to/output.pdf> [page-count] [path/to/metadata.json]", args[0]);
        eprintln!();
        eprintln!("Set RUST_LOG=debug to trace the write session.");
        std::process::exit(1);
    }

    let output_path = &args[1];
    let page_count: usize = match args.get(2) {
        Some(raw) => raw
            .parse()
            .map_err(|_| QuireError::Usage(format!("'{}' is not a page count", raw)))?,
        None => 1,
    };

    let info = match args.get(3) {
        Some(path) => {
            println!("Loading metadata from {}", path);
            let info: DocumentInfo = serde_json::from_str(&fs::read_to_string(path)?)?;
            if info.creation_date.is_none() && info.mod_date.is_none() {
                info.stamped_now()
            } else {
                info
            }
        }
        None => DocumentInfo::new().stamped_now(),
    };

    let document = blank_document(page_count, A4)
        .with_info(ObjectId::first(next_free_number(page_count)), info);

    println!("Writing {} blank page(s) to {}...", page_count, output_path);
    document.save(output_path, &WriterConfig::new())?;

    println!("Successfully generated {}", output_path);
    Ok(())
}
