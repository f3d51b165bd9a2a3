use color_eyre::Result;
use dialoguer::Input;
use fmax_core::{FileRecord, WalkRequest, format_size, max_by_score, walk};

/// Stop the walk once this many files have been reported.
const MAX_FILES_TO_PROCESS: usize = 200;

fn main() -> Result<()> {
    color_eyre::install()?;

    let root: String = Input::new()
        .with_prompt("Directory to search")
        .interact_text()?;

    let request = WalkRequest::new(root);
    let mut found: Vec<FileRecord> = Vec::new();
    let mut notifications = 0usize;

    let walked = walk(&request, |event| {
        println!("FileFound: {}", event.path().display());

        match FileRecord::from_path(event.path()) {
            Ok(record) => found.push(record),
            Err(e) => eprintln!("Skipping {}: {e}", event.path().display()),
        }

        notifications += 1;
        if notifications >= MAX_FILES_TO_PROCESS {
            println!("Stopping search: file limit reached ({MAX_FILES_TO_PROCESS}).");
            event.cancel();
        }
    });

    if let Err(e) = walked {
        eprintln!("Error: {e}");
        return Ok(());
    }

    println!();
    println!("Found files: {}", found.len());

    if found.is_empty() {
        println!("No files found, nothing to compare.");
        return Ok(());
    }

    let largest = max_by_score(found.iter().map(Some), |r| r.size as f64)?;

    println!();
    println!("Largest file: {}", largest.path.display());
    println!("Size: {} bytes ({})", largest.size, format_size(largest.size));

    Ok(())
}
