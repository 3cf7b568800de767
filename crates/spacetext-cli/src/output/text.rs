use spacetext_core::outcome::RunSummary;

pub fn print(summary: &RunSummary) {
    println!("{}\n", summary.message());

    if !summary.processed.is_empty() {
        println!("  Processed:");
        for id in &summary.processed {
            println!("    {id}");
        }
    }

    if !summary.skipped_oversize.is_empty() {
        println!("  Skipped (PDF larger than {}):", summary.size_limit());
        for id in &summary.skipped_oversize {
            println!("    {id}");
        }
    }
}
