use spacetext_core::error::SpacetextError;
use spacetext_core::outcome::RunSummary;

pub fn print(summary: &RunSummary) -> Result<(), SpacetextError> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}
