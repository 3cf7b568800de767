use spacetext_core::error::SpacetextError;
use spacetext_core::model::PagesUpdate;
use spacetext_core::{normalize, ocr, page_spec};
use std::path::PathBuf;

pub fn run(
    response_file: PathBuf,
    spec: &str,
    engine_tag: &str,
    output_file: Option<PathBuf>,
) -> Result<(), SpacetextError> {
    let response = ocr::response::load(&response_file)?;
    if response.is_errored_on_processing {
        return Err(SpacetextError::OcrFailed {
            messages: response.error_messages(),
        });
    }

    let dimensions = page_spec::parse(spec)?;
    let update = PagesUpdate {
        pages: normalize::build_pages(&response, &dimensions, engine_tag),
    };
    let json = serde_json::to_string_pretty(&update)?;

    match output_file {
        Some(path) => {
            std::fs::write(&path, json)?;
            let words: usize = update.pages.iter().map(|p| p.positions.len()).sum();
            eprintln!(
                "Normalized {} page(s), {} word(s), written to {}",
                update.pages.len(),
                words,
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
