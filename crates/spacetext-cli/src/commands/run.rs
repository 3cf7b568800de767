use spacetext_core::error::SpacetextError;
use spacetext_core::ocr::space::{OcrSpaceClient, OcrSpaceConfig};
use spacetext_core::platform::documentcloud::{DocumentCloudClient, DocumentCloudConfig};
use spacetext_core::platform::{DocumentPlatform, Selection};
use spacetext_core::RunOptions;

use crate::dry_run::DryRunPlatform;
use crate::output;
use crate::RunArgs;

pub fn run(args: RunArgs) -> Result<(), SpacetextError> {
    let ocr = OcrSpaceClient::new(OcrSpaceConfig {
        endpoint: args.ocr_url,
        engine: args.engine,
        ..OcrSpaceConfig::new(args.key)
    })?;

    let documentcloud = DocumentCloudClient::new(DocumentCloudConfig {
        api_url: args.api_url,
        token: args.token,
        run_id: args.run_id,
        ..Default::default()
    })?;

    let selection = Selection {
        document_ids: args.documents,
        query: args.query,
    };
    let options = RunOptions {
        language: args.language,
        ..Default::default()
    };

    let dry_run;
    let platform: &dyn DocumentPlatform = if args.dry_run {
        dry_run = DryRunPlatform::new(&documentcloud);
        &dry_run
    } else {
        &documentcloud
    };

    let summary = spacetext_core::run(platform, &ocr, &selection, &options)?;

    match args.output.as_str() {
        "json" => output::json::print(&summary)?,
        _ => output::text::print(&summary),
    }

    Ok(())
}
