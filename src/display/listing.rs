use crate::core::services::types::{BibliographyPayload, CollectionSummary};
use crate::error::DisplayError;
use crate::map_display_error;
use std::io::Write;

/// One `<id>  <title>` line per collection, in the order given.
pub fn render_collections<W: Write>(
    out: &mut W,
    collections: &[CollectionSummary],
) -> Result<(), DisplayError> {
    for collection in collections {
        map_display_error!(
            writeln!(out, "{}  {}", collection.id, collection.title),
            "write collection listing"
        )?;
    }
    Ok(())
}

/// Writes the server's BibTeX unchanged so stdout can go straight to a `.bib` file.
pub fn write_bibliography<W: Write>(
    out: &mut W,
    payload: &BibliographyPayload,
) -> Result<(), DisplayError> {
    map_display_error!(out.write_all(payload.text.as_bytes()), "write BibTeX")
}
