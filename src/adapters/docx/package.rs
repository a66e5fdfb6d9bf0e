//! Container checks run before handing a file to the XML parser.

use crate::{Error, Result};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

const MAIN_DOCUMENT_PART: &str = "word/document.xml";
const WORKBOOK_PART: &str = "xl/workbook.xml";

/// Validates that the file is an openable Word package.
///
/// Every failure is reported as [`Error::UnreadableDocument`] with a reason
/// naming what is wrong with the container.
pub fn validate_docx_package(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| Error::unreadable(path, e.to_string()))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| Error::unreadable(path, format!("not a DOCX package: {}", e)))?;

    if archive.by_name(MAIN_DOCUMENT_PART).is_err() {
        if archive.by_name(WORKBOOK_PART).is_ok() {
            return Err(Error::unreadable(
                path,
                "this appears to be an Excel workbook, not a Word document",
            ));
        }
        return Err(Error::unreadable(
            path,
            format!("missing {}", MAIN_DOCUMENT_PART),
        ));
    }

    Ok(())
}
