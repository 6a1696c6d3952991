//! `.docx` text extraction.
//!
//! Reads `word/document.xml` from the zip container and collects body
//! paragraphs, one per line. Paragraphs inside tables, textboxes and
//! block-level content controls are left out.

use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::IoError;

const DOCUMENT_PART: &str = "word/document.xml";

pub(super) fn extract(path: &Path) -> Result<String, IoError> {
    let container_err = |source| IoError::Container {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(container_err)?;
    let mut part = archive.by_name(DOCUMENT_PART).map_err(container_err)?;

    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    paragraphs_from_xml(&xml).map_err(|source| IoError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

/// Join the body paragraphs of a WordprocessingML document with `\n`.
///
/// `w:tab` becomes `\t`; `w:br` and `w:cr` become `\n`. Tables, textboxes
/// and block-level content controls are skipped, so only paragraphs that sit
/// directly in the body contribute text.
pub(super) fn paragraphs_from_xml(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut skip_depth = 0_usize;
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                name if is_skipped_container(name, in_paragraph) => skip_depth += 1,
                b"w:p" if skip_depth == 0 => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) if skip_depth == 0 => match e.name().as_ref() {
                b"w:p" if !in_paragraph => paragraphs.push(String::new()),
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                name if is_skipped_container(name, in_paragraph) => {
                    skip_depth = skip_depth.saturating_sub(1);
                }
                b"w:p" if in_paragraph && skip_depth == 0 => {
                    paragraphs.push(std::mem::take(&mut current));
                    in_paragraph = false;
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text && in_paragraph && skip_depth == 0 => {
                current.push_str(&t.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Elements whose paragraphs are not part of the body text.
///
/// A `w:sdt` counts only at block level; inside a paragraph it wraps runs
/// that belong to that paragraph.
fn is_skipped_container(name: &[u8], in_paragraph: bool) -> bool {
    match name {
        b"w:tbl" | b"w:txbxContent" => true,
        b"w:sdt" => !in_paragraph,
        _ => false,
    }
}
