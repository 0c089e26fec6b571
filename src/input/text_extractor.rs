//! Text extraction from uploaded document formats

use crate::error::{Result, ScreenerError};
use std::io::Read;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ScreenerError::Io)?;

        // Pages without a text layer contribute nothing; an empty result
        // is a degenerate input, not an error.
        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ScreenerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text.trim().to_string())
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ScreenerError::Io)?;

        let xml = Self::read_document_xml(&bytes, path)?;
        Ok(Self::xml_to_text(&xml))
    }
}

impl DocxExtractor {
    /// A .docx file is a ZIP archive; the paragraph content lives in
    /// word/document.xml.
    fn read_document_xml(bytes: &[u8], path: &Path) -> Result<String> {
        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).map_err(|e| {
            ScreenerError::DocxExtraction(format!(
                "'{}' is not a well-formed DOCX archive: {}",
                path.display(),
                e
            ))
        })?;

        let mut entry = archive.by_name("word/document.xml").map_err(|e| {
            ScreenerError::DocxExtraction(format!(
                "'{}' has no document part: {}",
                path.display(),
                e
            ))
        })?;

        let mut xml = String::new();
        entry.read_to_string(&mut xml).map_err(|e| {
            ScreenerError::DocxExtraction(format!(
                "Failed to read document part of '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(xml)
    }

    fn xml_to_text(xml: &str) -> String {
        let text = xml
            .replace("<w:br/>", "\n")
            .replace("<w:tab/>", "\t")
            .replace("</w:p>", "\n");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let decoded = clean_text
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        let lines: Vec<String> = decoded
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ScreenerError::Io)?;
        Ok(content)
    }
}
