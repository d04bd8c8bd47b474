use std::panic;

use thiserror::Error;
use tracing::{debug, warn};

/// The document could not be turned into text at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExtractionFailure {
    pub message: String,
}

impl ExtractionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Extracts the text layer of an in-memory PDF.
///
/// pdf-extract panics on some malformed inputs instead of returning an
/// error, so the call is isolated with `catch_unwind`.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionFailure> {
    if bytes.is_empty() {
        return Err(ExtractionFailure::new("Uploaded document is empty"));
    }

    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => {
            debug!("Extracted {} chars from {} byte PDF", text.len(), bytes.len());
            Ok(text)
        }
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            Err(ExtractionFailure::new(format!("Could not read PDF: {e}")))
        }
        Err(_) => {
            warn!("PDF parser panicked on a {} byte upload", bytes.len());
            Err(ExtractionFailure::new(
                "Could not read PDF: the document is malformed",
            ))
        }
    }
}

/// PDF fixtures for extraction and upload tests.
#[cfg(test)]
pub mod testing {
    /// Single-page PDF with one Helvetica text line per entry. Object
    /// offsets in the xref table are computed, so the file is well formed.
    pub fn text_pdf(lines: &[&str]) -> Vec<u8> {
        let mut content = String::from("BT\n/F1 12 Tf\n72 720 Td\n");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                content.push_str("0 -30 Td\n");
            }
            content.push_str(&format!("({line}) Tj\n"));
        }
        content.push_str("ET\n");

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{content}endstream", content.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_at = pdf.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            tail.push_str(&format!("{offset:010} 00000 n \n"));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(tail.as_bytes());
        pdf
    }
}
