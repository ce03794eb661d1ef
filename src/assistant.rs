//! Request orchestration around a completion service.
//!
//! This is where caller policy lives: the upload ceiling, how an uploaded
//! document is combined with the user's query, the extracted-text preview
//! and which responses may be exported.

use crate::error::{Error, Result};
use crate::model::{ExtractedText, RenderedDocument};
use crate::parser::{ParseOptions, PdfParser};
use crate::render::{render_with_options, RenderOptions};
use crate::session::Session;
use crate::task::LegalTask;

/// Largest accepted upload (5 MB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Characters of extracted text shown in a preview.
pub const PREVIEW_CHARS: usize = 1000;

/// Notice shown alongside every response.
pub const DISCLAIMER: &str = "Disclaimer: This AI tool is for educational purposes only. \
Always consult a qualified attorney.";

/// A text completion backend.
pub trait CompletionService {
    /// Return the model's reply to a single prompt.
    fn complete(&self, prompt: &str) -> Result<String>;
}

impl<S: CompletionService + ?Sized> CompletionService for &S {
    fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt)
    }
}

/// Check the upload size and extract its text.
pub fn accept_upload(data: &[u8]) -> Result<ExtractedText> {
    accept_upload_with_options(data, ParseOptions::default())
}

/// Check the upload size and extract its text with custom options.
pub fn accept_upload_with_options(data: &[u8], options: ParseOptions) -> Result<ExtractedText> {
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(Error::UploadTooLarge {
            size: data.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let extracted = PdfParser::from_bytes_with_options(data, options)?.extract()?;
    if extracted.is_blank() {
        log::warn!(
            "Uploaded document has {} pages but no extractable text",
            extracted.page_count
        );
    }
    Ok(extracted)
}

/// Combine the user's query with an uploaded document.
///
/// Only the review task uses the document, and only when it carries text.
pub fn compose_input(task: LegalTask, query: &str, document: Option<&ExtractedText>) -> String {
    let document = document
        .filter(|_| task.accepts_document())
        .map(|doc| doc.text.as_str())
        .filter(|text| !text.is_empty());

    match document {
        Some(text) if !query.trim().is_empty() => {
            format!("User Query: {query}\n\nDocument Content:\n{text}")
        }
        Some(text) => format!("Please review this document:\n{text}"),
        None => query.to_string(),
    }
}

/// First `limit` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Drives one completion per request and records the result.
pub struct Assistant<S> {
    service: S,
}

impl<S: CompletionService> Assistant<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Generate a response and store it in `session`.
    ///
    /// The session is left unchanged when the input is blank or the service
    /// fails. The service is called exactly once otherwise.
    pub fn generate(
        &self,
        session: &mut Session,
        task: LegalTask,
        query: &str,
        document: Option<&ExtractedText>,
    ) -> Result<String> {
        let input = compose_input(task, query, document);
        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let prompt = task.build_prompt(&input);
        log::debug!(
            "Requesting {} completion ({} prompt chars)",
            task.slug(),
            prompt.chars().count()
        );

        let response = self.service.complete(&prompt)?;
        session.record(task, response.clone());
        Ok(response)
    }
}

/// Render the session's last response, if it is a draft.
pub fn export_draft(session: &Session, options: &RenderOptions) -> Result<RenderedDocument> {
    match session.last_response() {
        Some(response) if response.task.exports_pdf() => {
            Ok(render_with_options(&response.text, options))
        }
        _ => Err(Error::NoDraft),
    }
}
