//! Document run driver.

use std::io::Read;
use std::path::Path;

use crate::detect::{sniff_bytes, sniff_path};
use crate::error::{Error, Result};
use crate::layout::{DocumentStructurer, WordAssembler};
use crate::model::{Document, ExtractionStats, FragmentLog, Metadata};

use super::backend::{LopdfBackend, PdfBackend};
use super::decoder::GlyphDecoder;
use super::diagnostics::Diagnostics;
use super::interpreter::ContentInterpreter;
use super::options::ParseOptions;

/// Fragments collected from every selected page of a document.
#[derive(Debug, Clone, Default)]
pub struct PageRun {
    /// Fragments in emission order across pages
    pub fragments: FragmentLog,
    /// Warnings raised while interpreting
    pub diagnostics: Diagnostics,
    /// Number of pages interpreted
    pub pages_processed: u32,
}

/// Extracts a structured [`Document`] from a PDF.
pub struct PdfParser<B: PdfBackend = LopdfBackend> {
    backend: B,
    options: ParseOptions,
    header_version: Option<String>,
}

impl PdfParser<LopdfBackend> {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let version = sniff_path(path)?;
        let backend = LopdfBackend::load_file(path)?;
        Ok(Self::with_backend(backend, options).with_header_version(version))
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let version = sniff_bytes(data)?;
        let backend = LopdfBackend::load_bytes(data)?;
        Ok(Self::with_backend(backend, options).with_header_version(version))
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }
}

impl<B: PdfBackend> PdfParser<B> {
    /// Run over any backend.
    pub fn with_backend(backend: B, options: ParseOptions) -> Self {
        Self {
            backend,
            options,
            header_version: None,
        }
    }

    fn with_header_version(mut self, version: String) -> Self {
        self.header_version = Some(version);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.backend.pages().len() as u32
    }

    /// Interpret every selected page, in order, into one fragment log.
    ///
    /// The first fatal error aborts the whole run; later pages are not
    /// interpreted.
    pub fn interpret_pages(&self) -> Result<PageRun> {
        let pages = self.backend.pages();
        self.check_selection(pages.len() as u32)?;

        let decoder = GlyphDecoder::new().with_normalization(self.options.normalize_unicode);
        let mut run = PageRun::default();

        for (&number, &page_id) in &pages {
            if !self.options.pages.includes(number) {
                continue;
            }

            let tokens = self.backend.page_tokens(page_id)?;
            log::debug!("page {}: {} content tokens", number, tokens.len());

            ContentInterpreter::new(&self.backend, number, page_id)
                .with_decoder(decoder)
                .run(tokens, &mut run.fragments, &mut run.diagnostics)?;
            run.pages_processed += 1;
        }

        Ok(run)
    }

    /// Extract the document: interpret pages, assemble words, classify lines.
    pub fn parse(&self) -> Result<Document> {
        let run = self.interpret_pages()?;

        let words = WordAssembler::assemble_fragments(run.fragments.as_slice());
        let structure = DocumentStructurer::new(self.options.structure.clone()).structure(&words);
        log::debug!(
            "{} fragments, {} words, {} lines",
            run.fragments.len(),
            words.len(),
            structure.len()
        );

        let stats = ExtractionStats {
            fragments: run.fragments.len(),
            words: words.len(),
            ..ExtractionStats::from_structure(&structure)
        };

        Ok(Document {
            metadata: Metadata {
                pdf_version: self.backend.version().or_else(|| self.header_version.clone()),
                page_count: self.page_count(),
                pages_processed: run.pages_processed,
            },
            structure,
            stats,
            warnings: run.diagnostics.into_warnings(),
        })
    }

    fn check_selection(&self, total: u32) -> Result<()> {
        match self.options.pages.first_beyond(total) {
            Some(page) => Err(Error::PageOutOfRange(page, total)),
            None => Ok(()),
        }
    }
}
