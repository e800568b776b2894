//! PDF header sniffing.
//!
//! Readers tolerate junk before the `%PDF-x.y` marker as long as it appears
//! within the first kilobyte, so the scan does too.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3;
const HEADER_WINDOW: usize = 1024;

/// Return the header version (e.g. `"1.7"`) of the PDF at `path`.
pub fn sniff_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = Vec::with_capacity(HEADER_WINDOW);
    File::open(path)?
        .take(HEADER_WINDOW as u64)
        .read_to_end(&mut header)?;
    sniff_bytes(&header)
}

/// Return the header version of an in-memory PDF.
pub fn sniff_bytes(data: &[u8]) -> Result<String> {
    let window = &data[..data.len().min(HEADER_WINDOW)];
    let start = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let version = window
        .get(start + PDF_MAGIC.len()..start + PDF_MAGIC.len() + VERSION_LEN)
        .ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version).into_owned();

    match version.as_bytes() {
        [major @ (b'1' | b'2'), b'.', minor] if minor.is_ascii_digit() => {
            if *major == b'2' && *minor != b'0' {
                return Err(Error::UnsupportedVersion(version));
            }
            Ok(version)
        }
        _ => Err(Error::UnsupportedVersion(version)),
    }
}

/// Whether `data` carries a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    sniff_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_plain_header() {
        assert_eq!(sniff_bytes(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap(), "1.7");
        assert_eq!(sniff_bytes(b"%PDF-2.0\n").unwrap(), "2.0");
    }

    #[test]
    fn test_sniff_header_after_junk() {
        let mut data = vec![b' '; 100];
        data.extend_from_slice(b"%PDF-1.4\n");
        assert_eq!(sniff_bytes(&data).unwrap(), "1.4");
    }

    #[test]
    fn test_sniff_rejects_non_pdf() {
        assert!(matches!(
            sniff_bytes(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(sniff_bytes(b"%PDF"), Err(Error::UnknownFormat)));
        assert!(!is_pdf_bytes(b"Not a PDF"));
    }

    #[test]
    fn test_sniff_rejects_bad_version() {
        assert!(matches!(
            sniff_bytes(b"%PDF-x.y\n"),
            Err(Error::UnsupportedVersion(_))
        ));
        assert!(matches!(
            sniff_bytes(b"%PDF-2.5\n"),
            Err(Error::UnsupportedVersion(_))
        ));
    }
}
