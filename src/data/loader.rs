use anyhow::{Context, Result};

use super::model::SampleBuffer;

// ---------------------------------------------------------------------------
// Raw file loader
// ---------------------------------------------------------------------------

/// Read an entire file as raw unsigned 8-bit samples, one per byte.
///
/// No header, magic number, or format detection: any file is accepted and
/// reinterpreted byte-for-byte. A zero-length file yields an empty buffer.
pub fn load_file(filename: &str) -> Result<SampleBuffer> {
    let bytes = std::fs::read(filename).with_context(|| format!("reading {filename}"))?;
    Ok(SampleBuffer::new(bytes, filename.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::load_file;

    fn write_fixture(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(bytes).expect("write temp file");
        file
    }

    #[test]
    fn loads_bytes_in_file_order() {
        let file = write_fixture(&[0x00, 0xFF, 0x7F, 0x01]);
        let path = file.path().to_str().unwrap().to_string();

        let buffer = load_file(&path).expect("load fixture");
        assert_eq!(buffer.samples(), &[0x00, 0xFF, 0x7F, 0x01]);
        assert_eq!(buffer.source_name(), path);
    }

    #[test]
    fn zero_byte_file_is_not_an_error() {
        let file = write_fixture(&[]);
        let buffer = load_file(file.path().to_str().unwrap()).expect("load empty fixture");
        assert!(buffer.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_file("definitely/not/here.bin");
        assert!(result.is_err());
    }
}
