//! Rendering of compiled binaries as the body of a C array initializer.
//!
//! Both encodings emit [`BYTES_PER_LINE`] input bytes per line, each line
//! indented by a tab and ending in a comma so the lines can be pasted into
//! `{ ... }` as-is.

use std::{fmt, str::FromStr};

pub const BYTES_PER_LINE: usize = 16;

/// How a binary blob is laid out as array elements.
pub trait ArrayEncoding {
    /// C element type of the declared array.
    fn element_type(&self) -> &'static str;

    /// Literals for one line worth of input (at most [`BYTES_PER_LINE`] bytes).
    fn literals(&self, chunk: &[u8]) -> Vec<String>;

    fn encode(&self, bytes: &[u8]) -> Vec<String> {
        bytes
            .chunks(BYTES_PER_LINE)
            .map(|chunk| format!("\t{},", self.literals(chunk).join(", ")))
            .collect()
    }
}

/// One `unsigned char` literal per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArray;

impl ArrayEncoding for ByteArray {
    fn element_type(&self) -> &'static str {
        "unsigned char"
    }

    fn literals(&self, chunk: &[u8]) -> Vec<String> {
        chunk.iter().map(|byte| format!("0x{byte:02x}")).collect()
    }
}

/// Four bytes per `unsigned int` literal, little-endian.
///
/// A trailing group shorter than four bytes is zero-padded in its high bytes,
/// so `[0xee]` becomes `0x000000ee` and the element count is always
/// `len.div_ceil(4)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordArray;

impl ArrayEncoding for WordArray {
    fn element_type(&self) -> &'static str {
        "unsigned int"
    }

    fn literals(&self, chunk: &[u8]) -> Vec<String> {
        chunk
            .chunks(4)
            .map(|bytes| {
                let mut word = [0u8; 4];
                word[..bytes.len()].copy_from_slice(bytes);
                format!("0x{:08x}", u32::from_le_bytes(word))
            })
            .collect()
    }
}

/// Encoding selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    Bytes,
    #[default]
    Words,
}

impl Encoding {
    pub fn strategy(self) -> &'static dyn ArrayEncoding {
        match self {
            Encoding::Bytes => &ByteArray,
            Encoding::Words => &WordArray,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Bytes => "bytes",
            Encoding::Words => "words",
        })
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(Encoding::Bytes),
            "words" => Ok(Encoding::Words),
            other => Err(format!(
                "unknown encoding `{other}`, expected `words` or `bytes`"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverses `WordArray::encode`; `len` drops the padding of a partial last word.
    fn decode_words(lines: &[String], len: usize) -> Vec<u8> {
        let mut bytes: Vec<u8> = lines
            .iter()
            .flat_map(|line| line.trim().trim_end_matches(',').split(", "))
            .flat_map(|literal| {
                let word = u32::from_str_radix(literal.trim_start_matches("0x"), 16).unwrap();
                word.to_le_bytes()
            })
            .collect();
        bytes.truncate(len);
        bytes
    }

    #[test]
    fn test_single_word_is_little_endian() {
        assert_eq!(WordArray.encode(&[0x01, 0x02, 0x03, 0x04]), ["\t0x04030201,"]);
    }

    #[test]
    fn test_partial_word_is_zero_padded() {
        assert_eq!(
            WordArray.encode(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee]),
            ["\t0xddccbbaa, 0x000000ee,"]
        );
        assert_eq!(WordArray.encode(&[0xaa, 0xbb]), ["\t0x0000bbaa,"]);
    }

    #[test]
    fn test_words_per_line() {
        let bytes: Vec<u8> = (0..40).collect();
        let lines = WordArray.encode(&bytes);

        assert_eq!(lines.len(), 3);
        let words: Vec<usize> = lines.iter().map(|line| line.matches("0x").count()).collect();
        assert_eq!(words, [4, 4, 2]);
        assert_eq!(lines[0], "\t0x03020100, 0x07060504, 0x0b0a0908, 0x0f0e0d0c,");
    }

    #[test]
    fn test_bytes_per_line() {
        let bytes: Vec<u8> = (0..20).collect();
        let lines = ByteArray.encode(&bytes);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches("0x").count(), BYTES_PER_LINE);
        assert_eq!(lines[1], "\t0x10, 0x11, 0x12, 0x13,");
    }

    #[test]
    fn test_empty_input() {
        assert!(WordArray.encode(&[]).is_empty());
        assert!(ByteArray.encode(&[]).is_empty());
    }

    #[test]
    fn test_words_decode_back_to_input() {
        for len in 0..=2 * BYTES_PER_LINE + 3 {
            let bytes: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let lines = WordArray.encode(&bytes);
            assert_eq!(decode_words(&lines, len), bytes, "length {len}");
        }
    }

    #[test]
    fn test_parse_encoding() {
        assert_eq!("words".parse::<Encoding>().unwrap(), Encoding::Words);
        assert_eq!("bytes".parse::<Encoding>().unwrap(), Encoding::Bytes);
        assert!("hex".parse::<Encoding>().is_err());
        assert_eq!(Encoding::default().strategy().element_type(), "unsigned int");
    }
}
