// SPDX-License-Identifier: MPL-2.0
//! Metadata decoding via the `kamadak-exif` parser.
//!
//! The adapter normalizes the parser's result into a [`DecodeOutcome`]:
//! sections come from each field's IFD context, values map onto the
//! closed [`TagValue`] union, and the parser's "no Exif segment" error
//! becomes [`DecodeOutcome::Empty`] while every other failure becomes
//! [`DecodeOutcome::ParseFailure`]. No individual tag is interpreted.

use crate::application::port::decoder::{DecodeOutcome, MetadataDecoder};
use crate::domain::metadata::{MetadataTree, TagValue};
use exif::{Context, Field, In, Reader, Value};
use std::io::Cursor;

/// [`MetadataDecoder`] backed by `kamadak-exif`.
///
/// Works on an in-memory buffer; the parser itself detects the
/// container format (JPEG, TIFF, PNG, WebP, HEIF).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifDecoder;

impl ExifDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetadataDecoder for ExifDecoder {
    async fn decode(&self, bytes: &[u8]) -> DecodeOutcome {
        let mut cursor = Cursor::new(bytes);
        match Reader::new().read_from_container(&mut cursor) {
            Ok(parsed) => {
                let mut tree = MetadataTree::new();
                for field in parsed.fields() {
                    tree.insert(
                        section_name(field),
                        &field.tag.to_string(),
                        tag_value(field),
                    );
                }
                if tree.is_empty() {
                    DecodeOutcome::Empty
                } else {
                    DecodeOutcome::Tree(tree)
                }
            }
            Err(err) => classify_error(&err),
        }
    }
}

// A missing Exif segment is a normal outcome, not a parse failure.
fn classify_error(err: &exif::Error) -> DecodeOutcome {
    match err {
        exif::Error::NotFound(_) => DecodeOutcome::Empty,
        other => DecodeOutcome::ParseFailure(other.to_string()),
    }
}

fn section_name(field: &Field) -> &'static str {
    match field.tag.context() {
        Context::Tiff => {
            if field.ifd_num == In::THUMBNAIL {
                "Thumbnail"
            } else {
                "Image"
            }
        }
        Context::Exif => "Exif",
        Context::Gps => "GPS",
        Context::Interop => "Interoperability",
        _ => "Other",
    }
}

fn tag_value(field: &Field) -> TagValue {
    match &field.value {
        Value::Ascii(lines) => TagValue::Text(ascii_text(lines)),
        Value::Byte(bytes) => TagValue::Bytes(bytes.clone()),
        Value::Undefined(bytes, _) => TagValue::Bytes(bytes.clone()),
        Value::SByte(bytes) => TagValue::Bytes(bytes.iter().map(|b| *b as u8).collect()),
        Value::Short(v) if v.len() == 1 => TagValue::Number(f64::from(v[0])),
        Value::Long(v) if v.len() == 1 => TagValue::Number(f64::from(v[0])),
        Value::SShort(v) if v.len() == 1 => TagValue::Number(f64::from(v[0])),
        Value::SLong(v) if v.len() == 1 => TagValue::Number(f64::from(v[0])),
        Value::Float(v) if v.len() == 1 => TagValue::Number(f64::from(v[0])),
        Value::Double(v) if v.len() == 1 => TagValue::Number(v[0]),
        // Rationals and multi-valued numerics keep the parser's display form.
        _ => TagValue::Text(field.display_value().to_string()),
    }
}

fn ascii_text(lines: &[Vec<u8>]) -> String {
    lines
        .iter()
        .map(|line| {
            String::from_utf8_lossy(line)
                .trim_end_matches('\0')
                .trim()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(", ")
}
