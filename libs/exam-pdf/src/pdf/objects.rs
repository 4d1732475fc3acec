//! PDF Object Model
//!
//! The subset of PDF object types needed for text documents, plus their
//! serialization into file syntax.

use std::collections::BTreeMap;

/// PDF object types
#[derive(Debug, Clone)]
pub enum PdfObject {
    /// Integer number
    Integer(i64),
    /// Real (floating-point) number
    Real(f64),
    /// Literal string, stored as raw bytes
    String(Vec<u8>),
    /// Name object (starts with /)
    Name(String),
    /// Array of objects
    Array(Vec<PdfObject>),
    /// Dictionary (key-value pairs)
    Dictionary(PdfDictionary),
    /// Indirect reference to an object number (generation 0)
    Reference(u32),
}

impl PdfObject {
    pub fn name(name: &str) -> Self {
        PdfObject::Name(name.to_string())
    }

    pub fn text(s: &str) -> Self {
        PdfObject::String(s.as_bytes().to_vec())
    }

    /// Serialize the object into `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            PdfObject::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
            PdfObject::Real(n) => out.extend_from_slice(format_real(*n).as_bytes()),
            PdfObject::String(data) => write_literal_string(out, data),
            PdfObject::Name(name) => write_name(out, name),
            PdfObject::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.write_to(out);
                }
                out.push(b']');
            }
            PdfObject::Dictionary(dict) => dict.write_to(out),
            PdfObject::Reference(num) => {
                out.extend_from_slice(format!("{} 0 R", num).as_bytes());
            }
        }
    }
}

/// PDF dictionary (ordered key-value pairs)
#[derive(Debug, Clone, Default)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair
    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        self.entries.insert(key.into(), value);
    }

    /// Set the Type entry (common for PDF objects)
    pub fn with_type(mut self, type_name: &str) -> Self {
        self.insert("Type", PdfObject::name(type_name));
        self
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            write_name(out, key);
            out.push(b' ');
            value.write_to(out);
        }
        out.extend_from_slice(b" >>");
    }
}

/// Format a real number without trailing zeros.
pub fn format_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        let s = format!("{:.4}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Write bytes as a literal string, escaping delimiters.
pub fn write_literal_string(out: &mut Vec<u8>, data: &[u8]) {
    out.push(b'(');
    for &byte in data {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(byte),
        }
    }
    out.push(b')');
}

fn write_name(out: &mut Vec<u8>, name: &str) {
    out.push(b'/');
    for byte in name.bytes() {
        match byte {
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                out.extend_from_slice(format!("#{:02X}", byte).as_bytes());
            }
            0x21..=0x7E => out.push(byte),
            _ => out.extend_from_slice(format!("#{:02X}", byte).as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(obj: &PdfObject) -> String {
        let mut out = Vec::new();
        obj.write_to(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_reals() {
        assert_eq!(format_real(12.0), "12");
        assert_eq!(format_real(0.5), "0.5");
        assert_eq!(format_real(595.2756), "595.2756");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(serialize(&PdfObject::text("a(b)c\\")), "(a\\(b\\)c\\\\)");
    }

    #[test]
    fn test_name_escaping() {
        assert_eq!(serialize(&PdfObject::name("A B")), "/A#20B");
    }

    #[test]
    fn test_dictionary() {
        let mut dict = PdfDictionary::new().with_type("Page");
        dict.insert("Parent", PdfObject::Reference(2));
        dict.insert(
            "MediaBox",
            PdfObject::Array(vec![PdfObject::Integer(0), PdfObject::Real(841.5)]),
        );
        assert_eq!(
            serialize(&PdfObject::Dictionary(dict)),
            "<< /MediaBox [0 841.5] /Parent 2 0 R /Type /Page >>"
        );
    }
}
