use crate::{configuration::Format, hex};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Decoded<'a> {
    length: usize,
    bytes: &'a [u8],
    hex: String,
}

/// Renders decoded bytes for stdout, newline terminated.
pub fn render(bytes: &[u8], format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::List => Ok(format!("Length: {}\n{:?}\n", bytes.len(), bytes)),
        Format::Hex => Ok(format!("Length: {}\n{}\n", bytes.len(), hex::encode(bytes))),
        Format::Json => {
            let decoded = Decoded {
                length: bytes.len(),
                bytes,
                hex: hex::encode(bytes),
            };
            Ok(format!("{}\n", serde_json::to_string(&decoded)?))
        }
    }
}
