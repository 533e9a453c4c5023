use std::{fs, path::Path};

use encoding_rs::{Encoding, GBK, UTF_16LE, UTF_8};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Reads a whole text file, detecting its encoding.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;

    decode(&bytes).ok_or_else(|| Error::DecodeFailure(path.to_path_buf()))
}

/// Decodes `bytes` strictly, returning `None` when no supported encoding
/// accepts them.
pub fn decode(bytes: &[u8]) -> Option<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        debug!(encoding = encoding.name(), "byte-order mark found");
        return encoding
            .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            .map(|text| text.into_owned());
    }

    // Tried in order without a byte-order mark. GBK is a superset of GB2312.
    let fallbacks = [UTF_8, GBK, UTF_16LE];

    fallbacks.iter().enumerate().find_map(|(i, encoding)| {
        let text = encoding.decode_without_bom_handling_and_without_replacement(bytes)?;
        if i > 0 {
            warn!(encoding = encoding.name(), "input is not UTF-8, decoded with fallback");
        }
        Some(text.into_owned())
    })
}
