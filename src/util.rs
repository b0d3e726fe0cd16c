use std::io::{self, Read, Seek, SeekFrom};

/// Bytes inspected when sniffing for binary content.
pub const BINARY_SNIFF_LEN: usize = 512;

/// Check whether a reader points to a binary file by looking for null bytes
/// in the first 512 bytes. Resets the reader position to the start afterward.
pub fn is_binary_reader<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let mut header = [0u8; BINARY_SNIFF_LEN];
    let n = reader.read(&mut header)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(is_binary(&header[..n]))
}

/// Same check on content already in memory.
pub fn is_binary(content: &[u8]) -> bool {
    let head = &content[..content.len().min(BINARY_SNIFF_LEN)];
    head.contains(&0)
}

/// Strip a UTF-8 byte order mark so it is not mistaken for code.
pub fn strip_bom(content: &[u8]) -> &[u8] {
    content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod tests;
