//! Byte-level inspection of written files, independent of any reader.

/// Position of the first occurrence of `needle`
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Position of the last occurrence of `needle`
pub fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// The number on the line after the last `startxref`
pub fn startxref_value(bytes: &[u8]) -> u64 {
    let keyword = b"startxref\n";
    let start = rfind(bytes, keyword).expect("no startxref keyword") + keyword.len();
    let end = start + bytes[start..].iter().position(|&b| b == b'\n').expect("unterminated startxref");
    std::str::from_utf8(&bytes[start..end]).unwrap().parse().unwrap()
}

/// One cross-reference subsection: its header and its raw records
pub struct XrefSection {
    pub start: u32,
    pub count: usize,
    pub records: Vec<Vec<u8>>,
}

/// Parse the cross-reference table that `startxref` points at
pub fn xref_sections(bytes: &[u8]) -> Vec<XrefSection> {
    let mut pos = startxref_value(bytes) as usize;
    assert_eq!(&bytes[pos..pos + 5], b"xref\n", "startxref does not point at the table");
    pos += 5;

    let mut sections = Vec::new();
    while !bytes[pos..].starts_with(b"\ntrailer") && !bytes[pos..].starts_with(b"trailer") {
        let line_end = pos + bytes[pos..].iter().position(|&b| b == b'\n').unwrap();
        let header = std::str::from_utf8(&bytes[pos..line_end]).unwrap();
        let mut parts = header.split(' ');
        let start: u32 = parts.next().unwrap().parse().unwrap();
        let count: usize = parts.next().unwrap().parse().unwrap();
        pos = line_end + 1;

        let records = (0..count)
            .map(|i| bytes[pos + i * 20..pos + (i + 1) * 20].to_vec())
            .collect();
        pos += count * 20;
        sections.push(XrefSection { start, count, records });
    }
    sections
}

/// Value of a `/Key <number>` line in the trailer dictionary
pub fn trailer_number(bytes: &[u8], key: &str) -> u64 {
    let trailer = rfind(bytes, b"\ntrailer\n").expect("no trailer");
    let needle = format!("\n/{} ", key);
    let start = trailer + find(&bytes[trailer..], needle.as_bytes()).expect("key not in trailer") + needle.len();
    let end = start + bytes[start..].iter().position(|&b| b == b'\n').unwrap();
    std::str::from_utf8(&bytes[start..end]).unwrap().parse().unwrap()
}
