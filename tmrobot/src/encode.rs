/// Pack text into registers, two bytes per register with the first byte in the high half.
///
/// A trailing unpaired byte is dropped, so the output always has `text.len() / 2` entries.
pub fn pack_pairs(text: &str) -> Vec<u16> {
    text.as_bytes()
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}
