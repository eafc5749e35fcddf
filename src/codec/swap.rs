//! In-place byte order reversal over fixed-size records.

/// Reverse the bytes of each of `block` consecutive `size`-byte records in `buf`.
///
/// Only whole records that fit in `buf` are touched, so a `block` count
/// larger than the buffer (or `size == 0`) never reaches out of bounds.
/// Returns the number of records swapped; `block == 0` swaps nothing.
pub fn swap_endian(buf: &mut [u8], size: usize, block: usize) -> usize {
    if size == 0 {
        return 0;
    }
    let records = block.min(buf.len() / size);
    for record in buf.chunks_exact_mut(size).take(records) {
        record.reverse();
    }
    records
}
