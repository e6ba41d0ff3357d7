use crate::alphabet::symbol;
use crate::{encoded_len, Error, Result, BLOCK_BYTES, BLOCK_CHARS};

fn divmod(n: u32, m: u32) -> (u32, u32) {
    (n / m, n % m)
}

fn encode_word(c: [u8; BLOCK_BYTES]) -> [u8; BLOCK_CHARS] {
    let n = u32::from_be_bytes(c);
    let (n, e) = divmod(n, 85);
    let (n, d) = divmod(n, 85);
    let (n, c) = divmod(n, 85);
    let (a, b) = divmod(n, 85);

    [symbol(a), symbol(b), symbol(c), symbol(d), symbol(e)]
}

/// Encodes `src` into `dst`, returning the number of bytes written.
///
/// `dst` only needs to hold [`encoded_len(src.len())`](encoded_len) bytes.
/// Anything past that is left untouched.
///
/// # Errors
///
/// Returns [`Error::Length`] without writing anything if the length of `src`
/// is not a multiple of 4.
///
/// # Panics
///
/// Panics if `dst` is shorter than `encoded_len(src.len())`.
pub fn encode(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    if src.len() % BLOCK_BYTES != 0 {
        return Err(Error::Length);
    }

    let len = encoded_len(src.len());
    assert!(
        dst.len() >= len,
        "z85 destination too small: need {} bytes, got {}",
        len,
        dst.len()
    );
    log::trace!("encoding {} bytes into {} symbols", src.len(), len);

    for (chunk, out) in src
        .chunks_exact(BLOCK_BYTES)
        .zip(dst[..len].chunks_exact_mut(BLOCK_CHARS))
    {
        let c: [u8; BLOCK_BYTES] = chunk.try_into().unwrap();
        out.copy_from_slice(&encode_word(c));
    }

    Ok(len)
}

/// Encodes `src` into a newly allocated buffer.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_to_vec(src: &[u8]) -> Result<Vec<u8>> {
    let mut buf = vec![0; encoded_len(src.len())];
    encode(&mut buf, src)?;
    Ok(buf)
}

/// Encodes `src` as a [`String`].
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_to_string(src: &[u8]) -> Result<String> {
    let buf = encode_to_vec(src)?;
    // every symbol in the alphabet is ASCII
    Ok(buf.into_iter().map(char::from).collect())
}
