use crate::alphabet::digit;
use crate::{decoded_len, Error, Result, BLOCK_BYTES, BLOCK_CHARS};

/// Decodes one block of 5 symbols to 4 bytes.
///
/// Blocks above `%nSc0` exceed 32 bits and wrap around.
fn decode_word(block: &[u8]) -> Result<[u8; BLOCK_BYTES]> {
    let mut q = 0u32;
    for &b in block {
        let d = digit(b).ok_or(Error::InvalidByte(b))?;
        q = q.wrapping_mul(85).wrapping_add(u32::from(d));
    }
    Ok(q.to_be_bytes())
}

/// Decodes Z85 text from `src` into `dst`, returning the number of bytes
/// written.
///
/// `dst` only needs to hold [`decoded_len(src.len())`](decoded_len) bytes.
///
/// # Errors
///
/// Returns [`Error::Length`] without writing anything if the length of `src`
/// is not a multiple of 5, and [`Error::InvalidByte`] for the first byte that
/// is not part of the alphabet. In the latter case the contents of `dst` are
/// unspecified.
///
/// # Panics
///
/// Panics if `dst` is shorter than `decoded_len(src.len())`.
pub fn decode(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    if src.len() % BLOCK_CHARS != 0 {
        return Err(Error::Length);
    }

    let len = decoded_len(src.len());
    assert!(
        dst.len() >= len,
        "z85 destination too small: need {} bytes, got {}",
        len,
        dst.len()
    );
    log::trace!("decoding {} symbols into {} bytes", src.len(), len);

    for (block, out) in src
        .chunks_exact(BLOCK_CHARS)
        .zip(dst[..len].chunks_exact_mut(BLOCK_BYTES))
    {
        out.copy_from_slice(&decode_word(block)?);
    }

    Ok(len)
}

/// Decodes Z85 text into a newly allocated buffer.
///
/// Accepts anything byte-like, so both `&str` and `&[u8]` work.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_to_vec(src: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let src = src.as_ref();
    let mut buf = vec![0; decoded_len(src.len())];
    decode(&mut buf, src)?;
    Ok(buf)
}
