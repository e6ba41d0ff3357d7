//! # Z85 Encoding
//!
//! z85 implements the [Z85](https://rfc.zeromq.org/spec/32/) encoding. Every
//! 4 bytes of input are packed into a big-endian 32-bit number and written as
//! 5 base-85 digits, using a fixed alphabet of printable characters that is
//! safe to embed in source code, config files and text protocols.
//!
//! There is no padding: input to [`encode`] must be a multiple of 4 bytes long
//! and input to [`decode`] a multiple of 5 characters. Both operate on caller
//! provided buffers; size them with [`encoded_len`] and [`decoded_len`], or use
//! the allocating [`encode_to_vec`], [`encode_to_string`] and [`decode_to_vec`].
//!
//! ## Decode Example
//!
//! ```
//! let mut buf = [0; z85::decoded_len(10)];
//! let n = z85::decode(&mut buf, b"HelloWorld").unwrap();
//!
//! assert_eq!(n, 8);
//! assert_eq!(buf, [0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]);
//! ```
//!
//! ## Encode Example
//!
//! ```
//! let encoded = z85::encode_to_string(&[0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]).unwrap();
//!
//! assert_eq!(encoded, "HelloWorld");
//! assert_eq!(z85::encode_to_string(b"odd"), Err(z85::Error::Length));
//! ```

mod alphabet;
mod decode;
mod encode;
mod error;

pub use alphabet::ALPHABET;
pub use decode::{decode, decode_to_vec};
pub use encode::{encode, encode_to_string, encode_to_vec};
pub use error::{Error, Result};

/// Bytes per block of raw data.
const BLOCK_BYTES: usize = 4;

/// Symbols per block of encoded text.
const BLOCK_CHARS: usize = 5;

/// Length of the text that `n` bytes encode to.
///
/// `n` is expected to be a multiple of 4; any remainder is ignored.
pub const fn encoded_len(n: usize) -> usize {
    n / BLOCK_BYTES * BLOCK_CHARS
}

/// Length of the data that `n` characters of text decode to.
///
/// `n` is expected to be a multiple of 5; any remainder is ignored.
pub const fn decoded_len(n: usize) -> usize {
    n / BLOCK_CHARS * BLOCK_BYTES
}
