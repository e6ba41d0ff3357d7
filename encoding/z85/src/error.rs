/// Errors returned by [`encode`](crate::encode) and [`decode`](crate::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input isn't a whole number of blocks: 4 bytes when encoding,
    /// 5 characters when decoding.
    #[error("input length is not a multiple of the block size")]
    Length,
    /// A byte that is not part of the Z85 alphabet was found while decoding.
    #[error("invalid z85 byte {0:#04x}")]
    InvalidByte(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
