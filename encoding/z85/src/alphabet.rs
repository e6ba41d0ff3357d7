//! The Z85 digit set and its reverse lookup.

/// The 85 symbols, indexed by digit value.
pub const ALPHABET: [u8; 85] =
    *b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Lowest byte value in the alphabet (`!`).
const MIN_SYMBOL: u8 = b'!';

/// Highest byte value in the alphabet (`}`).
const MAX_SYMBOL: u8 = b'}';

/// Marks a byte inside `MIN_SYMBOL..=MAX_SYMBOL` that has no digit.
const NO_DIGIT: u8 = 0xFF;

const SPAN: usize = (MAX_SYMBOL - MIN_SYMBOL) as usize + 1;

/// Maps `byte - MIN_SYMBOL` to its digit, or [`NO_DIGIT`] for the gaps.
static REVERSE: [u8; SPAN] = reverse_table();

const fn reverse_table() -> [u8; SPAN] {
    let mut table = [NO_DIGIT; SPAN];
    let mut digit = 0;
    while digit < ALPHABET.len() {
        table[(ALPHABET[digit] - MIN_SYMBOL) as usize] = digit as u8;
        digit += 1;
    }
    table
}

/// Maps a digit (`0..85`) to its symbol.
#[inline]
pub(crate) fn symbol(digit: u32) -> u8 {
    ALPHABET[digit as usize]
}

/// Maps a symbol to its digit.
#[inline]
pub(crate) fn digit(byte: u8) -> Option<u8> {
    match byte {
        MIN_SYMBOL..=MAX_SYMBOL => match REVERSE[(byte - MIN_SYMBOL) as usize] {
            NO_DIGIT => None,
            d => Some(d),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_distinct() {
        let mut seen = [false; 256];
        for &b in &ALPHABET {
            assert!(!seen[b as usize], "{:?} appears twice", b as char);
            seen[b as usize] = true;
        }
    }

    #[test]
    fn span_matches_alphabet() {
        assert_eq!(ALPHABET.iter().min(), Some(&MIN_SYMBOL));
        assert_eq!(ALPHABET.iter().max(), Some(&MAX_SYMBOL));
    }

    #[test]
    fn reverse_inverts_alphabet() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            assert_eq!(digit(b), Some(i as u8));
            assert_eq!(symbol(i as u32), b);
        }
    }

    #[test]
    fn gaps_have_no_digit() {
        for &b in b"\"',;\\_`|" {
            assert_eq!(digit(b), None, "{:?} must not decode", b as char);
        }
    }

    #[test]
    fn outside_span_has_no_digit() {
        let valid = (0..=u8::MAX).filter(|&b| digit(b).is_some()).count();
        assert_eq!(valid, ALPHABET.len());

        for b in [0, b' ', b'~', 0x7F, 0x80, 0xFF] {
            assert_eq!(digit(b), None);
        }
    }
}
