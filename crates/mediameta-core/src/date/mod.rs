pub mod guess;
pub mod line;

/// Split `n` leading ASCII digits off `s` and return their value with the remainder.
pub(crate) fn take_digits(s: &str, n: usize) -> Option<(u32, &str)> {
    let head = s.get(..n)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((head.parse().ok()?, &s[n..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_digits() {
        assert_eq!(take_digits("2023:06", 4), Some((2023, ":06")));
        assert_eq!(take_digits("06", 2), Some((6, "")));
        assert_eq!(take_digits("6", 2), None);
        assert_eq!(take_digits("2O23", 4), None);
        assert_eq!(take_digits("１２", 2), None);
    }
}
