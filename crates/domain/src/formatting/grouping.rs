/// Inserts `,` every three digits from the right ("1234567" -> "1,234,567").
///
/// Leading zeros are dropped first, so `"000123"` groups as `"123"` and an
/// all-zero input collapses to `"0"`.
pub fn group_thousands(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };

    let len = trimmed.len();
    let mut result = String::with_capacity(len + (len - 1) / 3);
    for (i, c) in trimmed.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_group_thousands_strips_leading_zeros() {
        assert_eq!(group_thousands("000"), "0");
        assert_eq!(group_thousands("0001234"), "1,234");
    }
}
