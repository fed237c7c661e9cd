//! Input masks applied on every change event of the bound text fields.
//!
//! Each mask is a pure function of the raw string alone: no formatter
//! state, idempotent under re-application, and tolerant of partial input
//! (it always returns a valid-so-far prefix and never fails).

/// Digits of `raw`, in order, truncated to `max` characters.
fn digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// CPF display mask: up to 11 digits formatted as "000.000.000-00".
/// Separators only appear once the digits after them exist.
pub fn mask_cpf(raw: &str) -> String {
    let digits = digits(raw, 11);
    let mut out = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Phone display mask: "(DD) DDDD-DDDD" for 10 digits, "(DD) DDDDD-DDDD"
/// for 11. The hyphen always sits 4 digits before the end, so it only
/// settles once more than 6 digits are typed.
pub fn mask_phone(raw: &str) -> String {
    let digits = digits(raw, 11);
    if digits.len() <= 2 {
        return digits;
    }
    let (area, rest) = digits.split_at(2);
    if rest.len() <= 4 {
        return format!("({}) {}", area, rest);
    }
    let split = rest.len() - 4;
    format!("({}) {}-{}", area, &rest[..split], &rest[split..])
}

/// Time display mask: up to 4 digits formatted as "HH:MM". Does not check
/// ranges (accepts "99:99"); that is the consuming form's concern.
pub fn mask_time(raw: &str) -> String {
    let digits = digits(raw, 4);
    if digits.len() <= 2 {
        return digits;
    }
    format!("{}:{}", &digits[..2], &digits[2..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_mask_full_number() {
        assert_eq!(mask_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn test_cpf_mask_partial_input() {
        // No trailing separators while the input is incomplete
        assert_eq!(mask_cpf(""), "");
        assert_eq!(mask_cpf("1"), "1");
        assert_eq!(mask_cpf("123"), "123");
        assert_eq!(mask_cpf("1234"), "123.4");
        assert_eq!(mask_cpf("123456"), "123.456");
        assert_eq!(mask_cpf("1234567"), "123.456.7");
        assert_eq!(mask_cpf("123456789"), "123.456.789");
        assert_eq!(mask_cpf("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_cpf_mask_strips_non_digits_and_caps() {
        assert_eq!(mask_cpf("123abc456"), "123.456");
        assert_eq!(mask_cpf("123.456.789-01"), "123.456.789-01");
        // Extra digits past 11 are discarded
        assert_eq!(mask_cpf("123456789019999"), "123.456.789-01");
    }

    #[test]
    fn test_phone_mask_eleven_digits() {
        assert_eq!(mask_phone("11999998888"), "(11) 99999-8888");
    }

    #[test]
    fn test_phone_mask_ten_digits() {
        assert_eq!(mask_phone("1133334444"), "(11) 3333-4444");
    }

    #[test]
    fn test_phone_mask_partial_input() {
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("1"), "1");
        assert_eq!(mask_phone("11"), "11");
        assert_eq!(mask_phone("119"), "(11) 9");
        assert_eq!(mask_phone("119999"), "(11) 9999");
        // The hyphen tracks 4-from-the-end while digits accumulate
        assert_eq!(mask_phone("1199999"), "(11) 9-9999");
        assert_eq!(mask_phone("119999988"), "(11) 999-9988");
    }

    #[test]
    fn test_time_mask() {
        assert_eq!(mask_time(""), "");
        assert_eq!(mask_time("0"), "0");
        assert_eq!(mask_time("08"), "08");
        assert_eq!(mask_time("080"), "08:0");
        assert_eq!(mask_time("0800"), "08:00");
        // Range is deliberately not validated here
        assert_eq!(mask_time("9999"), "99:99");
        assert_eq!(mask_time("08000"), "08:00");
    }

    #[test]
    fn test_masks_are_idempotent() {
        for input in ["", "1", "123", "12345678901", "123.456.789-01", "abc123"] {
            assert_eq!(mask_cpf(&mask_cpf(input)), mask_cpf(input));
        }
        for input in ["", "11", "119", "11999998888", "(11) 99999-8888", "1133334444"] {
            assert_eq!(mask_phone(&mask_phone(input)), mask_phone(input));
        }
        for input in ["", "0", "08", "0800", "08:00", "9999"] {
            assert_eq!(mask_time(&mask_time(input)), mask_time(input));
        }
    }
}
