use std::fmt::Display;

/// Renders a number with a `,` between every group of three digits.
///
/// Groups are counted from the least-significant end; no separator is placed
/// in front of the first group.
pub fn group_thousands(value: impl Display) -> String {
    let raw = value.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut out = String::with_capacity(raw.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
