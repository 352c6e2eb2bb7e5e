/// Format a finite f64 in plain positional notation: no exponent, no
/// trailing fractional zeros (the decimal point goes too if nothing
/// remains behind it).
pub(crate) fn format_plain_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_plain_f64 called with non-finite value");
        return String::from("nil");
    }
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value);
    if raw.contains(['e', 'E']) {
        // ryu picks scientific notation for extreme magnitudes; the doc
        // corpus never carries those, so positional expansion is enough.
        return trim_fraction(&format!("{value:.12}"));
    }
    trim_fraction(raw)
}

fn trim_fraction(s: &str) -> String {
    let Some(dot) = s.find('.') else {
        return String::from(s);
    };
    let bytes = s.as_bytes();
    let mut end = s.len();
    while end > dot + 1 && bytes[end - 1] == b'0' {
        end -= 1;
    }
    if end == dot + 1 {
        end = dot;
    }
    String::from(&s[..end])
}
