use crate::catalog::{text_attr, Part};

pub const CURRENCY_SYMBOL: &str = "₹";
pub const PRICE_UNAVAILABLE: &str = "N/A";
const SPEC_SEPARATOR: &str = " • ";

/// Formats a price as rupees with Indian digit grouping (`₹1,23,456`).
/// Up to three fraction digits are kept, trailing zeros dropped.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => format!("{}{}", CURRENCY_SYMBOL, group_en_in(p)),
        _ => PRICE_UNAVAILABLE.to_string(),
    }
}

fn group_en_in(value: f64) -> String {
    let scaled = (value.abs() * 1000.0).round() as u128;
    let whole = scaled / 1000;
    let frac = scaled % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    if digits.len() <= 3 {
        grouped.push_str(&digits);
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        // Leading group may be one digit; the rest pair up.
        let lead = head.len() % 2;
        if lead == 1 {
            grouped.push_str(&head[..1]);
        }
        for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
            if i > 0 || lead == 1 {
                grouped.push(',');
            }
            grouped.push_str(std::str::from_utf8(pair).unwrap_or_default());
        }
        grouped.push(',');
        grouped.push_str(tail);
    }

    if frac > 0 {
        let frac = format!("{:03}", frac);
        grouped.push('.');
        grouped.push_str(frac.trim_end_matches('0'));
    }

    if value < 0.0 && scaled > 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn push_num(specs: &mut Vec<String>, value: Option<f64>, render: impl Fn(f64) -> String) {
    if let Some(v) = value.filter(|v| *v != 0.0 && !v.is_nan()) {
        specs.push(render(v));
    }
}

/// One-line summary of the attributes a part declares.
pub fn format_specs(part: &Part) -> String {
    let mut specs: Vec<String> = Vec::new();
    if let Some(socket) = text_attr(&part.socket) {
        specs.push(socket.to_string());
    }
    if let Some(ff) = text_attr(&part.form_factor) {
        specs.push(ff.to_string());
    }
    push_num(&mut specs, part.speed, |v| format!("{} MHz", v));
    push_num(&mut specs, part.capacity, |v| format!("{} GB", v));
    push_num(&mut specs, part.core_count, |v| format!("{} Cores", v));
    push_num(&mut specs, part.wattage, |v| format!("{}W", v));
    push_num(&mut specs, part.vram, |v| format!("{} GB VRAM", v));
    specs.join(SPEC_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_like_en_in() {
        assert_eq!(group_en_in(0.0), "0");
        assert_eq!(group_en_in(999.0), "999");
        assert_eq!(group_en_in(1000.0), "1,000");
        assert_eq!(group_en_in(123456.0), "1,23,456");
        assert_eq!(group_en_in(1234567.0), "12,34,567");
        assert_eq!(group_en_in(12345678.0), "1,23,45,678");
    }

    #[test]
    fn keeps_short_fractions() {
        assert_eq!(group_en_in(1499.5), "1,499.5");
        assert_eq!(group_en_in(0.1234), "0.123");
        assert_eq!(group_en_in(-2500.0), "-2,500");
    }
}
