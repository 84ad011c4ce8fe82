/// Format an amount with thousands separators and its currency code:
/// `1,234.56 KRW`, `-500.00 USD`.
pub fn money(val: f64, code: &str) -> String {
    format!("{} {code}", number(val))
}

/// Bare formatted number, two decimals, thousands separators.
pub fn number(val: f64) -> String {
    let negative = val < 0.0;
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((&cents, "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}
