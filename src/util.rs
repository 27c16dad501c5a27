// Formatting helpers shared by the view derivation.

/// Plain number text: integers print without a fraction, non-finite values print as `0`.
pub fn plain(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".into();
    }
    format!("{}", v)
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let rest = n / 1000;
        if rest == 0 {
            groups.push(format!("{}", n % 1000));
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n = rest;
    }
    groups.reverse();
    groups.join(",")
}

/// Locale style number: thousands separators, at most three fraction digits.
pub fn format_number(v: f64) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let scaled = (v.abs() * 1000.0).round() as u64;
    let whole = scaled / 1000;
    let frac = scaled % 1000;
    let mut out = String::new();
    if v < 0.0 && scaled > 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if frac > 0 {
        let digits = format!("{:03}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

pub fn format_cash(v: f64) -> String {
    format!("${}", format_number(v))
}

/// Whole grams, never negative.
pub fn format_grams(v: f64) -> String {
    let g = if v.is_finite() { v.floor().max(0.0) } else { 0.0 };
    format!("{}g", group_thousands(g as u64))
}

pub fn format_price(v: f64) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    format!("{:.2}", v)
}

pub fn clamp_pct(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

/// CSS width for a bar fill.
pub fn pct_width(v: f64) -> String {
    format!("{}%", plain(clamp_pct(v)))
}
