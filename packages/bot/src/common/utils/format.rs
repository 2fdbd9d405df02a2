use rust_decimal::Decimal;

use crate::common::Timestamp;

/// Format a price with comma thousands separators.
///
/// Trailing fractional zeros are dropped, so `1234.50` renders as `1,234.5`.
pub fn format_price(price: Decimal) -> String {
    let rendered = price.normalize().to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };

    match unsigned.split_once('.') {
        Some((whole, fraction)) => format!("{}{}.{}", sign, group_thousands(whole), fraction),
        None => format!("{}{}", sign, group_thousands(unsigned)),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Platform date token that each client renders as a localized short date.
///
/// Clients that cannot localize show the raw epoch seconds after `|`.
pub fn date_token(posted: &Timestamp) -> String {
    format!(
        "<!date^{0}^{{date_short_pretty}}|{0}>",
        posted.seconds
    )
}
