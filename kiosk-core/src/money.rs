//! Money formatting
//!
//! Prices are whole pesos (smallest currency unit, no decimals).
//! Display formatting follows the es-AR convention: dot as thousands
//! separator ("$3.500").

/// Format an amount for receipts and outbound messages
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();

    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push('.');
        }
        reversed.push(ch);
    }
    let grouped: String = reversed.chars().rev().collect();

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
