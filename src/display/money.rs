//! Currency formatting in the Indonesian style: "Rp 1.250.000" or
//! "Rp 3.500,50".

use crate::models::Money;

/// Format an amount with `symbol`, dot-grouped thousands and a decimal comma
///
/// The fraction is only shown when it is non-zero.
pub fn format_money(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let units = group_thousands(amount.units().unsigned_abs());

    let symbol = if symbol.is_empty() {
        String::new()
    } else {
        format!("{} ", symbol)
    };

    if amount.cents_part() == 0 {
        format!("{}{}{}", sign, symbol, units)
    } else {
        format!("{}{}{},{:02}", sign, symbol, units, amount.cents_part())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}
