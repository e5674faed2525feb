//! Radio power conversions between linear milliwatts and logarithmic dBm.

use crate::error::{Error, Result};

/// mW -> dBm. `mw` must be positive.
pub fn mw_to_dbm(mw: f64) -> f64 {
    mw.log10() * 10.0
}

/// dBm -> mW.
pub fn dbm_to_mw(dbm: f64) -> f64 {
    10f64.powf(dbm / 10.0)
}

/// Map an absolute power reading into the -192..=63 dBm range.
///
/// Wireless extensions report signed dBm through an unsigned 8-bit field
/// (`IW_QUAL_DBM`), so anything above 63 has wrapped.
pub fn abs_to_dbm(power: i32) -> i32 {
    if power > 63 { power - 0x100 } else { power }
}

/// Human readable power for a dBm value, scaled to pW, nW, uW or mW.
pub fn dbm_to_power(dbm: f64) -> String {
    let mw = dbm_to_mw(dbm);
    if mw < 1e-8 {
        format!("{:.2} pW", mw * 1e9)
    } else if mw < 1e-5 {
        format!("{:.2} nW", mw * 1e6)
    } else if mw < 1e-2 {
        format!("{:.2} uW", mw * 1e3)
    } else {
        format!("{:.2} mW", mw)
    }
}

/// Parse a hexadecimal string such as `"ff"`, `"0x1F"` or `"-0xa"`.
pub fn hex_to_int(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);
    // from_str_radix would accept a second sign here
    if digits.starts_with(['+', '-']) {
        return Err(Error::Parse {
            input: input.to_string(),
            detail: "misplaced sign".to_string(),
        });
    }
    let value = i64::from_str_radix(digits, 16).map_err(|e| Error::Parse {
        input: input.to_string(),
        detail: e.to_string(),
    })?;
    Ok(if negative { -value } else { value })
}
