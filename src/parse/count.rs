use crate::error::BulletinError;

/// Turn a printed figure such as `"1,234,567"` into an integer.
/// Every non-digit is dropped, so `"12.345"` reads as `12345`.
pub fn clean_count(raw: &str) -> Result<u64, BulletinError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(BulletinError::InvalidCount(raw.to_string()));
    }
    digits
        .parse()
        .map_err(|_| BulletinError::InvalidCount(raw.to_string()))
}
