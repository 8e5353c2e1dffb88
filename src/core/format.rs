//! Display formatting for addresses and byte sizes.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ADDRESS_PLACEHOLDER: &str = "NO ADDRESS";

const FILE_SIZE_UNITS: [&str; 6] = ["Bytes", "KB", "MB", "GB", "TB", "PB"];
const BYTE_UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const MAX_DECIMALS: i32 = 100;

/// How many leading and trailing characters of an address stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFormat {
    pub start: usize,
    pub end: usize,
    pub placeholder: String,
}

impl Default for AddressFormat {
    fn default() -> Self {
        Self {
            start: 10,
            end: 4,
            placeholder: DEFAULT_ADDRESS_PLACEHOLDER.to_string(),
        }
    }
}

impl AddressFormat {
    pub fn apply(&self, address: Option<&str>) -> String {
        format_crypto_address(address, self.start, self.end, Some(&self.placeholder))
    }
}

/// Shortens `0x1234567890abcdef` to `0x12...abcdef` style.
///
/// Addresses shorter than `start + end` characters are returned whole. An
/// `end` of 0 keeps the whole address after the `...`, like `slice(-0)`.
pub fn format_crypto_address(
    address: Option<&str>,
    start: usize,
    end: usize,
    placeholder: Option<&str>,
) -> String {
    let Some(address) = address.filter(|a| !a.is_empty()) else {
        return placeholder.unwrap_or(DEFAULT_ADDRESS_PLACEHOLDER).to_string();
    };

    let chars: Vec<char> = address.chars().collect();
    if chars.len() < start.saturating_add(end) {
        return address.to_string();
    }

    let first: String = chars[..start].iter().collect();
    let last: String = match end {
        0 => address.to_string(),
        _ => chars[chars.len() - end..].iter().collect(),
    };
    format!("{}...{}", first, last)
}

/// `_0x12_cdef` style fragment for download filenames, `""` for short addresses.
pub fn address_for_filename(address: Option<&str>) -> String {
    let chars: Vec<char> = address.unwrap_or_default().chars().collect();
    if chars.len() < 8 {
        return String::new();
    }
    let first: String = chars[..4].iter().collect();
    let last: String = chars[chars.len() - 4..].iter().collect();
    format!("_{}_{}", first, last)
}

/// `1536.0` → `"1.50 KB"` (powers of 1024, always two decimals).
pub fn human_readable_file_size(bytes: f64) -> String {
    let mut size = bytes;
    let mut index = 0;
    while size >= 1024.0 && index < FILE_SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        index += 1;
    }
    format!("{:.2} {}", size, FILE_SIZE_UNITS[index])
}

/// `1500.0` → `"1.5 KB"`; `binary` switches from powers of 1000 to 1024.
///
/// The value is rounded to `decimals` places (0 to 100) and trailing zeros
/// are dropped.
pub fn format_bytes(bytes: f64, decimals: i32, binary: bool) -> String {
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }
    if bytes < 0.0 {
        return "Invalid size".to_string();
    }
    if !bytes.is_finite() {
        return "Invalid input".to_string();
    }

    let k: f64 = if binary { 1024.0 } else { 1000.0 };
    let dm = decimals.clamp(0, MAX_DECIMALS) as usize;
    let index = (bytes.ln() / k.ln()).floor().clamp(0.0, (BYTE_UNITS.len() - 1) as f64) as usize;

    let scaled = bytes / k.powi(index as i32);
    // 四捨五入後再轉回 f64，去掉多餘的 0
    let rounded: f64 = format!("{:.*}", dm, scaled).parse().unwrap_or(scaled);
    format!("{} {}", rounded, BYTE_UNITS[index])
}
