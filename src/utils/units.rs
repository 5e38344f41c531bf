/// Byte count conversions for progress display

/// Bytes in one binary megabyte
pub const BYTES_PER_MB: u64 = 1_048_576;

/// Convert a byte count to (binary) megabytes
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

/// Megabytes rounded to the nearest integer, for display only
pub fn display_mb(bytes: u64) -> u64 {
    bytes_to_mb(bytes).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_mb_uses_binary_unit() {
        assert_eq!(bytes_to_mb(BYTES_PER_MB), 1.0);
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mb(BYTES_PER_MB / 2), 0.5);
    }

    #[test]
    fn test_display_mb_rounds_to_nearest() {
        assert_eq!(display_mb(0), 0);
        assert_eq!(display_mb(BYTES_PER_MB / 2 - 1), 0);
        assert_eq!(display_mb(BYTES_PER_MB + BYTES_PER_MB / 2 + 1), 2);
        assert_eq!(display_mb(150 * BYTES_PER_MB), 150);
    }
}
