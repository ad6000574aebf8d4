/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a snowflake-style i64 request ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so the
/// console frontend can echo it back verbatim):
///   - 41 bits: milliseconds since 2025-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at console scale)
///
/// Stamped into the `X-Request-Id` header on every outgoing API call.
pub fn request_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2025-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_735_689_600_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_is_positive_and_safe() {
        let id = request_id();
        assert!(id > 0);
        // Must fit in 53 bits
        assert!(id < (1i64 << 53));
    }

    #[test]
    fn test_request_id_monotonic_prefix() {
        // Timestamp bits dominate: ids generated later are not smaller
        // once at least one millisecond has passed.
        let a = request_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = request_id();
        assert!(b > a);
    }
}
