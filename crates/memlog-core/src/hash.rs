//! Key hashing for partition routing.
//!
//! Keyed messages must land on the same partition every time, so the
//! routing hash is fixed here once: the Kafka-compatible murmur2 with
//! the sign bit masked off before the modulo. Changing either half
//! would silently re-route every keyed message in flight.

/// Kafka-compatible murmur2 hash.
///
/// Produces a 32-bit **unsigned** hash matching the Kafka Java client's
/// `Utils.murmur2()`: same seed (0x9747b28c), same mixing constants,
/// same little-endian chunking. Java's signed 32-bit arithmetic wraps
/// identically to `u32` wrapping ops, so the outputs agree bit for bit.
///
/// # Example
/// ```
/// # use memlog_core::hash::murmur2;
/// let hash = murmur2(b"hello");
/// assert_eq!(hash, 1682149141); // matches Kafka Java
/// ```
pub fn murmur2(data: &[u8]) -> u32 {
    const SEED: u32 = 0x9747b28c;
    const M: u32 = 0x5bd1e995;
    const R: u32 = 24;

    let mut h: u32 = SEED ^ (data.len() as u32);

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);
        h = h.wrapping_mul(M);
        h ^= k;
    }

    let tail = chunks.remainder();
    if tail.len() >= 3 {
        h ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        h ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        h ^= tail[0] as u32;
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;

    h
}

/// Partition index for a routing key.
///
/// Masks the sign bit, then takes the modulo. The mask keeps the
/// intermediate value non-negative by construction, which sidesteps the
/// classic `abs(MIN_VALUE)` overflow entirely; the result is always in
/// `0..partition_count`.
#[inline]
pub fn partition_for_key(key: &[u8], partition_count: u32) -> u32 {
    (murmur2(key) & 0x7fffffff) % partition_count
}
