//! Port of Bob Jenkins' [`lookup3.c`][0] `hashlittle()`.
//!
//! Archive tables key every entry by `hashlittle(path, 0)`. The function is
//! not intended for cryptographic purposes and offers no protection against
//! collisions.
//!
//! [0]: https://www.burtleburtle.net/bob/c/lookup3.c

/// Seed constant shared by all lookup3 variants.
const SEED: u32 = 0xdead_beef;

/// Mix 3 `u32` values reversibly.
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(4);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(6);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(8);
    *b = b.wrapping_add(*a);

    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(16);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(19);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(4);
    *b = b.wrapping_add(*a);
}

/// Final mixing of 3 `u32` values into `c`.
fn final_mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(14));

    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(11));

    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(25));

    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(16));

    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(4));

    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(14));

    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(24));
}

/// Read a little-endian `u32` from a 4-byte window.
fn word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Hash a variable-length key into a `u32`.
///
/// This is `hashlittle()` from lookup3.c. Keys are consumed in 12-byte
/// blocks of three little-endian words; the last block (1 to 12 bytes) is
/// zero-padded before the final mix. An empty key returns the seed without
/// mixing.
///
/// Archive name hashes always use `initval = 0`.
///
/// # Examples
///
/// ```
/// use arcnames_hash::hashlittle;
///
/// assert_eq!(hashlittle(b"", 0), 0xdead_beef);
/// assert_eq!(hashlittle(b"Four score and seven years ago", 0), 0x1777_0551);
/// ```
pub fn hashlittle(key: &[u8], initval: u32) -> u32 {
    // Keys longer than u32::MAX only perturb the seed; lookup3 truncates too.
    let mut a = SEED
        .wrapping_add((key.len() & (u32::MAX as usize)) as u32)
        .wrapping_add(initval);
    let mut b = a;
    let mut c = a;

    if key.is_empty() {
        return c;
    }

    let mut k = key;
    while k.len() > 12 {
        a = a.wrapping_add(word(&k[0..4]));
        b = b.wrapping_add(word(&k[4..8]));
        c = c.wrapping_add(word(&k[8..12]));
        mix(&mut a, &mut b, &mut c);
        k = &k[12..];
    }

    // lookup3.c masks the missing high bytes of the tail; padding with
    // zeroes is equivalent.
    let mut tail = [0u8; 12];
    tail[..k.len()].copy_from_slice(k);

    a = a.wrapping_add(word(&tail[0..4]));
    b = b.wrapping_add(word(&tail[4..8]));
    c = c.wrapping_add(word(&tail[8..12]));

    final_mix(&mut a, &mut b, &mut c);
    c
}
