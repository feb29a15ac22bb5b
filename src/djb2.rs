use core::hash::{BuildHasherDefault, Hasher};

use crate::config::DJB2_SEED;

/// DJB2 (Dan Bernstein, 1990): `h = h * 33 + c` over every byte, seeded with 5381.
///
/// Arithmetic wraps on overflow, so long keys are fine in debug builds too.
#[inline]
pub fn djb2(buf: impl AsRef<[u8]>) -> u64 {
    djb2_update(DJB2_SEED, buf.as_ref())
}

#[inline(always)]
fn djb2_update(mut h: u64, buf: &[u8]) -> u64 {
    for &c in buf {
        h = (h << 5).wrapping_add(h).wrapping_add(c as u64);
    }
    h
}

/// Streaming DJB2 state, usable wherever a `core::hash::Hasher` is expected.
///
/// Feeding a key through `Hash` adds the type's own framing bytes (a `str`
/// appends `0xff`), so `Djb2Hasher` results differ from [`djb2`] on the raw
/// bytes. Use `write` directly to get the plain value.
#[derive(Clone, Copy, Debug)]
pub struct Djb2Hasher {
    h: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { h: DJB2_SEED }
    }
}

impl Hasher for Djb2Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.h = djb2_update(self.h, bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.h
    }
}

/// `BuildHasher` for `std::collections::HashMap` and friends.
pub type BuildDjb2 = BuildHasherDefault<Djb2Hasher>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 177670);
        assert_eq!(djb2("abc"), 193485963);
        assert_eq!(djb2("hello"), 210714636441);
        assert_eq!(djb2("PATRICIA"), 7571381582928338);
        assert_eq!(
            djb2("The quick brown fox jumps over the lazy dog"),
            0x36d23eef34cc38de
        );
    }

    #[test]
    fn test() {
        let mut t = 0u128;
        for i in 1..200usize {
            let m = vec![i as u8; i];
            t += djb2(&m) as u128;
        }
        assert_eq!(t, 0x5e82ba39bf0f83ad4f);
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(djb2("ab"), djb2("ba"));
        assert_eq!(djb2(b"MARY"), djb2(String::from("MARY")));
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut hasher = Djb2Hasher::default();
        hasher.write(b"The quick brown ");
        hasher.write(b"fox jumps over the lazy dog");
        assert_eq!(
            hasher.finish(),
            djb2("The quick brown fox jumps over the lazy dog")
        );
        assert_eq!(Djb2Hasher::default().finish(), DJB2_SEED);
    }
}
