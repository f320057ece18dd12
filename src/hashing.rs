#[cfg(all(feature = "murmur3", feature = "xxh3"))]
compile_error!("Please choose one hash function to use: murmur3 or xxh3.");
#[cfg(all(feature = "murmur3", feature = "shake128"))]
compile_error!("Please choose one hash function to use: murmur3 or shake128.");
#[cfg(all(feature = "murmur3", feature = "blake3"))]
compile_error!("Please choose one hash function to use: murmur3 or blake3.");
#[cfg(all(feature = "xxh3", feature = "shake128"))]
compile_error!("Please choose one hash function to use: xxh3 or shake128.");
#[cfg(all(feature = "xxh3", feature = "blake3"))]
compile_error!("Please choose one hash function to use: xxh3 or blake3.");
#[cfg(all(feature = "shake128", feature = "blake3"))]
compile_error!("Please choose one hash function to use: shake128 or blake3.");
#[cfg(not(any(
    feature = "murmur3",
    feature = "xxh3",
    feature = "shake128",
    feature = "blake3"
)))]
compile_error!("Please enable one hash function: murmur3, xxh3, shake128 or blake3.");

#[cfg(any(feature = "shake128", feature = "blake3"))]
use bytevec::ByteEncodable;

/// Hashes `key` under the probe index `seed`.
///
/// Uses the first 64-bit word of MurmurHash3 x64/128, with both lanes seeded
/// by `seed`.
#[cfg(feature = "murmur3")]
pub fn hash_key(key: &[u8], seed: u32) -> u64 {
    let mut reader = key;
    let hash = murmur3::murmur3_x64_128(&mut reader, seed)
        .expect("reading from an in-memory slice cannot fail");
    hash as u64
}

#[cfg(feature = "xxh3")]
pub fn hash_key(key: &[u8], seed: u32) -> u64 {
    xxh3::hash64_with_seed(key, u64::from(seed))
}

#[cfg(feature = "shake128")]
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake128,
};
#[cfg(feature = "shake128")]
pub fn hash_key(key: &[u8], seed: u32) -> u64 {
    seeded_xof_u64(seed, |seed_bytes, out| {
        Shake128::default()
            .chain(key)
            .chain(seed_bytes)
            .finalize_xof()
            .read(out)
    })
}

#[cfg(feature = "blake3")]
pub fn hash_key(key: &[u8], seed: u32) -> u64 {
    seeded_xof_u64(seed, |seed_bytes, out| {
        blake3::Hasher::new()
            .update(key)
            .update(seed_bytes)
            .finalize_xof()
            .fill(out)
    })
}

/// Reads the first 8 little-endian bytes of an extendable-output hash over
/// `key || seed`, where `squeeze` absorbs both and fills the output buffer.
#[cfg(any(feature = "shake128", feature = "blake3"))]
fn seeded_xof_u64(seed: u32, squeeze: impl FnOnce(&[u8], &mut [u8])) -> u64 {
    let seed_bytes = u64::from(seed)
        .encode::<u64>()
        .expect("encoding a u64 into a Vec cannot fail");

    let mut word = [0u8; 8];
    squeeze(&seed_bytes, &mut word);
    u64::from_le_bytes(word)
}

/// Bit positions probed for `key` in an array of `size` bits.
///
/// Probe `i` maps to `hash_key(key, i) % size`. Insertion and lookup both go
/// through here, so they always agree on the positions of a key.
pub fn probe_indices(key: &[u8], size: usize, probes: usize) -> impl Iterator<Item = usize> + '_ {
    (0..probes).map(move |seed| (hash_key(key, seed as u32) % size as u64) as usize)
}
