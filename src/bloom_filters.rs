use bitvec::vec::BitVec;
use log::{debug, warn};

use crate::error::{BloomError, Result};
use crate::hashing::probe_indices;
use crate::params::FilterParams;

/// A fixed-size Bloom filter over byte-sequence keys.
///
/// `contains` never returns `false` for a key that was added. It returns `true`
/// for a key that was never added with a probability close to the configured
/// tolerance, as long as the number of distinct keys stays near the expected
/// element count.
#[derive(Debug, PartialEq)]
pub struct BloomFilter {
    params: FilterParams,
    bits: BitVec,
}

impl BloomFilter {
    /// Creates an empty filter sized for `expected_elements` keys at a
    /// false-positive rate of `tolerance`.
    ///
    /// ```
    /// use probable_set::BloomFilter;
    ///
    /// let mut filter = BloomFilter::new(1000, 0.01).unwrap();
    /// assert_eq!(filter.size(), 9586);
    /// assert_eq!(filter.probes(), 7);
    ///
    /// filter.add("apple");
    /// assert!(filter.contains("apple"));
    /// ```
    pub fn new(expected_elements: usize, tolerance: f64) -> Result<Self> {
        Self::with_params(FilterParams::new(expected_elements, tolerance)?)
    }

    /// Creates an empty filter from already derived parameters.
    ///
    /// Fails with [`BloomError::InvalidConfiguration`] if the bit array cannot
    /// be allocated.
    pub fn with_params(params: FilterParams) -> Result<Self> {
        debug!(
            "creating bloom filter: {} bits, {} probes, {} expected elements at tolerance {}",
            params.size(),
            params.probes(),
            params.expected_elements(),
            params.tolerance()
        );

        Ok(BloomFilter {
            bits: allocate_bits(params.size())?,
            params,
        })
    }

    /// Sets every bit probed for `key`. Adding a key again changes nothing.
    pub fn add<K: AsRef<[u8]>>(&mut self, key: K) {
        for index in probe_indices(key.as_ref(), self.params.size(), self.params.probes()) {
            self.bits.set(index, true);
        }
    }

    /// Returns `false` if `key` was definitely never added, `true` if it possibly was.
    pub fn contains<K: AsRef<[u8]>>(&self, key: K) -> bool {
        for index in probe_indices(key.as_ref(), self.params.size(), self.params.probes()) {
            if !self.bits[index] {
                return false;
            }
        }

        true
    }

    /// Adds `key` and returns whether it was possibly present beforehand.
    pub fn contains_and_add<K: AsRef<[u8]>>(&mut self, key: K) -> bool {
        let mut was_present = true;

        for index in probe_indices(key.as_ref(), self.params.size(), self.params.probes()) {
            if !self.bits.replace(index, true) {
                was_present = false;
            }
        }

        was_present
    }

    /// Number of bits in the array.
    pub fn size(&self) -> usize {
        self.params.size()
    }

    /// Number of hash probes per key.
    pub fn probes(&self) -> usize {
        self.params.probes()
    }

    /// Parameters this filter was sized from.
    pub fn params(&self) -> FilterParams {
        self.params
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Fraction of bits currently set.
    pub fn load_factor(&self) -> f64 {
        self.bits_set() as f64 / self.size() as f64
    }

    /// Estimated false-positive probability in the current state, `load_factor ^ probes`.
    ///
    /// Climbs past the configured tolerance once more distinct keys than
    /// expected have been added.
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powi(self.probes() as i32)
    }
}

/// Zeroed storage for `size` bits, reserved up front so a failed allocation
/// surfaces as an error instead of aborting.
fn allocate_bits(size: usize) -> Result<BitVec> {
    let words = size.div_ceil(usize::BITS as usize);

    let mut storage: Vec<usize> = Vec::new();
    storage.try_reserve_exact(words).map_err(|err| {
        warn!("cannot allocate bloom filter of {size} bits: {err}");
        BloomError::invalid_configuration(format!("cannot allocate {size} bits: {err}"))
    })?;
    storage.resize(words, 0);

    let mut bits = BitVec::from_vec(storage);
    bits.truncate(size);
    Ok(bits)
}

impl<K: AsRef<[u8]>> Extend<K> for BloomFilter {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.add(key);
        }
    }
}
