use super::core::Region;

/// Slab size for small allocations, matching the host's `Buffer.poolSize`.
pub const POOL_SIZE: usize = 8192;

/// Default number of released regions kept for reuse.
const DEFAULT_MAX_RETAINED: usize = 64;

/// Caller-owned recycler for region memory.
///
/// Released regions keep their bytes, so [`RegionPool::allocate_uninit`] can
/// return memory with genuinely unspecified contents without any `unsafe`.
/// Requests below half a slab get a full [`POOL_SIZE`] backing allocation so
/// the memory can later serve any other small request.
#[derive(Debug)]
pub struct RegionPool {
    free: Vec<Vec<u8>>,
    max_retained: usize,
}

impl Default for RegionPool {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionPool {
    pub fn new() -> Self {
        Self::with_max_retained(DEFAULT_MAX_RETAINED)
    }

    pub fn with_max_retained(max_retained: usize) -> Self {
        RegionPool {
            free: Vec::new(),
            max_retained,
        }
    }

    /// Number of released regions waiting to be reused.
    pub fn retained(&self) -> usize {
        self.free.len()
    }

    /// Region of `size` bytes with unspecified contents; callers must write
    /// before reading.
    pub fn allocate_uninit(&mut self, size: usize) -> Region {
        let mut bytes = match self.take(size) {
            Some(bytes) => bytes,
            None if size < POOL_SIZE / 2 => Vec::with_capacity(POOL_SIZE),
            None => Vec::with_capacity(size),
        };
        // Only bytes past the previous length get initialized here.
        bytes.truncate(size);
        bytes.resize(size, 0);
        Region::from_vec(bytes)
    }

    /// Region of `size` zero bytes, reusing released memory when possible.
    pub fn allocate_zeroed(&mut self, size: usize) -> Region {
        let mut region = self.allocate_uninit(size);
        region.fill(0);
        region
    }

    /// Hand a region back for reuse. Dropped if the pool is already full.
    pub fn release(&mut self, region: Region) {
        if self.free.len() < self.max_retained {
            self.free.push(region.into_vec());
        }
    }

    /// Smallest retained allocation that can hold `size` bytes.
    fn take(&mut self, size: usize) -> Option<Vec<u8>> {
        let (idx, _) = self
            .free
            .iter()
            .enumerate()
            .filter(|(_, bytes)| bytes.capacity() >= size)
            .min_by_key(|(_, bytes)| bytes.capacity())?;
        let bytes = self.free.swap_remove(idx);
        log::debug!(
            "recycling a {}-byte allocation for a {}-byte region",
            bytes.capacity(),
            size
        );
        Some(bytes)
    }
}
