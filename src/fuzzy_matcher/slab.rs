//! Reusable scratch memory for the matchers.

/// Default number of 16-bit cells. Inputs whose `text.len() * pattern.len()`
/// exceeds this are scored with the V1 algorithm instead.
pub const SLAB_16_SIZE: usize = 100 * 1024;
/// Default number of 32-bit cells.
pub const SLAB_32_SIZE: usize = 2048;

/// Pre-allocated buffers handed to a matcher for the duration of one call.
///
/// The 16-bit capacity is fixed at construction and decides which inputs the
/// V2 algorithm accepts. The 32-bit buffer grows on demand since it only
/// needs one cell per text rune.
#[derive(Debug, Clone)]
pub struct Slab {
    cap16: usize,
    i16: Vec<i16>,
    i32: Vec<u32>,
}

impl Slab {
    /// Slab with `size16` 16-bit cells, which also caps the V2 problem size,
    /// and `size32` initial 32-bit cells.
    pub fn new(size16: usize, size32: usize) -> Self {
        Self {
            cap16: size16,
            i16: vec![0; size16],
            i32: vec![0; size32],
        }
    }

    /// Number of 16-bit cells available to a single match.
    pub fn capacity16(&self) -> usize {
        self.cap16
    }

    /// Borrow `len16` 16-bit cells and `len32` 32-bit cells. The contents are
    /// whatever the previous user left behind.
    pub fn buffers(&mut self, len16: usize, len32: usize) -> (&mut [i16], &mut [u32]) {
        if self.i16.len() < len16 {
            trace!("growing 16-bit slab from {} to {}", self.i16.len(), len16);
            self.i16.resize(len16, 0);
        }
        if self.i32.len() < len32 {
            trace!("growing 32-bit slab from {} to {}", self.i32.len(), len32);
            self.i32.resize(len32, 0);
        }
        (&mut self.i16[..len16], &mut self.i32[..len32])
    }
}

impl Default for Slab {
    fn default() -> Self {
        Self::new(SLAB_16_SIZE, SLAB_32_SIZE)
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn buffers_grow_on_demand() {
        let mut slab = Slab::new(4, 2);
        assert_eq!(slab.capacity16(), 4);
        let (a, b) = slab.buffers(3, 8);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 8);
        a[0] = 7;
        b[7] = 9;
        let (a, b) = slab.buffers(16, 8);
        assert_eq!(a.len(), 16);
        assert_eq!(a[0], 7);
        assert_eq!(b[7], 9);
        assert_eq!(slab.capacity16(), 4);
    }

    #[test]
    fn default_sizes() {
        let slab = Slab::default();
        assert_eq!(slab.capacity16(), 100 * 1024);
    }
}
