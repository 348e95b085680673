// src/models/image_pool.rs
//
// Fixed, cyclically indexed list of images handed out one per tile.

#[derive(Debug)]
pub struct ImagePool<T> {
    images: Vec<T>,
    next_index: usize,
}

impl<T> ImagePool<T> {
    pub fn new(images: Vec<T>) -> Self {
        Self {
            images,
            next_index: 0,
        }
    }

    /// Returns the current index and advances, wrapping at the pool size.
    /// An empty pool always yields index 0.
    pub fn next_index(&mut self) -> usize {
        let index = self.next_index;
        if !self.images.is_empty() {
            self.next_index = (self.next_index + 1) % self.images.len();
        }
        index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_through_pool() {
        let mut pool = ImagePool::new((0..20).collect::<Vec<u32>>());
        let indices: Vec<usize> = (0..25).map(|_| pool.next_index()).collect();

        let expected: Vec<usize> = (0..20).chain(0..5).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_empty_pool_stays_at_zero() {
        let mut pool: ImagePool<u32> = ImagePool::new(Vec::new());
        assert_eq!(pool.next_index(), 0);
        assert_eq!(pool.next_index(), 0);
        assert!(pool.is_empty());
    }
}
