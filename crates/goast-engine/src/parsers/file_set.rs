//! Position bases for files parsed together.

/// Hands out position bases so that every file of a package occupies its own
/// disjoint, increasing range: base of the next file = base + size + 1.
/// The first base is 1, keeping 0 free as "no position".
#[derive(Debug, Clone)]
pub struct FileSet {
    next_base: u32,
}

impl Default for FileSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSet {
    pub fn new() -> Self {
        Self { next_base: 1 }
    }

    /// The base the next added file will receive.
    pub fn base(&self) -> u32 {
        self.next_base
    }

    /// Reserve a range for a file of `size` bytes and return its base.
    pub fn add_file(&mut self, size: usize) -> u32 {
        let base = self.next_base;
        let size = u32::try_from(size).unwrap_or(u32::MAX);
        self.next_base = base.saturating_add(size).saturating_add(1);
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bases_are_disjoint_and_increasing() {
        let mut set = FileSet::new();
        assert_eq!(set.add_file(10), 1);
        assert_eq!(set.add_file(0), 12);
        assert_eq!(set.add_file(5), 13);
        assert_eq!(set.base(), 19);
    }
}
