use crc32fast::Hasher;

/// Generate document ID from file path using CRC32
pub fn get_document_id(path: &str) -> String {
    let mut buff = String::from(path);
    if !path.starts_with("file://") {
        buff = format!("file://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for nodes within a document.
///
/// Ids take the form `<seed>-<n>` where the seed is the CRC32 of the
/// document path. The counter only moves forward, so an id is never
/// re-issued within a document's lifetime; `resume_above` keeps that
/// guarantee across save/load.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Document ID (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(path: &str) -> Self {
        Self {
            seed: get_document_id(path),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Bump the counter so the next id is above `count`. Called after
    /// loading a persisted tree so fresh nodes cannot collide with it.
    pub fn resume_above(&mut self, count: u32) {
        self.count = self.count.max(count);
    }

    /// Get document ID seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_generation() {
        let id1 = get_document_id("/home.page.json");
        let id2 = get_document_id("/home.page.json");

        // Same path always generates same ID
        assert_eq!(id1, id2);

        // Different paths generate different IDs
        let id3 = get_document_id("/about.page.json");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("/test.page.json");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        // IDs are sequential
        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        // All share same seed
        let seed = gen.seed();
        assert!(id1.starts_with(seed));
        assert!(id2.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_resume_above() {
        let mut gen = IdGenerator::from_seed("abc".to_string());
        gen.resume_above(7);

        assert_eq!(gen.new_id(), "abc-8");

        // Resuming below the current count is a no-op
        gen.resume_above(2);
        assert_eq!(gen.new_id(), "abc-9");
    }
}
