//! Stable hashing for settings fingerprints

use sha2::{Digest, Sha256};

/// First 16 hex digits of the SHA-256 of `content`.
pub fn stable_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::stable_hash;

    #[test]
    fn test_stable_hash_is_deterministic() {
        assert_eq!(stable_hash("abc"), stable_hash("abc"));
        assert_ne!(stable_hash("abc"), stable_hash("abd"));
        // sha256("abc") = ba7816bf8f01cfea...
        assert_eq!(stable_hash("abc"), "ba7816bf8f01cfea");
    }
}
