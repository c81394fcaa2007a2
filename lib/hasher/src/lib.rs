use sha2::{Digest, Sha256};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Hash([u8; 32]);

impl Hash {
    pub fn to_hex(&self, len: u8) -> String {
        let len = match len {
            1..=64 => len,
            _ => 64,
        };
        let Hash(bytes) = self;
        let output: String = bytes.iter().map(|byte| format!("{:02x}", byte)).collect();

        output[0..len as usize].to_string()
    }
}
impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex(0))
    }
}
impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short form is enough to tell digests apart in logs
        write!(f, "Hash({})", self.to_hex(12))
    }
}

/// Hash anything that can be converted to u8 array (usually
/// Strings, &str or the full content of a file)
pub fn hash_bytes<T: AsRef<[u8]>>(s: T) -> Hash {
    Hash(Sha256::digest(s).into())
}

/// Read the whole content of a file in memory and hash it.
///
/// The file is opened, read and closed within this call
pub fn hash_file<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Hash> {
    let content = std::fs::read(path)?;
    Ok(hash_bytes(content))
}

#[cfg(test)]
mod tests {
    use super::{hash_bytes, hash_file, Hash};

    const VECTORS: [(&str, &str); 4] = [
        (
            "",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        (
            "here is some random text",
            "3ace1cf028afc2c9872ec0eb6fd25b6a083264de078e9d8459b7ea90954d52fa",
        ),
        (
            "and also a different text",
            "549f713ae4bbf70c48c4aa6a0c9b55af40ba51dd86ebcd7c77d345cdd5fe5cca",
        ),
        (
            "boop beep boop bzzzz am robot executing tests",
            "117a49851674557df82e276d46fe24453808d8bd7ada0f11142dee8ddec3ae06",
        ),
    ];

    #[test]
    fn to_hex() {
        for b in 0..=15 {
            let h = Hash([17 * b; 32]);
            let s = format!("{b:x}");
            for i in 1..64 {
                assert_eq!(h.to_hex(i), s.repeat(i as usize));
            }
            assert_eq!(h.to_hex(0), s.repeat(64));
            assert_eq!(h.to_hex(65), s.repeat(64));
        }
        for _ in 0..1000 {
            let bytes: [u8; 32] = rand::random();
            let s: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
            assert_eq!(Hash(bytes).to_string(), s);
        }
    }

    #[test]
    fn debug_is_short() {
        let h = hash_bytes("");
        assert_eq!(format!("{h:?}"), "Hash(e3b0c44298fc)");
    }

    #[test]
    fn hash() {
        for (text, hash_val) in VECTORS {
            assert_eq!(hash_bytes(text).to_string(), hash_val);
        }
    }

    #[test]
    fn file() {
        let dir = tempfile::TempDir::new().unwrap();
        for (i, (text, hash_val)) in VECTORS.iter().enumerate() {
            let path = dir.path().join(format!("file{i}"));
            std::fs::write(&path, text).unwrap();
            assert_eq!(hash_file(&path).unwrap().to_string(), *hash_val);
        }
        assert!(hash_file(dir.path().join("missing")).is_err());
    }
}
