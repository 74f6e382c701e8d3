use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::constants::HASH_BUFFER_SIZE;

/// Calculate the MD5 digest of a file as a lowercase hex string.
pub fn md5_hex(path: &Path) -> io::Result<String> {
    digest_file::<Md5>(path)
}

/// Calculate the SHA-1 digest of a file as a lowercase hex string.
pub fn sha1_hex(path: &Path) -> io::Result<String> {
    digest_file::<Sha1>(path)
}

/// Stream a file through a digest in fixed-size chunks.
///
/// Acquired images can run to hundreds of gigabytes, so memory use must stay
/// constant in the file size.
fn digest_file<D: Digest>(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = D::new();
    let mut buffer = vec![0u8; HASH_BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let digest = hasher.finalize();
    Ok(digest.iter().map(|byte| format!("{:02x}", byte)).collect())
}
