//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A scratch directory under the system temp dir, removed on drop.
///
/// Layout:
/// ```text
/// <base>/
///   secret.txt          outside the document root
///   www/                the document root
/// ```
pub struct Fixture {
    base: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let base = std::env::temp_dir().join(format!("webroot-test-{}-{}", std::process::id(), id));
        let _ = fs::remove_dir_all(&base);
        fs::create_dir_all(base.join("www")).unwrap();
        fs::write(base.join("secret.txt"), "top secret").unwrap();
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn www(&self) -> PathBuf {
        self.base.join("www")
    }

    /// Writes a file relative to the document root, creating parents.
    pub fn file(&self, rel: &str, content: impl AsRef<[u8]>) -> &Self {
        let path = self.www().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    /// Creates a directory relative to the document root.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.www().join(rel)).unwrap();
        self
    }

    /// Creates a symlink at `rel` (inside the root) pointing at `to`.
    #[cfg(unix)]
    pub fn symlink(&self, rel: &str, to: &Path) -> &Self {
        std::os::unix::fs::symlink(to, self.www().join(rel)).unwrap();
        self
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.base);
    }
}

/// Splits a serialized response into its head and body.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(raw[..end].to_vec()).unwrap();
    (head, raw[end + 4..].to_vec())
}

/// Header names in the order they appear in a response head.
pub fn header_names(head: &str) -> Vec<String> {
    head.split("\r\n")
        .skip(1)
        .map(|line| line.split_once(':').unwrap().0.to_string())
        .collect()
}

/// Value of the named header in a response head.
pub fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.split("\r\n")
        .skip(1)
        .filter_map(|line| line.split_once(": "))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}
