use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;

/// Read-only source access.
///
/// Engines read sources through this so they can be tested against an
/// in-memory implementation.
pub trait SourceView {
    fn root(&self) -> &Utf8Path;

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String>;

    fn exists(&self, rel: &Utf8Path) -> bool;
}

/// File-system backed `SourceView`.
#[derive(Debug, Clone)]
pub struct FsSourceView {
    root: Utf8PathBuf,
}

impl FsSourceView {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &Utf8Path) -> Utf8PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl SourceView for FsSourceView {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String> {
        let abs = self.abs(rel);
        fs::read_to_string(&abs).with_context(|| format!("read {}", abs))
    }

    fn exists(&self, rel: &Utf8Path) -> bool {
        self.abs(rel).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::{FsSourceView, SourceView};
    use camino::{Utf8Path, Utf8PathBuf};

    #[test]
    fn fs_view_reads_relative_to_root() {
        let td = tempfile::tempdir().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(td.path().to_path_buf()).expect("utf8 root");
        std::fs::write(root.join("a.rs"), "fn main() {}\n").expect("write");

        let view = FsSourceView::new(root);
        assert!(view.exists(Utf8Path::new("a.rs")));
        assert!(!view.exists(Utf8Path::new("b.rs")));
        assert_eq!(
            view.read_to_string(Utf8Path::new("a.rs")).expect("read"),
            "fn main() {}\n"
        );
    }
}
