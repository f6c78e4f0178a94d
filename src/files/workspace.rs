use std::path::{Path, PathBuf};

/// Directory the file demos read from and write to.
///
/// The file names are fixed; only the directory is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub const TEXT_FILE: &'static str = "file.txt";
    pub const STATS_FILE: &'static str = "stats.txt";
    pub const BINARY_FILE: &'static str = "test.bin";

    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Builds a workspace from the first command line argument, or `.`.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        match args.into_iter().nth(1) {
            Some(dir) => Self::new(dir),
            None => Self::default(),
        }
    }

    pub fn text_file(&self) -> PathBuf {
        self.root.join(Self::TEXT_FILE)
    }

    pub fn stats_file(&self) -> PathBuf {
        self.root.join(Self::STATS_FILE)
    }

    pub fn binary_file(&self) -> PathBuf {
        self.root.join(Self::BINARY_FILE)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(".")
    }
}
