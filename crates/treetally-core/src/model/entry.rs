/// Entry kinds produced by the classifier.
use compact_str::CompactString;
use std::fs::FileType;

/// What a single directory-listing entry turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file with its extension (empty for extensionless names).
    File { extension: CompactString },
    Directory,
    /// A symbolic link, regardless of what (if anything) it points at.
    Symlink,
    /// Listed by the directory but unresolvable as file, directory, or link:
    /// vanished before it could be inspected, or a special file such as a
    /// FIFO, socket, or device node.
    Ghost,
}

/// The filesystem facts classification depends on.
///
/// Obtained from `symlink_metadata`, so `is_symlink` describes the link
/// itself and `is_dir` / `is_file` are never answered through a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryMeta {
    pub is_symlink: bool,
    pub is_dir: bool,
    pub is_file: bool,
}

impl From<FileType> for EntryMeta {
    fn from(ft: FileType) -> Self {
        Self {
            is_symlink: ft.is_symlink(),
            is_dir: ft.is_dir(),
            is_file: ft.is_file(),
        }
    }
}

#[cfg(test)]
impl EntryMeta {
    pub const FILE: Self = Self {
        is_symlink: false,
        is_dir: false,
        is_file: true,
    };
    pub const DIR: Self = Self {
        is_symlink: false,
        is_dir: true,
        is_file: false,
    };
    pub const SYMLINK: Self = Self {
        is_symlink: true,
        is_dir: false,
        is_file: false,
    };
}
