/// Entry classification: turns the metadata of one listing entry into an
/// [`EntryKind`].
///
/// Pure: the caller stats the entry (without following links) and passes the
/// result in. `None` means the entry could not be resolved at all.
use crate::model::{EntryKind, EntryMeta};
use compact_str::CompactString;
use std::ffi::OsStr;
use std::path::Path;

/// Classify one entry. Links are checked first, so a link to a directory or
/// to nothing is still a `Symlink`.
pub fn classify(file_name: &OsStr, meta: Option<EntryMeta>) -> EntryKind {
    match meta {
        Some(m) if m.is_symlink => EntryKind::Symlink,
        Some(m) if m.is_dir => EntryKind::Directory,
        Some(m) if m.is_file => EntryKind::File {
            extension: extension_of(file_name),
        },
        _ => EntryKind::Ghost,
    }
}

/// Extension of a file name: the text after the last `.`, case preserved,
/// unless that `.` is the first character of the name. Otherwise empty.
///
/// `.gitignore` and `Makefile` both yield `""`; `.config.toml` yields
/// `"toml"`; a trailing dot (`notes.`) yields `""`.
pub fn extension_of(file_name: &OsStr) -> CompactString {
    Path::new(file_name)
        .extension()
        .map(|ext| CompactString::new(ext.to_string_lossy()))
        .unwrap_or_default()
}
