//! Directory entry classification

use std::fs;

use pacsweep_errors::WalkError;

/// File type of a single directory entry, as seen without following
/// symlinks.
///
/// `Unknown` is what the enumeration primitive hands back on filesystems
/// that carry no per-entry type information; [`classify`] resolves it
/// through an explicit status query before the walker acts on the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Block,
    Char,
    Fifo,
    Socket,
    Unknown,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_file() {
            Self::File
        } else if file_type.is_dir() {
            Self::Dir
        } else if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_block_device() {
            Self::Block
        } else if file_type.is_char_device() {
            Self::Char
        } else if file_type.is_fifo() {
            Self::Fifo
        } else if file_type.is_socket() {
            Self::Socket
        } else {
            Self::Unknown
        }
    }
}

/// Determine the type of `entry`, preferring the type hint the directory
/// enumeration already carries and falling back to a no-follow status
/// query only when the hint is absent.
///
/// Both code paths land on the same [`EntryKind`], so callers never see
/// which one resolved the type. A type that is still unknown after the
/// fallback cannot be classified safely; the walker treats that as fatal.
pub(crate) fn classify(entry: &fs::DirEntry) -> Result<EntryKind, WalkError> {
    let hint = entry.file_type().map_err(|e| WalkError::FileType {
        path: entry.path(),
        message: e.to_string(),
    })?;

    match EntryKind::from(hint) {
        EntryKind::Unknown => {
            let metadata = fs::symlink_metadata(entry.path()).map_err(|e| WalkError::FileType {
                path: entry.path(),
                message: e.to_string(),
            })?;
            match EntryKind::from(metadata.file_type()) {
                EntryKind::Unknown => Err(WalkError::UnresolvedFileType { path: entry.path() }),
                kind => Ok(kind),
            }
        }
        kind => Ok(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::net::UnixListener;

    fn classify_named(dir: &std::path::Path, name: &str) -> EntryKind {
        let entry = fs::read_dir(dir)
            .unwrap()
            .map(Result::unwrap)
            .find(|e| e.file_name() == name)
            .unwrap();
        classify(&entry).unwrap()
    }

    #[test]
    fn classifies_files_dirs_and_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("plain"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink("plain", dir.path().join("link")).unwrap();

        assert_eq!(classify_named(dir.path(), "plain"), EntryKind::File);
        assert_eq!(classify_named(dir.path(), "sub"), EntryKind::Dir);
        assert_eq!(classify_named(dir.path(), "link"), EntryKind::Symlink);
    }

    #[test]
    fn dangling_symlink_is_still_a_symlink() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink("missing-target", dir.path().join("dangling")).unwrap();

        assert_eq!(classify_named(dir.path(), "dangling"), EntryKind::Symlink);
    }

    #[test]
    fn classifies_sockets() {
        let dir = tempfile::tempdir().unwrap();
        let _listener = UnixListener::bind(dir.path().join("sock")).unwrap();

        assert_eq!(classify_named(dir.path(), "sock"), EntryKind::Socket);
    }
}
