use std::{
    io::{self, Error, ErrorKind},
    path::Path,
};

/// A trait to allow replacing the file system lookup mechanism.
///
/// The extractor itself only ever reads one file, so this trait is
/// deliberately minimal.
pub trait Fs: std::fmt::Debug {
    /// Read the entire contents of a file into a bytes vector.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Use [`std::fs`] to read any files from disk.
///
/// This is the default file system implementation.
#[derive(Debug)]
pub struct StdFs;

impl Fs for StdFs {
    #[inline]
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// A file system implementation that acts like it’s completely empty.
///
/// Useful for denying all file system access; only
/// [`from_string`][crate::from_string] makes sense with it, since
/// [`from_path`][crate::from_path] will always fail to find its input.
#[derive(Debug)]
pub struct NullFs;

impl Fs for NullFs {
    #[inline]
    fn read(&self, _path: &Path) -> io::Result<Vec<u8>> {
        Err(Error::new(
            ErrorKind::NotFound,
            "NullFs, there is no file system",
        ))
    }
}
