use super::error::SessionError;
use bytes::Bytes;

/// A validated source/destination path fragment pair.
///
/// Both fragments must end in `/` or neither may, otherwise a directory
/// prefix swap like `/data/Temp/` → `/data/Movies` would glue the
/// destination onto the next path component.
///
/// ```
/// use torrent_mover::session::Relocation;
///
/// assert!(Relocation::new("/data/Temp/", "/data/Movies/").is_ok());
/// assert!(Relocation::new("/data/Temp/", "/data/Movies").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    src: Bytes,
    dst: Bytes,
}

impl Relocation {
    pub fn new(src: impl AsRef<[u8]>, dst: impl AsRef<[u8]>) -> Result<Self, SessionError> {
        let (src, dst) = (src.as_ref(), dst.as_ref());

        if src.is_empty() {
            return Err(SessionError::EmptySource);
        }
        if src.ends_with(b"/") != dst.ends_with(b"/") {
            return Err(SessionError::MismatchedSlashes);
        }

        Ok(Self {
            src: Bytes::copy_from_slice(src),
            dst: Bytes::copy_from_slice(dst),
        })
    }

    pub fn src(&self) -> &[u8] {
        &self.src
    }

    pub fn dst(&self) -> &[u8] {
        &self.dst
    }
}
