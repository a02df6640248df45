//! Output plumbing shared by commands
//!
//! Reports go either straight to stdout or into a `minus` pager when the
//! user is looking at a terminal.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Adapts a [`Pager`] to [`std::io::Write`]
///
/// Everything written is buffered in the pager; nothing is shown until the
/// owner of the other pager handle calls `minus::page_all`.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
