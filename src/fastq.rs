use crate::trim::TrimmedRead;
use std::io::{self, Write};

/// Writes four-line FASTQ records.
pub struct FastqWriter<W: Write> {
    inner: W,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_record(&mut self, name: &[u8], read: &TrimmedRead) -> io::Result<()> {
        self.inner.write_all(b"@")?;
        self.inner.write_all(name)?;
        self.inner.write_all(b"\n")?;
        self.inner.write_all(&read.sequence)?;
        self.inner.write_all(b"\n+\n")?;
        self.inner.write_all(&read.quality)?;
        self.inner.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
