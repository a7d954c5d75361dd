use std::fs::File;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Arc, Mutex};

/// Destination for rendered lines.
///
/// Each call carries exactly one complete line. Implementations must
/// write it as a unit: another writer sharing the same destination may
/// never observe (or splice into) a partial line.
pub trait ByteStream: Send + Sync {
    /// Write one complete line.
    ///
    /// **Returns**
    /// - `Ok(())` once the whole line has been handed to the destination.
    /// - `Err(..)` if the destination rejected it. [`WriterSink`](crate::writer_sink::WriterSink)
    ///   absorbs this error; it never reaches the emitting caller.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

/// Any `Write` behind a mutex. The lock is held for the whole line.
impl<W: Write + Send> ByteStream for Mutex<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "byte stream mutex poisoned"))?;
        writer.write_all(line)
    }
}

impl ByteStream for Stdout {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lock().write_all(line)
    }
}

impl ByteStream for Stderr {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lock().write_all(line)
    }
}

/// Open the file in append mode when several processes or sinks share it.
impl ByteStream for File {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut file: &File = self;
        file.write_all(line)
    }
}

impl<T: ByteStream + ?Sized> ByteStream for Arc<T> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<T: ByteStream + ?Sized> ByteStream for Box<T> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<T: ByteStream + ?Sized> ByteStream for &T {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}
