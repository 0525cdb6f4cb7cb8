/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

use crate::bytestream::{ByteStreamTrait, OpenMode, SeekFrom, StreamBackend, StreamError, StreamKind};
use crate::log::{debug, error, trace};

/// A stream backed by a file on disk
///
/// The stream keeps its own copy of the cursor and length so that
/// position queries do not need a syscall.
#[derive(Debug)]
pub struct FileStream {
    file:   Option<File>,
    path:   PathBuf,
    mode:   OpenMode,
    length: u64,
    cursor: u64
}

impl FileStream {
    /// Open an existing file for reading
    ///
    /// ## Errors
    /// [`StreamError::NotFound`] if the file does not exist, other
    /// I/O errors are mapped through `From<std::io::Error>`
    pub fn open_read<P: AsRef<Path>>(path: P) -> Result<FileStream, StreamError> {
        FileStream::open_with_mode(path.as_ref(), OpenMode::Read)
    }

    /// Create (or truncate) a file for reading and writing
    pub fn open_write<P: AsRef<Path>>(path: P) -> Result<FileStream, StreamError> {
        FileStream::open_with_mode(path.as_ref(), OpenMode::Write)
    }

    fn open_with_mode(path: &Path, mode: OpenMode) -> Result<FileStream, StreamError> {
        let result = match mode {
            OpenMode::Read => File::open(path),
            OpenMode::Write => OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
        };
        let file = match result {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                error!("could not open file: {:?}", path);
                return Err(StreamError::NotFound(path.to_string_lossy().into_owned()));
            }
            Err(err) => {
                error!("could not open file: {:?} ({})", path, err);
                return Err(StreamError::from(err));
            }
        };
        let length = file.metadata()?.len();

        debug!("opened file {:?} ({} bytes) for {:?}", path, length, mode);

        Ok(FileStream {
            file: Some(file),
            path: path.to_path_buf(),
            mode,
            length,
            cursor: 0
        })
    }

    /// The path this stream was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline(always)]
    fn handle(&mut self) -> Result<&mut File, StreamError> {
        self.file.as_mut().ok_or(StreamError::Closed)
    }

    #[inline(always)]
    fn check_open(&self) -> Result<(), StreamError> {
        if self.file.is_none() {
            return Err(StreamError::Closed);
        }
        Ok(())
    }
}

impl ByteStreamTrait for FileStream {
    fn kind(&self) -> StreamKind {
        StreamKind::File
    }

    fn mode(&self) -> OpenMode {
        self.mode
    }

    fn length(&self) -> Result<u64, StreamError> {
        self.check_open()?;
        Ok(self.length)
    }

    fn cursor(&self) -> Result<u64, StreamError> {
        self.check_open()?;
        Ok(self.cursor)
    }

    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        let remaining = self.has_bytes()?;

        if buf.is_empty() {
            return Ok(0);
        }
        if remaining == 0 {
            return Err(StreamError::EndOfStream);
        }
        let wanted = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let file = self.handle()?;

        let (filled, failure) = fill_from(file, &mut buf[..wanted]);
        // bytes read before a failure still moved the os file position
        self.cursor += filled as u64;

        if let Some(err) = failure {
            error!("read from file {:?} failed after {} bytes", self.path, filled);
            return Err(StreamError::from(err));
        }
        if filled == 0 {
            // file was truncated behind our back
            error!("unable to read from file {:?}", self.path);
            return Err(StreamError::EndOfStream);
        }
        Ok(filled)
    }

    fn seek(&mut self, from: SeekFrom) -> Result<u64, StreamError> {
        self.check_open()?;
        let position = from.resolve(self.cursor, self.length)?;

        trace!(
            "seeking cursor to {} of {} bytes...",
            position,
            self.length
        );
        self.handle()?.seek(std::io::SeekFrom::Start(position))?;
        self.cursor = position;

        Ok(position)
    }

    fn write_block(&mut self, buf: &[u8]) -> Result<usize, StreamError> {
        self.check_open()?;

        if !self.mode.is_writable() {
            return Err(StreamError::ReadOnly);
        }
        if buf.is_empty() {
            return Ok(0);
        }
        let cursor = self.cursor;
        let tail_len = usize::try_from(self.length - cursor)?;
        let file = self.handle()?;

        // grab the rest of the file to shift it down if we are not at the end
        let mut tail = Vec::new();
        if tail_len > 0 {
            trace!("holding {} trailing bytes from {}", tail_len, cursor);
            tail.try_reserve_exact(tail_len)
                .map_err(|_| StreamError::AllocationFailed(tail_len))?;
            file.read_to_end(&mut tail)?;
            file.seek(std::io::SeekFrom::Start(cursor))?;
        }
        file.write_all(buf)?;

        if !tail.is_empty() {
            file.write_all(&tail)?;
            file.seek(std::io::SeekFrom::Start(cursor + buf.len() as u64))?;
        }
        self.length += buf.len() as u64;
        self.cursor += buf.len() as u64;

        Ok(buf.len())
    }

    fn close(&mut self) -> Result<(), StreamError> {
        let mut file = self.file.take().ok_or(StreamError::Closed)?;

        if self.mode.is_writable() {
            file.flush()?;
        }
        debug!("closed file {:?}", self.path);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.file.is_none()
    }
}

/// Opens files relative to a root directory
#[derive(Clone, Debug)]
pub struct FileBackend {
    root: PathBuf
}

impl FileBackend {
    pub fn new<P: Into<PathBuf>>(root: P) -> FileBackend {
        FileBackend { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        FileBackend::new(".")
    }
}

impl StreamBackend for FileBackend {
    type Stream = FileStream;

    fn open(&self, name: &str, mode: OpenMode) -> Result<Self::Stream, StreamError> {
        FileStream::open_with_mode(&self.root.join(name), mode)
    }
}

/// Read into `buf` until it is full, the reader is drained or a read fails
///
/// Returns how many bytes landed in `buf` alongside the error that stopped
/// the loop, if any.
fn fill_from<R: Read>(reader: &mut R, buf: &mut [u8]) -> (usize, Option<std::io::Error>) {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(amount) => filled += amount,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return (filled, Some(err))
        }
    }
    (filled, None)
}
