//! Bank file output with byte accounting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{SynthError, SynthResult};

use super::format::WavFormat;
use super::pcm::{pcm_hash, samples_to_pcm};
use super::writer::write_header;

/// Outcome of a successful bank write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// PCM payload bytes written, excluding the header.
    pub bytes_written: usize,
    /// Samples encoded.
    pub num_samples: usize,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// A WAV destination that accepts exactly one bank.
#[derive(Debug)]
pub struct WavFile<W: Write = BufWriter<File>> {
    writer: W,
    format: WavFormat,
}

impl WavFile {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>, format: WavFormat) -> SynthResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| SynthError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file), format))
    }
}

impl<W: Write> WavFile<W> {
    /// Wraps an arbitrary writer.
    pub fn new(writer: W, format: WavFormat) -> Self {
        Self { writer, format }
    }

    /// Returns the format the file will be written with.
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Encodes `samples` and writes the header and payload.
    ///
    /// Fails with [`SynthError::ShortWrite`] when the destination stops
    /// accepting bytes before the whole payload is written.
    pub fn write(mut self, samples: &[f64]) -> SynthResult<WriteReport> {
        let pcm = samples_to_pcm(samples, self.format.bits_per_sample)?;
        let expected = self.format.data_len(samples.len());

        write_header(&mut self.writer, &self.format, pcm.len())?;
        let written = write_payload(&mut self.writer, &pcm)?;
        if written != expected {
            return Err(SynthError::ShortWrite { expected, written });
        }
        self.writer.flush()?;

        Ok(WriteReport {
            bytes_written: written,
            num_samples: samples.len(),
            pcm_hash: pcm_hash(&pcm),
        })
    }
}

/// Writes as much of `pcm` as the destination accepts, returning the count.
fn write_payload<W: Write>(writer: &mut W, pcm: &[u8]) -> io::Result<usize> {
    let mut written = 0;
    while written < pcm.len() {
        match writer.write(&pcm[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(written)
}
