//! Deterministic WAV bank files.
//!
//! Banks are written as mono linear PCM with no timestamps or extra chunks,
//! so identical banks produce identical files. The sample rate field holds
//! the band length. The hash of the PCM payload identifies a bank's content
//! independently of its header.

mod file;
mod format;
mod pcm;
mod reader;
mod writer;


pub use file::{WavFile, WriteReport};
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash, samples_to_pcm};
pub use reader::{read_bank, read_bank_from};
pub use writer::{write_header, write_wav, write_wav_to_vec, HEADER_LEN};
