//! Chunked decoding of an encrypted boot-loader image.
//!
//! The stream is little-endian on the wire; each 51-byte chunk is reversed
//! into engine order, cubed under the public modulus, checked against the
//! padding marker, and folded into the output through a running byte
//! accumulator. The boot ROM records violations but never stops early, and
//! neither does this decoder: a tampered image still decodes to completion
//! with its failure flags raised.

use log::{debug, warn};

use crate::bignum::{Bignum, OPERAND_LEN};
use crate::cube;
use crate::keys::LYNX_MODULUS;

/// Total length of the encrypted and decrypted images.
pub const IMAGE_LEN: usize = 410;

/// Expected leading byte of every cubed chunk.
const PAD_MARKER: u8 = 0x15;

/// Output bytes contributed by one chunk (everything after the marker).
const PAYLOAD_LEN: usize = OPERAND_LEN - 1;

/// Staging offset where the second section's output begins.
const SECOND_SECTION_BASE: usize = 256;

/// Size of the decode staging area. The second section's payload tail runs
/// past the image proper and is discarded; the ROM staged into 600 bytes
/// and so does this.
const STAGING_LEN: usize = 600;

/// Sticky per-pass failure flags, in the order the checks run.
///
/// Every flag is recorded without interrupting the decode, matching the
/// console's diagnostics. [`DecodeStatus::is_ok`] collapses them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStatus {
    /// A chunk's top 24 bits exceeded the modulus's, or were all zero.
    pub out_of_range: bool,
    /// A cubed chunk did not lead with the padding marker.
    pub bad_padding: bool,
    /// The running accumulator was nonzero after a section.
    pub checksum: bool,
    /// The stream or staging area ran out before the chunk count did.
    /// Legacy hardware would have read past its buffer here.
    pub truncated: bool,
}

impl DecodeStatus {
    /// True when the image decoded with no recorded violation.
    pub fn is_ok(&self) -> bool {
        !(self.out_of_range || self.bad_padding || self.checksum || self.truncated)
    }
}

/// Decrypts a full 410-byte boot-loader image.
///
/// Runs the chunk decoder over the image's two sections, the first writing
/// at output offset 0 and the second at offset 256, and returns the
/// recovered plaintext alongside the accumulated failure flags.
pub fn lynx_decrypt(encrypted: &[u8; IMAGE_LEN]) -> ([u8; IMAGE_LEN], DecodeStatus) {
    let mut staging = [0u8; STAGING_LEN];
    let mut status = DecodeStatus::default();

    let consumed = decode_section(encrypted, &mut staging, &mut status);
    decode_section(
        &encrypted[consumed..],
        &mut staging[SECOND_SECTION_BASE..],
        &mut status,
    );

    let mut image = [0u8; IMAGE_LEN];
    image.copy_from_slice(&staging[..IMAGE_LEN]);
    (image, status)
}

/// Decodes one counter-prefixed section, returning the bytes consumed.
///
/// The leading byte seeds the chunk counter, which advances once per chunk
/// until it wraps through 256; a counter byte of zero means a full 256
/// chunks. Unlike the ROM, every read is bounds-checked: exhausting the
/// input or the output flags `truncated` and ends the section instead of
/// running off the buffer.
fn decode_section(input: &[u8], out: &mut [u8], status: &mut DecodeStatus) -> usize {
    let Some((&counter_byte, _)) = input.split_first() else {
        status.truncated = true;
        return 0;
    };
    let mut counter = u16::from(counter_byte);
    let mut pos = 1;
    let mut produced = 0;
    let mut acc: u8 = 0;

    loop {
        if input.len() - pos < OPERAND_LEN || out.len() - produced < PAYLOAD_LEN {
            warn!("section exhausted after {} chunks", (pos - 1) / OPERAND_LEN);
            status.truncated = true;
            break;
        }

        // wire order is little-endian; the engine wants big-endian
        let mut chunk = [0u8; OPERAND_LEN];
        for (i, &b) in input[pos..pos + OPERAND_LEN].iter().enumerate() {
            chunk[OPERAND_LEN - 1 - i] = b;
        }
        pos += OPERAND_LEN;

        check_chunk_head(&chunk, counter, status);

        let cubed = cube::cube_mod(&chunk, &LYNX_MODULUS);
        if cubed[0] != PAD_MARKER {
            warn!(
                "chunk {:#04x}: padding byte {:#04x}, expected {:#04x}",
                counter, cubed[0], PAD_MARKER
            );
            status.bad_padding = true;
        }

        // payload bytes fold in from the least significant end
        for i in (1..OPERAND_LEN).rev() {
            acc = acc.wrapping_add(cubed[i]);
            out[produced] = acc;
            produced += 1;
        }

        counter += 1;
        if counter == 256 {
            break;
        }
    }

    if acc != 0 {
        warn!("section checksum residue {:#04x}", acc);
        status.checksum = true;
    }
    debug!("section done: {} bytes in, {} bytes out", pos, produced);
    pos
}

/// The structural test a chunk must pass before it is worth cubing: its
/// top 24 bits may not exceed the modulus's, and may not be all zero.
fn check_chunk_head(chunk: &Bignum, counter: u16, status: &mut DecodeStatus) {
    let head = u32::from_be_bytes([0, chunk[0], chunk[1], chunk[2]]);
    let bound = u32::from_be_bytes([0, LYNX_MODULUS[0], LYNX_MODULUS[1], LYNX_MODULUS[2]]);
    if head == 0 || head > bound {
        warn!("chunk {:#04x}: head {:#08x} outside (0, {:#08x}]", counter, head, bound);
        status.out_of_range = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{ENCRYPTED_LOADER, PLAINTEXT_LOADER};

    #[test]
    fn decrypts_the_published_image() {
        let (image, status) = lynx_decrypt(&ENCRYPTED_LOADER);
        assert!(status.is_ok(), "unexpected flags: {status:?}");
        assert_eq!(image, PLAINTEXT_LOADER);
    }

    #[test]
    fn section_boundaries_match_the_image() {
        // first section: counter 0xfd, three chunks
        let mut staging = [0u8; STAGING_LEN];
        let mut status = DecodeStatus::default();
        let consumed = decode_section(&ENCRYPTED_LOADER, &mut staging, &mut status);
        assert_eq!(consumed, 1 + 3 * OPERAND_LEN);
        assert_eq!(&staging[..150], &PLAINTEXT_LOADER[..150]);
        // the gap between the sections decodes to nothing
        assert!(staging[150..SECOND_SECTION_BASE].iter().all(|&b| b == 0));
    }

    #[test]
    fn single_chunk_decodes_cleanly_except_checksum() {
        // a one-chunk stream: counter 0xff plus the image's first chunk
        let mut stream = [0u8; 1 + OPERAND_LEN];
        stream[0] = 0xff;
        stream[1..].copy_from_slice(&ENCRYPTED_LOADER[1..=OPERAND_LEN]);

        let mut out = [0u8; PAYLOAD_LEN];
        let mut status = DecodeStatus::default();
        let consumed = decode_section(&stream, &mut out, &mut status);

        assert_eq!(consumed, 1 + OPERAND_LEN);
        assert_eq!(&out[..], &PLAINTEXT_LOADER[..PAYLOAD_LEN]);
        assert!(!status.bad_padding);
        assert!(!status.out_of_range);
        // a lone chunk ends with the accumulator mid-stream, so the
        // section-level checksum cannot balance
        assert!(status.checksum);
    }

    #[test]
    fn oversized_chunk_head_is_flagged_not_fatal() {
        let mut stream = [0u8; 1 + OPERAND_LEN];
        stream[0] = 0xff;
        // wire order is reversed, so the chunk's top bytes come last
        stream[OPERAND_LEN - 2..=OPERAND_LEN].copy_from_slice(&[0xff, 0xff, 0xff]);

        let mut out = [0u8; PAYLOAD_LEN];
        let mut status = DecodeStatus::default();
        decode_section(&stream, &mut out, &mut status);
        assert!(status.out_of_range);
    }

    #[test]
    fn all_zero_chunk_head_is_flagged() {
        let mut stream = [0u8; 1 + OPERAND_LEN];
        stream[0] = 0xff; // one all-zero chunk
        let mut out = [0u8; PAYLOAD_LEN];
        let mut status = DecodeStatus::default();
        decode_section(&stream, &mut out, &mut status);
        assert!(status.out_of_range);
    }

    #[test]
    fn bit_flip_raises_padding_and_checksum() {
        let mut tampered = ENCRYPTED_LOADER;
        tampered[1] ^= 0x01;
        let (image, status) = lynx_decrypt(&tampered);
        assert!(!status.is_ok());
        assert!(status.bad_padding);
        assert!(status.checksum);
        assert_ne!(image, PLAINTEXT_LOADER);
    }

    #[test]
    fn truncated_stream_is_flagged_not_fatal() {
        let stream = [0xf0u8, 1, 2, 3];
        let mut out = [0u8; PAYLOAD_LEN];
        let mut status = DecodeStatus::default();
        let consumed = decode_section(&stream, &mut out, &mut status);
        assert_eq!(consumed, 1);
        assert!(status.truncated);

        let mut status = DecodeStatus::default();
        assert_eq!(decode_section(&[], &mut out, &mut status), 0);
        assert!(status.truncated);
    }
}
