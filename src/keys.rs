//! Published Lynx key material and the known-good loader image.
//!
//! These are the tables burned into (or recovered from) the console ROM
//! and its cartridge toolchain: the 408-bit public modulus, the public
//! exponent 3 padded to full operand width, and a 410-byte encrypted
//! miniloader together with its decrypted form. The loader pair doubles
//! as the crate's end-to-end reference vector.

use crate::bignum::Bignum;
use crate::loader::IMAGE_LEN;

/// The console's 408-bit public modulus. Top bit clear, as the doubling
/// primitive requires.
pub const LYNX_MODULUS: Bignum = [
    0x35, 0xb5, 0xa3, 0x94, 0x28, 0x06, 0xd8, 0xa2,
    0x26, 0x95, 0xd7, 0x71, 0xb2, 0x3c, 0xfd, 0x56,
    0x1c, 0x4a, 0x19, 0xb6, 0xa3, 0xb0, 0x26, 0x00,
    0x36, 0x5a, 0x30, 0x6e, 0x3c, 0x4d, 0x63, 0x38,
    0x1b, 0xd4, 0x1c, 0x13, 0x64, 0x89, 0x36, 0x4c,
    0xf2, 0xba, 0x2a, 0x58, 0xf4, 0xfe, 0xe1, 0xfd,
    0xac, 0x7e, 0x79,
];

/// The public exponent, 3, padded to full operand width.
pub const LYNX_PUBLIC_EXPONENT: Bignum = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x03,
];

/// A signed, encrypted 410-byte miniloader image (two sections: three
/// chunks, then five).
pub const ENCRYPTED_LOADER: [u8; IMAGE_LEN] = [
    0xfd, 0xc1, 0x0d, 0x8e, 0xe9, 0xee, 0x09, 0x13,
    0xe5, 0x96, 0x0c, 0x34, 0x64, 0xda, 0xd4, 0xbb,
    0x99, 0xec, 0xce, 0x4f, 0xaa, 0x8c, 0xed, 0x65,
    0xf0, 0x32, 0x70, 0xa3, 0x84, 0xc4, 0xfc, 0xa2,
    0x6d, 0x3a, 0xf8, 0x77, 0x4b, 0xac, 0x9b, 0x54,
    0x7d, 0x82, 0x6f, 0xf8, 0xa5, 0x06, 0x4d, 0x7b,
    0x77, 0x55, 0xe4, 0x31, 0xc4, 0x2c, 0x2f, 0x2f,
    0xb6, 0x4d, 0x15, 0xa9, 0xc7, 0x99, 0x5d, 0x6e,
    0xb3, 0x97, 0x92, 0x44, 0x7b, 0x2b, 0x85, 0x18,
    0xe6, 0xf1, 0x96, 0xf4, 0xc4, 0xde, 0xa4, 0xcf,
    0x79, 0xe2, 0xc1, 0x1a, 0xe0, 0x0c, 0x93, 0xc5,
    0x26, 0xbd, 0xa3, 0x16, 0x8a, 0xc3, 0x59, 0xa0,
    0x39, 0x38, 0xa0, 0x3b, 0xef, 0xbb, 0x1d, 0x5c,
    0x0d, 0x1d, 0xcc, 0x48, 0x1d, 0xdd, 0x98, 0x9a,
    0x7a, 0xf7, 0x96, 0xf9, 0x61, 0x03, 0x50, 0xda,
    0x47, 0x69, 0x94, 0xc3, 0x80, 0xda, 0xa9, 0x99,
    0xa1, 0x21, 0x2b, 0x2e, 0x7d, 0xf5, 0xe4, 0xf7,
    0xb3, 0x5c, 0xa8, 0x14, 0xfa, 0xe9, 0x06, 0xac,
    0x1e, 0x9f, 0xb5, 0x31, 0xbe, 0x42, 0x14, 0x08,
    0x0e, 0x05, 0xfb, 0x25, 0xbb, 0x5c, 0x5c, 0x66,
    0x76, 0x8e, 0x36, 0xe8, 0xeb, 0x39, 0xf2, 0x26,
    0xbd, 0x17, 0x29, 0xf4, 0xb8, 0x1d, 0x7e, 0xee,
    0x47, 0x61, 0xbb, 0x9e, 0xf5, 0x72, 0xc9, 0xbc,
    0x26, 0x37, 0xd5, 0x78, 0x8f, 0xd0, 0xce, 0x95,
    0x21, 0xeb, 0x4a, 0x07, 0x8d, 0x3a, 0x3a, 0x01,
    0x82, 0xcf, 0x01, 0xc5, 0x1e, 0x1d, 0xa8, 0x41,
    0x4f, 0xbd, 0xc1, 0x76, 0x22, 0xa3, 0x88, 0xd9,
    0x57, 0xc9, 0x51, 0x3a, 0x26, 0xbe, 0x4a, 0x1a,
    0x7f, 0x42, 0x61, 0xcf, 0xfc, 0xfc, 0x5b, 0x06,
    0x94, 0xd2, 0x2c, 0x78, 0x45, 0xba, 0x93, 0xc4,
    0x7d, 0x7c, 0x81, 0x73, 0x07, 0x4f, 0xe2, 0x6c,
    0xe9, 0x81, 0x1a, 0xde, 0x77, 0x74, 0x87, 0xde,
    0x26, 0x9e, 0x7a, 0xa8, 0x19, 0xa7, 0x34, 0x32,
    0x70, 0xed, 0x59, 0xa8, 0x4a, 0xd8, 0xfe, 0xcb,
    0xdd, 0x02, 0x2f, 0xce, 0x92, 0xe9, 0x13, 0xa6,
    0xff, 0xb4, 0x4b, 0x18, 0x9d, 0x63, 0x48, 0xe0,
    0x3b, 0x3b, 0x0d, 0x2b, 0xfc, 0x04, 0xa4, 0xe3,
    0x5e, 0x4c, 0x3c, 0x94, 0x70, 0xc4, 0xf0, 0x64,
    0x15, 0x48, 0x68, 0x17, 0xde, 0x14, 0x72, 0xf0,
    0x59, 0x33, 0x4c, 0x49, 0x47, 0x8d, 0xb6, 0xf4,
    0x82, 0x4e, 0xb7, 0x4e, 0x01, 0xc9, 0xc2, 0x82,
    0x0b, 0x7a, 0xac, 0x67, 0x9b, 0x0f, 0x04, 0xe1,
    0xb6, 0x78, 0x34, 0xc8, 0x4f, 0x2a, 0x11, 0xed,
    0xd0, 0x1c, 0x6d, 0xcd, 0x3d, 0x47, 0x09, 0x8b,
    0xe5, 0x38, 0x19, 0x7a, 0x31, 0x6e, 0x30, 0x71,
    0x1c, 0x90, 0x34, 0xe5, 0x44, 0xcc, 0x00, 0xc7,
    0x41, 0xd0, 0x27, 0x8a, 0x06, 0x29, 0x5c, 0x2b,
    0xe4, 0x26, 0x63, 0x09, 0x52, 0xd3, 0x97, 0x33,
    0xd7, 0x59, 0x1c, 0x36, 0x2f, 0xc9, 0xa9, 0xa2,
    0xb5, 0xbb, 0xa9, 0x1d, 0xe6, 0x36, 0x7e, 0x56,
    0x05, 0xa4, 0x9c, 0xe0, 0x45, 0x59, 0x21, 0xe1,
    0xe6, 0x21,
];

/// The decrypted form of [`ENCRYPTED_LOADER`].
pub const PLAINTEXT_LOADER: [u8; IMAGE_LEN] = [
    0x80, 0x00, 0x20, 0x4f, 0x02, 0x64, 0x05, 0xe6,
    0x06, 0xa9, 0x08, 0x8d, 0x8b, 0xfd, 0x4c, 0x4a,
    0xfe, 0xa2, 0x00, 0x20, 0x00, 0x03, 0xa2, 0x0b,
    0xbd, 0x6d, 0x02, 0xbc, 0x76, 0x02, 0x99, 0x00,
    0xfc, 0xca, 0xd0, 0xf4, 0x9c, 0x91, 0xfd, 0xa9,
    0x04, 0x8d, 0x95, 0xfd, 0xa0, 0x1f, 0xb9, 0x00,
    0x24, 0x99, 0xa0, 0xfd, 0x88, 0x10, 0xf7, 0x8a,
    0x9d, 0x00, 0x24, 0xe8, 0xd0, 0xf9, 0x4c, 0x49,
    0x03, 0x00, 0x7a, 0x02, 0x00, 0x24, 0x40, 0x1c,
    0x07, 0xba, 0x02, 0x00, 0x04, 0x64, 0x60, 0xa2,
    0x1f, 0x9e, 0xa0, 0xfd, 0xca, 0x10, 0xfa, 0xa9,
    0x04, 0x8d, 0x8c, 0xfd, 0xa9, 0x0f, 0x8d, 0x01,
    0x02, 0x60, 0xa0, 0x10, 0xad, 0xb2, 0xfc, 0x95,
    0x36, 0xe8, 0x88, 0xd0, 0xf7, 0x60, 0x01, 0x20,
    0x04, 0x00, 0x01, 0x00, 0x00, 0x24, 0x20, 0x91,
    0x92, 0x09, 0x08, 0x90, 0x04, 0x06, 0x11, 0x10,
    0x28, 0x2a, 0x47, 0x39, 0x00, 0x9d, 0x11, 0x8f,
    0x5e, 0xd9, 0x87, 0x94, 0x5e, 0xa7, 0x4e, 0xff,
    0xe7, 0x05, 0xba, 0xd1, 0x55, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x20, 0x62, 0x02, 0xe6, 0x3c, 0xe6, 0x3d, 0xa5,
    0x36, 0x20, 0x00, 0xfe, 0xa6, 0x37, 0xe8, 0xa4,
    0x38, 0xc8, 0x20, 0x42, 0x03, 0x38, 0xa6, 0x37,
    0xa5, 0x38, 0xe9, 0x04, 0xa8, 0xc6, 0x3c, 0xd0,
    0x04, 0xc6, 0x3d, 0xf0, 0x19, 0xad, 0xb2, 0xfc,
    0x92, 0x3a, 0xe6, 0x3a, 0xd0, 0x02, 0xe6, 0x3b,
    0xe8, 0xd0, 0xea, 0xc8, 0xd0, 0xe7, 0xe6, 0x36,
    0x64, 0x37, 0x64, 0x38, 0x80, 0xc9, 0x60, 0xad,
    0xb2, 0xfc, 0xca, 0xd0, 0xfa, 0x88, 0xd0, 0xf7,
    0x60, 0xa9, 0x12, 0x85, 0x33, 0xa5, 0x33, 0x4a,
    0x4a, 0xe5, 0x33, 0x4a, 0x2e, 0x82, 0x02, 0x2e,
    0x83, 0x02, 0x66, 0x33, 0xa5, 0x33, 0x6d, 0x82,
    0x02, 0x4d, 0x83, 0x02, 0xa8, 0xbd, 0x00, 0x24,
    0x48, 0xb9, 0x00, 0x24, 0x9d, 0x00, 0x24, 0x68,
    0x99, 0x00, 0x24, 0xe8, 0xd0, 0xd7, 0xce, 0xf5,
    0x03, 0xd0, 0xd2, 0xa2, 0x32, 0x74, 0x00, 0xca,
    0xd0, 0xfb, 0xa5, 0x31, 0x20, 0x00, 0xfe, 0xad,
    0xb0, 0xfc, 0xf0, 0x03, 0x20, 0x4f, 0x02, 0xa9,
    0x10, 0x85, 0x32, 0x38, 0xa2, 0x10, 0xad, 0xb2,
    0xfc, 0xa0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_top_bit_is_clear() {
        assert!(LYNX_MODULUS[0] < 0x80);
    }

    #[test]
    fn public_exponent_is_three() {
        assert_eq!(LYNX_PUBLIC_EXPONENT[50], 3);
        assert!(LYNX_PUBLIC_EXPONENT[..50].iter().all(|&b| b == 0));
    }
}
