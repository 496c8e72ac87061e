//! Double-and-add modular multiplication and the fixed-exponent cube.
//!
//! The boot ROM never runs a general exponent loop: its public exponent is
//! always 3, so it multiplies twice with a plain shift-and-add routine and
//! skips the Montgomery machinery entirely. Kept separate from
//! [`crate::montgomery`] on purpose: same operand model, independent
//! algorithm.

use crate::bignum::{self, Bignum};

/// `multiplicand * multiplier mod modulus` by binary long multiplication.
///
/// Walks the multiplier byte by byte from the most significant end and bit
/// by bit within each byte, doubling the accumulator per bit and adding the
/// multiplicand when the bit is set. A doubling plus an addition can leave
/// the accumulator anywhere below three times the modulus, so the bit-set
/// branch subtracts a second time when the first subtraction lands.
pub(crate) fn mul_mod(multiplicand: &Bignum, multiplier: &Bignum, modulus: &Bignum) -> Bignum {
    let mut acc = [0u8; bignum::OPERAND_LEN];
    for &byte in multiplier.iter() {
        for shift in (0..8).rev() {
            bignum::double(&mut acc);
            if byte & (1 << shift) != 0 {
                bignum::add_assign(&mut acc, multiplicand);
                if bignum::reduce_once(&mut acc, modulus) {
                    bignum::reduce_once(&mut acc, modulus);
                }
            } else {
                bignum::reduce_once(&mut acc, modulus);
            }
        }
    }
    acc
}

/// `e^3 mod modulus`: square, then multiply by `e` once more.
pub(crate) fn cube_mod(e: &Bignum, modulus: &Bignum) -> Bignum {
    let square = mul_mod(e, e, modulus);
    mul_mod(e, &square, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bignum::OPERAND_LEN;
    use crate::keys::{ENCRYPTED_LOADER, LYNX_MODULUS, LYNX_PUBLIC_EXPONENT};
    use crate::montgomery::mod_exp;
    use num_bigint::BigUint;
    use rand_core::{OsRng, RngCore};

    fn to_big(b: &Bignum) -> BigUint {
        BigUint::from_bytes_be(b)
    }

    fn from_big(x: &BigUint) -> Bignum {
        let bytes = x.to_bytes_be();
        let mut out = [0u8; OPERAND_LEN];
        out[OPERAND_LEN - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    fn random_below(n: &BigUint) -> Bignum {
        let mut raw = [0u8; OPERAND_LEN];
        OsRng.fill_bytes(&mut raw);
        from_big(&(BigUint::from_bytes_be(&raw) % n))
    }

    /// The image's first ciphertext chunk, byte-reversed into engine order.
    fn first_chunk() -> Bignum {
        let mut chunk = [0u8; OPERAND_LEN];
        for (i, &b) in ENCRYPTED_LOADER[1..=OPERAND_LEN].iter().enumerate() {
            chunk[OPERAND_LEN - 1 - i] = b;
        }
        chunk
    }

    #[test]
    fn mul_mod_matches_reference() {
        let n = to_big(&LYNX_MODULUS);
        for _ in 0..8 {
            let a = random_below(&n);
            let b = random_below(&n);
            let got = mul_mod(&a, &b, &LYNX_MODULUS);
            assert_eq!(to_big(&got), to_big(&a) * to_big(&b) % &n);
        }
    }

    #[test]
    fn cube_agrees_with_generic_exponentiation() {
        let n = to_big(&LYNX_MODULUS);
        for _ in 0..8 {
            let e = random_below(&n);
            assert_eq!(
                cube_mod(&e, &LYNX_MODULUS),
                mod_exp(&e, &LYNX_PUBLIC_EXPONENT, &LYNX_MODULUS)
            );
        }
    }

    #[test]
    fn first_chunk_cube_is_pinned() {
        let expected = crate::hex::parse_operand(
            "157524479a7fa36808895bac6cf5a82406cefc67978cbaba95b0b2699f03e020\
             5ea4b4fe4f72fe855fa320e1a162b32f208080",
        )
        .unwrap();
        let cube = cube_mod(&first_chunk(), &LYNX_MODULUS);
        assert_eq!(cube, expected);
        assert_eq!(cube[0], 0x15);
    }

    #[test]
    fn first_chunk_cube_matches_mod_exp() {
        assert_eq!(
            cube_mod(&first_chunk(), &LYNX_MODULUS),
            mod_exp(&first_chunk(), &LYNX_PUBLIC_EXPONENT, &LYNX_MODULUS)
        );
    }
}
