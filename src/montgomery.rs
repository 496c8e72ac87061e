//! Montgomery modular exponentiation over fixed-width operands.
//!
//! All arithmetic is radix 256 with the byte array's own digits as limbs,
//! walking most significant limb first, exactly as the console's verifier
//! did. Reduction never divides: entering the Montgomery domain is a
//! bit-serial shift-and-reduce, leaving it is a multiplication by one.

use crate::bignum::{self, Bignum, OPERAND_LEN};

/// Computes `base ^ exponent mod modulus`.
///
/// All three operands are big-endian [`Bignum`]s. The modulus must have
/// its top bit clear and `base` must already be below the modulus; both
/// are caller preconditions, not checked here.
///
/// Branches on exponent bits, so runtime leaks the exponent's hamming
/// weight. That matches the original hardware and is out of scope to fix.
pub fn mod_exp(base: &Bignum, exponent: &Bignum, modulus: &Bignum) -> Bignum {
    let v = mont_coefficient(modulus);
    let t = to_montgomery(base, modulus);
    let t = mont_exponentiate(&t, exponent, modulus, v);
    from_montgomery(&t, modulus, v)
}

/// The byte `v` with `v * modulus == -1 (mod 256)`.
///
/// Built bit by bit from the least significant end: bit i of `v` is set
/// exactly when bit i of `modulus[lsb] * v` is still clear, which forces
/// the low byte of the product toward 0xff.
fn mont_coefficient(modulus: &Bignum) -> u8 {
    let lsb = modulus[OPERAND_LEN - 1];
    let mut v: u8 = 0;
    for i in 0..8 {
        if lsb.wrapping_mul(v) & (1 << i) == 0 {
            v += 1 << i;
        }
    }
    v
}

/// `b * R mod modulus` for R = 256^51, by 408 rounds of double-and-reduce.
fn to_montgomery(b: &Bignum, modulus: &Bignum) -> Bignum {
    let mut a = *b;
    for _ in 0..8 * OPERAND_LEN {
        bignum::double(&mut a);
        bignum::reduce_once(&mut a, modulus);
    }
    a
}

/// `b * c * R^-1 mod modulus`, the word-at-a-time Montgomery product.
///
/// Stage one is a schoolbook multiply into the double-width buffer, rows
/// walked most significant first, partial products landing one past the
/// row index with the row carry parked at `t[i]`. Stage two cancels the
/// low half limb by limb: each round derives its reduction digit from the
/// current low limb and adds `digit * modulus` aligned one past the row
/// index, collecting the row carries separately. The final pass folds
/// those carries into the high half, which is the result.
fn mont_multiply(b: &Bignum, c: &Bignum, modulus: &Bignum, v: u8) -> Bignum {
    let mut t = [0u8; 2 * OPERAND_LEN];

    for i in (0..OPERAND_LEN).rev() {
        let mut x: u32 = 0;
        for j in (0..OPERAND_LEN).rev() {
            x += u32::from(t[i + j + 1]) + u32::from(b[i]) * u32::from(c[j]);
            t[i + j + 1] = x as u8;
            x >>= 8;
        }
        t[i] = x as u8;
    }

    let mut a = [0u8; OPERAND_LEN];
    for i in (0..OPERAND_LEN).rev() {
        let mut x: u32 = 0;
        let digit = (u32::from(v) * u32::from(t[OPERAND_LEN + i])) as u8;
        for j in (0..OPERAND_LEN).rev() {
            x += u32::from(t[i + j + 1]) + u32::from(digit) * u32::from(modulus[j]);
            t[i + j + 1] = x as u8;
            x >>= 8;
        }
        a[i] = x as u8;
    }

    let mut x: u32 = 0;
    for i in (0..OPERAND_LEN).rev() {
        x += u32::from(t[i]) + u32::from(a[i]);
        a[i] = x as u8;
        x >>= 8;
    }
    a
}

/// Left-to-right square-and-multiply over all 408 exponent bits.
fn mont_exponentiate(b: &Bignum, exponent: &Bignum, modulus: &Bignum, v: u8) -> Bignum {
    let mut t = to_montgomery(&bignum::one(), modulus);
    for i in 0..8 * OPERAND_LEN {
        t = mont_multiply(&t, &t, modulus, v);
        if bit(exponent, i) {
            t = mont_multiply(&t, b, modulus, v);
        }
    }
    t
}

/// `a * R^-1 mod modulus`, forced into the canonical range `[0, modulus)`.
fn from_montgomery(a: &Bignum, modulus: &Bignum, v: u8) -> Bignum {
    let mut out = mont_multiply(a, &bignum::one(), modulus, v);
    bignum::reduce_once(&mut out, modulus);
    out
}

/// Bit `i` of a big-endian operand, counting from the most significant.
fn bit(a: &Bignum, i: usize) -> bool {
    a[i / 8] & (0x80 >> (i & 7)) != 0
}
