// IEEE-754 binary64 layout: s | eeeeeeeeeee | m x 52
pub const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
pub const EXP_MASK: u64 = 0x7FF0_0000_0000_0000;
pub const MANT_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

pub const EXP_BITS: u32 = 11;
pub const MANT_BITS: u32 = 52;
pub const EXP_BIAS: i32 = 1023;

/// Key of +inf. Every finite double has a key strictly inside `(-INF_KEY, INF_KEY)`.
pub const INF_KEY: i64 = EXP_MASK as i64;

/// Fold the bit pattern of `x` into a signed key that orders like the value.
///
/// Non-negative doubles keep their raw bits; negative doubles map to the
/// negated magnitude bits, so `-0.0` and `+0.0` both land on 0. Defined for
/// every bit pattern (NaN keys are meaningless but harmless).
#[inline]
pub fn key(x: f64) -> i64 {
    let bits = x.to_bits();
    if bits & SIGN_MASK == 0 {
        bits as i64
    } else {
        -((bits & !SIGN_MASK) as i64)
    }
}

/// Inverse of [`key`]. Key 0 always decodes to `+0.0`.
#[inline]
pub fn from_key(k: i64) -> f64 {
    if k >= 0 {
        f64::from_bits(k as u64)
    } else {
        f64::from_bits(k.unsigned_abs() | SIGN_MASK)
    }
}

/// Field-level view of an f64.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Unpacked64 {
    pub sign:           i8,   // +1 or -1
    pub exp:            i16,  // unbiased exponent (subnormals report 1 - bias)
    pub mant:           u64,  // raw 52-bit fraction field
    pub is_zero:        bool, // Convenience
    pub is_subnormal:   bool, // Convenience
    pub is_inf:         bool, // Convenience
    pub is_nan:         bool, // Convenience
}

impl Unpacked64 {
    #[inline]
    pub fn of(x: f64) -> Self {
        let bits = x.to_bits();
        let sign = if bits & SIGN_MASK == 0 { 1 } else { -1 };
        let e = ((bits & EXP_MASK) >> MANT_BITS) as i32;
        let mant = bits & MANT_MASK;

        let all_ones = (1 << EXP_BITS) - 1;
        let exp = if e == 0 { 1 - EXP_BIAS } else { e - EXP_BIAS };

        Self {
            sign,
            exp: exp as i16,
            mant,
            is_zero: e == 0 && mant == 0,
            is_subnormal: e == 0 && mant != 0,
            is_inf: e == all_ones && mant == 0,
            is_nan: e == all_ones && mant != 0,
        }
    }
}

use core::fmt;
impl fmt::Display for Unpacked64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = if self.sign < 0 { '-' } else { '+' };
        if self.is_nan {
            write!(f, "NaN(mant=0x{:013X})", self.mant)
        } else if self.is_inf {
            write!(f, "{}inf", s)
        } else if self.is_zero {
            write!(f, "{}0", s)
        } else if self.is_subnormal {
            write!(f, "{}0.{:013X}p{} (subnormal)", s, self.mant, self.exp)
        } else {
            write!(f, "{}1.{:013X}p{}", s, self.mant, self.exp)
        }
    }
}
