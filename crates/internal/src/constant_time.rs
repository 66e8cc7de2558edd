//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices.
///
/// Returns true if the slices are equal, false otherwise. The comparison
/// time does not depend on where the slices first differ. Slices of unequal
/// length compare unequal; length is treated as public information.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time equality check that returns a `Choice` (0 or 1).
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Trait for types that can be compared in constant time.
pub trait ConstantTimeEquals {
    /// Compare two values in constant time.
    fn ct_equals(&self, other: &Self) -> bool;
}

impl<T: AsRef<[u8]>> ConstantTimeEquals for T {
    fn ct_equals(&self, other: &Self) -> bool {
        ct_eq(self.as_ref(), other.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices_compare_equal() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(bool::from(ct_eq_choice([0u8; 32], [0u8; 32])));
    }

    #[test]
    fn difference_position_does_not_change_result() {
        // First-byte and last-byte differences both report unequal; the
        // comparison itself is branchless over the slice contents.
        let base = [0u8; 32];
        let mut first = base;
        first[0] ^= 1;
        let mut last = base;
        last[31] ^= 1;
        assert!(!ct_eq(base, first));
        assert!(!ct_eq(base, last));
    }

    #[test]
    fn length_mismatch_is_unequal() {
        assert!(!ct_eq([1u8, 2, 3].as_slice(), [1u8, 2].as_slice()));
        assert!(!bool::from(ct_eq_choice(
            [1u8, 2, 3].as_slice(),
            [1u8, 2].as_slice()
        )));
    }

    #[test]
    fn trait_delegates_to_ct_eq() {
        let a = vec![7u8; 16];
        let b = vec![7u8; 16];
        assert!(a.ct_equals(&b));
    }
}
