//! Type-safe authentication tag with size guarantees
//!
//! Provides the `Tag` type, representing a cryptographic authentication tag
//! with compile-time size guarantees. Verification must go through
//! [`ConstantTimeEq::ct_eq`]; the `PartialEq` impl exists for tests and
//! non-secret bookkeeping only.

use core::fmt;
use core::ops::Deref;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;
use crate::types::ConstantTimeEq;
use internal::constant_time::ct_eq;
use zeroize::Zeroize;

/// A cryptographic authentication tag with fixed size
#[derive(Clone, Zeroize)]
pub struct Tag<const N: usize> {
    data: [u8; N],
}

// Mark Tag types as sealed
impl<const N: usize> Sealed for Tag<N> {}

impl<const N: usize> Tag<N> {
    /// Create a new tag from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Tag::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Create a zeroed tag
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Tag length in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the tag is empty (only for N = 0)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Render as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }
}

impl<const N: usize> AsRef<[u8]> for Tag<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for Tag<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Deref for Tag<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> ConstantTimeEq for Tag<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl<const N: usize> PartialEq for Tag<N> {
    fn eq(&self, other: &Self) -> bool {
        // Deliberately variable-time; security-sensitive verification goes
        // through ct_eq.
        self.data == other.data
    }
}

impl<const N: usize> Eq for Tag<N> {}

impl<const N: usize> fmt::Debug for Tag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>({})", N, self.to_hex())
    }
}

impl<const N: usize> fmt::Display for Tag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
