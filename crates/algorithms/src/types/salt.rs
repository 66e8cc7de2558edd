//! Type-safe salt value with size guarantees

use core::fmt;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A salt value with a compile-time size
#[derive(Clone, Zeroize)]
pub struct Salt<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Salt<N> {
    /// Create a new salt from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Salt::from_slice", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Create a zeroed salt
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Generate a random salt from a caller-supplied secure source
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Salt length in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the salt is empty (only for N = 0)
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for Salt<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for Salt<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for Salt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt<{}>({})", N, hex::encode(self.data))
    }
}

// Mark salt types as sealed
impl<const N: usize> Sealed for Salt<N> {}

/// Marker trait for salt sizes accepted by the PBKDF2 implementation
pub trait Pbkdf2Compatible: Sealed {}

impl Pbkdf2Compatible for Salt<16> {}
impl Pbkdf2Compatible for Salt<32> {}
