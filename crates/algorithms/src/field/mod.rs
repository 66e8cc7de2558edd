//! Finite-field abstractions backing the cipher core
//!
//! Two constructions live here. [`FiniteField`] assembles a field from an
//! explicit element set and a pair of binary operations and can exhaustively
//! verify the field axioms — intended for construction-time validation of
//! small fields, never for hot-path arithmetic. [`Gf256`] is the fixed AES
//! byte field the block cipher consumes as a capability value.

pub mod gf256;
pub use gf256::Gf256;

use crate::error::{validate, Error, Result};

/// A finite field assembled from an element set and two closed operations.
///
/// The cipher layers hold a field capability by value instead of inheriting
/// from an algebraic hierarchy, so implementations stay swappable and
/// independently testable. Operation results are reduced modulo the field
/// order, matching the element set `{0, 1, .., n-1}` convention.
pub struct FiniteField<A, M>
where
    A: Fn(u64, u64) -> u64,
    M: Fn(u64, u64) -> u64,
{
    elements: Vec<u64>,
    addition: A,
    multiplication: M,
    order: u64,
}

impl<A, M> FiniteField<A, M>
where
    A: Fn(u64, u64) -> u64,
    M: Fn(u64, u64) -> u64,
{
    /// Assemble a field candidate from elements and operations.
    ///
    /// The construction itself only checks that the element set is usable;
    /// call [`FiniteField::is_field`] to verify the axioms hold.
    pub fn new(elements: Vec<u64>, addition: A, multiplication: M) -> Result<Self> {
        validate::parameter(
            elements.len() >= 2,
            "elements",
            "a field needs at least the two identity elements",
        )?;

        let order = elements.len() as u64;
        Ok(Self {
            elements,
            addition,
            multiplication,
            order,
        })
    }

    /// Number of elements in the field
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The element set
    pub fn elements(&self) -> &[u64] {
        &self.elements
    }

    /// Whether `a` belongs to the element set
    pub fn contains(&self, a: u64) -> bool {
        self.elements.contains(&a)
    }

    /// Field addition, reduced modulo the field order
    pub fn add(&self, a: u64, b: u64) -> u64 {
        (self.addition)(a, b) % self.order
    }

    /// Field multiplication, reduced modulo the field order
    pub fn multiply(&self, a: u64, b: u64) -> u64 {
        (self.multiplication)(a, b) % self.order
    }

    /// Find the multiplicative inverse of a non-zero element.
    ///
    /// The additive identity has no inverse and is rejected with an
    /// invalid-operand error, as is any element without an inverse (which
    /// means the candidate is not actually a field).
    pub fn multiplicative_inverse(&self, a: u64) -> Result<u64> {
        if a == 0 {
            return Err(Error::Operand {
                context: "finite field inverse",
                reason: "the additive identity has no multiplicative inverse",
            });
        }

        self.elements
            .iter()
            .copied()
            .find(|&e| self.multiply(a, e) == 1 && self.multiply(e, a) == 1)
            .ok_or(Error::Operand {
                context: "finite field inverse",
                reason: "element has no multiplicative inverse",
            })
    }

    /// Exhaustively check the field axioms over every element pair.
    ///
    /// Runs in O(n²)–O(n³) over the field order; this is a construction-time
    /// validation tool, not something to call per operation.
    pub fn is_field(&self) -> bool {
        self.is_closed()
            && self.addition_commutes()
            && self.operations_associate()
            && self.multiplication_distributes()
            && self.has_identities()
            && self.has_additive_inverses()
            && self.has_multiplicative_inverses()
    }

    fn is_closed(&self) -> bool {
        self.elements.iter().all(|&a| {
            self.elements
                .iter()
                .all(|&b| self.contains(self.add(a, b)) && self.contains(self.multiply(a, b)))
        })
    }

    fn addition_commutes(&self) -> bool {
        self.elements.iter().all(|&a| {
            self.elements
                .iter()
                .all(|&b| self.add(a, b) == self.add(b, a))
        })
    }

    fn operations_associate(&self) -> bool {
        self.elements.iter().all(|&a| {
            self.elements.iter().all(|&b| {
                self.elements.iter().all(|&c| {
                    self.add(self.add(a, b), c) == self.add(a, self.add(b, c))
                        && self.multiply(self.multiply(a, b), c)
                            == self.multiply(a, self.multiply(b, c))
                })
            })
        })
    }

    fn multiplication_distributes(&self) -> bool {
        self.elements.iter().all(|&a| {
            self.elements.iter().all(|&b| {
                self.elements.iter().all(|&c| {
                    self.multiply(a, self.add(b, c))
                        == self.add(self.multiply(a, b), self.multiply(a, c))
                })
            })
        })
    }

    fn has_identities(&self) -> bool {
        let additive = self
            .elements
            .iter()
            .all(|&a| self.add(a, 0) == a && self.add(0, a) == a);
        let multiplicative = self
            .elements
            .iter()
            .all(|&a| self.multiply(a, 1) == a && self.multiply(1, a) == a);
        additive && multiplicative
    }

    fn has_additive_inverses(&self) -> bool {
        self.elements
            .iter()
            .all(|&a| self.elements.iter().any(|&b| self.add(a, b) == 0))
    }

    fn has_multiplicative_inverses(&self) -> bool {
        self.elements
            .iter()
            .filter(|&&a| a != 0)
            .all(|&a| self.multiplicative_inverse(a).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modular(n: u64) -> FiniteField<impl Fn(u64, u64) -> u64, impl Fn(u64, u64) -> u64> {
        FiniteField::new(
            (0..n).collect(),
            move |a, b| (a + b) % n,
            move |a, b| (a * b) % n,
        )
        .unwrap()
    }

    #[test]
    fn z5_is_a_field() {
        let f = modular(5);
        assert!(f.is_field());
        assert_eq!(f.add(3, 4), 2);
        assert_eq!(f.multiply(3, 4), 2);
        assert_eq!(f.multiplicative_inverse(3).unwrap(), 2);
    }

    #[test]
    fn z4_is_not_a_field() {
        // 2 has no multiplicative inverse mod 4.
        let f = modular(4);
        assert!(!f.is_field());
        assert!(matches!(
            f.multiplicative_inverse(2),
            Err(Error::Operand { .. })
        ));
    }

    #[test]
    fn zero_has_no_inverse() {
        let f = modular(7);
        let err = f.multiplicative_inverse(0).unwrap_err();
        assert!(matches!(err, Error::Operand { .. }));
    }

    #[test]
    fn operations_reduce_into_the_element_set() {
        let f = modular(5);
        for a in 0..5 {
            for b in 0..5 {
                assert!(f.contains(f.add(a, b)));
                assert!(f.contains(f.multiply(a, b)));
            }
        }
    }

    #[test]
    fn rejects_degenerate_element_sets() {
        let result = FiniteField::new(vec![0], |a, b| a + b, |a, b| a * b);
        assert!(matches!(result, Err(Error::Parameter { .. })));
    }
}
