// src/core/factor_multiset.rs

use std::collections::btree_map;
use std::collections::BTreeMap;
use crate::core::coefficient::Ring;
use crate::error::Result;
use crate::polynomial::polynomial::Polynomial;

/// Irreducible factors with their multiplicities, ordered by degree then
/// coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorMultiset<F: Ord>(BTreeMap<Polynomial<F>, usize>);

impl<F: Ring + Ord> FactorMultiset<F> {
    pub fn new() -> Self {
        FactorMultiset(BTreeMap::new())
    }

    pub fn add(&mut self, factor: Polynomial<F>, multiplicity: usize) {
        if multiplicity == 0 {
            return;
        }
        *self.0.entry(factor).or_insert(0) += multiplicity;
    }

    pub fn combine(&mut self, other: &FactorMultiset<F>) {
        for (factor, multiplicity) in &other.0 {
            self.add(factor.clone(), *multiplicity);
        }
    }

    /// Multiply every multiplicity by `k`
    pub fn scale(&mut self, k: usize) {
        for multiplicity in self.0.values_mut() {
            *multiplicity *= k;
        }
    }

    pub fn multiplicity(&self, factor: &Polynomial<F>) -> usize {
        self.0.get(factor).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Polynomial<F>, usize> {
        self.0.iter()
    }

    /// Sum of multiplicities
    pub fn total_multiplicity(&self) -> usize {
        self.0.values().sum()
    }

    /// Sum of `multiplicity * degree`, the degree of the product
    pub fn total_degree(&self) -> usize {
        self.0
            .iter()
            .map(|(factor, multiplicity)| multiplicity * factor.degree().max(0) as usize)
            .sum()
    }

    /// `unit * ∏ factor^multiplicity`
    pub fn expand(&self, unit: &F) -> Result<Polynomial<F>> {
        let mut product = Polynomial::constant(unit.clone());
        for (factor, &multiplicity) in &self.0 {
            product = &product * &factor.pow(multiplicity as u32)?;
        }
        Ok(product)
    }
}

impl<F: Ring + Ord> Default for FactorMultiset<F> {
    fn default() -> Self {
        FactorMultiset::new()
    }
}

impl<'a, F: Ord> IntoIterator for &'a FactorMultiset<F> {
    type Item = (&'a Polynomial<F>, &'a usize);
    type IntoIter = btree_map::Iter<'a, Polynomial<F>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<F: Ord> IntoIterator for FactorMultiset<F> {
    type Item = (Polynomial<F>, usize);
    type IntoIter = btree_map::IntoIter<Polynomial<F>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
