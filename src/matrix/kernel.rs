// src/matrix/kernel.rs

use log::trace;
use crate::core::coefficient::Field;
use crate::error::Result;
use crate::polynomial::polynomial::Polynomial;

/// Find a nonzero vector `v` with `v · M = 0`, where row `l` of `M` is the
/// coefficient vector of `rows[l]`.
///
/// Rows are reduced against pivots keyed by their leading (highest nonzero)
/// column. `combinations[l]` tracks which original rows make up the current
/// row `l`, so a row that vanishes yields its combination as the kernel
/// vector, encoded as a polynomial whose coefficient `j` weights row `j`.
///
/// `zero` and `one` must be the identities of the field the rows live in.
pub fn gaussian_kernel_element<F: Field>(
    mut rows: Vec<Polynomial<F>>,
    zero: &F,
    one: &F,
) -> Result<Option<Polynomial<F>>> {
    let mut combinations: Vec<Polynomial<F>> = (0..rows.len())
        .map(|i| {
            let mut unit = vec![zero.clone(); i];
            unit.push(one.clone());
            Polynomial::new(unit)
        })
        .collect();
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut pivots: Vec<Option<usize>> = vec![None; width];

    for l in 0..rows.len() {
        loop {
            if rows[l].is_zero() {
                trace!("Row {} vanished, kernel element found", l);
                return Ok(Some(combinations[l].clone()));
            }

            let column = rows[l].len() - 1;
            let pivot = match pivots[column] {
                None => {
                    pivots[column] = Some(l);
                    break;
                }
                Some(pivot) => pivot,
            };

            let c = rows[l][column].try_div(&rows[pivot][column])?;
            let reduced_row = &rows[l] - &rows[pivot].mul_scalar(&c);
            let reduced_combination = &combinations[l] - &combinations[pivot].mul_scalar(&c);
            rows[l] = reduced_row;
            combinations[l] = reduced_combination;
        }
    }

    trace!("No kernel element among {} rows", rows.len());
    Ok(None)
}
