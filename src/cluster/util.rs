use crate::error::{Error, Result};

#[inline]
pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Check that `points` is non-empty and rectangular; returns the common
/// dimensionality.
pub(crate) fn validate_dims(points: &[Vec<f64>]) -> Result<usize> {
    let first = points.first().ok_or(Error::EmptyInput)?;
    let expected = first.len();
    for point in points {
        if point.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: point.len(),
            });
        }
    }
    Ok(expected)
}

/// Average distance to the `num_neighbors` nearest neighbors, over all points.
///
/// For each point, its distance row is sorted and the first `num_neighbors`
/// non-self entries are taken; the result is the mean across all points and
/// all taken entries. Used to pick a connectivity radius that connects roughly
/// `num_neighbors` points around each oscillator.
///
/// # Errors
///
/// [`Error::EmptyInput`] for no points, [`Error::NotEnoughPoints`] when
/// `num_neighbors >= points.len()`, and [`Error::InvalidParameter`] for
/// `num_neighbors == 0`.
pub(crate) fn average_neighbor_distance(
    points: &[Vec<f64>],
    num_neighbors: usize,
) -> Result<f64> {
    validate_dims(points)?;
    if num_neighbors == 0 {
        return Err(Error::InvalidParameter {
            name: "num_neighbors",
            message: "must be at least 1",
        });
    }
    if num_neighbors >= points.len() {
        return Err(Error::NotEnoughPoints {
            required: num_neighbors,
            found: points.len(),
        });
    }

    let mut total = 0.0;
    for (i, point) in points.iter().enumerate() {
        let mut row: Vec<f64> = points
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, other)| euclidean(point, other))
            .collect();
        row.sort_by(|a, b| a.total_cmp(b));
        total += row[..num_neighbors].iter().sum::<f64>();
    }

    Ok(total / (num_neighbors * points.len()) as f64)
}
