use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input point.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g.
    /// radius-based sync clustering), this returns 0.
    fn n_clusters(&self) -> usize;
}

/// Convert disjoint index groups into one label per point.
///
/// `n` is the total number of points; every index in `0..n` must appear in
/// exactly one group.
pub(crate) fn groups_to_labels(groups: &[Vec<usize>], n: usize) -> Vec<usize> {
    let mut labels = vec![0usize; n];
    for (cluster_id, group) in groups.iter().enumerate() {
        for &index in group {
            labels[index] = cluster_id;
        }
    }
    labels
}
