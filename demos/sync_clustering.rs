//! SyncNet and HSyncNet on a simple 2D dataset.

use entrain::{Clustering, HSyncNet, SyncNet};

fn main() {
    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f64>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    // --- SyncNet (radius=1.0) ---
    let syncnet = SyncNet::new(1.0).with_seed(42);
    let labels = syncnet.fit_predict(&data).unwrap();
    println!("=== SyncNet (radius=1.0) ===");
    for (i, label) in labels.iter().enumerate() {
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => cluster {}",
            i, data[i][0], data[i][1], label
        );
    }

    // --- SyncNet phase dynamic (diagnostic history) ---
    let fit = syncnet.fit_with_dynamic(&data).unwrap();
    println!(
        "\nconverged after {} snapshots, {:.1} time units",
        fit.dynamic.len(),
        fit.dynamic.last_time().unwrap_or(0.0)
    );

    // --- HSyncNet (target 3 clusters, radius found automatically) ---
    let hsyncnet = HSyncNet::new(3).with_seed(42);
    let labels = hsyncnet.fit_predict(&data).unwrap();
    println!("\n=== HSyncNet (target=3) ===");
    for (i, label) in labels.iter().enumerate() {
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => cluster {}",
            i, data[i][0], data[i][1], label
        );
    }
}
