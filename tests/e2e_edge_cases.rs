//! End-to-end tests for degenerate and malformed input.
//!
//! Covers isolated nodes, self-loops, duplicate edges, tied eigenvalues,
//! the JSON wire layer, and error reporting.

use graph_spectrum::{
    Error, Graph, GraphDescription, Laplacians, SpectrumConfig, build_adjacency, compute_spectrum,
    wire,
};
use pretty_assertions::assert_eq;

const EPS: f64 = 1e-10;

fn config() -> SpectrumConfig {
    SpectrumConfig::default()
}

// ============================================================================
// Isolated nodes next to a connected component
// ============================================================================

#[test]
fn test_isolated_node_alongside_edge() {
    let graph = Graph::new(3).with_edge(0, 1);
    let l = Laplacians::from_adjacency(&build_adjacency(3, &graph.edges).unwrap());

    assert!(l.inv_sqrt_degree.iter().all(|x| x.is_finite()));
    assert!(l.normalized.iter().all(|x| x.is_finite()));
    assert_eq!(l.inv_sqrt_degree[(2, 2)], 0.0);
    assert_eq!(l.normalized[(2, 2)], 0.0);

    let report = compute_spectrum(&graph, &config()).unwrap();
    let norm = &report.normalized_laplacian.eigenvalues;
    // Isolated node contributes a 0 eigenvalue; the edge contributes {0, 2}
    assert!(norm[0].abs() < EPS && norm[1].abs() < EPS && (norm[2] - 2.0).abs() < EPS, "{norm:?}");
    assert!(norm.iter().chain(report.laplacian.eigenvalues.iter()).all(|x| x.is_finite()));
}

// ============================================================================
// Self-loops and duplicates
// ============================================================================

#[test]
fn test_duplicate_edges_are_idempotent() {
    let once = compute_spectrum(&Graph::new(3).with_edges([(0, 1), (1, 2)]), &config()).unwrap();
    let many = compute_spectrum(
        &Graph::new(3).with_edges([(0, 1), (1, 0), (1, 2), (0, 1), (2, 1)]),
        &config(),
    )
    .unwrap();
    assert_eq!(once.adjacency.matrix, many.adjacency.matrix);
    assert_eq!(once, many);
}

#[test]
fn test_self_loop() {
    let report = compute_spectrum(&Graph::new(2).with_edges([(0, 0), (0, 1)]), &config()).unwrap();
    assert_eq!(report.adjacency.matrix, vec![vec![1.0, 1.0], vec![1.0, 0.0]]);

    // L = [[1, -1], [-1, 1]] (the loop cancels in D - A)
    let lap = &report.laplacian.eigenvalues;
    assert!(lap[0].abs() < EPS && (lap[1] - 2.0).abs() < EPS, "{lap:?}");

    for &x in &report.normalized_laplacian.eigenvalues {
        assert!((-EPS..=2.0 + EPS).contains(&x), "{x}");
    }
}

// ============================================================================
// Tied eigenvalues
// ============================================================================

#[test]
fn test_tied_eigenvectors_stay_orthonormal() {
    // Complete graph K4: Laplacian {0, 4, 4, 4}
    let graph = Graph::new(4).with_edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    let report = compute_spectrum(&graph, &config()).unwrap();
    let vecs = &report.laplacian.eigenvectors;

    for i in 0..4 {
        for j in 0..4 {
            let dot: f64 = vecs[i].iter().zip(&vecs[j]).map(|(a, b)| a * b).sum();
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((dot - expected).abs() < 1e-9, "<v{i}, v{j}> = {dot}");
        }
    }

    // Eigenvalue 0 belongs to the constant vector and stays first
    let v0 = &vecs[0];
    assert!(v0.iter().all(|x| (x.abs() - 0.5).abs() < 1e-9), "{v0:?}");
}

// ============================================================================
// Repeated invocations
// ============================================================================

#[test]
fn test_repeated_invocation_is_identical() {
    let graph = Graph::new(6).with_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (2, 3)]);
    let first = compute_spectrum(&graph, &config()).unwrap();
    for _ in 0..3 {
        assert_eq!(compute_spectrum(&graph, &config()).unwrap(), first);
    }
}

// ============================================================================
// Wire layer
// ============================================================================

#[test]
fn test_json_request_end_to_end() {
    let body = r#"{"nodes": [0, 1], "edges": [[0, 1]]}"#;
    let report = wire::spectrum_from_json(body, &config()).unwrap();
    let text = wire::to_json(&report, true).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["adjacency"]["matrix"], serde_json::json!([[0.0, 1.0], [1.0, 0.0]]));
    assert_eq!(value["laplacian"]["eigenvalues"].as_array().unwrap().len(), 2);
    assert_eq!(value["normalized_laplacian"]["eigenvectors"].as_array().unwrap().len(), 2);
}

#[test]
fn test_wire_errors() {
    let bad_arity = GraphDescription { nodes: vec![0, 1], edges: vec![vec![0]] };
    assert!(matches!(bad_arity.into_graph(), Err(Error::InvalidInput(_))));

    let out_of_range = r#"{"nodes": [0, 1], "edges": [[1, 0], [-3, 1]]}"#;
    let err = wire::spectrum_from_json(out_of_range, &config()).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { index: 1, src: -3, dst: 1, node_count: 2 }));

    let not_json = wire::spectrum_from_json("nodes: 3", &config()).unwrap_err();
    assert!(matches!(not_json, Error::Json(_)));
}

#[test]
fn test_embedding_rejects_bad_component() {
    let report = compute_spectrum(&Graph::new(2).with_edge(0, 1), &config()).unwrap();
    assert!(matches!(report.laplacian.embedding(&[0, 2]), Err(Error::InvalidInput(_))));
}
