// tests/projection_tests.rs

use num_traits::ToPrimitive;
use vector_engine::{Vector, VectorError};

const EPS: f64 = 1e-9;

fn assert_coords_close(v: &Vector, expected: &[f64], tolerance: f64) {
    assert_eq!(v.dimension(), expected.len());
    for (c, e) in v.coordinates().iter().zip(expected) {
        let c = c.to_f64().unwrap();
        assert!((c - e).abs() < tolerance, "coordinate {c} != {e}");
    }
}

#[test]
fn test_parallel_component_concrete() {
    let v = Vector::parse(&["3.039", "1.879"]).unwrap();
    let w = Vector::parse(&["0.825", "2.036"]).unwrap();
    let parallel = v.component_parallel_to(&w).unwrap();
    assert_coords_close(&parallel, &[1.0826, 2.6717], 1e-3);
}

#[test]
fn test_parallel_component_lies_along_basis() {
    let v = Vector::parse(&["3.039", "1.879"]).unwrap();
    let w = Vector::parse(&["0.825", "2.036"]).unwrap();
    let parallel = v.component_parallel_to(&w).unwrap();
    assert!(parallel.is_parallel_to(&w));
}

#[test]
fn test_orthogonal_component_is_orthogonal_to_basis() {
    let v = Vector::parse(&["-9.88", "-3.264", "-8.159"]).unwrap();
    let b = Vector::parse(&["-2.155", "-9.353", "-9.473"]).unwrap();
    let orthogonal = v.component_orthogonal_to(&b).unwrap();
    assert!(orthogonal
        .is_orthogonal_to_within(&b, 1e-6)
        .unwrap());
}

#[test]
fn test_decomposition_recomposes() {
    let v = Vector::parse(&["3.009", "-6.172", "3.692", "-2.51"]).unwrap();
    let b = Vector::parse(&["6.404", "-9.144", "2.759", "8.718"]).unwrap();
    let parallel = v.component_parallel_to(&b).unwrap();
    let orthogonal = v.component_orthogonal_to(&b).unwrap();
    let recomposed = parallel.plus(&orthogonal).unwrap();
    for (c, e) in recomposed.coordinates().iter().zip(v.coordinates()) {
        let c = c.to_f64().unwrap();
        let e = e.to_f64().unwrap();
        assert!((c - e).abs() < EPS);
    }
}

#[test]
fn test_projection_onto_self_is_identity() {
    let v = Vector::parse(&["1.5", "-2.25", "3"]).unwrap();
    let parallel = v.component_parallel_to(&v).unwrap();
    assert_coords_close(&parallel, &[1.5, -2.25, 3.0], 1e-9);
    let orthogonal = v.component_orthogonal_to(&v).unwrap();
    assert!(orthogonal.magnitude() < EPS);
}

#[test]
fn test_zero_basis_has_no_unique_component() {
    let v = Vector::from_f64s(&[1.0, 2.0]).unwrap();
    let zero = Vector::zero(2).unwrap();
    assert_eq!(
        v.component_parallel_to(&zero),
        Err(VectorError::NoUniqueParallelComponent)
    );
    assert_eq!(
        v.component_orthogonal_to(&zero),
        Err(VectorError::NoUniqueParallelComponent)
    );
}

#[test]
fn test_projection_dimension_mismatch() {
    let v = Vector::from_f64s(&[1.0, 2.0]).unwrap();
    let b = Vector::from_f64s(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(
        v.component_parallel_to(&b),
        Err(VectorError::DimensionMismatch { left: 2, right: 3 })
    );
}
