//! Integration tests for the matriz crate.
//!
//! These tests verify end-to-end workflows combining the engine, the
//! codec, and the file-driven pipeline.

use matriz::prelude::*;

fn write_matrix_file(path: &std::path::Path, rows: usize, cols: usize, data: &[Scalar]) {
    matriz::codec::write_matrix(path, rows, cols, data).expect("temp file is writable");
}

#[test]
fn test_expression_workflow_in_memory() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid 2x2 data");
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).expect("valid 2x2 data");
    let c = Matrix::from_vec(2, 2, vec![0.5; 4]).expect("valid 2x2 data");
    let d = Matrix::from_vec(2, 2, vec![0.1; 4]).expect("valid 2x2 data");

    // Same sequencing the pipeline uses, with caller-allocated
    // destinations for each in-place step.
    let mut product = Matrix::zeros(2, 2).expect("positive dims");
    a.mul_into(&b, &mut product)
        .expect("2x2 * 2x2 is well-defined");

    let mut sum = Matrix::zeros(2, 2).expect("positive dims");
    product
        .add_into(&c, &mut sum)
        .expect("product and addend are both 2x2");

    let dt = d.transpose().expect("matrix is not empty");
    let mut result = Matrix::zeros(2, 2).expect("positive dims");
    sum.sub_into(&dt, &mut result)
        .expect("sum and transposed subtrahend are both 2x2");

    assert!((result.get(0, 0) - 19.4).abs() < 1e-3);
    assert!((result.get(0, 1) - 22.4).abs() < 1e-3);
    assert!((result.get(1, 0) - 43.4).abs() < 1e-3);
    assert!((result.get(1, 1) - 50.4).abs() < 1e-3);
}

#[test]
fn test_expression_workflow_through_files() {
    let dir = tempfile::tempdir().expect("temp dir is creatable");
    let config = PipelineConfig::new()
        .with_matrix_a(dir.path().join("matrix_a.txt"))
        .with_matrix_b(dir.path().join("matrix_b.txt"))
        .with_matrix_c(dir.path().join("matrix_c.txt"))
        .with_matrix_d(dir.path().join("matrix_d.txt"))
        .with_output(dir.path().join("result.txt"));

    write_matrix_file(&config.matrix_a, 2, 2, &[1.0, 2.0, 3.0, 4.0]);
    write_matrix_file(&config.matrix_b, 2, 2, &[5.0, 6.0, 7.0, 8.0]);
    write_matrix_file(&config.matrix_c, 2, 2, &[0.5, 0.5, 0.5, 0.5]);
    write_matrix_file(&config.matrix_d, 2, 2, &[0.1, 0.1, 0.1, 0.1]);

    let result = evaluate(&config).expect("all inputs exist with compatible shapes");
    assert!((result.get(0, 0) - 19.4).abs() < 1e-3);
    assert!((result.get(1, 1) - 50.4).abs() < 1e-3);

    // The persisted copy survives a reload within codec precision.
    let reloaded = Matrix::load(&config.output).expect("evaluate wrote the output file");
    assert_eq!(reloaded.shape(), result.shape());
    for i in 0..2 {
        for j in 0..2 {
            assert!((reloaded.get(i, j) - result.get(i, j)).abs() <= 0.005);
        }
    }
}

#[test]
fn test_codec_and_engine_agree_on_marshaling() {
    let dir = tempfile::tempdir().expect("temp dir is creatable");
    let path = dir.path().join("shared.txt");

    // Write through the flat codec boundary, read through the engine.
    matriz::codec::write_matrix(&path, 2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("temp file is writable");
    let m = Matrix::load(&path).expect("file was just written");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(1, 0) - 4.0).abs() < 1e-12);

    // And back: write through the engine, read through the codec.
    let out = dir.path().join("back.txt");
    m.save(&out).expect("temp file is writable");
    let (rows, cols, data) = matriz::codec::read_matrix(&out).expect("file was just written");
    assert_eq!((rows, cols), (2, 3));
    assert_eq!(data.len(), 6);
    assert!((data[5] - 6.0).abs() <= 0.005);
}

#[test]
fn test_lifecycle_create_release() {
    let mut m = Matrix::zeros(3, 3).expect("positive dims");
    assert!(!m.is_empty());
    m.set(2, 2, 9.0);
    assert!((m.get(2, 2) - 9.0).abs() < 1e-12);

    m.release();
    assert!(m.is_empty());
    assert_eq!(m, Matrix::empty());

    // Released values are rejected by every operation.
    let other = Matrix::zeros(3, 3).expect("positive dims");
    assert!(m.add(&other).is_err());
    assert!(m.transpose().is_err());
    assert!(m.determinant().is_err());
}

#[test]
fn test_bad_input_files_fail_loudly() {
    let dir = tempfile::tempdir().expect("temp dir is creatable");

    let bad_header = dir.path().join("bad_header.txt");
    std::fs::write(&bad_header, "2 a\n1 2\n3 4\n").expect("temp file is writable");
    assert!(matches!(
        Matrix::load(&bad_header),
        Err(MatrizError::InvalidHeader { .. })
    ));

    let short = dir.path().join("short.txt");
    std::fs::write(&short, "2 2\n1 2 3\n").expect("temp file is writable");
    assert!(matches!(
        Matrix::load(&short),
        Err(MatrizError::TruncatedData { .. })
    ));
}
