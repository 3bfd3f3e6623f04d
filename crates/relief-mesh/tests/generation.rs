//! End-to-end properties of generated terrain meshes.

use glam::Vec3;
use relief_mesh::{
    GridConfig, MeshError, NoiseKind, NoiseParams, OutputProfile, TerrainGenerator, TerrainMesh,
    generate,
};

fn heights(mesh: &TerrainMesh) -> Vec<f32> {
    (0..mesh.vertex_count())
        .map(|i| mesh.vertices.position(i).unwrap().y)
        .collect()
}

fn varied_params() -> Vec<NoiseParams> {
    vec![
        NoiseParams::default(),
        NoiseParams {
            amplitude: 100.0,
            frequency: 0.9,
            octaves: 8,
            offset: -512.25,
        },
        NoiseParams {
            amplitude: 3.0,
            frequency: 0.01,
            octaves: 1,
            offset: 42.5,
        },
    ]
}

#[test]
fn test_flat_two_by_two_grid() {
    let mesh = generate(2, 2.0, 0.0, 0.08, 4, 0.0).unwrap();

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices.len(), 6);
    assert_eq!(&mesh.indices[..], &[0, 1, 2, 1, 3, 2]);

    let corners = [
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(-1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];
    for (i, corner) in corners.iter().enumerate() {
        let p = mesh.vertices.position(i).unwrap();
        assert!((p - *corner).length() < 1e-6, "vertex {i}: {p}");
        let n = mesh.vertices.normal(i).unwrap();
        assert!((n - Vec3::Y).length() < 1e-6, "normal {i}: {n}");
    }
}

#[test]
fn test_small_grid_heights_are_deterministic_and_bounded() {
    let grid = GridConfig::new(4, 64.0).unwrap();
    let params = NoiseParams {
        amplitude: 10.0,
        frequency: 0.1,
        octaves: 1,
        offset: 0.0,
    };
    let generator = TerrainGenerator::default();
    let a = generator.generate(&grid, &params).unwrap();
    let b = generator.generate(&grid, &params).unwrap();

    assert_eq!(a.vertices.as_bytes(), b.vertices.as_bytes());
    assert_eq!(a.index_bytes(), b.index_bytes());

    for h in heights(&a) {
        assert!((0.0..=10.0).contains(&h), "height {h} outside [0, 10]");
    }
    assert!(a.stats.min_height >= 0.0 && a.stats.max_height <= 10.0);
}

#[test]
fn test_offset_shifts_the_field() {
    let grid = GridConfig::new(8, 64.0).unwrap();
    let generator = TerrainGenerator::default();
    let base = NoiseParams {
        offset: 0.0,
        ..Default::default()
    };
    let shifted = NoiseParams {
        offset: 17.3,
        ..Default::default()
    };

    let a = heights(&generator.generate(&grid, &base).unwrap());
    let b = heights(&generator.generate(&grid, &shifted).unwrap());
    assert!(
        a.iter().zip(&b).any(|(x, y)| (x - y).abs() > 1e-4),
        "changing the offset must change at least one height"
    );
}

#[test]
fn test_integer_offset_on_lattice_leaves_heights_unchanged() {
    // Positions ±1 at frequency 1 sample only lattice points, where gradient
    // noise is zero, so every height sits at the midpoint for any integer offset.
    for offset in [0.0, 1.0, -3.0] {
        let mesh = generate(2, 2.0, 10.0, 1.0, 1, offset).unwrap();
        for h in heights(&mesh) {
            assert!((h - 5.0).abs() < 1e-5, "offset {offset}: height {h}");
        }
    }

    let off_lattice = generate(2, 2.0, 10.0, 1.0, 1, 0.37).unwrap();
    assert!(
        heights(&off_lattice).iter().any(|&h| (h - 5.0).abs() > 1e-4),
        "a fractional offset must move off the lattice"
    );
}

#[test]
fn test_degenerate_grid_sizes_are_rejected() {
    for n in [0, 1] {
        assert_eq!(
            generate(n, 10.0, 5.0, 0.1, 2, 0.0).unwrap_err(),
            MeshError::GridTooSmall { grid_size: n }
        );
    }
}

#[test]
fn test_buffer_sizes_and_index_bounds() {
    for n in [2, 3, 10, 33] {
        let mesh = generate(n, 50.0, 12.0, 0.2, 3, 1.25).unwrap();
        let vertex_count = (n * n) as usize;
        let cells = (n - 1) as usize;
        assert_eq!(mesh.vertex_count(), vertex_count);
        assert_eq!(mesh.vertices.as_floats().len(), vertex_count * 14);
        assert_eq!(mesh.indices.len(), 6 * cells * cells);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < vertex_count));
    }
}

#[test]
fn test_tangent_space_is_orthonormal() {
    let grid = GridConfig::new(24, 64.0).unwrap();
    for kind in [NoiseKind::Perlin, NoiseKind::Simplex] {
        let generator = TerrainGenerator::new(kind.sampler(1));
        for params in varied_params() {
            let mesh = generator.generate(&grid, &params).unwrap();
            let records = mesh.vertices.tangent_space().unwrap();
            for (i, v) in records.iter().enumerate() {
                let n = Vec3::from_array(v.normal);
                let t = Vec3::from_array(v.tangent);
                let b = Vec3::from_array(v.bitangent);
                assert!((n.length() - 1.0).abs() < 1e-4, "{kind:?} vertex {i}: |n|={}", n.length());
                assert!((t.length() - 1.0).abs() < 1e-4, "{kind:?} vertex {i}: |t|={}", t.length());
                assert!((b.length() - 1.0).abs() < 1e-4, "{kind:?} vertex {i}: |b|={}", b.length());
                assert!(t.dot(n).abs() < 1e-3, "{kind:?} vertex {i}: t·n={}", t.dot(n));
            }
        }
    }
}

#[test]
fn test_heights_within_amplitude() {
    let grid = GridConfig::new(32, 128.0).unwrap();
    let generator = TerrainGenerator::default().with_profile(OutputProfile::Basic);
    for params in varied_params() {
        let mesh = generator.generate(&grid, &params).unwrap();
        let tolerance = params.amplitude * 1e-5;
        for h in heights(&mesh) {
            assert!(
                h >= -tolerance && h <= params.amplitude + tolerance,
                "height {h} outside [0, {}]",
                params.amplitude
            );
        }
    }
}

#[test]
fn test_normals_face_upward_on_heightfield() {
    let mesh = generate(16, 32.0, 6.0, 0.12, 4, 9.5).unwrap();
    for i in 0..mesh.vertex_count() {
        let n = mesh.vertices.normal(i).unwrap();
        assert!(n.y > 0.0, "vertex {i} normal {n} points downward");
    }
}
