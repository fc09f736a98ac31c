//! # Sweep Integration Tests
//!
//! Tests for rotational_sweep and linear_sweep over the full seed set:
//! free edges, polylines, vertices, attributes, and capping.

use super::*;

use config::constants::EPSILON;
use glam::DVec3;

use crate::attributes::AttributeArray;
use crate::error::MeshError;
use crate::mesh::PolyMesh;

/// A lone triangle standing off the Z axis; all three edges are free.
fn triangle_profile() -> PolyMesh {
    let mut mesh = PolyMesh::new();
    mesh.add_point(DVec3::new(1.0, 0.0, 0.0));
    mesh.add_point(DVec3::new(2.0, 0.0, 0.0));
    mesh.add_point(DVec3::new(1.0, 0.0, 1.0));
    mesh.add_poly(&[0, 1, 2]);
    mesh
}

/// A single off-axis point carried by a vertex cell.
fn vertex_profile(position: DVec3) -> PolyMesh {
    let mut mesh = PolyMesh::new();
    mesh.add_point(position);
    mesh.add_vert(&[0]);
    mesh
}

#[test]
fn test_closed_sweep_reuses_start_ring() {
    let profile = triangle_profile();
    let params = RotationalSweepParams {
        resolution: 8,
        capping: true,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    // Full 360 sweep with no translation or radius change: the terminal
    // ring is ring 0, so exactly N rings of points exist and the requested
    // capping is suppressed.
    assert_eq!(mesh.point_count(), 3 * 8);
    assert_eq!(mesh.polys().len(), 3 * 8);
    assert_eq!(mesh.strips().len(), 0);
    assert!(mesh.validate());
}

#[test]
fn test_closed_sweep_applies_to_whole_turn_multiples() {
    let profile = triangle_profile();
    let params = RotationalSweepParams {
        resolution: 4,
        angle: 720.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    assert_eq!(mesh.point_count(), 3 * 4);
    assert_eq!(mesh.polys().len(), 3 * 4);
}

#[test]
fn test_open_sweep_keeps_distinct_terminal_ring() {
    let profile = triangle_profile();
    let params = RotationalSweepParams {
        resolution: 8,
        capping: false,
        angle: 180.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    assert_eq!(mesh.point_count(), 3 * 9);
    assert_eq!(mesh.polys().len(), 3 * 8);
}

#[test]
fn test_translation_breaks_the_closure() {
    let profile = triangle_profile();
    let params = RotationalSweepParams {
        resolution: 8,
        capping: false,
        translation: 2.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    // A corkscrew sweep ends away from its start even at 360 degrees.
    assert_eq!(mesh.point_count(), 3 * 9);
}

#[test]
fn test_open_sweep_start_ring_is_input_verbatim() {
    let profile = triangle_profile();
    let params = RotationalSweepParams {
        resolution: 4,
        angle: 90.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    for i in 0..profile.point_count() {
        assert_eq!(mesh.point(i as u32), profile.point(i as u32));
    }
}

#[test]
fn test_capped_sweep_emits_both_caps() {
    let profile = triangle_profile();
    let params = RotationalSweepParams {
        resolution: 4,
        capping: true,
        angle: 90.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    assert_eq!(mesh.point_count(), 3 * 5);
    // 3 free edges x 4 steps of skirt, then the two caps.
    assert_eq!(mesh.polys().len(), 3 * 4 + 2);

    // Start cap: the original triangle at ring 0, winding flipped.
    assert_eq!(mesh.polys().cell(12), &[2, 1, 0]);
    // End cap: the original triangle shifted to the terminal ring.
    assert_eq!(mesh.polys().cell(13), &[12, 13, 14]);
}

#[test]
fn test_strip_sweep_and_strip_caps() {
    let mut profile = PolyMesh::new();
    profile.add_point(DVec3::new(1.0, 0.0, 0.0));
    profile.add_point(DVec3::new(2.0, 0.0, 0.0));
    profile.add_point(DVec3::new(1.0, 0.0, 1.0));
    profile.add_point(DVec3::new(2.0, 0.0, 1.0));
    profile.add_strip(&[0, 1, 2, 3]);

    let params = RotationalSweepParams {
        resolution: 2,
        capping: true,
        angle: 90.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    // Four boundary edges of the two-triangle strip generate the skirt.
    assert_eq!(mesh.polys().len(), 4 * 2);
    assert_eq!(mesh.strips().len(), 2);
    // The start-cap strip flips its winding with a duplicated lead vertex.
    assert_eq!(mesh.strips().cell(0), &[0, 0, 1, 2, 3]);
    assert_eq!(mesh.strips().cell(1), &[8, 9, 10, 11]);
}

#[test]
fn test_polyline_generates_panels() {
    let mut profile = PolyMesh::new();
    profile.add_point(DVec3::new(1.0, 0.0, 0.0));
    profile.add_point(DVec3::new(2.0, 0.0, 0.0));
    profile.add_point(DVec3::new(3.0, 0.0, 0.0));
    profile.add_line(&[0, 1, 2]);

    let params = RotationalSweepParams {
        resolution: 3,
        capping: false,
        angle: 180.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    assert_eq!(mesh.point_count(), 3 * 4);
    assert_eq!(mesh.polys().len(), 2 * 3);
    // First panel joins segment (0,1) between rings 0 and 1.
    assert_eq!(mesh.polys().cell(0), &[0, 1, 4, 3]);
}

#[test]
fn test_vertex_sweeps_into_ring_lines() {
    let profile = vertex_profile(DVec3::new(1.0, 0.0, 0.0));
    let params = RotationalSweepParams {
        resolution: 5,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    // Closed sweep of one point: five ring points, five segments, the last
    // wrapping back to the start.
    assert_eq!(mesh.point_count(), 5);
    assert_eq!(mesh.lines().len(), 5);
    assert_eq!(mesh.lines().cell(0), &[0, 1]);
    assert_eq!(mesh.lines().cell(4), &[4, 0]);
}

#[test]
fn test_corkscrew_translation_is_linear_per_step() {
    let profile = vertex_profile(DVec3::new(1.0, 0.0, 0.0));
    let params = RotationalSweepParams {
        resolution: 4,
        capping: false,
        translation: 2.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    assert_eq!(mesh.point_count(), 5);
    for ring in 0..5 {
        assert!((mesh.point(ring).z - 0.5 * f64::from(ring)).abs() < EPSILON);
    }
    // A full revolution later the point is back over its start, two up.
    let terminal = mesh.point(4);
    assert!((terminal.x - 1.0).abs() < EPSILON);
    assert!(terminal.y.abs() < EPSILON);
}

#[test]
fn test_delta_radius_interpolates_linearly() {
    let profile = vertex_profile(DVec3::new(2.0, 0.0, 0.0));
    let params = RotationalSweepParams {
        resolution: 2,
        capping: false,
        angle: 180.0,
        delta_radius: 1.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    // Half way: 90 degrees at radius 2.5; full sweep: 180 degrees at 3.
    let mid = mesh.point(1);
    assert!(mid.x.abs() < EPSILON);
    assert!((mid.y - 2.5).abs() < EPSILON);

    let end = mesh.point(2);
    assert!((end.x - (-3.0)).abs() < EPSILON);
    assert!(end.y.abs() < EPSILON);
}

#[test]
fn test_on_axis_point_only_translates() {
    let profile = vertex_profile(DVec3::new(0.0, 0.0, 1.0));
    let params = RotationalSweepParams {
        resolution: 2,
        capping: false,
        angle: 90.0,
        translation: 1.0,
        delta_radius: 5.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    assert_eq!(mesh.point(0), DVec3::new(0.0, 0.0, 1.0));
    assert_eq!(mesh.point(1), DVec3::new(0.0, 0.0, 1.5));
    assert_eq!(mesh.point(2), DVec3::new(0.0, 0.0, 2.0));
}

#[test]
fn test_zero_cell_input_yields_empty_output() {
    let mut orphan_points = PolyMesh::new();
    orphan_points.add_point(DVec3::new(1.0, 0.0, 0.0));
    orphan_points.add_point(DVec3::new(2.0, 0.0, 0.0));

    for params in [
        RotationalSweepParams::default(),
        RotationalSweepParams {
            resolution: 32,
            capping: true,
            angle: 90.0,
            translation: 4.0,
            delta_radius: 2.0,
        },
    ] {
        let mesh = rotational_sweep(&orphan_points, &params).unwrap();
        assert_eq!(mesh.point_count(), 0);
        assert_eq!(mesh.cell_count(), 0);
    }

    let empty = PolyMesh::new();
    let mesh = rotational_sweep(&empty, &RotationalSweepParams::default()).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn test_resolution_clamps_to_minimum() {
    let profile = triangle_profile();
    let params = RotationalSweepParams {
        resolution: 0,
        capping: false,
        angle: 180.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    // Clamped up to one step: two rings, one panel per free edge.
    assert_eq!(mesh.point_count(), 3 * 2);
    assert_eq!(mesh.polys().len(), 3);
}

#[test]
fn test_point_scalars_ride_every_ring() {
    let mut profile = triangle_profile();
    profile.point_data_mut().add_array(AttributeArray::from_values(
        "temperature",
        1,
        vec![10.0, 20.0, 30.0],
    ));

    let params = RotationalSweepParams {
        resolution: 4,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    let array = mesh.point_data().array("temperature").unwrap();
    assert_eq!(array.len(), mesh.point_count());
    for ring in 0..4 {
        for (i, expected) in [10.0, 20.0, 30.0].iter().enumerate() {
            assert_eq!(array.tuple(ring * 3 + i), &[*expected]);
        }
    }
}

#[test]
fn test_cell_scalars_follow_generated_cells() {
    // One vertex, one polyline, one polygon, each tagged with its own id.
    let mut profile = PolyMesh::new();
    profile.add_point(DVec3::new(1.0, 0.0, 0.0));
    profile.add_point(DVec3::new(2.0, 0.0, 0.0));
    profile.add_point(DVec3::new(3.0, 0.0, 0.0));
    profile.add_point(DVec3::new(1.0, 0.0, 1.0));
    profile.add_point(DVec3::new(2.0, 0.0, 1.0));
    profile.add_point(DVec3::new(1.0, 0.0, 2.0));
    profile.add_vert(&[0]);
    profile.add_line(&[1, 2]);
    profile.add_poly(&[3, 4, 5]);
    profile.cell_data_mut().add_array(AttributeArray::from_values(
        "tag",
        1,
        vec![1.0, 2.0, 3.0],
    ));

    let params = RotationalSweepParams {
        resolution: 2,
        capping: false,
        angle: 90.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    // Output: 2 vertex lines, then 3 x 2 free-edge panels and 1 x 2
    // polyline panels; cell data is laid out lines first.
    assert_eq!(mesh.lines().len(), 2);
    assert_eq!(mesh.polys().len(), 8);

    let tags = mesh.cell_data().array("tag").unwrap();
    assert_eq!(tags.len(), mesh.cell_count());
    assert_eq!(tags.tuple(0), &[1.0]);
    assert_eq!(tags.tuple(1), &[1.0]);
    for panel in 2..8 {
        assert_eq!(tags.tuple(panel), &[3.0]);
    }
    assert_eq!(tags.tuple(8), &[2.0]);
    assert_eq!(tags.tuple(9), &[2.0]);
}

#[test]
fn test_cap_cells_inherit_owner_attributes() {
    let mut profile = triangle_profile();
    profile
        .cell_data_mut()
        .add_array(AttributeArray::from_values("tag", 1, vec![5.0]));

    let params = RotationalSweepParams {
        resolution: 2,
        capping: true,
        angle: 90.0,
        ..Default::default()
    };
    let mesh = rotational_sweep(&profile, &params).unwrap();

    let tags = mesh.cell_data().array("tag").unwrap();
    assert_eq!(tags.len(), mesh.cell_count());
    for i in 0..tags.len() {
        assert_eq!(tags.tuple(i), &[5.0]);
    }
}

#[test]
fn test_invalid_topology_is_rejected_whole() {
    let mut broken = PolyMesh::new();
    broken.add_point(DVec3::ZERO);
    broken.add_poly(&[0, 1, 2]);

    let result = rotational_sweep(&broken, &RotationalSweepParams::default());
    assert!(matches!(result, Err(MeshError::InvalidTopology { .. })));
}

#[test]
fn test_attribute_mismatch_is_rejected_whole() {
    let mut profile = triangle_profile();
    profile
        .point_data_mut()
        .add_array(AttributeArray::from_values("short", 1, vec![1.0]));

    let result = rotational_sweep(&profile, &RotationalSweepParams::default());
    assert!(matches!(result, Err(MeshError::AttributeMismatch { .. })));
}

#[test]
fn test_linear_sweep_caps_close_the_prism() {
    let mut profile = PolyMesh::new();
    profile.add_point(DVec3::new(0.0, 0.0, 0.0));
    profile.add_point(DVec3::new(1.0, 0.0, 0.0));
    profile.add_point(DVec3::new(0.0, 1.0, 0.0));
    profile.add_poly(&[0, 1, 2]);

    let mesh = linear_sweep(&profile, &LinearSweepParams::default()).unwrap();

    assert_eq!(mesh.point_count(), 6);
    assert_eq!(mesh.polys().len(), 3 + 2);
    assert_eq!(mesh.polys().cell(3), &[2, 1, 0]);
    assert_eq!(mesh.polys().cell(4), &[3, 4, 5]);
}

#[test]
fn test_linear_sweep_carries_attributes() {
    let mut profile = PolyMesh::new();
    profile.add_point(DVec3::new(0.0, 0.0, 0.0));
    profile.add_point(DVec3::new(1.0, 0.0, 0.0));
    profile.add_line(&[0, 1]);
    profile
        .point_data_mut()
        .add_array(AttributeArray::from_values("mass", 1, vec![4.0, 6.0]));

    let mesh = linear_sweep(&profile, &LinearSweepParams::default()).unwrap();

    let mass = mesh.point_data().array("mass").unwrap();
    assert_eq!(mass.len(), 4);
    assert_eq!(mass.tuple(0), &[4.0]);
    assert_eq!(mass.tuple(1), &[6.0]);
    assert_eq!(mass.tuple(2), &[4.0]);
    assert_eq!(mass.tuple(3), &[6.0]);
}

#[test]
fn test_linear_sweep_empty_input() {
    let empty = PolyMesh::new();
    let mesh = linear_sweep(&empty, &LinearSweepParams::default()).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.cell_count(), 0);
}
