//! End-to-end regression tests for the alignment pipeline.
//!
//! Organized in tiers of increasing integration:
//!
//! - Tier 1: extraction and stitching on reference geometry
//! - Tier 2: contour-plane crossings
//! - Tier 3: rotation solve and the full pick-to-animation flow

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use scanalign::prelude::*;

fn surface(mesh: ScanMesh) -> ScanSurface {
    ScanSurface::new(mesh, RigidPose::identity())
}

// =============================================================================
// Tier 1: Extraction and stitching
// =============================================================================

mod tier1_extraction {
    use super::*;

    #[test]
    fn plane_beyond_bounds_extracts_nothing() {
        let cube_surface = surface(cube(2.0));
        let plane = Plane::new(Point3::new(0.0, 3.0, 0.0), Vector3::y()).unwrap();

        let segments = extract_section(&cube_surface, &plane, &SectionParams::default());
        assert!(segments.is_empty());

        let contour = extract_contour(&cube_surface, &plane, &SectionParams::default());
        assert!(contour.is_empty());
    }

    #[test]
    fn cube_center_cut_is_one_square_ring() {
        let edge = 3.0;
        let cube_surface = surface(cube(edge));
        let plane = Plane::new(Point3::origin(), Vector3::y()).unwrap();

        let contour = extract_contour(&cube_surface, &plane, &SectionParams::default());
        assert_eq!(contour.polyline_count(), 1);

        let ring = contour.primary().unwrap();
        assert!(ring.is_closed());
        assert!((ring.length() - 4.0 * edge).abs() < 1e-9);
    }

    #[test]
    fn cube_cut_is_independent_of_triangle_order() {
        let edge = 2.0;
        let reference = {
            let contour =
                extract_contour(&surface(cube(edge)), &plane_y0(), &SectionParams::default());
            contour.primary().unwrap().length()
        };

        // Rotate and reverse the face list; the stitched result must
        // not change
        let base = cube(edge);
        for ordering in 0..4 {
            let mut mesh = base.clone();
            match ordering {
                0 => mesh.faces.rotate_left(5),
                1 => mesh.faces.reverse(),
                2 => mesh.faces.swap(0, 11),
                _ => {
                    mesh.faces.rotate_left(7);
                    mesh.faces.reverse();
                }
            }

            let contour = extract_contour(&surface(mesh), &plane_y0(), &SectionParams::default());
            assert_eq!(contour.polyline_count(), 1);
            let ring = contour.primary().unwrap();
            assert!(ring.is_closed());
            assert!((ring.length() - reference).abs() < 1e-9);
        }
    }

    fn plane_y0() -> Plane {
        Plane::new(Point3::origin(), Vector3::y()).unwrap()
    }

    #[test]
    fn stitching_segments_is_permutation_invariant() {
        let cube_surface = surface(cube(2.0));
        let segments = extract_section(&cube_surface, &plane_y0(), &SectionParams::default());
        assert_eq!(segments.len(), 8);

        let baseline = stitch_segments(&segments, 1e-6);
        assert_eq!(baseline.len(), 1);
        let baseline_ring = &baseline[0];

        for offset in 0..segments.len() {
            let mut shuffled = segments.clone();
            shuffled.rotate_left(offset);
            if offset % 2 == 1 {
                shuffled.reverse();
            }

            let polylines = stitch_segments(&shuffled, 1e-6);
            assert_eq!(polylines.len(), 1);
            let ring = &polylines[0];
            assert!(ring.is_closed());
            assert_eq!(ring.len(), baseline_ring.len());
            assert!((ring.length() - baseline_ring.length()).abs() < 1e-9);
        }
    }

    #[test]
    fn icosahedron_center_cut_vertex_count_matches_crossed_triangles() {
        let ico_surface = surface(icosahedron(2.0));
        // Tilted so no icosahedron vertex or edge lies in the plane
        let plane = Plane::new(Point3::origin(), Vector3::new(0.3, 1.0, -0.2)).unwrap();

        let segments = extract_section(&ico_surface, &plane, &SectionParams::default());
        let contour = extract_contour(&ico_surface, &plane, &SectionParams::default());

        assert_eq!(contour.polyline_count(), 1);
        let ring = contour.primary().unwrap();
        assert!(ring.is_closed());

        // One segment per crossed triangle, one ring vertex per segment
        assert_eq!(ring.len(), segments.len());

        // Cross-check against a brute-force straddle test
        let crossed = ico_surface
            .mesh()
            .triangles()
            .filter(|tri| {
                let d0 = plane.signed_distance(&tri.v0);
                let d1 = plane.signed_distance(&tri.v1);
                let d2 = plane.signed_distance(&tri.v2);
                d0.min(d1).min(d2) < 0.0 && d0.max(d1).max(d2) > 0.0
            })
            .count();
        assert_eq!(segments.len(), crossed);
    }
}

// =============================================================================
// Tier 2: Contour-plane crossings
// =============================================================================

mod tier2_crossings {
    use super::*;

    fn center_ring(edge: f64) -> Polyline {
        let contour = extract_contour(
            &surface(cube(edge)),
            &Plane::new(Point3::origin(), Vector3::y()).unwrap(),
            &SectionParams::default(),
        );
        contour.primary().unwrap().clone()
    }

    #[test]
    fn bisecting_plane_yields_exactly_two_crossings() {
        let ring = center_ring(2.0);
        // Bisects two opposite sides of the square ring, away from
        // any ring vertex
        let plane = Plane::new(Point3::new(0.5, 0.0, 0.0), Vector3::x()).unwrap();

        let crossings = plane_crossings(&ring, &plane);
        assert_eq!(crossings.len(), 2);
        for p in &crossings {
            assert!((p.x - 0.5).abs() < 1e-9);
        }
        assert!((crossings[0].z - crossings[1].z).abs() > 1.9);
    }

    #[test]
    fn plane_outside_contour_extent_yields_no_crossings() {
        let ring = center_ring(2.0);
        let plane = Plane::new(Point3::new(5.0, 0.0, 0.0), Vector3::x()).unwrap();
        assert!(plane_crossings(&ring, &plane).is_empty());
    }
}

// =============================================================================
// Tier 3: Rotation solve and full flow
// =============================================================================

mod tier3_solve {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn first_phase_angle_reference_value() {
        // Axes: x=lateral, y=height, z=depth
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(0.0, 1.0, 1.0);

        let angle = first_phase_angle(&p1, &p2);
        assert_relative_eq!(angle, 1.0_f64.atan2(-1.0), epsilon = 1e-15);
        assert_relative_eq!(angle, 2.356_194_490_192_345, epsilon = 1e-12);
    }

    #[test]
    fn second_phase_angle_uses_original_coordinates() {
        let p1 = Point3::new(0.3, 2.0, -1.0);
        let p2 = Point3::new(-0.7, 1.0, 1.5);

        let plan = AlignmentPlan::new(p1, p2);
        assert!((plan.second_angle() - (p1.x - p2.x).atan2(p1.y - p2.y)).abs() < 1e-15);
    }

    #[test]
    fn pick_to_animation_flow() {
        let a = surface(cube(2.0));
        let b = ScanSurface::new(
            cube(2.0),
            RigidPose::from_translation(Vector3::new(0.5, 0.0, 0.0)),
        );

        let pick_a = FacePick::new(6, Point3::new(0.2, 1.0, -0.3), Vector3::y());
        let pick_b = FacePick::new(10, Point3::new(1.0, 0.3, 0.2), Vector3::x());

        let mut solution =
            solve_alignment(&a, &pick_a, &b, &pick_b, &SolveParams::default()).unwrap();

        // First rotation
        let first = solution.plan.begin().unwrap();
        assert_eq!(first.axis, RotationAxis::Lateral);
        assert_eq!(solution.plan.phase(), AlignmentPhase::RotatingFirst);

        let first_done = Rc::new(Cell::new(false));
        let flag = Rc::clone(&first_done);
        let mut animation =
            RotationAnimation::new(first.axis, 0.0, first.angle, &AnimationParams::default())
                .on_complete(move || flag.set(true));

        // Drive the animation like a render loop at ~60 fps
        let mut frames = 0;
        while !animation.is_finished() {
            animation.advance(1.0 / 60.0);
            frames += 1;
            assert!(frames < 100, "animation must finish within the duration");
        }
        assert!(first_done.get());

        // Completion gates the second phase
        assert_eq!(
            solution.plan.rotation_finished(),
            AlignmentPhase::AwaitingSecond
        );
        let second = solution.plan.begin_second().unwrap();
        assert_eq!(second.axis, RotationAxis::Depth);

        let mut animation =
            RotationAnimation::new(second.axis, 0.0, second.angle, &AnimationParams::default());
        let mut angle = 0.0;
        for _ in 0..70 {
            angle = animation.advance(1.0 / 60.0);
        }
        assert!((angle - second.angle).abs() < 1e-12);

        assert_eq!(solution.plan.rotation_finished(), AlignmentPhase::Done);
        assert!(solution.plan.is_done());
    }

    #[test]
    fn landmark_fallback_and_failure_paths() {
        let a = surface(cube(2.0));
        let b = surface(cube(2.0));

        // Parallel selection planes: no intersection line
        let plane_a = Plane::new(Point3::origin(), Vector3::y()).unwrap();
        let plane_b = Plane::new(Point3::new(0.0, 0.5, 0.0), Vector3::y()).unwrap();
        assert!(matches!(
            derive_landmarks(&a, &plane_a, &b, &plane_b, &SectionParams::default()),
            Err(AlignError::ParallelPlanes)
        ));

        // Planes whose intersection misses both surfaces: reported,
        // not fatal
        let far_a = Plane::new(Point3::new(0.0, 40.0, 0.0), Vector3::y()).unwrap();
        let far_b = Plane::new(Point3::new(40.0, 0.0, 0.0), Vector3::x()).unwrap();
        assert!(matches!(
            derive_landmarks(&a, &far_a, &b, &far_b, &SectionParams::default()),
            Err(AlignError::NoLandmarks)
        ));
    }

    #[test]
    fn landmarks_line_up_with_selection_planes() {
        let a = surface(cube(2.0));
        let b = ScanSurface::new(
            cube(2.0),
            RigidPose::from_translation(Vector3::new(0.5, 0.0, 0.0)),
        );

        let pick_a = FacePick::new(6, Point3::new(0.2, 1.0, -0.3), Vector3::y());
        let pick_b = FacePick::new(10, Point3::new(1.0, 0.3, 0.2), Vector3::x());

        let solution =
            solve_alignment(&a, &pick_a, &b, &pick_b, &SolveParams::default()).unwrap();
        let (p1, p2) = solution.landmarks;

        // Landmarks lie on both selection planes
        for p in [p1, p2] {
            assert!(solution.plane_a.distance(&p) < 1e-9);
            assert!(solution.plane_b.distance(&p) < 1e-9);
        }
    }
}
