use glam::{DVec2, DVec3};

use crate::core::{AxisLayout, map_to_point};
use crate::error::StarplotResult;
use crate::render::{Color, WedgeMesh};

use super::axis_line_builder::AXIS_LINE_LIFT;
use super::validation::validate_len;

/// How far wedges sit below the axis lines, so lines never z-fight the fill.
pub const WEDGE_DEPTH_OFFSET: f64 = 0.01;

/// Height of the wedge meshes above the chart plane.
pub const WEDGE_LIFT: f64 = AXIS_LINE_LIFT - WEDGE_DEPTH_OFFSET;

/// Triangle index order for `[point_i, origin, point_next]`.
pub const WEDGE_INDICES: [u32; 3] = [0, 2, 1];

const WEDGE_UV: DVec2 = DVec2::new(0.0, 1.0);

/// Builds the triangle fan: one wedge per axis, joining the point on axis `i`,
/// the origin, and the point on axis `(i + 1) % n`.
///
/// The origin vertex always takes `colors[0]`.
pub fn build_wedges(
    layout: &AxisLayout,
    data: &[f64],
    axis_max: &[f64],
    colors: &[Color],
) -> StarplotResult<Vec<WedgeMesh>> {
    let axis_count = layout.axis_count();
    validate_len("data", axis_count, data.len())?;
    validate_len("axis_max", axis_count, axis_max.len())?;
    validate_len("colors", axis_count, colors.len())?;

    let mut wedges = Vec::with_capacity(axis_count);
    for axis_index in 0..axis_count {
        let next_index = (axis_index + 1) % axis_count;
        let point_a = map_to_point(
            data[axis_index],
            layout.endpoint(axis_index),
            axis_max[axis_index],
        )?;
        let point_b = map_to_point(
            data[next_index],
            layout.endpoint(next_index),
            axis_max[next_index],
        )?;

        let vertices = [point_a, DVec3::ZERO, point_b];
        let normal = face_normal(vertices, WEDGE_INDICES);
        wedges.push(WedgeMesh {
            axis_index,
            next_index,
            vertices,
            normals: [normal; 3],
            uvs: [WEDGE_UV; 3],
            colors: [colors[axis_index], colors[0], colors[next_index]],
            indices: WEDGE_INDICES,
        });
    }
    Ok(wedges)
}

/// Unit normal of the wound triangle; zero for degenerate triangles.
#[must_use]
pub fn face_normal(vertices: [DVec3; 3], indices: [u32; 3]) -> DVec3 {
    let [a, b, c] = indices.map(|index| vertices[index as usize]);
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::{WEDGE_INDICES, build_wedges, face_normal};
    use crate::core::AxisLayout;
    use crate::error::StarplotError;
    use crate::render::Color;
    use glam::DVec3;

    fn palette() -> Vec<Color> {
        vec![
            Color::rgb(1.0, 0.0, 0.0),
            Color::rgb(0.0, 1.0, 0.0),
            Color::rgb(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn last_wedge_wraps_to_first_axis() {
        let layout = AxisLayout::circular(3, 1.0).expect("layout");
        let wedges =
            build_wedges(&layout, &[3.0, 2.0, 1.0], &[3.0; 3], &palette()).expect("wedges");

        assert_eq!(wedges.len(), 3);
        assert_eq!(wedges[2].axis_index, 2);
        assert_eq!(wedges[2].next_index, 0);
        assert_eq!(wedges[2].vertices[1], DVec3::ZERO);
        assert_eq!(wedges[2].vertices[2], layout.endpoint(0));
    }

    #[test]
    fn origin_vertex_uses_first_axis_color() {
        let layout = AxisLayout::circular(3, 1.0).expect("layout");
        let colors = palette();
        let wedges = build_wedges(&layout, &[1.0; 3], &[1.0; 3], &colors).expect("wedges");

        for wedge in &wedges {
            assert_eq!(wedge.colors[1], colors[0]);
        }
        assert_eq!(wedges[1].colors, [colors[1], colors[0], colors[2]]);
        assert!(wedges.iter().all(|wedge| wedge.indices == WEDGE_INDICES));
    }

    #[test]
    fn full_values_reach_axis_endpoints() {
        let layout = AxisLayout::circular(5, 1.5).expect("layout");
        let wedges = build_wedges(&layout, &[100.0; 5], &[100.0; 5], &[Color::CYAN; 5])
            .expect("wedges");
        for wedge in &wedges {
            assert_eq!(wedge.vertices[0], layout.endpoint(wedge.axis_index));
        }
    }

    #[test]
    fn flat_wedges_have_vertical_normals() {
        let normal = face_normal(
            [DVec3::new(0.0, 0.0, 1.0), DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0)],
            WEDGE_INDICES,
        );
        assert_eq!(normal.x, 0.0);
        assert_eq!(normal.z, 0.0);
        assert_eq!(normal.y.abs(), 1.0);
    }

    #[test]
    fn short_inputs_are_shape_mismatches() {
        let layout = AxisLayout::circular(3, 1.0).expect("layout");
        let err = build_wedges(&layout, &[1.0], &[1.0; 3], &palette()).expect_err("short data");
        assert!(matches!(
            err,
            StarplotError::ShapeMismatch { field: "data", expected: 3, actual: 1 }
        ));

        let err = build_wedges(&layout, &[1.0; 3], &[1.0; 2], &palette()).expect_err("short max");
        assert!(matches!(err, StarplotError::ShapeMismatch { field: "axis_max", .. }));

        let err = build_wedges(&layout, &[1.0; 3], &[1.0; 3], &[]).expect_err("no colors");
        assert!(matches!(err, StarplotError::ShapeMismatch { field: "colors", .. }));
    }

    #[test]
    fn collapsed_wedge_has_zero_normal() {
        let layout = AxisLayout::circular(3, 1.0).expect("layout");
        let wedges = build_wedges(&layout, &[0.0; 3], &[1.0; 3], &palette()).expect("wedges");
        assert!(wedges.iter().all(|wedge| wedge.normals[0] == DVec3::ZERO));
    }
}
