use glam::DVec3;

use crate::error::{StarplotError, StarplotResult};

/// Validates an axis maximum used as normalization cap.
pub fn validate_axis_max(index: usize, axis_max: f64) -> StarplotResult<f64> {
    if !axis_max.is_finite() || axis_max <= 0.0 {
        return Err(StarplotError::InvalidAxisMax {
            index,
            value: axis_max,
        });
    }
    Ok(axis_max)
}

/// Maps `value` onto the segment `origin..axis_endpoint`.
///
/// `axis_endpoint` is the axis direction already scaled by the chart radius, so
/// `value == axis_max` lands exactly on the endpoint.
pub fn map_to_point(value: f64, axis_endpoint: DVec3, axis_max: f64) -> StarplotResult<DVec3> {
    if !axis_max.is_finite() || axis_max <= 0.0 {
        return Err(StarplotError::InvalidData(format!(
            "axis max must be finite and > 0, got {axis_max}"
        )));
    }
    Ok(axis_endpoint * (value / axis_max))
}

#[cfg(test)]
mod tests {
    use super::map_to_point;
    use glam::DVec3;

    #[test]
    fn value_at_cap_reaches_endpoint() {
        let endpoint = DVec3::new(0.3, 0.0, -0.8);
        let point = map_to_point(250.0, endpoint, 250.0).expect("valid max");
        assert_eq!(point, endpoint);
    }

    #[test]
    fn zero_value_maps_to_origin() {
        let point = map_to_point(0.0, DVec3::new(1.0, 2.0, 3.0), 10.0).expect("valid max");
        assert_eq!(point, DVec3::ZERO);
    }

    #[test]
    fn zero_axis_max_is_a_domain_error() {
        let err = map_to_point(1.0, DVec3::X, 0.0).expect_err("zero max must fail");
        assert!(format!("{err}").contains("axis max"));
    }
}
