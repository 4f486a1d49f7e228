pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, PI / 2.0)]
    #[case(180.0, PI)]
    #[case(-45.0, -PI / 4.0)]
    #[case(720.0, 4.0 * PI)]
    fn test_deg_to_rad(#[case] deg: f64, #[case] rad: f64) {
        assert_abs_diff_eq!(deg_to_rad(deg), rad, epsilon = 1e-12);
        assert_abs_diff_eq!(rad_to_deg(rad), deg, epsilon = 1e-9);
    }
}
