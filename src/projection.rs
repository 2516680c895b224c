//! Equirectangular (plate carrée) projection shared by the renderer and the
//! pixel lookup, plus placement of coordinates on a sphere.

/// Map longitude/latitude in degrees to a pixel of a `width` x `height` image
/// covering the whole globe. Longitude -180 is the left edge, latitude 90 the top.
/// Results are not clamped; see [`coordinate_to_pixel`].
pub fn project(lon: f64, lat: f64, width: u32, height: u32) -> (i32, i32) {
    let (x, y) = project_f(lon, lat, width, height);
    (x.floor() as i32, y.floor() as i32)
}

/// Unrounded [`project`]: pixel `(x, y)` covers `[x, x + 1) x [y, y + 1)`.
pub fn project_f(lon: f64, lat: f64, width: u32, height: u32) -> (f64, f64) {
    (
        (lon + 180.0) * width as f64 / 360.0,
        (90.0 - lat) * height as f64 / 180.0,
    )
}

/// Like [`project`], but clamped into the image so lon=180 / lat=-90 stay readable.
pub fn coordinate_to_pixel(lon: f64, lat: f64, width: u32, height: u32) -> (u32, u32) {
    let (x, y) = project(lon, lat, width, height);
    let max_x = width.saturating_sub(1) as i32;
    let max_y = height.saturating_sub(1) as i32;
    (x.clamp(0, max_x) as u32, y.clamp(0, max_y) as u32)
}

/// Cartesian position of a coordinate on a sphere of `radius`, y axis through the poles.
pub fn to_sphere(lon: f64, lat: f64, radius: f64) -> [f64; 3] {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    [
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center() {
        assert_eq!(project(-180.0, 90.0, 360, 180), (0, 0));
        assert_eq!(project(0.0, 0.0, 360, 180), (180, 90));
        assert_eq!(project(180.0, -90.0, 360, 180), (360, 180));
        assert_eq!(coordinate_to_pixel(180.0, -90.0, 360, 180), (359, 179));
        assert_eq!(coordinate_to_pixel(-200.0, 95.0, 360, 180), (0, 0));
    }

    #[test]
    fn scales_with_image_size() {
        assert_eq!(project(-90.0, 45.0, 2000, 1000), (500, 250));
    }

    #[test]
    fn sphere_poles_and_equator() {
        let north = to_sphere(0.0, 90.0, 2.0);
        assert!(north[0].abs() < 1e-9 && (north[1] - 2.0).abs() < 1e-9 && north[2].abs() < 1e-9);

        // lon=-180 -> theta=0 -> negative x axis on the equator
        let p = to_sphere(-180.0, 0.0, 1.0);
        assert!((p[0] + 1.0).abs() < 1e-9 && p[1].abs() < 1e-9 && p[2].abs() < 1e-9);

        let r = to_sphere(37.0, -12.5, 3.0);
        let len = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
        assert!((len - 3.0).abs() < 1e-9);
    }
}
