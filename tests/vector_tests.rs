#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use predprey::simulation::error::SimulationError;
use predprey::simulation::vector::Vector2D;

#[test]
fn test_arithmetic_returns_new_vectors() {
    let a = Vector2D::new(1.0, 2.0);
    let b = Vector2D::new(3.0, -4.0);

    assert_eq!(a.add(b), Vector2D::new(4.0, -2.0));
    assert_eq!(a.subtract(b), Vector2D::new(-2.0, 6.0));
    assert_eq!(a.multiply(2.5), Vector2D::new(2.5, 5.0));
    assert_eq!(a.dot(b), -5.0);

    // receivers are untouched
    assert_eq!(a, Vector2D::new(1.0, 2.0));
    assert_eq!(b, Vector2D::new(3.0, -4.0));

    // operator forms agree with the named methods
    assert_eq!(a + b, a.add(b));
    assert_eq!(a - b, a.subtract(b));
    assert_eq!(a * 3.0, a.multiply(3.0));
    assert_eq!(-a, Vector2D::new(-1.0, -2.0));
}

#[test]
fn test_divide() {
    let v = Vector2D::new(6.0, -3.0);
    assert_eq!(v.divide(3.0).unwrap(), Vector2D::new(2.0, -1.0));
    assert!(matches!(v.divide(0.0), Err(SimulationError::DivisionByZero)));
}

#[test]
fn test_magnitude_and_distance() {
    let a = Vector2D::new(3.0, 4.0);
    assert_eq!(a.magnitude(), 5.0);

    let b = Vector2D::new(-1.0, 1.0);
    assert_eq!(a.distance(b), b.distance(a));
    assert_eq!(a.distance(a), 0.0);
}

#[test]
fn test_normalize_gives_unit_length() {
    let samples = [
        Vector2D::new(3.0, 4.0),
        Vector2D::new(-0.001, 0.0),
        Vector2D::new(1e4, -2e4),
        Vector2D::new(0.3, 0.3),
    ];
    for v in samples {
        let unit = v.normalize().unwrap();
        assert!((unit.magnitude() - 1.0).abs() < 1e-5, "{v:?} -> {unit:?}");
        // direction preserved
        assert!(unit.dot(v) > 0.0);
    }
}

#[test]
fn test_normalize_zero_vector_fails() {
    assert!(matches!(
        Vector2D::ZERO.normalize(),
        Err(SimulationError::ZeroVector)
    ));
}

#[test]
fn test_from_angle() {
    let right = Vector2D::from_angle(0.0);
    assert!((right.x - 1.0).abs() < 1e-6 && right.y.abs() < 1e-6);

    let down = Vector2D::from_angle(std::f32::consts::FRAC_PI_2);
    assert!(down.x.abs() < 1e-6 && (down.y - 1.0).abs() < 1e-6);

    for i in 0..16 {
        let v = Vector2D::from_angle(i as f32 * 0.4);
        assert!((v.magnitude() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_equals_and_copy() {
    let a = Vector2D::new(1.5, -2.5);
    let copy = a;
    #[allow(clippy::clone_on_copy)]
    let cloned = a.clone();

    assert!(a.equals(copy));
    assert!(a.equals(cloned));
    assert!(!a.equals(Vector2D::new(1.5, 2.5)));
}
