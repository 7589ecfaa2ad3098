use approx::assert_relative_eq;
use quatrs::{
    EulerAngles, Quaternion,
    float_types::{EPSILON, FRAC_PI_2, PI, Real},
};

#[test]
fn zero_angles_give_the_identity() {
    assert_eq!(
        Quaternion::from_euler_angles(0.0, 0.0, 0.0),
        Quaternion::identity()
    );
}

#[test]
fn each_angle_maps_to_its_own_axis() {
    // roll → x, pitch → y, yaw → z, all through the half angle
    let half: Real = 0.4;

    let roll_only = Quaternion::from_euler_angles(0.0, 0.0, 0.8);
    assert_relative_eq!(
        roll_only,
        Quaternion::new(half.cos(), half.sin(), 0.0, 0.0),
        epsilon = EPSILON
    );

    let pitch_only = Quaternion::from_euler_angles(0.8, 0.0, 0.0);
    assert_relative_eq!(
        pitch_only,
        Quaternion::new(half.cos(), 0.0, half.sin(), 0.0),
        epsilon = EPSILON
    );

    let yaw_only = Quaternion::from_euler_angles(0.0, 0.8, 0.0);
    assert_relative_eq!(
        yaw_only,
        Quaternion::new(half.cos(), 0.0, 0.0, half.sin()),
        epsilon = EPSILON
    );
}

#[test]
fn construction_yields_a_unit_quaternion() {
    let q = Quaternion::from_euler_angles(1.9, -0.7, 2.4);
    assert_relative_eq!(q.norm(), 1.0, epsilon = EPSILON);
}

#[test]
fn round_trip_away_from_gimbal_lock() {
    let (pitch, yaw, roll) = (0.3, -0.6, 1.1);

    let angles = Quaternion::from_euler_angles(pitch, yaw, roll).to_euler_angles();

    assert_relative_eq!(angles.pitch, pitch, epsilon = EPSILON);
    assert_relative_eq!(angles.yaw, yaw, epsilon = EPSILON);
    assert_relative_eq!(angles.roll, roll, epsilon = EPSILON);
}

#[test]
fn round_trip_through_the_struct_form() {
    let angles = EulerAngles::new(-1.2, 0.25, 0.75);
    let rebuilt = Quaternion::from(angles).to_euler_angles();

    assert_relative_eq!(rebuilt.pitch, angles.pitch, epsilon = EPSILON);
    assert_relative_eq!(rebuilt.yaw, angles.yaw, epsilon = EPSILON);
    assert_relative_eq!(rebuilt.roll, angles.roll, epsilon = EPSILON);
}

#[test]
fn gimbal_lock_clamps_pitch_to_a_right_angle() {
    // sin(pitch) lands exactly on 1 here
    let locked = Quaternion::new(1.0, 0.0, 0.5, 0.0);
    assert_eq!(locked.to_euler_angles().pitch, FRAC_PI_2);

    // A non-unit operand pushes |sinp| past 1; still clamped, never NaN
    let overshooting = Quaternion::new(1.0, 0.0, 1.0, 0.0);
    assert_eq!(overshooting.to_euler_angles().pitch, FRAC_PI_2);

    let negative = Quaternion::new(1.0, 0.0, -1.0, 0.0);
    assert_eq!(negative.to_euler_angles().pitch, -FRAC_PI_2);
}

#[test]
fn decomposed_angles_stay_in_principal_ranges() {
    let angles = Quaternion::from_euler_angles(0.9, 2.8, -2.1).to_euler_angles();

    assert!(angles.pitch.abs() <= FRAC_PI_2);
    assert!(angles.yaw.abs() <= PI);
    assert!(angles.roll.abs() <= PI);
}
