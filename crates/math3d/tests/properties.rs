use approx::assert_relative_eq;
use math3d::algebra::{
    EulerConvention, EulerF64, EulerOrder, Matrix3, Matrix3F64, Matrix4, Matrix4F64, Pose3dF64,
    Quaternion, QuaternionF64, Scalar, Vector3, Vector3F64,
};
use math3d::geometry::{AabbF64, PlaneF64};
use rand::Rng;

const ORDERS: [EulerOrder; 6] = [
    EulerOrder::XYZ,
    EulerOrder::YZX,
    EulerOrder::ZXY,
    EulerOrder::XZY,
    EulerOrder::YXZ,
    EulerOrder::ZYX,
];

fn random_vector(rng: &mut impl Rng, range: f64) -> Vector3F64 {
    Vector3F64::new(
        rng.random_range(-range..range),
        rng.random_range(-range..range),
        rng.random_range(-range..range),
    )
}

fn random_pose(rng: &mut impl Rng) -> Pose3dF64 {
    Pose3dF64::new(random_vector(rng, 10.0), QuaternionF64::random())
}

#[test]
fn vector_add_sub_cancels() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let v = random_vector(&mut rng, 100.0);
        let w = random_vector(&mut rng, 100.0);
        assert_eq!((v + w) - w, v);
    }
}

#[test]
fn matrix_times_inverse_is_identity() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let mut cols = [0.0; 16];
        cols.iter_mut().for_each(|c| *c = rng.random_range(-1.0..1.0));
        // diagonal dominance keeps the sample well conditioned
        let m = Matrix4F64::from_cols_array(cols) + Matrix4F64::identity() * 5.0;
        assert_relative_eq!(m * m.inverse()?, Matrix4F64::identity(), epsilon = 1e-9);

        let m3 = Matrix3F64::from_transform(&m);
        assert_relative_eq!(m3.inverse()? * m3, Matrix3F64::identity(), epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn quaternion_times_conjugate_is_identity() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let q = QuaternionF64::new(
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
        )
        .normalize();
        assert_relative_eq!(q * q.conjugate(), QuaternionF64::identity(), epsilon = 1e-12);
    }
}

#[test]
fn rotation_matrix_and_quaternion_agree() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let q = QuaternionF64::random();
        let m = q.to_rotation_matrix();
        let p = random_vector(&mut rng, 5.0);
        assert_relative_eq!(m * p, q.rotate(p), epsilon = 1e-4);
        assert_relative_eq!(
            QuaternionF64::from_rotation_matrix(&m).rotate(p),
            q.rotate(p),
            epsilon = 1e-4
        );
    }
}

type AxisRotations<T> = (
    fn(T) -> Matrix3<T>,
    fn(T) -> Matrix4<T>,
    fn(T) -> Quaternion<T>,
);

fn check_axis_rotations_agree<T: Scalar>(tolerance: T) {
    let factories: [AxisRotations<T>; 3] = [
        (Matrix3::rotation_x, Matrix4::rotation_x, Quaternion::rotation_x),
        (Matrix3::rotation_y, Matrix4::rotation_y, Quaternion::rotation_y),
        (Matrix3::rotation_z, Matrix4::rotation_z, Quaternion::rotation_z),
    ];
    let point = Vector3::new(T::lit(0.3), T::lit(-1.2), T::lit(2.0));

    for (matrix3, matrix4, quaternion) in factories {
        for degrees in (-180..=180).step_by(15) {
            let angle = T::lit(degrees as f64).to_radians();
            let expected = quaternion(angle).rotate(point);
            assert_relative_eq!(matrix3(angle) * point, expected, epsilon = tolerance);
            assert_relative_eq!(
                matrix4(angle).transform_point(point),
                expected,
                epsilon = tolerance
            );
            assert_relative_eq!(
                quaternion(angle).to_rotation_matrix(),
                matrix3(angle),
                epsilon = tolerance
            );
        }
    }
}

#[test]
fn axis_rotation_factories_agree() {
    check_axis_rotations_agree::<f32>(1e-4);
    check_axis_rotations_agree::<f64>(1e-4);
}

#[test]
fn axis_rotation_quarter_turns() {
    let x = Vector3F64::unit_x();
    let quarter = std::f64::consts::FRAC_PI_2;
    assert_eq!(Matrix3F64::rotation_z(quarter) * x, Vector3F64::unit_y());
    assert_eq!(QuaternionF64::rotation_z(quarter).rotate(x), Vector3F64::unit_y());
    assert_eq!(Matrix4F64::rotation_y(quarter).transform_point(x), -Vector3F64::unit_z());
    assert_eq!(QuaternionF64::rotation_y(quarter).rotate(x), -Vector3F64::unit_z());
}

#[test]
fn euler_roundtrip_recovers_rotation() {
    let mut rng = rand::rng();
    for order in ORDERS {
        for convention in [EulerConvention::Intrinsic, EulerConvention::Extrinsic] {
            for _ in 0..10 {
                let m = QuaternionF64::random().to_rotation_matrix();
                let mut e = EulerF64::with_order(0.0, 0.0, 0.0, order, convention);
                e.set_from_rotation_matrix(&m);
                assert_relative_eq!(e.to_rotation_matrix(), m, epsilon = 1e-4);

                let p = random_vector(&mut rng, 1.0);
                assert_relative_eq!(e.to_quaternion().rotate(p), m * p, epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn pose_composition_matches_sequential_apply() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let a = random_pose(&mut rng);
        let b = random_pose(&mut rng);
        let p = random_vector(&mut rng, 3.0);
        assert_relative_eq!((a * b).apply(p), a.apply(b.apply(p)), epsilon = 1e-9);
        assert_relative_eq!(a.inverse().apply(a.apply(p)), p, epsilon = 1e-9);
        assert_relative_eq!(
            (a * b).to_matrix(),
            a.to_matrix() * b.to_matrix(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn matrix3_times_vector() {
    let m = Matrix3F64::new(1.0, -4.0, 1.0, -6.0, -7.0, 9.0, -4.0, 6.0, 0.0);
    let v = Vector3F64::new(2.0, 7.0, 6.0);
    assert_eq!(m * v, Vector3F64::new(-20.0, -7.0, 34.0));
}

#[test]
fn pose_rotates_then_translates() {
    let pose = Pose3dF64::new(
        Vector3F64::new(-3.0, 0.0, 0.0),
        QuaternionF64::rotation_z(std::f64::consts::FRAC_PI_2),
    );
    assert_eq!(
        pose.apply(Vector3F64::new(1.0, 1.0, 1.0)),
        Vector3F64::new(-4.0, 1.0, 1.0)
    );
}

#[test]
fn aabb_center_and_first_corner() {
    let aabb = AabbF64::new(Vector3F64::new(-1.0, 0.0, 2.0), Vector3F64::new(3.0, 4.0, 6.0));
    assert_eq!(aabb.compute_center(), Vector3F64::new(1.0, 2.0, 4.0));
    assert_eq!(aabb.compute_corners()[0], aabb.min);
    assert_eq!(aabb.compute_corners()[7], aabb.max);
}

#[test]
fn plane_signed_distance_sides() {
    let plane = PlaneF64::default();
    assert_relative_eq!(plane.signed_distance_to(Vector3F64::new(0.0, 0.0, 1.0)), 1.0);
    assert_relative_eq!(plane.signed_distance_to(Vector3F64::new(0.0, 0.0, -1.0)), -1.0);
}
