use nalgebra::{Matrix3, Point3, Vector3};

// Cross products with a smaller norm than this are treated as degenerate:
// the three reference atoms are (near-)collinear and span no plane.
const MIN_NORMAL_NORM: f64 = 1e-9;

/// Placement parameters for extending a chain by one atom.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionParams {
    /// Length of the B–C bond, used to normalize the local frame.
    pub frame_bond: f64,
    /// Length of the new C–D bond.
    pub bond: f64,
    /// Polar placement angle: the supplement of the bond angle at C.
    pub theta: f64,
    /// Torsion angle around the B–C axis.
    pub phi: f64,
}

/// Places the next chain atom D from its three predecessors A, B, C using the
/// natural extension reference frame. Returns `None` if A, B, C are
/// (near-)collinear and span no reference plane.
pub fn extend_chain(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    params: &ExtensionParams,
) -> Option<Point3<f64>> {
    let ab = b - a;
    let bc = c - b;

    let normal = ab.cross(&bc);
    if normal.norm() < MIN_NORMAL_NORM {
        return None;
    }
    let normal = normal.normalize();

    let d_local = Vector3::new(
        params.bond * params.theta.cos(),
        params.bond * params.theta.sin() * params.phi.cos(),
        params.bond * params.theta.sin() * params.phi.sin(),
    );

    let frame = Matrix3::from_columns(&[
        bc / params.frame_bond,
        normal.cross(&bc) / params.frame_bond,
        normal,
    ]);

    Some(c + frame * d_local)
}

/// Measures the bond angle at B formed by A–B–C, or `None` if either bond
/// vector has (near-)zero length.
pub fn bond_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Option<f64> {
    let ba = a - b;
    let bc = c - b;
    if ba.norm() < MIN_NORMAL_NORM || bc.norm() < MIN_NORMAL_NORM {
        return None;
    }
    let cosine = (ba.dot(&bc) / (ba.norm() * bc.norm())).clamp(-1.0, 1.0);
    Some(cosine.acos())
}

/// Measures the dihedral angle around the B–C axis between the A–B–C and
/// B–C–D planes, in `(-π, π]`. Returns `None` if either plane is degenerate.
pub fn dihedral_angle(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> Option<f64> {
    let b1 = b - a;
    let b2 = c - b;
    let b3 = d - c;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);
    if n1.norm() < MIN_NORMAL_NORM || n2.norm() < MIN_NORMAL_NORM {
        return None;
    }

    let axis = b2.normalize();
    Some(n1.cross(&n2).dot(&axis).atan2(n1.dot(&n2)))
}

/// Mean per-atom Euclidean distance between two equally long position
/// sequences, or `None` if the lengths differ or the sequences are empty.
pub fn mean_deviation(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm())
        .sum();
    Some(dist_sum / n)
}
