//! Fixed adjacency tables over the three-joint topology.
//!
//! Pure functions, keyed by [`JointId`] / [`CurveId`]. Every joint has four
//! incident curves, one per [`LaneSlot`]:
//!
//! ```text
//!   joint   slot 0      slot 1      slot 2      slot 3
//!   A       AB large    AB small    AC small    AC large
//!   B       BC large    BC small    AB small    AB large
//!   C       AC large    AC small    BC small    BC large
//! ```

use super::ids::{CurveId, JointId, LaneSlot};

/// Lane slot of `curve` at `joint`, or `None` if the curve does not end there.
pub fn path_index(joint: JointId, curve: CurveId) -> Option<LaneSlot> {
    let [a, b] = curve.end_points();
    let other = if a == joint {
        b
    } else if b == joint {
        a
    } else {
        return None;
    };

    let slot = match (other == joint.next(), curve.is_large()) {
        (true, true) => 0,
        (true, false) => 1,
        (false, false) => 2,
        (false, true) => 3,
    };
    Some(LaneSlot::ALL[slot])
}

/// Inverse of [`path_index`]: the curve in `slot` at `joint`.
pub fn curve_at(joint: JointId, slot: LaneSlot) -> CurveId {
    incident_curves(joint)[slot.index()]
}

/// Rotation sign for travelling from `from` to `to` about the curve center.
///
/// `+1` if `to` is the previous joint, `-1` if it is the next joint, `0`
/// when both are the same joint.
#[inline]
pub fn sign_of_curve(from: JointId, to: JointId) -> i32 {
    if to == from.previous() {
        1
    } else if to == from.next() {
        -1
    } else {
        0
    }
}

/// The joint at the other end of `curve`, seen from `joint`.
///
/// `None` if the curve does not touch the joint.
pub fn corresponding_end_joint(joint: JointId, curve: CurveId) -> Option<JointId> {
    match curve.end_points() {
        [a, b] if a == joint => Some(b),
        [a, b] if b == joint => Some(a),
        _ => None,
    }
}

/// The four curves meeting at `joint`, in slot order.
pub fn incident_curves(joint: JointId) -> [CurveId; 4] {
    use CurveId::*;
    match joint {
        JointId::A => [AbLarge, AbSmall, AcSmall, AcLarge],
        JointId::B => [BcLarge, BcSmall, AbSmall, AbLarge],
        JointId::C => [AcLarge, AcSmall, BcSmall, BcLarge],
    }
}
