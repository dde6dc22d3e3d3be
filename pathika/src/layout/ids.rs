//! Identifiers for joints, curves, intersections, paths and lane slots.

use serde::{Deserialize, Serialize};

/// One of the three fixed joint points of the tracking space.
///
/// The clockwise ordering is A → B → C → A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JointId {
    /// Joint A
    A,
    /// Joint B
    B,
    /// Joint C
    C,
}

impl JointId {
    /// All joints in clockwise order.
    pub const ALL: [JointId; 3] = [JointId::A, JointId::B, JointId::C];

    /// Index into per-joint arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            JointId::A => 0,
            JointId::B => 1,
            JointId::C => 2,
        }
    }

    /// Next joint clockwise.
    #[inline]
    pub fn next(self) -> JointId {
        match self {
            JointId::A => JointId::B,
            JointId::B => JointId::C,
            JointId::C => JointId::A,
        }
    }

    /// Previous joint clockwise.
    #[inline]
    pub fn previous(self) -> JointId {
        match self {
            JointId::A => JointId::C,
            JointId::B => JointId::A,
            JointId::C => JointId::B,
        }
    }

    /// The joint that is neither `self` nor `other`.
    ///
    /// Returns `self.next()` when both are the same joint.
    pub fn third(self, other: JointId) -> JointId {
        if other == self.next() {
            self.previous()
        } else {
            self.next()
        }
    }

    /// Display label ("A", "B", "C").
    pub fn label(self) -> &'static str {
        match self {
            JointId::A => "A",
            JointId::B => "B",
            JointId::C => "C",
        }
    }
}

impl std::fmt::Display for JointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the six real-world arcs.
///
/// A small curve is centered on the midpoint of its two joints; a large
/// curve is centered on the third joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    /// A–B, small radius
    AbSmall,
    /// A–C, small radius
    AcSmall,
    /// B–C, small radius
    BcSmall,
    /// A–B, large radius
    AbLarge,
    /// A–C, large radius
    AcLarge,
    /// B–C, large radius
    BcLarge,
}

impl CurveId {
    /// All curves in construction order.
    pub const ALL: [CurveId; 6] = [
        CurveId::AbSmall,
        CurveId::AcSmall,
        CurveId::BcSmall,
        CurveId::AbLarge,
        CurveId::AcLarge,
        CurveId::BcLarge,
    ];

    /// Index into per-curve arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            CurveId::AbSmall => 0,
            CurveId::AcSmall => 1,
            CurveId::BcSmall => 2,
            CurveId::AbLarge => 3,
            CurveId::AcLarge => 4,
            CurveId::BcLarge => 5,
        }
    }

    /// Is this a large-radius curve?
    #[inline]
    pub fn is_large(self) -> bool {
        matches!(self, CurveId::AbLarge | CurveId::AcLarge | CurveId::BcLarge)
    }

    /// The two joints connected by this curve.
    pub fn end_points(self) -> [JointId; 2] {
        match self {
            CurveId::AbSmall | CurveId::AbLarge => [JointId::A, JointId::B],
            CurveId::AcSmall | CurveId::AcLarge => [JointId::C, JointId::A],
            CurveId::BcSmall | CurveId::BcLarge => [JointId::B, JointId::C],
        }
    }

    /// The joint not touched by this curve (center of the large variant).
    pub fn opposite_joint(self) -> JointId {
        let [a, b] = self.end_points();
        a.third(b)
    }

    /// Does this curve end at `joint`?
    #[inline]
    pub fn touches(self, joint: JointId) -> bool {
        self.end_points().contains(&joint)
    }

    /// The curve of the given size connecting two distinct joints.
    pub fn between(a: JointId, b: JointId, large: bool) -> Option<CurveId> {
        use JointId::*;
        let curve = match (a, b) {
            (A, B) | (B, A) => {
                if large {
                    CurveId::AbLarge
                } else {
                    CurveId::AbSmall
                }
            }
            (A, C) | (C, A) => {
                if large {
                    CurveId::AcLarge
                } else {
                    CurveId::AcSmall
                }
            }
            (B, C) | (C, B) => {
                if large {
                    CurveId::BcLarge
                } else {
                    CurveId::BcSmall
                }
            }
            _ => return None,
        };
        Some(curve)
    }

    /// Human-readable label, e.g. "Curve AB small radius".
    pub fn label(self) -> &'static str {
        match self {
            CurveId::AbSmall => "Curve AB small radius",
            CurveId::AcSmall => "Curve AC small radius",
            CurveId::BcSmall => "Curve BC small radius",
            CurveId::AbLarge => "Curve AB large radius",
            CurveId::AcLarge => "Curve AC large radius",
            CurveId::BcLarge => "Curve BC large radius",
        }
    }
}

impl std::fmt::Display for CurveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unique identifier for a virtual intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntersectionId(pub u32);

impl IntersectionId {
    /// Create a new intersection ID.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for IntersectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Intersection({})", self.0)
    }
}

/// Unique identifier for a virtual path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(pub u32);

impl PathId {
    /// Create a new path ID.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PathId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Path({})", self.0)
    }
}

/// One of the four lanes meeting at a joint or intersection.
///
/// | Slot | Lane |
/// |------|------|
/// | 0 | large radius to the next joint |
/// | 1 | small radius to the next joint |
/// | 2 | small radius to the previous joint |
/// | 3 | large radius to the previous joint |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneSlot(u8);

impl LaneSlot {
    /// All four slots in order.
    pub const ALL: [LaneSlot; 4] = [LaneSlot(0), LaneSlot(1), LaneSlot(2), LaneSlot(3)];

    /// Create a slot; `None` outside `0..=3`.
    #[inline]
    pub fn new(index: u8) -> Option<Self> {
        (index < 4).then_some(Self(index))
    }

    /// Index into per-slot arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The slot the same curve occupies at its other end (0↔3, 1↔2).
    #[inline]
    pub fn complement(self) -> LaneSlot {
        LaneSlot(3 - self.0)
    }
}

impl std::fmt::Display for LaneSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
