//! Redirection engine implementation.

use log::{debug, info, trace, warn};

use crate::core::{HeadPose, RigOffset};
use crate::layout::{
    CurveId, IntersectionId, JointId, LaneSlot, LayoutError, PathId, RedirectionLayout,
    path_index, sign_of_curve,
};

use super::boundary::LaneBoundaries;
use super::config::EngineConfig;
use super::error::{EngineError, Result};
use super::progress::ArcProgress;
use super::state::{EngineEvent, FrameOutput, RedirectionState, Transition};

/// The lane being walked, resolved once when it is chosen.
#[derive(Clone, Copy, Debug)]
struct Segment {
    path: PathId,
    curve: CurveId,
    near_slot: LaneSlot,
    far_intersection: IntersectionId,
    far_joint: JointId,
    direction: i32,
    boundaries: LaneBoundaries,
}

/// Redirection engine
///
/// Consumes one head pose per frame and produces the rig offset that maps
/// the real walk onto the virtual path graph of a [`RedirectionLayout`].
/// Work per frame touches only the current intersection and path.
pub struct RedirectionEngine {
    /// Configuration
    config: EngineConfig,
    /// Loaded layout
    layout: Option<RedirectionLayout>,
    /// Current state
    state: RedirectionState,
    /// Intersection the user is at (or walking away from)
    current_intersection: IntersectionId,
    /// Joint bound to the current intersection
    current_joint: JointId,
    /// Lane being walked while redirecting
    segment: Option<Segment>,
    /// Yaw carried over from completed paths (degrees)
    accumulated_rotation: f32,
    /// Offset of the last frame, held while not redirecting
    offset: RigOffset,
    /// Progress of the last redirected frame
    last_progress: Option<ArcProgress>,
}

impl RedirectionEngine {
    /// Create an engine with no layout.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            layout: None,
            state: RedirectionState::Idle,
            current_intersection: IntersectionId::new(0),
            current_joint: JointId::A,
            segment: None,
            accumulated_rotation: 0.0,
            offset: RigOffset::identity(),
            last_progress: None,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Take ownership of a layout and start from its root intersection.
    ///
    /// Replaces any previously loaded layout.
    pub fn load_layout(&mut self, layout: RedirectionLayout) -> Result<()> {
        layout.validate()?;
        let root = layout
            .root_intersection()
            .ok_or(EngineError::NoStartIntersection)?;
        let joint = layout.require_intersection(root)?.joint;

        info!(
            "[Redirect] Loaded layout: {} intersections, {} paths, start joint {}",
            layout.intersections().len(),
            layout.paths().len(),
            joint
        );

        self.layout = Some(layout);
        self.restart(root, joint);
        if self.config.arm_on_load {
            self.arm();
        }
        Ok(())
    }

    /// Loaded layout, if any.
    pub fn layout(&self) -> Option<&RedirectionLayout> {
        self.layout.as_ref()
    }

    /// Unload the layout, returning it. The engine stops accepting frames.
    pub fn take_layout(&mut self) -> Option<RedirectionLayout> {
        self.state = RedirectionState::Idle;
        self.segment = None;
        self.layout.take()
    }

    /// Get configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get current state
    pub fn state(&self) -> RedirectionState {
        self.state
    }

    /// Intersection the user is at, or walking away from.
    pub fn current_intersection(&self) -> IntersectionId {
        self.current_intersection
    }

    /// Joint bound to the current intersection.
    pub fn current_joint(&self) -> JointId {
        self.current_joint
    }

    /// Curve being walked.
    pub fn current_curve(&self) -> Option<CurveId> {
        self.segment.map(|s| s.curve)
    }

    /// Path being walked.
    pub fn current_path(&self) -> Option<PathId> {
        self.segment.map(|s| s.path)
    }

    /// Rotation sign of the current walk, 0 when not redirecting.
    pub fn redirection_direction(&self) -> i32 {
        self.segment.map_or(0, |s| s.direction)
    }

    /// Yaw carried over from completed paths, in degrees.
    pub fn accumulated_rotation(&self) -> f32 {
        self.accumulated_rotation
    }

    /// Current rig offset.
    pub fn offset(&self) -> RigOffset {
        self.offset
    }

    /// Progress of the most recent redirected frame.
    pub fn last_progress(&self) -> Option<ArcProgress> {
        self.last_progress
    }

    /// Start watching for lane crossings (Idle → Armed).
    pub fn arm(&mut self) {
        if self.layout.is_none() {
            warn!("[Redirect] Cannot arm without a layout");
            return;
        }
        if matches!(self.state, RedirectionState::Idle) {
            info!("[Redirect] Armed at {}", self.current_intersection);
            self.state = RedirectionState::Armed;
        }
    }

    /// Stop redirecting (→ Idle). The current offset is kept.
    pub fn disarm(&mut self) {
        if self.state.is_active() {
            info!("[Redirect] {} -> Idle", self.state.name());
        }
        self.state = RedirectionState::Idle;
        self.segment = None;
    }

    /// Go back to the root intersection with an identity offset (→ Idle).
    pub fn reset(&mut self) {
        let root = self.layout.as_ref().and_then(|layout| {
            let id = layout.root_intersection()?;
            Some((id, layout.intersection(id)?.joint))
        });
        match root {
            Some((id, joint)) => self.restart(id, joint),
            None => {
                self.state = RedirectionState::Idle;
                self.segment = None;
                self.accumulated_rotation = 0.0;
                self.offset = RigOffset::identity();
                self.last_progress = None;
            }
        }
        info!("[Redirect] Reset");
    }

    /// Handle an external event.
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Ready => self.arm(),
            EngineEvent::Stop => self.disarm(),
            EngineEvent::Reset => self.reset(),
        }
    }

    /// Process one frame.
    ///
    /// Returns the offset to apply to the camera rig and the resulting
    /// virtual pose. Fails with [`EngineError::NoLayout`] until a layout is
    /// loaded.
    pub fn update(&mut self, head: &HeadPose) -> Result<FrameOutput> {
        let layout = self.layout.as_ref().ok_or(EngineError::NoLayout)?;
        if !head.is_finite() {
            return Err(EngineError::NonFinitePose);
        }

        let mut transition = None;

        if matches!(self.state, RedirectionState::Armed) {
            if let Some(segment) = self.choose_lane(layout, head)? {
                info!(
                    "[Redirect] Armed -> Redirecting: {} ({}) from {} towards {}",
                    segment.path, segment.curve, self.current_intersection, segment.far_intersection
                );
                self.state = RedirectionState::Redirecting {
                    path: segment.path,
                    direction: segment.direction,
                };
                self.segment = Some(segment);
                transition = Some(Transition::PathChosen(segment.path));
            }
        }

        let mut progress = None;

        if let (RedirectionState::Redirecting { .. }, Some(segment)) = (self.state, self.segment) {
            let path = layout.require_path(segment.path)?;
            let curve = layout.curve(segment.curve);
            let near = layout.require_intersection(self.current_intersection)?;
            let lane_start = layout.joint(self.current_joint).walking_start(segment.near_slot);

            let measured = ArcProgress::measure(
                curve,
                path,
                lane_start,
                head.position,
                self.config.degenerate_epsilon,
            );
            let yaw = self.accumulated_rotation + measured.yaw_correction(segment.direction);
            let virtual_position = measured.virtual_position(
                path,
                near.walking_start(segment.near_slot),
                segment.direction,
                head.position.y,
            );
            self.offset = RigOffset::aligning(head, virtual_position, yaw);
            self.last_progress = Some(measured);
            progress = Some(measured);

            trace!(
                "[Redirect] {}: real={:.4} rad, virtual={:.4} rad, drift={:.3} m, yaw={:.2}°",
                segment.path,
                measured.angle_walked_real,
                measured.angle_walked_virtual,
                measured.side_drift,
                yaw
            );

            let margin = self.config.lane_entry_margin;
            if transition.is_none() {
                if segment.boundaries.arrived(head.position, margin) {
                    self.accumulated_rotation = yaw.rem_euclid(360.0);
                    self.current_intersection = segment.far_intersection;
                    self.current_joint = segment.far_joint;
                    self.state = RedirectionState::Armed;
                    self.segment = None;
                    transition = Some(Transition::Arrived(segment.far_intersection));
                    info!(
                        "[Redirect] Arrived at {} (joint {}), accumulated rotation {:.2}°",
                        segment.far_intersection, segment.far_joint, self.accumulated_rotation
                    );
                } else if segment.boundaries.returned(head.position, margin) {
                    self.state = RedirectionState::Armed;
                    self.segment = None;
                    transition = Some(Transition::Returned);
                    info!("[Redirect] Returned to {}", self.current_intersection);
                }
            }
        }

        Ok(FrameOutput {
            state: self.state,
            virtual_pose: self.offset.apply(head),
            offset: self.offset,
            progress,
            transition,
        })
    }

    /// Occupied lane of the current intersection the head has stepped into,
    /// deepest first.
    fn choose_lane(&self, layout: &RedirectionLayout, head: &HeadPose) -> Result<Option<Segment>> {
        let node = layout.require_intersection(self.current_intersection)?;
        let joint = layout.joint(self.current_joint);
        let mut best: Option<(f32, Segment)> = None;

        for (slot, path_id) in node.occupied() {
            let path = layout.require_path(path_id)?;
            let far_intersection = path.other_end(node.id).ok_or_else(|| {
                LayoutError::Inconsistent(format!("{} does not end at {}", path_id, node.id))
            })?;
            let far_joint = layout.require_intersection(far_intersection)?.joint;
            let far_slot = path_index(far_joint, path.curve).ok_or(LayoutError::CurveNotIncident {
                curve: path.curve,
                joint: far_joint,
            })?;
            let direction = sign_of_curve(self.current_joint, far_joint);
            let curve = layout.curve(path.curve);
            let boundaries = LaneBoundaries::new(
                curve,
                joint.walking_start(slot),
                layout.joint(far_joint).walking_start(far_slot),
                direction,
            );

            let depth = boundaries.entry_depth(head.position);
            if depth <= self.config.lane_entry_margin {
                continue;
            }
            debug!("[Redirect] Lane {} ({}) crossed by {:.3} m", slot, curve.id, depth);

            let segment = Segment {
                path: path_id,
                curve: path.curve,
                near_slot: slot,
                far_intersection,
                far_joint,
                direction,
                boundaries,
            };
            if best.is_none_or(|(best_depth, _)| depth > best_depth) {
                best = Some((depth, segment));
            }
        }

        Ok(best.map(|(_, segment)| segment))
    }

    fn restart(&mut self, root: IntersectionId, joint: JointId) {
        self.current_intersection = root;
        self.current_joint = joint;
        self.state = RedirectionState::Idle;
        self.segment = None;
        self.accumulated_rotation = 0.0;
        self.offset = RigOffset::identity();
        self.last_progress = None;
    }
}
