//! Procedural board and hole placement.
//!
//! A placement is a pure function of two draws: a horizontal offset `x` and a
//! depth. The board is built from a fixed lattice of cells rotated to face the
//! thrower; the hole follows a separate piecewise-linear calibration fitted to
//! the open lattice slot. The hole coefficients in [`Params`] are fitted to
//! the board constants there; change them together.

use glam::{Affine3A, Quat, Vec2, Vec3};
use rand::Rng;

use crate::{GameRng, Params};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// Outer corners of the board's top surface. Bottom is the front (near) edge,
/// top the raised back edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardCorners {
    pub bottom_left: Affine3A,
    pub top_left: Affine3A,
    pub top_right: Affine3A,
    pub bottom_right: Affine3A,
}

impl BoardCorners {
    /// Corner positions in bottom-left, top-left, top-right, bottom-right order
    pub fn points(&self) -> [Vec3; 4] {
        [
            self.bottom_left.translation.into(),
            self.top_left.translation.into(),
            self.top_right.translation.into(),
            self.bottom_right.translation.into(),
        ]
    }

    /// Containment box used for board hits: x from the left pair to the right
    /// pair, y from the bottom pair to the top pair, z from the back pair to
    /// the front pair.
    pub fn bounds(&self) -> Aabb {
        let [bl, tl, tr, br] = self.points();
        Aabb::new(
            Vec3::new(bl.x.min(tl.x), bl.y.min(br.y), tl.z.min(tr.z)),
            Vec3::new(tr.x.max(br.x), tl.y.max(tr.y), bl.z.max(br.z)),
        )
    }

    /// Whether the corners lie in one plane
    pub fn is_planar(&self) -> bool {
        let [bl, tl, tr, br] = self.points();
        let normal = (tl - bl).cross(br - bl).normalize_or_zero();
        normal != Vec3::ZERO && normal.dot(tr - bl).abs() < 1e-3
    }

    /// Point-in-quad test on the x-z projection of the corners
    pub fn contains_xz(&self, point: Vec3) -> bool {
        let pts = self.points().map(|p| Vec2::new(p.x, p.z));
        let target = Vec2::new(point.x, point.z);
        let mut sign = 0.0f32;
        for i in 0..4 {
            let edge = pts[(i + 1) % 4] - pts[i];
            let cross = edge.perp_dot(target - pts[i]);
            if cross == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }
}

/// Where the board and hole sit for the current throw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPlacement {
    /// Horizontal offset draw
    pub x_offset: f32,
    /// Depth after edge overrides
    pub depth: f32,
    pub board_transform: Affine3A,
    pub board_yaw: f32,
    /// Board cells to draw, one per lattice slot except the hole
    pub cells: [Affine3A; 5],
    pub board_corners: BoardCorners,
    pub hole_center: Vec3,
    pub hole_yaw: f32,
    pub hole_orientation: Quat,
}

impl TargetPlacement {
    /// Board corners are planar and the hole lies inside the board's x-z footprint
    pub fn is_consistent(&self) -> bool {
        let bounds = self.board_corners.bounds();
        self.board_corners.is_planar()
            && self.board_corners.contains_xz(self.hole_center)
            && self.hole_center.x >= bounds.min.x
            && self.hole_center.x <= bounds.max.x
            && self.hole_center.z >= bounds.min.z
            && self.hole_center.z <= bounds.max.z
    }
}

/// Draw a placement from an explicit seed
pub fn generate(seed: u64) -> TargetPlacement {
    let mut rng = GameRng::new(seed);
    let x = rng.0.gen_range(Params::TARGET_X_MIN..=Params::TARGET_X_MAX);
    let depth = rng.0.gen_range(Params::TARGET_DEPTH_MIN..=Params::TARGET_DEPTH_MAX);
    placement_for(x as f32, depth as f32)
}

/// Build the placement for a horizontal offset and depth
pub fn placement_for(x: f32, depth: f32) -> TargetPlacement {
    let depth = board_depth(x, depth);
    let board_yaw = board_yaw(x);
    let rotation = Quat::from_rotation_y(board_yaw) * Quat::from_rotation_x(Params::BOARD_TILT);
    let board_transform =
        Affine3A::from_rotation_translation(rotation, Vec3::new(x, Params::BOARD_BASE_Y, -depth));

    let slots = Params::BOARD_LATTICE.map(|[lx, lz]| {
        board_transform
            * Affine3A::from_scale_rotation_translation(
                Params::BOARD_CELL_HALF_EXTENTS,
                Quat::IDENTITY,
                Vec3::new(lx, 0.0, lz),
            )
    });

    let mut cells = [Affine3A::IDENTITY; 5];
    for (cell, slot) in cells.iter_mut().zip(
        slots
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != Params::BOARD_HOLE_SLOT)
            .map(|(_, s)| s),
    ) {
        *cell = *slot;
    }

    // Corner offsets are in unit-cell space; the slot transforms carry the scale
    let corner = |slot: usize, cx: f32, cz: f32| {
        slots[slot] * Affine3A::from_translation(Vec3::new(cx, 1.0, cz))
    };
    let board_corners = BoardCorners {
        bottom_left: corner(0, -1.0, 1.0),
        top_left: corner(4, -1.0, -1.0),
        top_right: corner(5, 1.0, -1.0),
        bottom_right: corner(1, 1.0, 1.0),
    };

    let hole_center = hole_center(x, depth);
    let hole_yaw = board_yaw + hole_yaw_correction(x, depth);
    let hole_orientation =
        Quat::from_rotation_y(hole_yaw) * Quat::from_rotation_x(Params::BOARD_TILT);

    TargetPlacement {
        x_offset: x,
        depth,
        board_transform,
        board_yaw,
        cells,
        board_corners,
        hole_center,
        hole_yaw,
        hole_orientation,
    }
}

/// Boards on either horizontal bound are pulled to the edge depth
pub fn board_depth(x: f32, depth: f32) -> f32 {
    if x <= Params::TARGET_X_MIN as f32 || x >= Params::TARGET_X_MAX as f32 {
        Params::TARGET_EDGE_DEPTH
    } else {
        depth
    }
}

/// Boards further from centre turn further to face the thrower
pub fn board_yaw(x: f32) -> f32 {
    Params::BOARD_YAW_PER_UNIT * x
}

/// Hole centre from the offsets. `depth` is the board depth after overrides.
pub fn hole_center(x: f32, depth: f32) -> Vec3 {
    let (hx, hz) = if x < 0.0 {
        (Params::HOLE_X_LEFT, Params::HOLE_Z_LEFT)
    } else {
        (Params::HOLE_X_RIGHT, Params::HOLE_Z_RIGHT)
    };
    Vec3::new(
        x + hx[0] + hx[1] * x,
        Params::HOLE_Y,
        -depth + hz[0] + hz[1] * x,
    )
}

/// Extra yaw applied to the hole disc on top of the board yaw
pub fn hole_yaw_correction(x: f32, depth: f32) -> f32 {
    if depth > Params::HOLE_FAR_DEPTH {
        Params::HOLE_YAW_FAR
    } else if x < 0.0 {
        Params::HOLE_YAW_LEFT * x
    } else {
        Params::HOLE_YAW_RIGHT * x
    }
}
