//! Post-walk synthesis: obstacles, freeze, rooms and platforms
//!
//! Runs once after the walker stops. The stages run in a fixed order because
//! each one reads what the previous stage wrote.

use crate::algorithm::random::RandomSource;
use crate::io::configuration::{
    PLATFORM_HALF_WIDTH, PLATFORM_SAFE_DOWN, PLATFORM_SAFE_LEFT, PLATFORM_SAFE_RIGHT,
    PLATFORM_SAFE_TOP,
};
use crate::math::distance::{DistanceTransformMethod, distance_transform, seed_field};
use crate::spatial::{BlockType, Map, Position};
use log::debug;
use ndarray::Array2;

/// Settings for the finishing pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinishingConfig {
    /// Metric of the distance transform
    pub method: DistanceTransformMethod,
    /// Distance from solid cells at which open cells become walls
    pub distance_threshold: f64,
    /// Chance that an open cell is seeded as solid before the transform
    pub pre_distance_noise: f64,
    /// Spacing of an extra seed lattice, `0` to disable
    pub grid_distance: usize,
    /// Whether platforms are placed along the path
    pub generate_platforms: bool,
    /// Minimum number of path steps between two platforms
    pub platform_min_distance: usize,
    /// Half-size of the start and finish room interiors
    pub room_radius: i32,
}

/// Counts reported by the finishing pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinishingReport {
    /// Open cells turned into walls
    pub obstacles: usize,
    /// Empty cells turned into freeze
    pub freeze: usize,
    /// Platforms placed along the path
    pub platforms: usize,
}

/// Run every finishing stage in order
///
/// `path` is the walker's position history; its first and last entries anchor
/// the start and finish rooms.
pub fn finish_map(
    map: &mut Map,
    rng: &mut RandomSource,
    path: &[Position],
    config: &FinishingConfig,
) -> FinishingReport {
    let distances = obstacle_distances(map, rng, config);
    let obstacles = fill_obstacles(map, &distances, config.distance_threshold);
    let freeze = generate_freeze(map);

    if let (Some(&start), Some(&finish)) = (path.first(), path.last()) {
        generate_rooms(map, start, finish, config.room_radius);
    }

    let platforms = if config.generate_platforms {
        generate_platforms(map, path, config.platform_min_distance)
    } else {
        0
    };

    let report = FinishingReport {
        obstacles,
        freeze,
        platforms,
    };
    debug!("finishing pass: {report:?}");
    report
}

/// Distance from every cell to the nearest solid seed
///
/// Seeds are the solid cells, plus open cells picked by the pre-transform
/// noise, plus the optional lattice. Noise draws are made for open cells
/// only, in row-major order.
pub fn obstacle_distances(
    map: &Map,
    rng: &mut RandomSource,
    config: &FinishingConfig,
) -> Array2<f64> {
    let width = map.width();
    let height = map.height();
    let mut seeds = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let solid = map
                .get(x as i32, y as i32)
                .is_some_and(BlockType::is_solid);
            let lattice = config.grid_distance > 0
                && x % config.grid_distance == 0
                && y % config.grid_distance == 0;
            let noise =
                !solid && config.pre_distance_noise > 0.0 && rng.random_bool(config.pre_distance_noise);
            seeds.push(solid || lattice || noise);
        }
    }

    let mut field = seed_field(width, height, |x, y| {
        seeds.get(y * width + x).copied().unwrap_or(false)
    });
    distance_transform(&mut field, config.method);
    field
}

/// Turn open cells at least `threshold` away from any seed into walls
pub fn fill_obstacles(map: &mut Map, distances: &Array2<f64>, threshold: f64) -> usize {
    let mut filled = 0;
    for ((y, x), &distance) in distances.indexed_iter() {
        let (x, y) = (x as i32, y as i32);
        let open = map.get(x, y).is_some_and(|block| !block.is_solid());
        if open && distance >= threshold && map.set(x, y, BlockType::Hookable) {
            filled += 1;
        }
    }
    filled
}

/// Turn every empty cell touching a wall or margin freeze into freeze
pub fn generate_freeze(map: &mut Map) -> usize {
    let mut converted = 0;
    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            if map.get(x, y) != Some(BlockType::Empty) {
                continue;
            }
            let touches_wall = map.area_matches(x - 1, y - 1, x + 1, y + 1, |block| {
                matches!(block, BlockType::Hookable | BlockType::MarginFreeze)
            });
            if touches_wall && map.set(x, y, BlockType::Freeze) {
                converted += 1;
            }
        }
    }
    converted
}

/// Stamp the start and finish rooms, the start ledge and the spawn marker
pub fn generate_rooms(map: &mut Map, start: Position, finish: Position, radius: i32) {
    stamp_room(map, start, radius, BlockType::Start);
    stamp_room(map, finish, radius, BlockType::Finish);

    for dx in -1..=1 {
        map.set(start.x + dx, start.y + 2, BlockType::Platform);
    }
    map.set(start.x, start.y, BlockType::Spawn);
}

/// Clear a square interior and line its border with `border` where passable
fn stamp_room(map: &mut Map, center: Position, radius: i32, border: BlockType) {
    let outer = radius + 1;
    for dy in -outer..=outer {
        for dx in -outer..=outer {
            let x = center.x + dx;
            let y = center.y + dy;
            if dx.abs() <= radius && dy.abs() <= radius {
                map.set(x, y, BlockType::Empty);
            } else if map.get(x, y).is_some_and(BlockType::is_freeze_or_empty) {
                map.set(x, y, border);
            }
        }
    }
}

/// Drop platforms along the path wherever there is enough clearance
///
/// A candidate position must lie more than `min_distance` path steps after
/// the previous platform. Its clearance rectangle is pushed down one row at
/// a time while it stays clear, and the platform lands on the bottom row of
/// the last clear rectangle.
pub fn generate_platforms(map: &mut Map, path: &[Position], min_distance: usize) -> usize {
    let mut last_platform = 0;
    let mut placed = 0;

    for (index, &position) in path.iter().enumerate() {
        if index <= last_platform + min_distance || !has_clearance(map, position) {
            continue;
        }

        let mut resting = position;
        while has_clearance(map, resting.offset(0, 1)) {
            resting = resting.offset(0, 1);
        }

        let floor = resting.y + PLATFORM_SAFE_DOWN;
        for dx in -PLATFORM_HALF_WIDTH..=PLATFORM_HALF_WIDTH {
            map.set(resting.x + dx, floor, BlockType::Platform);
        }

        last_platform = index;
        placed += 1;
    }

    placed
}

/// Whether the clearance rectangle around `position` is inside the map and free
fn has_clearance(map: &Map, position: Position) -> bool {
    let x1 = position.x - PLATFORM_SAFE_LEFT;
    let y1 = position.y - PLATFORM_SAFE_TOP;
    let x2 = position.x + PLATFORM_SAFE_RIGHT;
    let y2 = position.y + PLATFORM_SAFE_DOWN;

    map.rect_in_bounds(x1, y1, x2, y2)
        && !map.area_matches(x1, y1, x2, y2, |block| block.is_solid() || block.is_freeze())
}
