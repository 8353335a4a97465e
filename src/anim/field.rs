//! Icon field - decorative icons drifting with elastic viewport reflection
//!
//! An arena of icon records indexed by a stable position in the vector;
//! each record holds a 2D position and velocity and is mutated in place
//! every frame. Randomness is injected so tests can seed it.

use rand::Rng;

/// Inset from the viewport edge, keeping the glyph from clipping
pub const EDGE_INSET: f32 = 30.0;

/// Velocity components are uniform in (-MAX_SPEED/2, MAX_SPEED/2) px/frame
const MAX_SPEED: f32 = 1.5;

/// Rectangle the icons bounce within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn max_x(&self) -> f32 {
        (self.width - EDGE_INSET).max(0.0)
    }

    fn max_y(&self) -> f32 {
        (self.height - EDGE_INSET).max(0.0)
    }
}

/// One drifting icon: position plus velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

/// The whole set of drifting icons, stepped together once per frame
#[derive(Debug, Clone)]
pub struct IconField {
    icons: Vec<Icon>,
}

impl IconField {
    /// Scatter `count` icons across `bounds` with small random velocities
    pub fn scatter<R: Rng>(rng: &mut R, count: usize, bounds: Bounds) -> Self {
        let icons = (0..count)
            .map(|_| Icon {
                x: rng.random_range(0.0..=bounds.max_x()),
                y: rng.random_range(0.0..=bounds.max_y()),
                dx: (rng.random::<f32>() - 0.5) * MAX_SPEED,
                dy: (rng.random::<f32>() - 0.5) * MAX_SPEED,
            })
            .collect();
        Self { icons }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter()
    }

    /// Advance every icon one frame, reflecting off the bounds.
    ///
    /// A crossing clamps the position back inside and negates that axis'
    /// velocity, so the post-step position always satisfies
    /// `0 <= x <= width - EDGE_INSET` (same for y) and the sign flips once
    /// per crossing, not repeatedly while hugging the edge.
    pub fn step(&mut self, bounds: Bounds) {
        for icon in &mut self.icons {
            icon.x += icon.dx;
            icon.y += icon.dy;

            if icon.x < 0.0 {
                icon.x = 0.0;
                icon.dx = -icon.dx;
            } else if icon.x > bounds.max_x() {
                icon.x = bounds.max_x();
                icon.dx = -icon.dx;
            }

            if icon.y < 0.0 {
                icon.y = 0.0;
                icon.dy = -icon.dy;
            } else if icon.y > bounds.max_y() {
                icon.y = bounds.max_y();
                icon.dy = -icon.dy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const VIEW: Bounds = Bounds::new(800.0, 600.0);

    fn in_bounds(icon: &Icon, bounds: Bounds) -> bool {
        icon.x >= 0.0
            && icon.x <= bounds.width - EDGE_INSET
            && icon.y >= 0.0
            && icon.y <= bounds.height - EDGE_INSET
    }

    #[test]
    fn scatter_places_all_icons_inside_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let field = IconField::scatter(&mut rng, 20, VIEW);
        assert_eq!(field.len(), 20);
        assert!(field.iter().all(|icon| in_bounds(icon, VIEW)));
    }

    #[test]
    fn scatter_velocities_are_small() {
        let mut rng = SmallRng::seed_from_u64(7);
        let field = IconField::scatter(&mut rng, 20, VIEW);
        assert!(field.iter().all(|i| i.dx.abs() <= 0.75 && i.dy.abs() <= 0.75));
    }

    #[test]
    fn positions_stay_inside_bounds_over_many_frames() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut field = IconField::scatter(&mut rng, 20, VIEW);
        for _ in 0..10_000 {
            field.step(VIEW);
            assert!(field.iter().all(|icon| in_bounds(icon, VIEW)));
        }
    }

    #[test]
    fn right_edge_crossing_flips_dx_once() {
        let mut field = IconField {
            icons: vec![Icon { x: VIEW.width - EDGE_INSET - 0.5, y: 100.0, dx: 1.0, dy: 0.0 }],
        };
        field.step(VIEW);
        let icon = *field.iter().next().unwrap();
        assert_eq!(icon.x, VIEW.width - EDGE_INSET);
        assert_eq!(icon.dx, -1.0);

        // Moving inward now: no second flip
        field.step(VIEW);
        let icon = *field.iter().next().unwrap();
        assert_eq!(icon.dx, -1.0);
        assert_eq!(icon.x, VIEW.width - EDGE_INSET - 1.0);
    }

    #[test]
    fn top_edge_crossing_flips_dy_once() {
        let mut field = IconField {
            icons: vec![Icon { x: 100.0, y: 0.3, dx: 0.0, dy: -1.0 }],
        };
        field.step(VIEW);
        let icon = *field.iter().next().unwrap();
        assert_eq!(icon.y, 0.0);
        assert_eq!(icon.dy, 1.0);
    }

    #[test]
    fn shrunken_bounds_pull_icons_back_inside() {
        let mut field = IconField {
            icons: vec![Icon { x: 700.0, y: 500.0, dx: 0.2, dy: 0.2 }],
        };
        // Window resized smaller between frames
        let small = Bounds::new(400.0, 300.0);
        field.step(small);
        assert!(field.iter().all(|icon| in_bounds(icon, small)));
    }

    #[test]
    fn same_seed_scatters_identically() {
        let a = IconField::scatter(&mut SmallRng::seed_from_u64(9), 5, VIEW);
        let b = IconField::scatter(&mut SmallRng::seed_from_u64(9), 5, VIEW);
        assert!(a.iter().zip(b.iter()).all(|(x, y)| x == y));
    }
}
