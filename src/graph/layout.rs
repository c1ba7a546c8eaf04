//! Display positions for graph nodes.
//!
//! The graph core never picks positions by itself; callers pass a [`Position`] to
//! [`Graph::add_node`](super::Graph::add_node). With the `random-layout` feature,
//! this module can pick one at random inside a [`LayoutConfig`] box.

/// Display coordinates. Opaque to the graph operations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Position {
        Position { x, y }
    }
}

/// The drawing area nodes are placed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    /// Minimum distance of a node from every edge of the area.
    pub padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            width: 500.,
            height: 300.,
            padding: 50.,
        }
    }
}

impl LayoutConfig {
    /// Whether `position` lies inside the padded area.
    pub fn contains(&self, position: Position) -> bool {
        let x_range = self.padding..=(self.width - self.padding);
        let y_range = self.padding..=(self.height - self.padding);
        x_range.contains(&position.x) && y_range.contains(&position.y)
    }
}

/// Picks a uniformly random position inside the padded area.
/// If the padding leaves no room on an axis, the node is centered on that axis.
#[cfg(feature = "random-layout")]
pub fn random_position<R: rand::Rng>(config: &LayoutConfig, rng: &mut R) -> Position {
    let axis = |rng: &mut R, length: f64| {
        let (low, high) = (config.padding, length - config.padding);
        if low < high {
            rng.gen_range(low..high)
        } else {
            length / 2.
        }
    };
    let x = axis(rng, config.width);
    let y = axis(rng, config.height);
    Position { x, y }
}

#[cfg(all(test, feature = "random-layout"))]
mod tests {
    use super::*;

    #[test]
    fn random_positions_stay_inside() {
        let config = LayoutConfig::default();
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            assert!(config.contains(random_position(&config, &mut rng)));
        }

        let cramped = LayoutConfig {
            width: 60.,
            height: 300.,
            padding: 50.,
        };
        let position = random_position(&cramped, &mut rng);
        assert_eq!(position.x, 30.);
    }
}
