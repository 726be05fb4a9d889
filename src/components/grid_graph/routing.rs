use super::types::Point;

/// Length of the initial stub the [`RoutingStrategy::Hook`] route takes along
/// the dominant axis.
pub const HOOK_LENGTH: f64 = 0.5;

/// How an edge that is not straight or a clean diagonal gets bent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoutingStrategy {
	/// Diagonal run over the smaller delta, then an axis-aligned run.
	#[default]
	Kink,
	/// Half-unit stub along the dominant axis, then diagonal, then axis-aligned.
	/// Edges leaving a node towards different quadrants separate earlier.
	Hook,
}

impl RoutingStrategy {
	/// Every strategy, in toggle order.
	pub const ALL: [Self; 2] = [Self::Kink, Self::Hook];

	/// Short name for UI labels and logs.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Kink => "kink",
			Self::Hook => "hook",
		}
	}

	/// Polyline from `from` to `to`, endpoints included.
	pub fn route(self, from: Point, to: Point) -> Vec<Point> {
		let (dx, dy) = (to.x - from.x, to.y - from.y);
		if is_straight(dx, dy) {
			return vec![from, to];
		}
		match self {
			Self::Kink => {
				let step = dx.abs().min(dy.abs());
				let mid = Point::new(from.x + sign(dx) * step, from.y + sign(dy) * step);
				vec![from, mid, to]
			}
			Self::Hook => {
				let hook = if dx.abs() > dy.abs() {
					Point::new(from.x + sign(dx) * HOOK_LENGTH, from.y)
				} else {
					Point::new(from.x, from.y + sign(dy) * HOOK_LENGTH)
				};
				let (rx, ry) = (to.x - hook.x, to.y - hook.y);
				let step = rx.abs().min(ry.abs());
				let diag = Point::new(hook.x + sign(rx) * step, hook.y + sign(ry) * step);
				vec![from, hook, diag, to]
			}
		}
	}
}

/// Horizontal, vertical or a perfect diagonal. Also true for a zero delta.
fn is_straight(dx: f64, dy: f64) -> bool {
	dx == 0.0 || dy == 0.0 || dx.abs() == dy.abs()
}

// f64::signum maps 0.0 to 1.0; routes need 0 for a zero delta.
fn sign(v: f64) -> f64 {
	if v > 0.0 {
		1.0
	} else if v < 0.0 {
		-1.0
	} else {
		0.0
	}
}
