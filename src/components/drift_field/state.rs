use std::f64::consts::PI;

use rand::{Rng, RngCore};

use super::types::Node;

pub const NODE_COUNT: usize = 25;
pub const LINE_COUNT: usize = 35;
pub const MIN_RADIUS: f64 = 15.0;
pub const MAX_RADIUS: f64 = 25.0;
pub const MIN_VELOCITY: f64 = 0.05;
pub const MAX_VELOCITY: f64 = 0.1;

// A canvas element reports 300x150 until the first layout pass; nodes are
// seeded against that area and rescaled by the first frame's resize.
pub const SEED_WIDTH: f64 = 300.0;
pub const SEED_HEIGHT: f64 = 150.0;

// Positions use `random * dimension`; a zero-sized surface yields the
// origin rather than an empty sample range.
fn scattered_node(rng: &mut impl Rng, width: f64, height: f64) -> Node {
	Node {
		id: format!("node-{:08x}", rng.next_u32()),
		x: rng.gen_range(0.0..1.0) * width,
		y: rng.gen_range(0.0..1.0) * height,
		radius: MIN_RADIUS + rng.gen_range(0.0..1.0) * (MAX_RADIUS - MIN_RADIUS),
		velocity: MIN_VELOCITY + rng.gen_range(0.0..1.0) * (MAX_VELOCITY - MIN_VELOCITY),
		direction: rng.gen_range(0.0..1.0) * 2.0 * PI,
	}
}

/// Spawn a node one radius outside the canvas, heading inward.
///
/// The direction picks the entry edge: angles within π/4 of 0 (wrapping at
/// 2π) enter from the left, the following quadrants from the top, right and
/// bottom. The coordinate along the edge is uniform over the canvas span.
fn edge_node(rng: &mut impl Rng, width: f64, height: f64) -> Node {
	let mut node = scattered_node(rng, width, height);
	let quarter = PI / 4.0;
	if node.direction < quarter || node.direction > 7.0 * quarter {
		node.x = -node.radius;
		node.y = rng.gen_range(0.0..1.0) * height;
	} else if node.direction < 3.0 * quarter {
		node.x = rng.gen_range(0.0..1.0) * width;
		node.y = -node.radius;
	} else if node.direction < 5.0 * quarter {
		node.x = width + node.radius;
		node.y = rng.gen_range(0.0..1.0) * height;
	} else {
		node.x = rng.gen_range(0.0..1.0) * width;
		node.y = height + node.radius;
	}
	node
}

pub struct DriftFieldState {
	pub nodes: Vec<Node>,
	pub width: f64,
	pub height: f64,
}

impl DriftFieldState {
	pub fn new(width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let nodes = (0..NODE_COUNT)
			.map(|_| scattered_node(rng, width, height))
			.collect();
		Self {
			nodes,
			width,
			height,
		}
	}

	/// One frame of simulation: advance, cull, replenish, in that order.
	pub fn step(&mut self, rng: &mut impl Rng) {
		self.advance();
		self.cull_offscreen();
		self.replenish(rng);
	}

	fn advance(&mut self) {
		for node in &mut self.nodes {
			node.x += node.velocity * node.direction.cos();
			node.y += node.velocity * node.direction.sin();
		}
	}

	// Keeps a node only while its bounding circle still overlaps the open
	// canvas rectangle; a node exactly tangent to an edge is dropped.
	fn cull_offscreen(&mut self) {
		let (width, height) = (self.width, self.height);
		self.nodes.retain(|node| {
			node.x + node.radius > 0.0
				&& node.x - node.radius < width
				&& node.y + node.radius > 0.0
				&& node.y - node.radius < height
		});
	}

	// Tops the population back up to NODE_COUNT with edge-spawned nodes.
	// A surplus is left alone, never truncated.
	fn replenish(&mut self, rng: &mut impl Rng) {
		while self.nodes.len() < NODE_COUNT {
			let node = edge_node(rng, self.width, self.height);
			self.nodes.push(node);
		}
	}

	/// Rescale node positions proportionally to the new canvas dimensions.
	pub fn resize(&mut self, width: f64, height: f64) {
		// Scaling against a zero-sized previous canvas would turn every
		// position into NaN; keep positions and just adopt the new size.
		if self.width > 0.0 && self.height > 0.0 {
			let (sx, sy) = (width / self.width, height / self.height);
			for node in &mut self.nodes {
				node.x *= sx;
				node.y *= sy;
			}
		}
		self.width = width;
		self.height = height;
	}
}
