use std::cmp::Ordering;
use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{DriftFieldState, LINE_COUNT};
use super::types::Node;

const COLOR: &str = "rgba(0, 0, 0, 0.1)";

pub fn render(state: &DriftFieldState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_nodes(state, ctx);
	draw_lines(state, ctx);
}

fn draw_nodes(state: &DriftFieldState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(COLOR);
	for node in &state.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_lines(state: &DriftFieldState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(COLOR);
	ctx.set_line_width(1.0);
	for (a, b) in closest_pairs(&state.nodes) {
		let (a, b) = (&state.nodes[a], &state.nodes[b]);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

/// Index pairs of the up-to-`LINE_COUNT` closest nodes, nearest first.
fn closest_pairs(nodes: &[Node]) -> Vec<(usize, usize)> {
	let mut pairs = Vec::new();
	for i in 0..nodes.len() {
		for j in (i + 1)..nodes.len() {
			let (dx, dy) = (nodes[i].x - nodes[j].x, nodes[i].y - nodes[j].y);
			pairs.push((i, j, (dx * dx + dy * dy).sqrt()));
		}
	}
	pairs.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));
	pairs.truncate(LINE_COUNT);
	pairs.into_iter().map(|(i, j, _)| (i, j)).collect()
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	use super::super::state::{NODE_COUNT, SEED_HEIGHT, SEED_WIDTH};
	use super::*;

	fn node_at(i: usize, x: f64, y: f64) -> Node {
		Node {
			id: format!("node-{i}"),
			x,
			y,
			radius: 15.0,
			velocity: 0.05,
			direction: 0.0,
		}
	}

	#[test]
	fn closest_pairs_selects_the_smallest_distances() {
		let mut rng = StdRng::seed_from_u64(9);
		let nodes: Vec<Node> = (0..12)
			.map(|i| {
				node_at(
					i,
					rng.gen_range(0.0..500.0),
					rng.gen_range(0.0..500.0),
				)
			})
			.collect();

		// Independent brute force over all 66 pairs.
		let mut all = Vec::new();
		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				let (dx, dy) = (nodes[i].x - nodes[j].x, nodes[i].y - nodes[j].y);
				all.push(((i, j), (dx * dx + dy * dy).sqrt()));
			}
		}
		all.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
		let expected: Vec<(usize, usize)> = all[..LINE_COUNT].iter().map(|(p, _)| *p).collect();

		assert_eq!(closest_pairs(&nodes), expected);
	}

	#[test]
	fn closest_pairs_is_capped_by_the_pair_count() {
		let nodes = vec![
			node_at(0, 0.0, 0.0),
			node_at(1, 10.0, 0.0),
			node_at(2, 100.0, 0.0),
			node_at(3, 100.0, 50.0),
		];
		let pairs = closest_pairs(&nodes);
		assert_eq!(pairs.len(), 6);
		assert_eq!(pairs[0], (0, 1));
		assert!(closest_pairs(&[]).is_empty());
	}

	#[test]
	fn full_frame_yields_target_population_and_line_budget() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut state = DriftFieldState::new(SEED_WIDTH, SEED_HEIGHT, &mut rng);
		state.resize(800.0, 600.0);
		state.step(&mut rng);

		assert_eq!(state.nodes.len(), NODE_COUNT);
		for node in &state.nodes {
			assert!(node.x.is_finite() && node.y.is_finite());
		}
		assert_eq!(closest_pairs(&state.nodes).len(), LINE_COUNT);
	}
}
