use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&state.style.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let hovering = state.has_active_highlight();

	state.graph.visit_edges(|n1, n2, _| {
		let (i1, i2) = (n1.index(), n2.index());
		let emphasized = state.is_selected(i1)
			|| state.is_selected(i2)
			|| (hovering && state.is_highlighted(i1) && state.is_highlighted(i2));

		if emphasized {
			ctx.set_stroke_style_str(&state.style.highlight_color);
			ctx.set_line_width(2.0 / k);
		} else {
			ctx.set_stroke_style_str(&state.style.edge_color);
			ctx.set_line_width(1.0 / k);
		}
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let hovering = state.has_active_highlight();
	let font = format!("{}px {}", state.style.font_size / k.max(0.5), state.style.font);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y, radius) = (node.x() as f64, node.y() as f64, info.radius);
		let selected = state.is_selected(idx);
		let dimmed = hovering && !state.is_highlighted(idx) && !selected;

		ctx.set_global_alpha(if dimmed { 0.35 } else { 1.0 });
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&state.style.node_color);
		ctx.fill();

		if selected {
			ctx.set_stroke_style_str(&state.style.selected_color);
			ctx.set_line_width(3.0 / k);
			ctx.stroke();
		}

		if let Some(label) = &info.label {
			ctx.set_fill_style_str("#343434");
			ctx.set_font(&font);
			let _ = ctx.fill_text(label, x + radius + 3.0 / k, y + 4.0 / k);
		}
		ctx.set_global_alpha(1.0);
	});
}
