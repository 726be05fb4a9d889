//! SVG attribute formatting.
//!
//! Numbers are printed the way a browser prints them (`2`, `0.5`, `1e+21`) so
//! path data stays stable across the Rust and JavaScript sides of the page.

use ryu_js::Buffer;

use super::types::Point;

/// Formats a coordinate with JS number semantics. Negative zero prints as `0`.
pub fn format_number(v: f64) -> String {
	let mut buf = Buffer::new();
	push_number(&mut buf, v).to_owned()
}

fn push_number(buf: &mut Buffer, mut v: f64) -> &str {
	if v == 0.0 {
		v = 0.0;
	}
	buf.format(v)
}

/// Builds `"M x0,y0 L x1,y1 ..."` from a polyline. Empty input yields `""`.
pub fn path_data(points: &[Point]) -> String {
	let mut buf = Buffer::new();
	let mut out = String::new();
	for (i, p) in points.iter().enumerate() {
		out.push_str(if i == 0 { "M " } else { " L " });
		out.push_str(push_number(&mut buf, p.x));
		out.push(',');
		out.push_str(push_number(&mut buf, p.y));
	}
	out
}
