//! Text rendering of responses: aligned matrix tables, warnings, routes.

use pathgraph::{ComputeResponse, Distance, PathQueryResponse, PathStatus, UNREACHABLE_MARKER};

/// Number formatting for table cells: integers without a trailing `.0`.
pub(crate) fn format_weight(w: f64) -> String {
    if w.fract() == 0.0 && w.abs() < 1e15 {
        format!("{}", w as i64)
    } else {
        format!("{}", w)
    }
}

fn format_distance(d: &Distance) -> String {
    match d {
        Distance::Finite(w) => format_weight(*w),
        Distance::Unreachable => UNREACHABLE_MARKER.to_string(),
    }
}

/// Square table with labels as header row and first column, right-aligned cells.
pub(crate) fn render_table(title: &str, labels: &[String], rows: &[Vec<String>]) -> String {
    let width = labels
        .iter()
        .chain(rows.iter().flatten())
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&" ".repeat(width));
    for label in labels {
        out.push_str(&format!("  {:>w$}", label, w = width));
    }
    out.push('\n');
    for (label, row) in labels.iter().zip(rows) {
        out.push_str(&format!("{:<w$}", label, w = width));
        for cell in row {
            out.push_str(&format!("  {:>w$}", cell, w = width));
        }
        out.push('\n');
    }
    out
}

/// Distance table, next-hop table and any warnings.
pub fn render_compute(resp: &ComputeResponse) -> String {
    let distances: Vec<Vec<String>> = resp
        .distance_matrix
        .iter()
        .map(|row| row.iter().map(format_distance).collect())
        .collect();

    let mut out = render_table("Distance matrix", &resp.labels, &distances);
    out.push('\n');
    out.push_str(&render_table("Next-hop matrix", &resp.labels, &resp.next_matrix));
    if resp.negative_edge_warning {
        out.push_str("\nwarning: graph contains negative edge weights\n");
    }
    if resp.negative_cycle {
        out.push_str(
            "warning: negative cycle detected; distances that can route through it are not shortest paths\n",
        );
    }
    out
}

/// One line describing the route from `start` to `end`.
pub fn render_path(start: &str, end: &str, resp: &PathQueryResponse) -> String {
    let mut out = match (resp.status, resp.distance) {
        (PathStatus::Found, Some(d)) => {
            format!("{} (distance {})\n", resp.path.join(" -> "), format_weight(d))
        }
        (PathStatus::Unreliable, _) => {
            format!("no reliable path from {} to {}: negative cycle\n", start, end)
        }
        _ => format!("no path from {} to {}\n", start, end),
    };
    if resp.negative_cycle && resp.status == PathStatus::Found {
        out.push_str("warning: graph contains a negative cycle; this route may not be shortest\n");
    }
    out
}
