// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Poster wall demo: lay out a few hundred posters and pan a phone-sized
//! viewport across the result, printing what a host would materialize.

use corkboard_canvas::VirtualCanvas;
use corkboard_scatter::{ScatterItem, ScatterParams, SizeScale, compute_layout};
use kurbo::Rect;

const POSTERS: u32 = 240;
const VIEWPORT: (f64, f64) = (390.0, 780.0);
const OVERSCAN: f64 = 200.0;
const PAN_THRESHOLD: f64 = 48.0;

/// Deterministic stand-in for a likes feed.
fn likes_for(id: u32) -> f64 {
    f64::from((id * 37 + 11) % 250)
}

fn main() {
    let scale = SizeScale::default();
    let items: Vec<ScatterItem<u32>> = (0..POSTERS)
        .map(|id| scale.item_for(id, likes_for(id)))
        .collect();

    let layout = compute_layout(&items, &ScatterParams::default());
    println!(
        "laid out {} posters into {:.0}x{:.0} (forced placements: {}, ring expansions: {})",
        layout.len(),
        layout.content_size.width,
        layout.content_size.height,
        layout.stats.forced_placements,
        layout.stats.rings_expanded,
    );

    let content = layout.content_size;
    let mut canvas = VirtualCanvas::new(layout, OVERSCAN).with_pan_threshold(PAN_THRESHOLD);
    println!(
        "before the first viewport report, {} posters are visible",
        canvas.visible_indices().len()
    );

    // Sweep the viewport diagonally across the content, the way a user
    // would pan from one corner to the other.
    let steps = 8;
    for step in 0..=steps {
        let t = f64::from(step) / f64::from(steps);
        let x = t * (content.width - VIEWPORT.0).max(0.0);
        let y = t * (content.height - VIEWPORT.1).max(0.0);
        let viewport = Rect::new(x, y, x + VIEWPORT.0, y + VIEWPORT.1);

        let accepted = canvas.set_viewport(viewport);
        let visible = canvas.visible_indices().len();
        println!(
            "viewport at ({x:7.1}, {y:7.1}) {} -> {visible:3} posters in range",
            if accepted { "accepted" } else { "dropped " },
        );
    }

    // The ids a host would mount for the final viewport.
    let mounted: Vec<u32> = canvas.visible_posters().map(|(p, _)| p.id).collect();
    println!("final viewport mounts {} posters: {mounted:?}", mounted.len());
}
