//! Canvas 2D renderer
//!
//! Paints the meadow back to front: sky, sun, hills, ground, grass and
//! decorations, stumps, the runner, then clouds and birds on top.

use std::f64::consts::{PI, TAU};

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::Renderer;
use super::parallax::{
    self, BIRD_SPAN, BIRD_SPEED_FACTOR, BIRDS, CLOUD_SPAN, CLOUD_SPEED_FACTOR, CLOUDS,
    GRASS_SPACING,
};
use crate::consts::*;
use crate::sim::{GameState, Obstacle, Player};

const FLOWERS: [f32; 6] = [120.0, 280.0, 450.0, 620.0, 780.0, 920.0];
const FLOWER_COLORS: [&str; 3] = ["#FF69B4", "#FFD700", "#FF6347"];
const MUSHROOMS: [f32; 5] = [200.0, 380.0, 560.0, 720.0, 880.0];

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    sprite: Option<HtmlImageElement>,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, sprite: Option<HtmlImageElement>) -> Self {
        Self { ctx, sprite }
    }

    fn sprite_ready(&self) -> Option<&HtmlImageElement> {
        self.sprite
            .as_ref()
            .filter(|img| img.complete() && img.natural_width() > 0)
    }

    fn draw_sky(&self) {
        let ctx = &self.ctx;
        let h = PLAYFIELD_HEIGHT as f64;
        let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        let _ = sky.add_color_stop(0.0, "#87CEEB");
        let _ = sky.add_color_stop(0.7, "#B0E0E6");
        let _ = sky.add_color_stop(1.0, "#E0F6FF");
        ctx.set_fill_style_canvas_gradient(&sky);
        ctx.fill_rect(0.0, 0.0, PLAYFIELD_WIDTH as f64, h);

        // Sun with glow
        let (sx, sy) = (PLAYFIELD_WIDTH as f64 - 100.0, 80.0);
        self.fill_circle(sx, sy, 40.0, "#FFD700");
        self.fill_circle(sx, sy, 60.0, "rgba(255, 215, 0, 0.2)");
    }

    fn draw_hills(&self) {
        let ctx = &self.ctx;
        let g = GROUND_LINE as f64;
        ctx.set_fill_style_str("rgba(34, 139, 34, 0.3)");
        ctx.begin_path();
        ctx.move_to(0.0, g - 50.0);
        ctx.quadratic_curve_to(200.0, g - 120.0, 400.0, g - 50.0);
        ctx.quadratic_curve_to(600.0, g - 20.0, 800.0, g - 80.0);
        ctx.quadratic_curve_to(900.0, g - 100.0, 1000.0, g - 60.0);
        ctx.line_to(PLAYFIELD_WIDTH as f64, g);
        ctx.line_to(0.0, g);
        ctx.close_path();
        ctx.fill();
    }

    fn draw_ground(&self, state: &GameState, time_ms: f64) {
        let ctx = &self.ctx;
        let g = GROUND_LINE as f64;
        let w = PLAYFIELD_WIDTH as f64;

        let soil = ctx.create_linear_gradient(0.0, g, 0.0, PLAYFIELD_HEIGHT as f64);
        let _ = soil.add_color_stop(0.0, "#8B6914");
        let _ = soil.add_color_stop(1.0, "#654321");
        ctx.set_fill_style_canvas_gradient(&soil);
        ctx.fill_rect(0.0, g, w, PLAYFIELD_HEIGHT as f64 - g);

        ctx.set_fill_style_str("#228B22");
        ctx.fill_rect(0.0, g - 8.0, w, 8.0);

        // Grass blades
        let running = state.is_running();
        let speed = state.run.scroll_speed;
        let shift = parallax::grass_offset(time_ms, speed, running) as f64;
        ctx.set_stroke_style_str("#2F8B22");
        ctx.set_line_width(2.0);
        let mut x = -30.0;
        while x < w + 30.0 {
            let blade_x = x - shift;
            let height = 8.0 + (x / 30.0).sin() * 3.0;
            let sway = (time_ms / 200.0 + x).sin() * 2.0;
            ctx.begin_path();
            ctx.move_to(blade_x, g);
            ctx.quadratic_curve_to(blade_x + 2.0, g - height / 2.0, blade_x + sway, g - height);
            ctx.stroke();
            x += GRASS_SPACING as f64;
        }

        for (i, anchor) in FLOWERS.iter().enumerate() {
            if let Some(x) = parallax::ground_decor_x(*anchor, time_ms, speed, running) {
                self.draw_flower(x as f64, g - 5.0, FLOWER_COLORS[i % FLOWER_COLORS.len()]);
            }
        }
        for (i, anchor) in MUSHROOMS.iter().enumerate() {
            if let Some(x) = parallax::ground_decor_x(*anchor, time_ms, speed, running) {
                self.draw_mushroom(x as f64, g - 5.0, i % 2 == 0);
            }
        }
    }

    fn draw_flower(&self, x: f64, y: f64, color: &str) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str("#2F8B22");
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(x, y);
        ctx.line_to(x, y - 15.0);
        ctx.stroke();

        for i in 0..5 {
            let angle = i as f64 * TAU / 5.0 - PI / 2.0;
            self.fill_circle(x + angle.cos() * 5.0, y - 15.0 + angle.sin() * 5.0, 4.0, color);
        }
        self.fill_circle(x, y - 15.0, 3.0, "#FFD700");
    }

    fn draw_mushroom(&self, x: f64, y: f64, red: bool) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#F5DEB3");
        ctx.fill_rect(x - 3.0, y - 12.0, 6.0, 12.0);

        let (cap, rim) = if red {
            ("#FF4444", "#CC0000")
        } else {
            ("#8B4513", "#654321")
        };
        ctx.set_fill_style_str(cap);
        ctx.begin_path();
        let _ = ctx.ellipse(x, y - 12.0, 8.0, 6.0, 0.0, 0.0, TAU);
        ctx.fill();
        ctx.set_stroke_style_str(rim);
        ctx.set_line_width(1.0);
        ctx.stroke();

        if red {
            for (dx, dy) in [(-3.0, -13.0), (3.0, -12.0), (0.0, -15.0)] {
                self.fill_circle(x + dx, y + dy, 1.5, "white");
            }
        }
    }

    fn draw_stump(&self, obstacle: &Obstacle) {
        let ctx = &self.ctx;
        let (x, y) = (obstacle.pos.x as f64, obstacle.pos.y as f64);
        let (w, h) = (obstacle.size.x as f64, obstacle.size.y as f64);

        ctx.set_fill_style_str("#8B4513");
        ctx.fill_rect(x, y, w, h);
        ctx.set_stroke_style_str("#654321");
        ctx.set_line_width(2.0);
        ctx.stroke_rect(x, y, w, h);

        // Cut surface with rings
        ctx.set_fill_style_str("#D2691E");
        ctx.begin_path();
        let _ = ctx.ellipse(x + w / 2.0, y, w / 2.0, w / 4.0, 0.0, 0.0, TAU);
        ctx.fill();
        ctx.set_stroke_style_str("#8B4513");
        ctx.stroke();

        ctx.set_stroke_style_str("#A0522D");
        ctx.set_line_width(1.0);
        for (rx, ry) in [(w / 3.0, w / 6.0), (w / 5.0, w / 9.0)] {
            ctx.begin_path();
            let _ = ctx.ellipse(x + w / 2.0, y, rx, ry, 0.0, 0.0, TAU);
            ctx.stroke();
        }

        // Bark
        ctx.set_stroke_style_str("#654321");
        for i in 0..3 {
            let line_x = x + (w / 4.0) * (i as f64 + 0.5);
            ctx.begin_path();
            ctx.move_to(line_x, y + 5.0);
            ctx.line_to(line_x, y + h);
            ctx.stroke();
        }
    }

    fn draw_player(&self, player: &Player) {
        let ctx = &self.ctx;
        let (x, y) = (player.pos.x as f64, player.pos.y as f64);
        let (w, h) = (player.size.x as f64, player.size.y as f64);

        if let Some(img) = self.sprite_ready() {
            if ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)
                .is_ok()
            {
                return;
            }
        }
        // Fallback rectangle
        ctx.set_fill_style_str("#FF6347");
        ctx.fill_rect(x, y, w, h);
        ctx.set_stroke_style_str("#000");
        ctx.set_line_width(1.0);
        ctx.stroke_rect(x, y, w, h);
    }

    fn draw_sky_life(&self, speed: f32, time_ms: f64) {
        let ctx = &self.ctx;

        ctx.save();
        ctx.set_global_alpha(0.8);
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
        for layer in &CLOUDS {
            let x = parallax::drift_x(layer, time_ms, speed * CLOUD_SPEED_FACTOR, CLOUD_SPAN);
            let (x, y, s) = (x as f64, layer.y as f64, layer.scale as f64);
            ctx.begin_path();
            for (dx, dy, r) in [(0.0, 0.0, 15.0), (20.0, 0.0, 20.0), (40.0, 0.0, 15.0), (25.0, -10.0, 12.0)] {
                let (cx, cy) = (x + dx * s, y + dy * s);
                ctx.move_to(cx + r * s, cy);
                let _ = ctx.arc(cx, cy, r * s, 0.0, TAU);
            }
            ctx.fill();
        }
        ctx.restore();

        ctx.set_stroke_style_str("#333");
        ctx.set_line_width(2.0);
        ctx.set_line_cap("round");
        for (i, layer) in BIRDS.iter().enumerate() {
            let x = parallax::drift_x(layer, time_ms, speed * BIRD_SPEED_FACTOR, BIRD_SPAN) as f64;
            let y = layer.y as f64;
            let flap = ((time_ms + i as f64 * 1000.0) / 100.0).sin() * 5.0;
            for side in [-1.0, 1.0] {
                ctx.begin_path();
                ctx.move_to(x, y);
                ctx.quadratic_curve_to(x + side * 8.0, y - 8.0 + flap, x + side * 15.0, y - 5.0 + flap);
                ctx.stroke();
            }
        }
    }

    fn fill_circle(&self, x: f64, y: f64, r: f64, color: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        let _ = ctx.arc(x, y, r, 0.0, TAU);
        ctx.fill();
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, state: &GameState, time_ms: f64) {
        self.draw_sky();
        self.draw_hills();
        self.draw_ground(state, time_ms);

        for obstacle in &state.obstacles {
            self.draw_stump(obstacle);
        }
        self.draw_player(&state.player);

        if state.is_running() {
            self.draw_sky_life(state.run.scroll_speed, time_ms);
        }
    }
}
