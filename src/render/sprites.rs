//! Per-entity draw routines.
//!
//! Shapes mirror the platform's canvas scene: swaying trees scaled by health,
//! bobbing fauna, rotating turbines and gridded panels, factories with
//! smokestacks, all over a pollution-tinted sky.

use crate::{
    entity::{Entity, EnergyKind, CANVAS_HEIGHT, CANVAS_WIDTH},
    particle::Particle,
    render::canvas::{palette, Canvas, Color},
    state::EnvironmentalState,
};

/// Sky tint darkens with the CO2 load.
pub fn sky_color(state: &EnvironmentalState) -> Color {
    let pollution = (state.co2_levels - 350.0) / 150.0;
    if pollution > 0.7 {
        palette::SKY_TOXIC
    } else if pollution > 0.4 {
        palette::SKY_SMOGGY
    } else if pollution > 0.2 {
        palette::SKY_HAZY
    } else {
        palette::SKY_CLEAN
    }
}

pub fn draw_background(canvas: &mut dyn Canvas, state: &EnvironmentalState) {
    let sky_height = CANVAS_HEIGHT * 0.7;
    canvas.fill_vertical_gradient(
        0.0,
        0.0,
        CANVAS_WIDTH,
        sky_height,
        sky_color(state),
        palette::HORIZON,
    );
    canvas.fill_vertical_gradient(
        0.0,
        sky_height,
        CANVAS_WIDTH,
        CANVAS_HEIGHT - sky_height,
        palette::GROUND_LIGHT,
        palette::GROUND_DARK,
    );
}

pub fn draw_entity(canvas: &mut dyn Canvas, entity: &Entity, frame: u64) {
    match entity.kind {
        crate::entity::EntityKind::Flora => draw_flora(canvas, entity, frame),
        crate::entity::EntityKind::Fauna => draw_fauna(canvas, entity, frame),
        crate::entity::EntityKind::EnergySource => draw_energy(canvas, entity, frame),
        crate::entity::EntityKind::IndustrySource => draw_industry(canvas, entity),
    }
}

fn draw_flora(canvas: &mut dyn Canvas, entity: &Entity, frame: u64) {
    let sway = (frame as f32 * 0.02 + entity.phase).sin() * 2.0;
    let x = entity.x + sway;
    // Trunk, then crown scaled and faded by health.
    canvas.fill_rect(x - 3.0, entity.y, 6.0, 25.0, palette::TRUNK_BROWN, 1.0);
    canvas.fill_circle(
        x,
        entity.y - 10.0,
        entity.size * entity.health,
        entity.color,
        0.7 + entity.health * 0.3,
    );
}

fn draw_fauna(canvas: &mut dyn Canvas, entity: &Entity, frame: u64) {
    let move_x = (frame as f32 * 0.01 + entity.phase).sin() * 20.0;
    let move_y = (frame as f32 * 0.015 + entity.phase).cos() * 5.0;
    let x = entity.x + move_x;
    let y = entity.y + move_y;
    canvas.fill_circle(x, y, entity.size, entity.color, entity.health);
    canvas.fill_circle(x - 3.0, y - 2.0, 1.0, palette::BLACK, 1.0);
    canvas.fill_circle(x + 3.0, y - 2.0, 1.0, palette::BLACK, 1.0);
}

fn draw_energy(canvas: &mut dyn Canvas, entity: &Entity, frame: u64) {
    match entity.energy_kind {
        Some(EnergyKind::Wind) => {
            let rotation = frame as f32 * 0.05 + entity.phase;
            let (mx1, my1) = rotate(0.0, -20.0, rotation);
            let (mx2, my2) = rotate(0.0, 20.0, rotation);
            canvas.stroke_line(
                entity.x + mx1,
                entity.y + my1,
                entity.x + mx2,
                entity.y + my2,
                3.0,
                entity.color,
                1.0,
            );
            for blade in 0..3 {
                let angle = rotation + blade as f32 * std::f32::consts::TAU / 3.0;
                let (bx1, by1) = rotate(0.0, -20.0, angle);
                let (bx2, by2) = rotate(0.0, -35.0, angle);
                canvas.stroke_line(
                    entity.x + bx1,
                    entity.y + by1,
                    entity.x + bx2,
                    entity.y + by2,
                    2.0,
                    palette::BLADE_GRAY,
                    1.0,
                );
            }
        }
        Some(EnergyKind::Solar) | None => {
            canvas.fill_rect(
                entity.x - 15.0,
                entity.y - 8.0,
                30.0,
                16.0,
                palette::PANEL_NAVY,
                1.0,
            );
            let mut cell = -12.0;
            while cell <= 12.0 {
                canvas.stroke_line(
                    entity.x + cell,
                    entity.y - 8.0,
                    entity.x + cell,
                    entity.y + 8.0,
                    1.0,
                    palette::ENERGY_BLUE,
                    1.0,
                );
                cell += 6.0;
            }
        }
    }
}

fn draw_industry(canvas: &mut dyn Canvas, entity: &Entity) {
    canvas.fill_rect(entity.x - 20.0, entity.y - 15.0, 40.0, 30.0, entity.color, 1.0);
    // Smokestacks.
    canvas.fill_rect(
        entity.x - 15.0,
        entity.y - 25.0,
        8.0,
        15.0,
        palette::STACK_GRAY,
        1.0,
    );
    canvas.fill_rect(
        entity.x + 7.0,
        entity.y - 25.0,
        8.0,
        15.0,
        palette::STACK_GRAY,
        1.0,
    );
    // Windows.
    canvas.fill_rect(
        entity.x - 10.0,
        entity.y - 10.0,
        6.0,
        6.0,
        palette::WINDOW_AMBER,
        1.0,
    );
    canvas.fill_rect(
        entity.x + 4.0,
        entity.y - 10.0,
        6.0,
        6.0,
        palette::WINDOW_AMBER,
        1.0,
    );
}

pub fn draw_particle(canvas: &mut dyn Canvas, particle: &Particle) {
    canvas.fill_circle(
        particle.x,
        particle.y,
        particle.radius,
        particle.kind.color(),
        particle.opacity() * 0.7,
    );
}

fn rotate(x: f32, y: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_tint_follows_co2() {
        let mut state = EnvironmentalState::default();
        state.co2_levels = 350.0;
        assert_eq!(sky_color(&state), palette::SKY_CLEAN);
        state.co2_levels = 400.0;
        assert_eq!(sky_color(&state), palette::SKY_HAZY);
        state.co2_levels = 440.0;
        assert_eq!(sky_color(&state), palette::SKY_SMOGGY);
        state.co2_levels = 490.0;
        assert_eq!(sky_color(&state), palette::SKY_TOXIC);
    }
}
