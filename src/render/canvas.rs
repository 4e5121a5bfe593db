//! Drawing surface contract.
//!
//! The simulator emits primitive draw calls through this trait so it stays
//! decoupled from whatever surface the host platform offers. When no surface
//! is available the simulator simply skips drawing for that frame.

/// Opaque RGB color; alpha travels separately with each draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Palette lifted from the platform's visual design.
pub mod palette {
    use super::Color;

    pub const VIBRANT_GREEN: Color = Color::rgb(0x22, 0xc5, 0x5e);
    pub const YELLOW_GREEN: Color = Color::rgb(0x65, 0xa3, 0x0d);
    pub const WILTED_YELLOW: Color = Color::rgb(0xca, 0x8a, 0x04);
    pub const DISTRESSED_RED: Color = Color::rgb(0xdc, 0x26, 0x26);
    pub const TRUNK_BROWN: Color = Color::rgb(0x8b, 0x45, 0x13);

    pub const ENERGY_BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);
    pub const PANEL_NAVY: Color = Color::rgb(0x1e, 0x40, 0xaf);
    pub const BLADE_GRAY: Color = Color::rgb(0xe5, 0xe7, 0xeb);

    pub const INDUSTRY_GRAY: Color = Color::rgb(0x6b, 0x72, 0x80);
    pub const STACK_GRAY: Color = Color::rgb(0x4b, 0x55, 0x63);
    pub const WINDOW_AMBER: Color = Color::rgb(0xfb, 0xbf, 0x24);

    pub const CLEAN_EMERALD: Color = Color::rgb(0x10, 0xb9, 0x81);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const SKY_CLEAN: Color = Color::rgb(0x87, 0xce, 0xeb);
    pub const SKY_HAZY: Color = Color::rgb(0xf0, 0xe6, 0x8c);
    pub const SKY_SMOGGY: Color = Color::rgb(0xdd, 0xa0, 0xdd);
    pub const SKY_TOXIC: Color = Color::rgb(0xb8, 0x86, 0x0b);
    pub const HORIZON: Color = Color::rgb(0xe0, 0xf2, 0xfe);

    pub const GROUND_LIGHT: Color = Color::rgb(0x84, 0xcc, 0x16);
    pub const GROUND_DARK: Color = Color::rgb(0x36, 0x53, 0x14);

    pub const FAUNA: [Color; 5] = [
        Color::rgb(0xef, 0x44, 0x44),
        Color::rgb(0x3b, 0x82, 0xf6),
        Color::rgb(0x10, 0xb9, 0x81),
        Color::rgb(0xf5, 0x9e, 0x0b),
        Color::rgb(0x8b, 0x5c, 0xf6),
    ];
}

pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color, alpha: f32);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, alpha: f32);

    fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
        alpha: f32,
    );

    /// Vertical gradient band, top color fading into bottom.
    fn fill_vertical_gradient(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        top: Color,
        bottom: Color,
    );
}

/// A draw call captured by [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        alpha: f32,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
        alpha: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
        alpha: f32,
    },
    Gradient {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        top: Color,
        bottom: Color,
    },
}

/// Canvas that records draw calls instead of presenting them.
#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for Recorder {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color, alpha: f32) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
            alpha,
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, alpha: f32) {
        self.ops.push(DrawOp::Circle {
            x,
            y,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
        alpha: f32,
    ) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
            alpha,
        });
    }

    fn fill_vertical_gradient(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        top: Color,
        bottom: Color,
    ) {
        self.ops.push(DrawOp::Gradient {
            x,
            y,
            width,
            height,
            top,
            bottom,
        });
    }
}
