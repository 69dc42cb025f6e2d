//! Frame description
//!
//! The core never draws. [`build_frame`] turns the current [`GameState`] into an
//! ordered [`DrawList`], and the host replays it onto whatever [`Surface`] it owns.

use crate::{GameState, MenuItem, MenuState, OptionItem, OptionsDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const HIGHLIGHT: Color = Color::rgb(255, 214, 0);
    pub const DIM: Color = Color::rgb(140, 140, 140);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#ffd600`
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Point {
        x: f32,
        y: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        align: Align,
        color: Color,
    },
}

/// Drawing primitives a host provides. Coordinates are in arena units.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn point(&mut self, x: f32, y: f32, color: Color);
    fn text(&mut self, x: f32, y: f32, text: &str, size: f32, align: Align, color: Color);

    /// Called once after the last command of a frame
    fn present(&mut self) {}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn text(&mut self, x: f32, y: f32, text: impl Into<String>, size: f32, align: Align, color: Color) {
        self.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            size,
            align,
            color,
        });
    }

    /// Replay every command in order, then present
    pub fn paint(&self, surface: &mut dyn Surface) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => surface.clear(*color),
                DrawCommand::FillRect { x, y, w, h, color } => {
                    surface.fill_rect(*x, *y, *w, *h, *color)
                }
                DrawCommand::Point { x, y, color } => surface.point(*x, *y, *color),
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    size,
                    align,
                    color,
                } => surface.text(*x, *y, text, *size, *align, *color),
            }
        }
        surface.present();
    }
}

const SCORE_Y: f32 = 100.0;
const SCORE_SIZE: f32 = 48.0;
const PARTITION_GAP: usize = 10;
const TITLE_Y: f32 = 110.0;
const TITLE_SIZE: f32 = 56.0;
const ROW_TOP: f32 = 200.0;
const ROW_SPACING: f32 = 36.0;
const ROW_SIZE: f32 = 24.0;
const MARKER_OFFSET_X: f32 = 170.0;

/// One menu line: what it selects, what it says, and how its current value reads
struct Row<T> {
    item: T,
    label: &'static str,
    value: fn(&OptionsDraft) -> Option<String>,
}

fn no_value(_: &OptionsDraft) -> Option<String> {
    None
}

fn on_off(on: bool) -> Option<String> {
    Some(if on { "On" } else { "Off" }.to_string())
}

const MAIN_ROWS: [Row<MenuItem>; 3] = [
    Row {
        item: MenuItem::Play,
        label: "Play",
        value: no_value,
    },
    Row {
        item: MenuItem::Options,
        label: "Options",
        value: no_value,
    },
    Row {
        item: MenuItem::Quit,
        label: "Quit",
        value: no_value,
    },
];

const OPTION_ROWS: [Row<OptionItem>; 7] = [
    Row {
        item: OptionItem::Resolution,
        label: "Resolution",
        value: |d| Some(d.resolution.label()),
    },
    Row {
        item: OptionItem::Fullscreen,
        label: "Fullscreen",
        value: |d| on_off(d.fullscreen),
    },
    Row {
        item: OptionItem::Audio,
        label: "Audio",
        value: |d| on_off(d.audio_enabled),
    },
    Row {
        item: OptionItem::BallSpeed,
        label: "Ball Speed",
        value: |d| Some(d.ball_speed.label().to_string()),
    },
    Row {
        item: OptionItem::PaddleSpeed,
        label: "Paddle Speed",
        value: |d| Some(d.paddle_speed.label().to_string()),
    },
    Row {
        item: OptionItem::Apply,
        label: "Apply",
        value: no_value,
    },
    Row {
        item: OptionItem::Back,
        label: "Back",
        value: no_value,
    },
];

/// Build the draw list for the current screen
pub fn build_frame(state: &GameState) -> DrawList {
    let mut list = DrawList::new();
    list.push(DrawCommand::Clear(Color::BLACK));

    match state.menu.state() {
        MenuState::InGame => draw_game(&mut list, state),
        MenuState::MainMenu { highlighted } => {
            let hint = state.menu.is_starting().then_some("Get ready...");
            draw_menu(&mut list, state, "PONG", &MAIN_ROWS, highlighted, hint);
        }
        MenuState::OptionsMenu { highlighted } => {
            draw_menu(
                &mut list,
                state,
                "OPTIONS",
                &OPTION_ROWS,
                highlighted,
                Some("Left/Right to change, Enter on Apply"),
            );
        }
    }

    list
}

fn draw_game(list: &mut DrawList, state: &GameState) {
    let width = state.arena.width;

    for paddle in &state.paddles {
        list.push(DrawCommand::FillRect {
            x: paddle.x,
            y: paddle.y,
            w: paddle.width,
            h: paddle.height,
            color: Color::WHITE,
        });
    }
    let ball = &state.ball;
    list.push(DrawCommand::FillRect {
        x: ball.pos.x,
        y: ball.pos.y,
        w: ball.size,
        h: ball.size,
        color: Color::WHITE,
    });

    list.text(
        width / 4.0,
        SCORE_Y,
        state.score.player.to_string(),
        SCORE_SIZE,
        Align::Center,
        Color::WHITE,
    );
    list.text(
        width * 3.0 / 4.0,
        SCORE_Y,
        state.score.cpu.to_string(),
        SCORE_SIZE,
        Align::Center,
        Color::WHITE,
    );

    let x = width / 2.0;
    for y in (0..state.arena.height as usize).step_by(PARTITION_GAP) {
        list.push(DrawCommand::Point {
            x,
            y: y as f32,
            color: Color::WHITE,
        });
    }
}

fn draw_menu<T: Copy + PartialEq>(
    list: &mut DrawList,
    state: &GameState,
    title: &str,
    rows: &[Row<T>],
    highlighted: T,
    hint: Option<&str>,
) {
    let center = state.arena.width / 2.0;
    let draft = state.menu.draft();

    list.text(center, TITLE_Y, title, TITLE_SIZE, Align::Center, Color::WHITE);

    for (i, row) in rows.iter().enumerate() {
        let y = ROW_TOP + i as f32 * ROW_SPACING;
        let active = row.item == highlighted;
        let color = if active { Color::HIGHLIGHT } else { Color::WHITE };
        let text = match (row.value)(draft) {
            Some(value) => format!("{}: {}", row.label, value),
            None => row.label.to_string(),
        };
        if active {
            list.text(center - MARKER_OFFSET_X, y, ">", ROW_SIZE, Align::Left, color);
        }
        list.text(center, y, text, ROW_SIZE, Align::Center, color);
    }

    if let Some(hint) = hint {
        let y = ROW_TOP + rows.len() as f32 * ROW_SPACING + ROW_SPACING;
        list.text(center, y, hint, ROW_SIZE * 0.75, Align::Center, Color::DIM);
    }
}
