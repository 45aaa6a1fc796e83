//! Drawing the playfield with `embedded-graphics`.
//!
//! The field is a monochrome 128×64 surface: every grid cell is a 2×2 block
//! at `(2x, 2y)`. [`Playfield`] maps that surface onto a colour LCD.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_6X10,
    },
    pixelcolor::{
        BinaryColor,
        Rgb565,
    },
    prelude::*,
    primitives::{
        PrimitiveStyle,
        Rectangle,
    },
    text::{
        Alignment,
        Text,
    },
};

use crate::{
    fruit::FruitSource,
    grid::{
        Cell,
        GRID_H,
        GRID_W,
    },
    session::{
        Session,
        SessionState,
        TickOutcome,
    },
    snake::StepResult,
};

/// Pixels per cell edge.
pub const CELL_PX: u32 = 2;
/// Size of the monochrome field in pixels.
pub const FIELD_SIZE: Size = Size::new(GRID_W as u32 * CELL_PX, GRID_H as u32 * CELL_PX);

/// Plots one cell as a 2×2 block.
pub fn draw_cell<D>(target: &mut D, cell: Cell, on: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let color = if on { BinaryColor::On } else { BinaryColor::Off };
    let top_left = Point::new(i32::from(cell.x), i32::from(cell.y)) * CELL_PX as i32;
    Rectangle::new(top_left, Size::new_equal(CELL_PX))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Redraws everything: clears the field, then snake, fruit and, after a
/// fatal step, the GAME OVER banner.
pub fn draw_board<D, F>(target: &mut D, session: &Session<'_, F>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
    F: FruitSource,
{
    target.clear(BinaryColor::Off)?;
    for cell in session.snake().iter() {
        draw_cell(target, cell, true)?;
    }
    if let Some(fruit) = session.fruit() {
        draw_cell(target, fruit, true)?;
    }
    if session.state() == SessionState::GameOver {
        draw_game_over(target)?;
    }
    Ok(())
}

/// Draws only what `outcome` changed. A reset or a fatal step repaints the
/// whole field.
pub fn draw_tick<D, F>(target: &mut D, session: &Session<'_, F>, outcome: TickOutcome) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
    F: FruitSource,
{
    match outcome {
        TickOutcome::Reset => draw_board(target, session),
        TickOutcome::Step(StepResult::Moved { head, vacated }) => {
            draw_cell(target, vacated, false)?;
            draw_cell(target, head, true)
        }
        TickOutcome::Step(StepResult::MovedAndAte { head, vacated }) => {
            if let Some(vacated) = vacated {
                draw_cell(target, vacated, false)?;
            }
            draw_cell(target, head, true)?;
            match session.fruit() {
                Some(fruit) => draw_cell(target, fruit, true),
                None => Ok(()),
            }
        }
        // The fruit is gone once the game ends, so repaint the whole field.
        TickOutcome::Step(StepResult::Blocked(reason)) if reason.is_fatal() => draw_board(target, session),
        TickOutcome::Step(StepResult::Blocked(_)) | TickOutcome::Settling | TickOutcome::Halted => Ok(()),
    }
}

pub fn draw_game_over<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = Rectangle::new(Point::zero(), FIELD_SIZE).center();
    Rectangle::with_center(center, Size::new(64, 16))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(target)?;
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    Text::with_alignment("GAME OVER", center + Point::new(0, 3), style, Alignment::Center).draw(target)?;
    Ok(())
}

/// The monochrome field, scaled and placed on an `Rgb565` display.
pub struct Playfield<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
    on: Rgb565,
    off: Rgb565,
}

impl<'a, D> Playfield<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D, origin: Point, scale: u32) -> Self {
        Self {
            target,
            origin,
            scale: scale.max(1),
            on: Rgb565::WHITE,
            off: Rgb565::BLACK,
        }
    }

    /// Centres the field on `target`.
    pub fn centered(target: &'a mut D, scale: u32) -> Self {
        let scale = scale.max(1);
        let outer = target.bounding_box();
        let field = Rectangle::with_center(outer.center(), FIELD_SIZE * scale);
        Self::new(target, field.top_left, scale)
    }

    #[must_use]
    pub fn with_colors(self, on: Rgb565, off: Rgb565) -> Self {
        Self { on, off, ..self }
    }

    fn map(&self, color: BinaryColor) -> Rgb565 {
        match color {
            BinaryColor::On => self.on,
            BinaryColor::Off => self.off,
        }
    }

    fn scaled(&self, area: &Rectangle) -> Rectangle {
        Rectangle::new(self.origin + area.top_left * self.scale as i32, area.size * self.scale)
    }
}

impl<D> OriginDimensions for Playfield<'_, D> {
    fn size(&self) -> Size {
        FIELD_SIZE
    }
}

impl<D> DrawTarget for Playfield<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let area = self.scaled(&Rectangle::new(point, Size::new(1, 1)));
                let color = self.map(color);
                self.target.fill_solid(&area, color)?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }
        let area = self.scaled(&area);
        let color = self.map(color);
        self.target.fill_solid(&area, color)
    }
}
