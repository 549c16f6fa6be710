//! Pile rendering for the Nim GUI

use crate::board::MAX_TAKE;
use crate::{GameState, Move, Pile};
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Pile view handles rendering and input for the two marble rows.
///
/// The top of a pile is its rightmost marble. Pointing at a marble selects
/// it and every marble to its right, so a click takes one or two.
pub struct PileView {
    marble_radius: f32,
    table_rect: Rect,
}

impl Default for PileView {
    fn default() -> Self {
        Self {
            marble_radius: MAX_MARBLE_RADIUS,
            table_rect: Rect::NOTHING,
        }
    }
}

impl PileView {
    /// Render the piles and return the move clicked, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &GameState,
        last_taken: Option<Move>,
        suggested_move: Option<Move>,
        accepts_input: bool,
    ) -> Option<Move> {
        let available = ui.available_size();
        let width = (available.x - 20.0).max(200.0);
        let height = 2.0 * ROW_HEIGHT + 2.0 * TABLE_MARGIN;

        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click());
        self.table_rect = response.rect;

        let widest = state.red.max(state.blue).min(MAX_DRAWN_MARBLES).max(1) + MAX_TAKE;
        let row_width = width - 2.0 * TABLE_MARGIN - LABEL_WIDTH;
        self.marble_radius = (row_width / (widest as f32 * MARBLE_SPACING)).min(MAX_MARBLE_RADIUS);

        painter.rect_filled(self.table_rect, CornerRadius::same(8), TABLE_BG);

        let hovered = if accepts_input {
            response.hover_pos().and_then(|p| self.marble_at(p, state))
        } else {
            None
        };

        for (row, pile) in Pile::ALL.into_iter().enumerate() {
            self.draw_pile(&painter, row, pile, state.count(pile));

            if let Some(mv) = last_taken.filter(|mv| mv.pile == pile) {
                self.draw_taken(&painter, row, state.count(pile), mv.count);
            }
            if let Some(mv) = suggested_move.filter(|mv| mv.pile == pile) {
                self.draw_selection(&painter, row, state.count(pile), mv.count, None);
            }
            if let Some(mv) = hovered.filter(|mv| mv.pile == pile) {
                self.draw_selection(&painter, row, state.count(pile), mv.count, Some(hover_take()));
            }
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    fn row_center_y(&self, row: usize) -> f32 {
        self.table_rect.min.y + TABLE_MARGIN + ROW_HEIGHT * (row as f32 + 0.5)
    }

    /// Screen position of the `slot`-th drawn marble (0 = bottom of pile)
    fn marble_center(&self, row: usize, slot: u32) -> Pos2 {
        let x = self.table_rect.min.x
            + TABLE_MARGIN
            + LABEL_WIDTH
            + self.marble_radius
            + slot as f32 * self.marble_radius * MARBLE_SPACING;
        Pos2::new(x, self.row_center_y(row))
    }

    fn drawn(count: u32) -> u32 {
        count.min(MAX_DRAWN_MARBLES)
    }

    fn draw_pile(&self, painter: &Painter, row: usize, pile: Pile, count: u32) {
        let (fill, shine) = marble_colors(pile);
        let label_pos = Pos2::new(self.table_rect.min.x + TABLE_MARGIN, self.row_center_y(row));

        painter.text(
            label_pos,
            Align2::LEFT_CENTER,
            format!("{} {}", pile.name().to_uppercase(), count),
            FontId::proportional(15.0),
            TEXT_PRIMARY,
        );

        if count == 0 {
            let slot = self.marble_center(row, 0);
            painter.circle_stroke(slot, self.marble_radius, Stroke::new(1.0, TABLE_SLOT));
            return;
        }

        for slot in 0..Self::drawn(count) {
            let center = self.marble_center(row, slot);
            painter.circle_filled(center, self.marble_radius, fill);
            painter.circle_filled(
                center - Vec2::splat(self.marble_radius * 0.3),
                self.marble_radius * 0.3,
                shine,
            );
        }
    }

    /// Outline the marbles removed by the previous move
    fn draw_taken(&self, painter: &Painter, row: usize, remaining: u32, taken: u32) {
        let first = Self::drawn(remaining);
        for slot in first..first + taken {
            let center = self.marble_center(row, slot);
            painter.circle_stroke(center, self.marble_radius, Stroke::new(1.5, TAKEN_OUTLINE));
        }
    }

    /// Ring (or tint) the top `take` marbles of a pile
    fn draw_selection(&self, painter: &Painter, row: usize, count: u32, take: u32, tint: Option<Color32>) {
        let drawn = Self::drawn(count);
        for slot in drawn.saturating_sub(take)..drawn {
            let center = self.marble_center(row, slot);
            match tint {
                Some(color) => painter.circle_filled(center, self.marble_radius, color),
                None => painter.circle_stroke(
                    center,
                    self.marble_radius + 3.0,
                    Stroke::new(2.5, SUGGESTION_RING),
                ),
            };
        }
    }

    /// Move selected by pointing at `pos`, if it names a legal take
    fn marble_at(&self, pos: Pos2, state: &GameState) -> Option<Move> {
        for (row, pile) in Pile::ALL.into_iter().enumerate() {
            if (pos.y - self.row_center_y(row)).abs() > self.marble_radius {
                continue;
            }

            let drawn = Self::drawn(state.count(pile));
            for slot in 0..drawn {
                if self.marble_center(row, slot).distance(pos) <= self.marble_radius {
                    let take = drawn - slot;
                    return (take <= MAX_TAKE).then(|| Move::new(pile, take));
                }
            }
        }
        None
    }
}

fn marble_colors(pile: Pile) -> (Color32, Color32) {
    match pile {
        Pile::Red => (RED_MARBLE, RED_MARBLE_HIGHLIGHT),
        Pile::Blue => (BLUE_MARBLE, BLUE_MARBLE_HIGHLIGHT),
    }
}
