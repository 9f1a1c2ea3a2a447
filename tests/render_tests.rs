//! Rendering stack scenes into framebuffers (no terminal involved).

use gem_league::core::{Board, Grid, SimpleRng};
use gem_league::engine::{MainMenu, StateStack};
use gem_league::term::{BoardView, FrameBuffer, StackView, Viewport};
use gem_league::types::{Cursor, Gem, InputAction, PressedActions, GRID_ROWS};
use gem_league::Settings;

use Gem::{Fire as F, Grass as G, Rock as R, Water as W};

fn entered_board() -> Board {
    let mut board = Board::new(SimpleRng::new(11));
    board.enter();
    board
}

fn exact_viewport(view: &BoardView) -> Viewport {
    let (w, h) = view.frame_size();
    Viewport::new(w, h)
}

#[test]
fn test_board_frame_has_border_corners() {
    let view = BoardView::default();
    let viewport = exact_viewport(&view);
    let fb = view.render(&entered_board().snapshot(), viewport);

    let (w, h) = view.frame_size();
    assert_eq!((w, h), (14, 14));
    assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
    assert_eq!(fb.get(w - 1, 0).map(|c| c.ch), Some('┐'));
    assert_eq!(fb.get(0, h - 1).map(|c| c.ch), Some('└'));
    assert_eq!(fb.get(w - 1, h - 1).map(|c| c.ch), Some('┘'));
}

#[test]
fn test_gems_and_cursor_are_drawn() {
    let mut board = entered_board();
    *board.grid_mut() = Grid::from_bottom_rows(&[[F, W, G, R, F, W]]);
    board.set_cursor(Cursor::new(GRID_ROWS - 1, 2));

    let view = BoardView::default();
    let fb = view.render(&board.snapshot(), exact_viewport(&view));

    let bottom = GRID_ROWS as u16;
    let text = fb.row_text(bottom);
    assert_eq!(text, "│████[][]████│");

    // Empty cells show a dim dot.
    assert!(fb.row_text(1).contains('·'));
}

#[test]
fn test_game_over_overlay() {
    let mut board = entered_board();
    let pattern = [F, W, G, R];
    let mut rows = [[Gem::Empty; 6]; GRID_ROWS];
    for (row, cells) in rows.iter_mut().enumerate() {
        cells[5] = pattern[row % pattern.len()];
    }
    *board.grid_mut() = Grid::from_rows(rows);
    assert!(board.advance(0.0, &PressedActions::new()).is_terminal());

    let view = BoardView::default();
    let fb = view.render(&board.snapshot(), Viewport::new(40, 20));
    assert!((0..20).any(|y| fb.row_text(y).contains("GAME OVER")));
}

#[test]
fn test_side_panel_shows_countdown() {
    let board = entered_board();
    let view = BoardView::default();
    let fb = view.render(&board.snapshot(), Viewport::new(40, 20));
    let all: String = (0..20).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
    assert!(all.contains("RISE IN"));
    assert!(all.contains("5.0s"));
}

#[test]
fn test_menu_highlights_selection() {
    let settings = Settings::from_lookup(|_| None);
    let mut stack = StateStack::new();
    stack.push(Box::new(MainMenu::new(3, settings.session())), None);
    stack.update(0.0, &[InputAction::Down].into_iter().collect());

    let view = StackView::default();
    let mut fb = FrameBuffer::new(1, 1);
    let viewport = Viewport::new(40, 20);
    view.render_into(stack.scenes(), viewport, &mut fb);

    let all: String = (0..20).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
    assert!(all.contains("GEM LEAGUE"));
    assert!(all.contains("> Settings <"));
    assert!(all.contains("Play"));
    assert!(!all.contains("> Play <"));
}

#[test]
fn test_match_covers_menu() {
    let settings = Settings::from_lookup(|_| None);
    let mut stack = StateStack::new();
    stack.push(Box::new(MainMenu::new(3, settings.session())), None);
    stack.update(0.0, &[InputAction::Select].into_iter().collect());

    let view = StackView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(stack.scenes(), Viewport::new(40, 20), &mut fb);

    let all: String = (0..20).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
    assert!(!all.contains("GEM LEAGUE"));
    assert!(all.contains("RISE IN"));
}
