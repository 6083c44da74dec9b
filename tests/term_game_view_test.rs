use blockfall::core::{FieldSession, Matrix};
use blockfall::term::{palette, GameView, TerminalRenderer, Viewport, BACKGROUND};
use blockfall::types::PieceKind;

fn o_session() -> FieldSession {
    FieldSession::with_first_piece(Matrix::new(12, 20), PieceKind::O, 1)
}

#[test]
fn term_view_renders_border_corners() {
    let snap = o_session().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // field pixels = 12*2 by 20*1 => 24x20
    // plus border => 26x22
    assert_eq!(view.frame_size(&snap), (26, 22));
    let fb = view.render(&snap, Viewport::new(26, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(25, 21).unwrap().ch, '┘');
    assert_eq!(fb.get(12, 0).unwrap().ch, '─');
    assert_eq!(fb.get(0, 10).unwrap().ch, '│');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut snap = o_session().snapshot();
    snap.grid.set(0, 19, 5);

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(26, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    let color = palette(5).unwrap();
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color);
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_active_piece_over_field() {
    let snap = o_session().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(26, 22));

    // O sits at x=5..6, y=0..1 -> columns 11..14, rows 1..2.
    let color = palette(PieceKind::O.color_id()).unwrap();
    for (x, y) in [(11, 1), (14, 1), (11, 2), (14, 2)] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█', "({}, {})", x, y);
        assert_eq!(cell.style.fg, color);
    }
    let empty = fb.get(1, 1).unwrap();
    assert_eq!(empty.ch, ' ');
    assert_eq!(empty.style.bg, BACKGROUND);
}

#[test]
fn term_view_centers_field_and_draws_controls_when_wide_enough() {
    let snap = o_session().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));

    // (60 - 26) / 2 = 17, (24 - 22) / 2 = 1
    assert_eq!(fb.get(17, 1).unwrap().ch, '┌');

    // Controls start two columns right of the border.
    let x = 17 + 26 + 2;
    assert_eq!(fb.get(x, 1).unwrap().ch, '←');
    assert_eq!(fb.get(x + 5, 1).unwrap().ch, 'm');
}

#[test]
fn term_view_skips_controls_when_narrow() {
    let snap = o_session().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    for x in 28..30 {
        for y in 0..22 {
            assert_eq!(fb.get(x, y).unwrap().ch, ' ');
        }
    }
}

#[test]
fn term_view_clips_field_wider_than_the_terminal() {
    let mut snap = FieldSession::new(40_000, 20, 1).snapshot();
    snap.grid.set(39_999, 19, 3);
    let view = GameView::default();

    assert_eq!(view.frame_size(&snap), (u16::MAX, 22));
    let fb = view.render(&snap, Viewport::new(80, 24));

    // The frame starts at the left edge and runs off the right one.
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(79, 1).unwrap().ch, '─');
    assert_eq!(fb.get(1, 2).unwrap().style.bg, BACKGROUND);
}

#[test]
fn term_renderer_writes_only_changes_after_a_move() {
    let mut session = o_session();
    let view = GameView::default();
    let vp = Viewport::new(26, 22);
    let mut renderer = TerminalRenderer::with_writer(Vec::new());

    renderer.draw(&view.render(&session.snapshot(), vp)).unwrap();
    let full = renderer.writer().len();

    session.move_horizontal(1);
    renderer.draw(&view.render(&session.snapshot(), vp)).unwrap();
    let diff = renderer.writer().len() - full;

    assert!(diff > 0);
    assert!(diff < full / 4);
}
