//! Mapping from crossterm events to visualizer [`Action`]s.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use gridpath_core::Point;
use gridpath_search::Algorithm;

/// Terminal columns used to draw one grid cell.
///
/// Terminal cells are roughly twice as tall as they are wide, so each grid
/// cell spans two columns and one row. In "pixel" space one unit is one
/// column, which makes a grid cell `CELL_WIDTH` units on each side.
pub const CELL_WIDTH: i32 = 2;

/// What the user asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Paint(Point),
    Erase(Point),
    Run(Algorithm),
    Clear,
    Reset,
    /// Stop a running search, or quit when idle.
    Cancel,
    Quit,
    /// The terminal changed size; redraw.
    Redraw,
}

/// Convert a terminal position to the pixel space the grid maps from.
#[inline]
pub fn to_point(column: u16, row: u16) -> Point {
    Point::new(column as i32, row as i32 * CELL_WIDTH)
}

/// Map a key code to an action.
pub fn key_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(' ') => Some(Action::Run(Algorithm::AStar)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::Run(Algorithm::Dijkstra)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Clear),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

/// Map a mouse event to an action. Holding a button while dragging keeps
/// painting or erasing.
pub fn mouse_action(me: MouseEvent) -> Option<Action> {
    let p = to_point(me.column, me.row);
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Action::Paint(p))
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            Some(Action::Erase(p))
        }
        _ => None,
    }
}

/// Map any terminal event to an action.
pub fn action_for(ev: Event) -> Option<Action> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => key_action(code),
        Event::Mouse(me) => mouse_action(me),
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}
