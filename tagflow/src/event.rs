use crate::checked::CheckedFlowLayout;
use crate::hit::hit_test;

/// Input relevant to a tag layout, in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Primary mouse button went down.
    Press { x: i32, y: i32 },
    /// Primary mouse button came up.
    Release { x: i32, y: i32 },
    /// Key press, targeted at the focused tag.
    Key(Key),
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
}

/// Whether an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl Event {
    /// Convert a crossterm event. Returns `None` for input tags do not react
    /// to, such as moves, scrolls, key releases and other buttons.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{
            Event as CtEvent, KeyCode, KeyEventKind, MouseButton, MouseEventKind,
        };

        match event {
            CtEvent::Mouse(mouse) => {
                let x = i32::from(mouse.column);
                let y = i32::from(mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(Self::Press { x, y }),
                    MouseEventKind::Up(MouseButton::Left) => Some(Self::Release { x, y }),
                    _ => None,
                }
            }
            CtEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let key = match key.code {
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Esc => Key::Escape,
                    KeyCode::Tab => Key::Tab,
                    KeyCode::BackTab => Key::BackTab,
                    _ => return None,
                };
                Some(Self::Key(key))
            }
            _ => None,
        }
    }
}

/// Route an event to the tag it targets.
///
/// A press marks the tag under the cursor as pressed; releasing over the
/// same tag activates it. Space or Enter activates the `focused` tag.
pub fn dispatch(
    layout: &mut CheckedFlowLayout,
    event: &Event,
    focused: Option<usize>,
) -> EventResult {
    match *event {
        Event::Press { x, y } => {
            let Some(index) = hit_test(layout, x, y) else {
                return EventResult::Ignored;
            };
            match layout.press(index) {
                Ok(()) => EventResult::Consumed,
                Err(err) => {
                    log::debug!("[event] press on tag {index} ignored: {err}");
                    EventResult::Ignored
                }
            }
        }
        Event::Release { x, y } => {
            if layout.pressed().is_none() {
                return EventResult::Ignored;
            }
            let over = hit_test(layout, x, y);
            if let Err(err) = layout.release(over) {
                log::debug!("[event] release ignored: {err}");
            }
            EventResult::Consumed
        }
        Event::Key(Key::Char(' ') | Key::Enter) => {
            let Some(index) = focused else {
                return EventResult::Ignored;
            };
            match layout.activate(index) {
                Ok(_) => EventResult::Consumed,
                Err(_) => EventResult::Ignored,
            }
        }
        Event::Key(_) => EventResult::Ignored,
    }
}
