use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as CtEvent};
use crossterm::style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use simplelog::{Config, LevelFilter, WriteLogger};
use tagflow::{
    dispatch, Alignment, CheckedFlowLayout, Color, Constraint, Edges, Event, FlowConfig, Key,
    Rect, Rgb, SelectionListener, SelectionSet, StateColors,
};

const TAGS: &[&str] = &[
    "rust", "terminal", "layout", "flow", "tags", "selection", "crossterm", "unicode",
    "wrapping", "justify", "center", "margins", "日本語", "listener", "activation",
];

struct LogListener;

impl SelectionListener for LogListener {
    fn on_tag_activated(&mut self, index: usize, selected: bool) {
        log::info!("tag {index} -> {selected}");
    }

    fn on_selection_changed(&mut self, selected: &SelectionSet) {
        log::info!("selection {:?}", selected.to_vec());
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("/tmp/tagflow_demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("failed to init logger");

    let config = FlowConfig::new()
        .alignment(Alignment::Justify)
        .item_spacing(1)
        .line_spacing(1)
        .padding(Edges::all(1))
        .tag_padding(Edges::horizontal(1))
        .tag_text_color(
            StateColors::new(Color::rgb(210, 210, 210)).selected(Color::rgb(255, 255, 255)),
        )
        .tag_background(
            StateColors::new(Color::oklch(0.3, 0.02, 250.0))
                .pressed(Color::oklch(0.4, 0.05, 250.0))
                .selected(Color::oklch(0.55, 0.15, 250.0)),
        );

    let mut layout = CheckedFlowLayout::new(config);
    layout.set_listener(LogListener);
    layout.set_tags(TAGS.iter().copied());

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = run(&mut out, &mut layout);

    execute!(out, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write, layout: &mut CheckedFlowLayout) -> io::Result<()> {
    let mut focused = 0usize;

    loop {
        let (width, height) = terminal::size()?;
        let area = Rect::new(0, 0, i32::from(width), i32::from(height));
        layout.measure(Constraint::Exact(area.width), Constraint::AtMost(area.height));
        layout.arrange(area);
        draw(out, layout, focused)?;

        let raw = event::read()?;
        if let CtEvent::Resize(..) = raw {
            continue;
        }
        let Some(event) = Event::from_crossterm(&raw) else {
            continue;
        };

        match event {
            Event::Key(Key::Char('q') | Key::Escape) => return Ok(()),
            Event::Key(Key::Char('a')) => layout.set_all_selected(true),
            Event::Key(Key::Char('n')) => layout.set_all_selected(false),
            Event::Key(Key::Tab) if !layout.is_empty() => {
                focused = (focused + 1) % layout.len();
            }
            Event::Key(Key::BackTab) if !layout.is_empty() => {
                focused = (focused + layout.len() - 1) % layout.len();
            }
            _ => {
                dispatch(layout, &event, Some(focused));
            }
        }
    }
}

fn draw(out: &mut impl Write, layout: &CheckedFlowLayout, focused: usize) -> io::Result<()> {
    queue!(out, ResetColor, terminal::Clear(terminal::ClearType::All))?;

    for (index, tag) in layout.elements().iter().enumerate() {
        let bounds = tag.bounds();
        if !tag.visible || bounds.is_empty() || bounds.x < 0 || bounds.y < 0 {
            continue;
        }

        let bg = tag.background_color().map(to_crossterm).unwrap_or(CtColor::Reset);
        let fg = tag.foreground().map(to_crossterm).unwrap_or(CtColor::Reset);
        let label = if index == focused {
            format!("[{}]", tag.label())
        } else {
            format!(" {} ", tag.label())
        };

        queue!(
            out,
            cursor::MoveTo(bounds.x as u16, bounds.y as u16),
            SetBackgroundColor(bg),
            SetForegroundColor(fg),
            Print(label),
            ResetColor
        )?;
    }

    let status = format!(
        "selected: {:?}  (click/space toggles, tab moves, a/n all/none, q quits)",
        layout.selected_tags()
    );
    let (_, rows) = terminal::size()?;
    queue!(out, cursor::MoveTo(0, rows.saturating_sub(1)), Print(status))?;
    out.flush()
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
