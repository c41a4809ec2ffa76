//! Parallax Shooter entry point
//!
//! Runs the game in a terminal: raw mode, alternate screen, one tick and one
//! rasterized frame per loop iteration.

use std::collections::HashMap;
use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Print},
    terminal,
};

use parallax_shooter::renderer::{Canvas, Palette, rasterize};
use parallax_shooter::{Key, KeyEvent, Session, Settings};

/// Without release events a held key is only seen through OS key-repeats.
/// The first press waits out the repeat delay; once repeats flow they
/// arrive well within the shorter window.
const INITIAL_HOLD: Duration = Duration::from_millis(600);
const REPEAT_HOLD: Duration = Duration::from_millis(150);

/// What the loop should do after draining input
enum Control {
    Continue,
    Quit,
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char(c) => Key::from_char(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Frames-per-second over the last 60 frames
struct FpsCounter {
    frame_times: [Option<Instant>; 60],
    frame_index: usize,
    fps: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frame_times: [None; 60],
            frame_index: 0,
            fps: 0,
        }
    }

    fn record(&mut self, now: Instant) {
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();
        if let Some(oldest) = self.frame_times[self.frame_index] {
            let elapsed = now.duration_since(oldest).as_secs_f64();
            if elapsed > 0.0 {
                self.fps = (self.frame_times.len() as f64 / elapsed).round() as u32;
            }
        }
    }
}

/// A movement key the host believes is still down
#[derive(Debug, Clone, Copy)]
struct Held {
    last_seen: Instant,
    repeating: bool,
}

impl Held {
    fn expired(&self, now: Instant) -> bool {
        let window = if self.repeating {
            REPEAT_HOLD
        } else {
            INITIAL_HOLD
        };
        now.duration_since(self.last_seen) > window
    }
}

struct Host {
    session: Session,
    settings: Settings,
    /// The terminal reports repeat and release events, so keys are only
    /// released when it says so
    release_events: bool,
    held: HashMap<Key, Held>,
    fps: FpsCounter,
}

impl Host {
    fn new(settings: Settings, release_events: bool) -> Self {
        let seed = settings.seed.unwrap_or_else(time_seed);
        let session = Session::with_settings(seed, &settings);
        log::info!("Game initialized with seed: {}", session.seed());
        Self {
            session,
            settings,
            release_events,
            held: HashMap::new(),
            fps: FpsCounter::new(),
        }
    }

    fn hold(&mut self, key: Key, now: Instant) {
        self.held
            .entry(key)
            .and_modify(|h| {
                h.last_seen = now;
                h.repeating = true;
            })
            .or_insert(Held {
                last_seen: now,
                repeating: false,
            });
    }

    fn release_all(&mut self) {
        self.held.clear();
        self.session.state.keys.clear();
    }

    fn handle_event(&mut self, ev: Event, now: Instant) -> Control {
        let key_event = match ev {
            Event::Key(key_event) => key_event,
            Event::FocusLost => {
                self.release_all();
                return Control::Continue;
            }
            _ => return Control::Continue,
        };
        let code = key_event.code;
        match key_event.kind {
            KeyEventKind::Press => {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Control::Quit;
                    }
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Control::Quit;
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') if self.session.is_over() => {
                        self.held.clear();
                        self.session.restart(time_seed());
                        return Control::Continue;
                    }
                    _ => {}
                }
                if let Some(key) = map_key(code) {
                    if key.is_movement() {
                        self.hold(key, now);
                    }
                    self.session.handle_key(KeyEvent::Pressed(key));
                }
            }
            // Repeats act like presses: movement stays held and fire keeps firing
            KeyEventKind::Repeat => {
                self.release_events = true;
                if let Some(key) = map_key(code) {
                    if key.is_movement() {
                        self.hold(key, now);
                    }
                    self.session.handle_key(KeyEvent::Pressed(key));
                }
            }
            KeyEventKind::Release => {
                self.release_events = true;
                if let Some(key) = map_key(code) {
                    self.held.remove(&key);
                    self.session.handle_key(KeyEvent::Released(key));
                }
            }
        }
        Control::Continue
    }

    /// Release movement keys that have gone quiet. Only used when the
    /// terminal sends no release events.
    fn expire_held(&mut self, now: Instant) {
        if self.release_events {
            return;
        }
        let stale: Vec<Key> = self
            .held
            .iter()
            .filter(|(_, held)| held.expired(now))
            .map(|(key, _)| *key)
            .collect();
        for key in stale {
            self.held.remove(&key);
            self.session.handle_key(KeyEvent::Released(key));
        }
    }

    fn drain_input(&mut self, rx: &mpsc::Receiver<Event>, now: Instant) -> Control {
        while let Ok(ev) = rx.try_recv() {
            if let Control::Quit = self.handle_event(ev, now) {
                return Control::Quit;
            }
        }
        self.expire_held(now);
        Control::Continue
    }

    fn run<W: Write>(&mut self, out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
        let frame_budget = self.settings.frame_duration();
        let palette = self.settings.palette();
        let mut last_frame: Option<Instant> = None;

        loop {
            let frame_start = Instant::now();
            if let Control::Quit = self.drain_input(rx, frame_start) {
                return Ok(());
            }

            let dt = last_frame
                .map(|t| frame_start.duration_since(t).as_secs_f32() * 1000.0)
                .unwrap_or(0.0);
            last_frame = Some(frame_start);

            let commands = self.session.frame(dt);
            let (cols, rows) = terminal::size()?;
            let canvas = rasterize(&commands, cols, rows, palette);
            self.fps.record(frame_start);
            let overlay = self.settings.show_fps.then(|| format!("{} FPS", self.fps.fps));
            present(out, &canvas, overlay.as_deref(), palette)?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                thread::sleep(frame_budget - elapsed);
            }
        }
    }
}

fn to_rgb(color: [f32; 4]) -> style::Color {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    style::Color::Rgb {
        r: channel(color[0]),
        g: channel(color[1]),
        b: channel(color[2]),
    }
}

fn present<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    overlay: Option<&str>,
    palette: Palette,
) -> std::io::Result<()> {
    for row in 0..canvas.rows {
        out.queue(cursor::MoveTo(0, row))?;
        let mut current = None;
        for cell in canvas.row(row) {
            if current != Some(cell.color) {
                out.queue(style::SetForegroundColor(to_rgb(cell.color)))?;
                current = Some(cell.color);
            }
            out.queue(Print(cell.glyph))?;
        }
    }

    if let Some(text) = overlay {
        let col = canvas.cols.saturating_sub(text.len() as u16 + 1);
        let color = match palette {
            Palette::Full => style::Color::Green,
            Palette::Mono => style::Color::White,
        };
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(text))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Parallax Shooter starting...");

    let settings = Settings::load();
    log::debug!("Settings: {:?}", settings);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;
    let focus_events = out.execute(event::EnableFocusChange).is_ok();

    // Queried before the reader thread starts, since the query reads stdin
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!("Key release events: {}", keyboard_enhanced);
    let mut host = Host::new(settings, keyboard_enhanced);

    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = host.run(&mut out, &rx);

    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    if focus_events {
        let _ = out.execute(event::DisableFocusChange);
    }
    let _ = out.execute(style::ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match host.session.snapshot_json() {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
    log::info!(
        "Exiting with score {} after {:.1}s",
        host.session.state.score,
        host.session.state.game_time * 0.001
    );

    result
}
