// In-app GUI logger: keeps a bounded buffer of records for the logs window,
// optionally mirrors to stderr, persists warn+ lines to showcase.log and
// installs a panic hook so crashes end up in the file too.

use lazy_static::lazy_static;
use std::backtrace::Backtrace;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{Level, LevelFilter, Log, Metadata, Record};

const MAX_BUFFERED: usize = 5000;
const LOG_FILE_NAME: &str = "showcase.log";

#[derive(Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

struct Sink {
    buffer: VecDeque<LogEntry>,
    file: Option<std::fs::File>,
}

lazy_static! {
    static ref SINK: Mutex<Sink> = Mutex::new(Sink {
        buffer: VecDeque::new(),
        file: None,
    });
    static ref MIRROR_STDERR: bool = {
        let v = std::env::var("SHOWCASE_LOG_STDERR").unwrap_or_default();
        matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    };
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct GuiLogger;

impl Log for GuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::max_level()
            .to_level()
            .map_or(false, |max| metadata.level() <= max)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:>5}] {}: {}",
            timestamp_millis(),
            record.level(),
            record.target(),
            record.args()
        );

        if *MIRROR_STDERR {
            eprintln!("{}", line);
        }

        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        };

        if let Ok(mut sink) = SINK.lock() {
            // warn+ also goes to the persistent file
            if matches!(record.level(), Level::Warn | Level::Error) {
                if let Some(f) = sink.file.as_mut() {
                    let _ = writeln!(f, "{}", line);
                    let _ = f.flush();
                }
            }
            sink.buffer.push_back(entry);
            if sink.buffer.len() > MAX_BUFFERED {
                sink.buffer.pop_front();
            }
        }
        NEW_LOGS.store(true, Ordering::Relaxed);
    }

    fn flush(&self) {
        if let Ok(mut sink) = SINK.lock() {
            if let Some(f) = sink.file.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?;
    let v = val.to_lowercase();
    [
        ("trace", LevelFilter::Trace),
        ("debug", LevelFilter::Debug),
        ("info", LevelFilter::Info),
        ("warn", LevelFilter::Warn),
        ("error", LevelFilter::Error),
        ("off", LevelFilter::Off),
    ]
    .iter()
    .find(|(name, _)| v.contains(name))
    .map(|(_, f)| *f)
}

/// Install the logger, open the persistent file and hook panics.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(GuiLogger));
    // Capture everything unless RUST_LOG narrows it down.
    let level = level_from_env().unwrap_or(LevelFilter::Trace);
    log::set_max_level(level);

    if let Ok(mut sink) = SINK.lock() {
        sink.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE_NAME)
            .ok();
    }

    install_panic_hook();

    log::info!(
        "logger ready at level {} (warn+ persisted to {})",
        level,
        LOG_FILE_NAME
    );
}

/// Visit buffered entries in [start, end) without copying the whole buffer.
pub fn visit_range<F: FnMut(&LogEntry)>(start: usize, end: usize, mut f: F) {
    if let Ok(sink) = SINK.lock() {
        let len = sink.buffer.len();
        for idx in start.min(len)..end.min(len) {
            if let Some(entry) = sink.buffer.get(idx) {
                f(entry);
            }
        }
    }
}

pub fn all_lines() -> Vec<String> {
    if let Ok(sink) = SINK.lock() {
        sink.buffer
            .iter()
            .map(|e| format!("[{:>5}] {}: {}", e.level, e.target, e.msg))
            .collect()
    } else {
        Vec::new()
    }
}

pub fn len() -> usize {
    SINK.lock().map(|s| s.buffer.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut sink) = SINK.lock() {
        sink.buffer.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// True if records arrived since the last call; used to trigger repaints.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn timestamp_millis() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut sink) = SINK.lock() {
        if let Some(f) = sink.file.as_mut() {
            let _ = writeln!(f, "{}", line);
            let _ = f.flush();
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let bt = Backtrace::force_capture();
        write_file_line(&format!(
            "[{}] [ERROR] panic at {loc}: {msg}",
            timestamp_millis()
        ));
        for line in format!("{bt:?}").lines() {
            write_file_line(line);
        }

        log::error!("panic at {loc}: {msg}");
    }));
}
