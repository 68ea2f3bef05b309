//! Aborted calls leave a diagnostic under the platform log tag.
//!
//! Kept in its own test binary: it installs the process-wide logger.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use smudge::bridge::{self, LOG_TAG};
use smudge::{BitmapFormat, MemoryBitmap};

struct Capture(Mutex<Vec<(Level, String, String)>>);

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.0.lock().unwrap().push((
            record.level(),
            record.target().to_owned(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn rejected_format_is_logged_once_as_error() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut bmp = MemoryBitmap::new(4, 4, BitmapFormat::Rgb565).unwrap();
    bridge::invert_color(&mut bmp);

    let errors: Vec<_> = LOGGER
        .0
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _, _)| *level == Level::Error)
        .cloned()
        .collect();
    assert_eq!(errors.len(), 1);
    let (_, target, message) = &errors[0];
    assert_eq!(target, LOG_TAG);
    assert!(message.contains("RGBA_8888"), "{message}");
}
