use log::{Metadata, Record};

pub static LOGGER: Logger = Logger;

pub struct Logger;

impl Logger {
    pub fn init() {
        log::set_logger(&LOGGER).expect("can not start logger");
        log::set_max_level(log::LevelFilter::Trace);
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "{} - {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
