use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};
use std::io::{self, Write};

fn level(is_prod: bool) -> LevelFilter {
    if is_prod {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    }
}

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("pet_editor")
        .build()
}

fn build_logger<W: Write + Send + 'static>(is_prod: bool, writer: W) -> Box<WriteLogger<W>> {
    WriteLogger::new(level(is_prod), logger_config(), writer)
}

/// Installs the process logger on stderr, stdout is kept for command output.
/// Production only logs `Info` and above.
pub fn setup_simple_logger(is_prod: bool) -> anyhow::Result<()> {
    log::set_boxed_logger(build_logger(is_prod, io::stderr()))?;
    log::set_max_level(level(is_prod));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_records_go_to_given_writer() {
        let buf = SharedBuf::default();
        let logger = build_logger(false, buf.clone());

        logger.log(
            &Record::builder()
                .args(format_args!("loading pet editor model for owner 42"))
                .level(Level::Debug)
                .target("pet_editor::api::pet_editor")
                .build(),
        );
        logger.flush();

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(written.contains("loading pet editor model for owner 42"));
    }

    #[test]
    fn test_debug_is_dropped_in_prod() {
        let buf = SharedBuf::default();
        let logger = build_logger(true, buf.clone());

        logger.log(
            &Record::builder()
                .args(format_args!("GET http://localhost/api/pettypes"))
                .level(Level::Debug)
                .target("pet_editor::services::http")
                .build(),
        );
        logger.flush();

        assert!(buf.0.lock().unwrap().is_empty());
    }
}
