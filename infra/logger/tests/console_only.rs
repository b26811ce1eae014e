use fhub_logger::{LevelFilter, Logger};

#[test]
fn init_console_only_has_no_guard() {
    let logger = Logger::builder()
        .name("fonthub-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}

#[test]
fn init_without_any_layer_is_rejected() {
    let err = Logger::builder()
        .name("fonthub-silent")
        .console(false)
        .init()
        .expect_err("a logger without layers is useless");

    assert!(matches!(err, fhub_logger::LoggerError::InvalidConfiguration { .. }));
}
