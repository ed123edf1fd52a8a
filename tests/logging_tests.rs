use user_api::setup_logging;

#[test]
fn test_logging_setup() {
    // setup_logging must tolerate being called more than once per process
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}
