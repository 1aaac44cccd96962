mod log_sanitizer_test;
