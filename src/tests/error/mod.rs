mod record_error_tests;
