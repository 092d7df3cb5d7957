mod host_helpers_tests;
