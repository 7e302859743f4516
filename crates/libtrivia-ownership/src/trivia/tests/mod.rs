mod trivia_scanner_tests;
