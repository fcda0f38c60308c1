mod toc_tests;
mod tracker_tests;
