mod lookup_test;
mod validate_test;
mod write_test;
