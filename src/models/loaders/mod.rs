pub mod test_loader;

pub use test_loader::{load_all_tests, load_submission, load_test};
