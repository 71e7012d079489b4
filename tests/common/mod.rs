// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::TestRepo;
#[allow(unused_imports)]
pub use helpers::{assert_valid_summary, create_test_client, test_config};
