pub mod debounce;
pub mod format;
pub mod icons;
pub mod retry;
pub mod version;

pub use debounce::Debouncer;
pub use format::format_file_size;
pub use icons::{icon_for_file_name, icon_for_package_kind};
pub use retry::{retry_with_backoff, RetryConfig};
pub use version::compare_versions;
