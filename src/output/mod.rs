//! Console output utilities.

pub mod console;

pub use console::{
    print_banner, print_batch_stats, print_config_summary, print_error, print_info, print_warning,
};
