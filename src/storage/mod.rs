pub mod atomic;
pub mod backup;
pub mod files;

pub use atomic::AtomicFile;
pub use backup::{backup_path, write_backup};
pub use files::collect_files;
