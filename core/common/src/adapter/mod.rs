//! アダプター（外界の I/O を ports の trait 越しに提供する標準実装）

pub mod file_json_log;
pub mod stderr_log;
pub mod std_env_resolver;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use stderr_log::StderrLog;
pub use std_env_resolver::{MapEnvResolver, StdEnvResolver};
