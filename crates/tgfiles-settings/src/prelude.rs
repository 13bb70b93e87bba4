pub use tgfiles_types::prelude::*;
pub use tgfiles_types::records::{AutoRecords, ProxyRecords, TimeLimitedDownload};
pub use tgfiles_types::version::Version;

pub use tracing::{debug, error, info, warn};

// vim: ts=4
