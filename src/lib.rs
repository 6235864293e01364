mod error;
mod flags;
mod prefix;
mod record;
mod snapshot;
mod sys;

pub use error::Error;
pub use hwaddr::MacAddr6;
pub use record::{AddressEntry, Family, InterfaceRecord, LinkStats};
pub use snapshot::snapshot;
