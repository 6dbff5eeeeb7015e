pub mod banner;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use banner::{Banner, BannerQueue, DEFAULT_BANNER_TTL};
pub use errors::{ConfigError, ConvoError, StoreError};
pub use events::{ChatEvent, EventBus};
pub use id::{new_correlation_id, PageId, SessionId};
pub use types::{ClientState, Message, Role};

pub type Result<T> = std::result::Result<T, ConvoError>;
