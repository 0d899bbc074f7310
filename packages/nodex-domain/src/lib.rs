pub mod capability;
pub mod normalize;

pub use capability::{
	CAPABILITY_PREFIX, ConnectionTypeRegistry, DEFAULT_CONNECTION_TYPES, is_capability_connection,
	list_capability_connections,
};
pub use normalize::normalize;
