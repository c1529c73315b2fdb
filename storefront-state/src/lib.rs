//! Client-side state containers for the storefront.
//!
//! Each container is a [`Store`]: actions are reduced into a new state, the
//! state is written to [`LocalStorage`] under the container's key, and then
//! subscribers are notified.

pub mod auth;
pub mod cart;
pub mod search;
pub mod storage;
pub mod store;

pub use auth::{AuthAction, AuthState, AuthStore, AuthUser};
pub use cart::{CartAction, CartItem, CartState, CartStore};
pub use search::{SearchAction, SearchResult, SearchState, SearchStore};
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError};
pub use store::{Action, Store, SubscriptionId};
