//! Front Desk - dashboard layer for the GymDesk admin UI
//!
//! Owns everything between the rendering layer and the API client: the
//! generic list-view engine (filter/search/sort over the cached superset),
//! the observable view store, and the member and reorder-request lifecycle
//! controllers.

pub mod debounce;
pub mod error;
pub mod gateway;
pub mod members;
pub mod reorders;
pub mod store;
pub mod view;

pub use debounce::Debouncer;
pub use error::{DeskError, DeskResult};
pub use gateway::{MemberGateway, ReorderGateway};
pub use members::{
    CancelForm, CancelReason, FreezeDuration, FreezeForm, MemberController, ReactivateForm,
    UnfreezeConfirmation,
};
pub use reorders::{parse_quantity_received, ReorderController, DEFAULT_REJECTION_REASON};
pub use store::{FetchState, ViewStore};
pub use view::{ListView, Listable, SortDirection, SortSpec};
