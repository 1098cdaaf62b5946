mod filter_dialog;
pub use filter_dialog::FilterDialog;

mod query_input;
pub use query_input::QueryInput;

mod view_tabs;
pub use view_tabs::{ViewOption, ViewTabs};

mod sort_header;
pub use sort_header::SortHeader;

mod pagination;
pub use pagination::Pagination;

mod status_badge;
pub use status_badge::StatusBadge;

mod resource_state;
pub use resource_state::{ResourceError, ResourceUnavailable};

mod property_list;
pub use property_list::{PropertyList, PropertyListItem};
