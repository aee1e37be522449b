pub use overview::ExploreOverview;
pub use query_page::ExploreQueryPage;
pub use record_detail::RecordDetail;

mod data_sources;
mod overview;
mod query_page;
mod query_panel;
mod record_detail;
