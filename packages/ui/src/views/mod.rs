mod dashboard;
pub use dashboard::DashboardView;
