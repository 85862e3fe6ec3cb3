pub use ui::views::DashboardView as Users;
