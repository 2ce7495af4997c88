//! UI Components
//!
//! Reusable Leptos components for the admin panels.

mod delete_confirm_button;
mod entity_modal;
mod filter_bar;
mod jira_panel;
mod portfolios_panel;
mod projects_panel;
mod report_panel;
mod report_table;
mod roles_panel;
mod section_tab_bar;
mod summary_cards;
mod teams_panel;
mod toast;
mod users_panel;
mod worklogs_panel;

pub use delete_confirm_button::DeleteConfirmButton;
pub use entity_modal::{field_class, EntityModal, FieldFeedback};
pub use filter_bar::{FilterBar, FilterSignals};
pub use jira_panel::JiraPanel;
pub use portfolios_panel::PortfoliosPanel;
pub use projects_panel::ProjectsPanel;
pub use report_panel::ReportPanel;
pub use report_table::ReportTable;
pub use roles_panel::RolesPanel;
pub use section_tab_bar::{Section, SectionTabBar};
pub use summary_cards::SummaryCards;
pub use teams_panel::TeamsPanel;
pub use toast::ToastHost;
pub use users_panel::UsersPanel;
pub use worklogs_panel::WorklogsPanel;
