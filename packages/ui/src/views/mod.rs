mod mention_card;
pub use mention_card::MentionCard;

mod dashboard;
pub use dashboard::DashboardView;

mod mentions;
pub use mentions::MentionsView;

mod analytics;
pub use analytics::AnalyticsView;

mod settings;
pub use settings::SettingsView;
