//! Wire models for the backend's JSON payloads.

pub mod dashboard;
pub mod mention;
pub mod user;

pub use dashboard::{
    BrandPerformance, CollectionResult, EngagementStats, Overview, Period,
    SentimentBreakdown, SentimentDistribution, SentimentShare, SourceCount, Summary,
    TimelinePoint, TopBrand,
};
pub use mention::{
    Engagement, FilterField, Mention, MentionPage, MentionQuery, Pagination, Sentiment,
    SortOrder,
};
pub use user::{
    AuthPayload, Brand, BrandsUpdate, Plan, PlanLimits, Profile, ProfileUpdate, RegisterProfile,
    RegisterRequest, Subscription, SubscriptionFeatures, User, TRIAL_DAYS,
};
