//! # User model as returned by `/auth/me`
//!
//! [`User`] is the in-memory user object the auth context holds for the lifetime of the
//! page. It is decoded from the camelCase JSON the backend sends and never persisted by
//! the client.
//!
//! ## Tolerant decoding
//!
//! The backend has shipped several shapes over time, so decoding is lenient:
//!
//! - `brands` may be a list of bare strings or of `{ name, isActive }` objects; both
//!   decode to [`Brand`] (a bare string is an active brand).
//! - `subscription.plan` decodes unknown plan names as [`Plan::Free`].
//! - Optional blocks (`subscription`, `profile`, `preferences`) may be missing or `null`.
//!
//! ## Plans
//!
//! [`Plan::limits`] holds the per-plan brand/mention quotas and feature lists shown on
//! the subscription tab. [`User::max_brands`] resolves the effective brand quota: an
//! explicit `subscription.features.maxBrands` wins, then the plan's quota; `None`
//! means unlimited.

use serde::{Deserialize, Serialize};
use store::Preferences;

/// A user-configured keyword the backend monitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BrandRepr", rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub is_active: bool,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BrandRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default = "default_true", rename = "isActive")]
        is_active: bool,
    },
}

fn default_true() -> bool {
    true
}

impl From<BrandRepr> for Brand {
    fn from(repr: BrandRepr) -> Self {
        match repr {
            BrandRepr::Name(name) => Brand::new(name),
            BrandRepr::Full { name, is_active } => Brand { name, is_active },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Starter,
    Professional,
    Enterprise,
    /// Also what unrecognised plan names decode to.
    #[default]
    #[serde(other)]
    Free,
}

/// Quotas and marketing features of a plan. `None` quotas are unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub brands: Option<u32>,
    pub mentions: Option<u32>,
    pub features: &'static [&'static str],
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Starter => "starter",
            Plan::Professional => "professional",
            Plan::Enterprise => "enterprise",
        }
    }

    pub fn limits(&self) -> PlanLimits {
        match self {
            Plan::Free => PlanLimits {
                brands: Some(3),
                mentions: Some(1_000),
                features: &["Basic monitoring", "7-day data retention"],
            },
            Plan::Starter => PlanLimits {
                brands: Some(10),
                mentions: Some(10_000),
                features: &["Advanced analytics", "30-day data retention", "Email support"],
            },
            Plan::Professional => PlanLimits {
                brands: Some(50),
                mentions: Some(50_000),
                features: &[
                    "Real-time monitoring",
                    "90-day data retention",
                    "Priority support",
                    "API access",
                ],
            },
            Plan::Enterprise => PlanLimits {
                brands: None,
                mentions: None,
                features: &[
                    "Custom solutions",
                    "1-year data retention",
                    "Dedicated support",
                    "White-label options",
                ],
            },
        }
    }
}

impl PlanLimits {
    pub fn brands_label(&self) -> String {
        self.brands
            .map(|n| n.to_string())
            .unwrap_or_else(|| "Unlimited".to_string())
    }

    pub fn mentions_label(&self) -> String {
        self.mentions
            .map(|n| n.to_string())
            .unwrap_or_else(|| "Unlimited".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFeatures {
    pub max_brands: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default)]
    pub plan: Plan,
    pub features: Option<SubscriptionFeatures>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

/// User information held by the auth context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    pub subscription: Option<Subscription>,
    #[serde(default)]
    pub is_trial_active: bool,
    #[serde(default)]
    pub trial_days_left: u32,
    #[serde(default)]
    pub unread_mentions: u32,
    pub active_brands_count: Option<u32>,
    pub profile: Option<Profile>,
    pub preferences: Option<Preferences>,
}

/// Length of the free trial, used for the trial progress bar.
pub const TRIAL_DAYS: u32 = 14;

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }

    pub fn plan(&self) -> Plan {
        self.subscription
            .as_ref()
            .map(|s| s.plan)
            .unwrap_or_default()
    }

    /// Effective brand quota; `None` is unlimited.
    pub fn max_brands(&self) -> Option<u32> {
        self.subscription
            .as_ref()
            .and_then(|s| s.features.as_ref())
            .and_then(|f| f.max_brands)
            .or_else(|| self.plan().limits().brands)
    }

    pub fn active_brands(&self) -> impl Iterator<Item = &Brand> {
        self.brands.iter().filter(|b| b.is_active)
    }

    /// Names of the user's brands, in the order the backend returned them.
    pub fn brand_names(&self) -> Vec<String> {
        self.brands.iter().map(|b| b.name.clone()).collect()
    }

    /// Trial progress in percent of [`TRIAL_DAYS`] remaining, clamped to 0..=100.
    pub fn trial_progress(&self) -> f64 {
        (f64::from(self.trial_days_left) / f64::from(TRIAL_DAYS) * 100.0).clamp(0.0, 100.0)
    }
}

/// `data` of `/auth/login` and `/auth/register`: the token alongside the user fields.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProfile {
    pub industry: String,
    pub company_size: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: String,
    pub brands: Vec<String>,
    pub profile: RegisterProfile,
}

impl RegisterRequest {
    /// Build a request with the same normalisation the login form applies:
    /// trimmed name and company, lowercased trimmed email.
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        company: &str,
        brands: Vec<String>,
        industry: &str,
        company_size: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password: password.to_string(),
            company: company.trim().to_string(),
            brands,
            profile: RegisterProfile {
                industry: industry.to_string(),
                company_size: company_size.to_string(),
            },
        }
    }
}

/// Body of `PUT /auth/profile`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub company: String,
    pub profile: Profile,
}

impl ProfileUpdate {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            company: user.company.clone().unwrap_or_default(),
            profile: user.profile.clone().unwrap_or_default(),
        }
    }
}

/// `data` of `PUT /auth/brands`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandsUpdate {
    #[serde(default)]
    pub brands: Vec<Brand>,
    pub active_brands_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brands_accept_strings_and_objects() {
        let user: User = serde_json::from_str(
            r#"{
                "email": "a@b.co",
                "brands": ["Nike", {"name": "Apple", "isActive": false}, {"name": "Google"}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            user.brands,
            vec![
                Brand::new("Nike"),
                Brand {
                    name: "Apple".to_string(),
                    is_active: false
                },
                Brand::new("Google"),
            ]
        );
        assert_eq!(user.active_brands().count(), 2);
    }

    #[test]
    fn test_brand_serializes_as_object() {
        let json = serde_json::to_value(Brand::new("Nike")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Nike", "isActive": true}));
    }

    #[test]
    fn test_unknown_plan_is_free() {
        let sub: Subscription = serde_json::from_str(r#"{"plan": "platinum"}"#).unwrap();
        assert_eq!(sub.plan, Plan::Free);
        let sub: Subscription = serde_json::from_str(r#"{"plan": "starter"}"#).unwrap();
        assert_eq!(sub.plan, Plan::Starter);
    }

    #[test]
    fn test_plan_round_trips_and_defaults_unknown_names() {
        let plan: Plan = serde_json::from_str(r#""gold""#).unwrap();
        assert_eq!(plan, Plan::Free);

        let json = serde_json::to_string(&Plan::Enterprise).unwrap();
        assert_eq!(json, r#""enterprise""#);
        assert_eq!(serde_json::from_str::<Plan>(&json).unwrap(), Plan::Enterprise);
        assert_eq!(serde_json::to_string(&Plan::Free).unwrap(), r#""free""#);
    }

    #[test]
    fn test_null_blocks_and_mongo_id() {
        let user: User = serde_json::from_str(
            r#"{"_id": "65f0", "name": "Ada", "email": "ada@example.com",
                "subscription": null, "profile": null, "isTrialActive": true, "trialDaysLeft": 7}"#,
        )
        .unwrap();

        assert_eq!(user.id, "65f0");
        assert_eq!(user.plan(), Plan::Free);
        assert_eq!(user.max_brands(), Some(3));
        assert!(user.is_trial_active);
        assert_eq!(user.trial_progress(), 50.0);
    }

    #[test]
    fn test_max_brands_prefers_explicit_feature() {
        let user: User = serde_json::from_str(
            r#"{"email": "x@y.z", "subscription": {"plan": "starter", "features": {"maxBrands": 25}}}"#,
        )
        .unwrap();
        assert_eq!(user.max_brands(), Some(25));

        let user: User =
            serde_json::from_str(r#"{"email": "x@y.z", "subscription": {"plan": "enterprise"}}"#)
                .unwrap();
        assert_eq!(user.max_brands(), None);
        assert_eq!(user.plan().limits().brands_label(), "Unlimited");
    }

    #[test]
    fn test_auth_payload_splits_token() {
        let payload: AuthPayload = serde_json::from_str(
            r#"{"token": "jwt", "name": "Ada", "email": "ada@example.com", "role": "admin",
                "brands": ["Nike"]}"#,
        )
        .unwrap();

        assert_eq!(payload.token, "jwt");
        assert_eq!(payload.user.display_name(), "Ada");
        assert!(payload.user.is_admin());
        assert_eq!(payload.user.brand_names(), vec!["Nike".to_string()]);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            email: "ops@example.com".to_string(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "ops@example.com");
    }

    #[test]
    fn test_register_request_normalises() {
        let req = RegisterRequest::new(
            "  Ada  ",
            " Ada@Example.COM ",
            "Secret1!",
            " Acme ",
            vec!["Acme".to_string()],
            "Retail",
            "11-50",
        );
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["profile"]["companySize"], "11-50");
    }
}
