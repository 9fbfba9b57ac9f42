//! # Form state and validation
//!
//! The auth and settings forms keep their state in plain structs so the rules can be
//! tested without a renderer:
//!
//! | Type | Used by | Rule |
//! |------|---------|------|
//! | [`LoginForm`] | login page | email contains `@`, password present |
//! | [`PasswordStrength`] | register page | 25 points per criterion, submit needs ≥ 50 |
//! | [`RegisterForm`] | register page | required fields, matching passwords, strength |
//! | [`BrandEditor`] | settings, brands tab | case-insensitive dedup, plan limit, one active brand to save |
//! | [`PasswordChange`] | settings, security tab | new matches confirm, at least 6 characters |

use api::{Brand, RegisterRequest};

use crate::components::Tone;

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn email_error(&self) -> Option<&'static str> {
        if self.email.trim().is_empty() {
            Some("Email is required")
        } else if !is_valid_email(&self.email) {
            Some("Please enter a valid email address")
        } else {
            None
        }
    }

    pub fn password_error(&self) -> Option<&'static str> {
        self.password.is_empty().then_some("Password is required")
    }

    pub fn is_valid(&self) -> bool {
        self.email_error().is_none() && self.password_error().is_none()
    }
}

/// Password strength in points, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordStrength(pub u8);

impl PasswordStrength {
    pub const MINIMUM: PasswordStrength = PasswordStrength(50);

    pub fn score(password: &str) -> Self {
        let criteria = [
            password.chars().count() >= 8,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        PasswordStrength(criteria.iter().filter(|met| **met).count() as u8 * 25)
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            75.. => "Strong",
            50..=74 => "Medium",
            25..=49 => "Weak",
            _ => "Very Weak",
        }
    }

    pub fn tone(&self) -> Tone {
        match self.0 {
            75.. => Tone::Success,
            50..=74 => Tone::Warning,
            25..=49 => Tone::Info,
            _ => Tone::Danger,
        }
    }

    pub fn is_acceptable(&self) -> bool {
        *self >= Self::MINIMUM
    }
}

/// Why a brand could not be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandError {
    Empty,
    Duplicate(String),
    LimitReached(u32),
    NoneActive,
}

impl BrandError {
    pub fn message(&self) -> String {
        match self {
            BrandError::Empty => "Please enter a brand name".to_string(),
            BrandError::Duplicate(name) => format!("\"{}\" is already being tracked", name),
            BrandError::LimitReached(max) => format!(
                "You can only track up to {} brands on your current plan. Upgrade to add more.",
                max
            ),
            BrandError::NoneActive => "Please keep at least one brand active".to_string(),
        }
    }
}

fn contains_brand<'a>(mut names: impl Iterator<Item = &'a str>, candidate: &str) -> bool {
    names.any(|name| name.eq_ignore_ascii_case(candidate))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub company: String,
    pub industry: String,
    pub company_size: String,
    pub brands: Vec<String>,
    pub brand_input: String,
}

impl RegisterForm {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::score(&self.password)
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Add the pending brand input. Clears the input on success.
    pub fn add_brand(&mut self) -> Result<(), BrandError> {
        let name = self.brand_input.trim().to_string();
        if name.is_empty() {
            return Err(BrandError::Empty);
        }
        if contains_brand(self.brands.iter().map(String::as_str), &name) {
            return Err(BrandError::Duplicate(name));
        }
        self.brands.push(name);
        self.brand_input.clear();
        Ok(())
    }

    pub fn remove_brand(&mut self, name: &str) {
        self.brands.retain(|b| b != name);
    }

    /// Per-field messages, in form order. Empty when the form can be submitted.
    pub fn problems(&self) -> Vec<(&'static str, &'static str)> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push(("name", "Name is required"));
        }
        if !is_valid_email(&self.email) {
            problems.push(("email", "Please enter a valid email address"));
        }
        if self.password.is_empty() {
            problems.push(("password", "Password is required"));
        } else if !self.strength().is_acceptable() {
            problems.push(("password", "Password is too weak"));
        }
        if !self.passwords_match() {
            problems.push(("confirm_password", "Passwords do not match"));
        }
        if self.company.trim().is_empty() {
            problems.push(("company", "Company name is required"));
        }
        if self.industry.is_empty() {
            problems.push(("industry", "Please select an industry"));
        }
        if self.company_size.is_empty() {
            problems.push(("company_size", "Please select company size"));
        }
        problems
    }

    pub fn problem(&self, field: &str) -> Option<&'static str> {
        self.problems()
            .into_iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message)
    }

    pub fn to_request(&self) -> Option<RegisterRequest> {
        if !self.problems().is_empty() {
            return None;
        }
        Some(RegisterRequest::new(
            &self.name,
            &self.email,
            &self.password,
            &self.company,
            self.brands.clone(),
            &self.industry,
            &self.company_size,
        ))
    }
}

/// Working copy of the user's brands on the settings page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandEditor {
    pub brands: Vec<Brand>,
    /// `None` is unlimited.
    pub max_brands: Option<u32>,
}

impl BrandEditor {
    pub fn new(brands: Vec<Brand>, max_brands: Option<u32>) -> Self {
        Self { brands, max_brands }
    }

    pub fn add(&mut self, raw: &str) -> Result<(), BrandError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(BrandError::Empty);
        }
        if contains_brand(self.brands.iter().map(|b| b.name.as_str()), name) {
            return Err(BrandError::Duplicate(name.to_string()));
        }
        if let Some(max) = self.max_brands {
            if self.brands.len() >= max as usize {
                return Err(BrandError::LimitReached(max));
            }
        }
        self.brands.push(Brand::new(name));
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(brand) = self.brands.get_mut(index) {
            brand.is_active = !brand.is_active;
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.brands.len() {
            self.brands.remove(index);
        }
    }

    pub fn active_count(&self) -> usize {
        self.brands.iter().filter(|b| b.is_active).count()
    }

    pub fn at_limit(&self) -> bool {
        self.max_brands
            .is_some_and(|max| self.brands.len() >= max as usize)
    }

    /// The brands to send on save: only the active ones, at least one.
    pub fn to_save(&self) -> Result<Vec<Brand>, BrandError> {
        let active: Vec<Brand> = self.brands.iter().filter(|b| b.is_active).cloned().collect();
        if active.is_empty() {
            return Err(BrandError::NoneActive);
        }
        Ok(active)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    pub const MIN_LENGTH: usize = 6;

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.current.is_empty() {
            return Err("Please enter your current password");
        }
        if self.new != self.confirm {
            return Err("New passwords do not match");
        }
        if self.new.chars().count() < Self::MIN_LENGTH {
            return Err("Password must be at least 6 characters long");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("demo@example.com"));
        assert!(is_valid_email("  demo@example.com "));
        assert!(!is_valid_email("demo.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("demo@"));
        assert!(!is_valid_email("de mo@example.com"));
    }

    #[test]
    fn test_login_form_errors() {
        let mut form = LoginForm::default();
        assert_eq!(form.email_error(), Some("Email is required"));
        assert_eq!(form.password_error(), Some("Password is required"));

        form.email = "demo".to_string();
        form.password = "secret".to_string();
        assert_eq!(form.email_error(), Some("Please enter a valid email address"));

        form.email = "demo@example.com".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_password_strength_points() {
        assert_eq!(PasswordStrength::score("").0, 0);
        assert_eq!(PasswordStrength::score("abc").0, 0);
        assert_eq!(PasswordStrength::score("abcdefgh").0, 25);
        assert_eq!(PasswordStrength::score("Abcdefgh").0, 50);
        assert_eq!(PasswordStrength::score("Abcdefg1").0, 75);
        assert_eq!(PasswordStrength::score("Abcdef1!").0, 100);
    }

    #[test]
    fn test_password_strength_counts_non_ascii_as_special() {
        assert_eq!(PasswordStrength::score("Passwordé1").0, 100);
        assert_eq!(PasswordStrength::score("Password11").0, 75);
    }

    #[test]
    fn test_password_strength_labels() {
        assert_eq!(PasswordStrength(0).label(), "Very Weak");
        assert_eq!(PasswordStrength(25).label(), "Weak");
        assert_eq!(PasswordStrength(50).label(), "Medium");
        assert_eq!(PasswordStrength(100).label(), "Strong");
        assert!(!PasswordStrength(25).is_acceptable());
        assert!(PasswordStrength(50).is_acceptable());
    }

    fn filled_register_form() -> RegisterForm {
        RegisterForm {
            name: "Ana Ortiz".to_string(),
            email: "Ana@Example.com".to_string(),
            password: "Sneakers1".to_string(),
            confirm_password: "Sneakers1".to_string(),
            company: "Acme".to_string(),
            industry: "Retail".to_string(),
            company_size: "11-50".to_string(),
            ..RegisterForm::default()
        }
    }

    #[test]
    fn test_register_form_builds_request() {
        let mut form = filled_register_form();
        form.brand_input = " Nike ".to_string();
        form.add_brand().unwrap();

        let request = form.to_request().unwrap();
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.brands, vec!["Nike"]);
        assert_eq!(request.profile.company_size, "11-50");
    }

    #[test]
    fn test_register_form_blocks_weak_or_mismatched_passwords() {
        let mut form = filled_register_form();
        form.password = "sneakers".to_string();
        form.confirm_password = "sneakers".to_string();
        assert_eq!(form.problem("password"), Some("Password is too weak"));
        assert!(form.to_request().is_none());

        let mut form = filled_register_form();
        form.confirm_password = "Sneakers2".to_string();
        assert_eq!(form.problem("confirm_password"), Some("Passwords do not match"));
        assert!(form.to_request().is_none());
    }

    #[test]
    fn test_register_form_requires_selects() {
        let mut form = filled_register_form();
        form.industry.clear();
        assert_eq!(form.problem("industry"), Some("Please select an industry"));
    }

    #[test]
    fn test_register_brands_trim_and_dedup() {
        let mut form = RegisterForm::default();
        form.brand_input = "   ".to_string();
        assert_eq!(form.add_brand(), Err(BrandError::Empty));

        form.brand_input = "Nike".to_string();
        form.add_brand().unwrap();
        assert!(form.brand_input.is_empty());

        form.brand_input = "nike".to_string();
        assert_eq!(form.add_brand(), Err(BrandError::Duplicate("nike".to_string())));

        form.remove_brand("Nike");
        assert!(form.brands.is_empty());
    }

    #[test]
    fn test_brand_editor_respects_plan_limit() {
        let mut editor = BrandEditor::new(vec![Brand::new("Nike"), Brand::new("Adidas")], Some(3));
        editor.add("Puma").unwrap();
        assert!(editor.at_limit());
        assert_eq!(editor.add("Reebok"), Err(BrandError::LimitReached(3)));
        assert_eq!(editor.add("ADIDAS"), Err(BrandError::Duplicate("ADIDAS".to_string())));
    }

    #[test]
    fn test_brand_editor_unlimited() {
        let mut editor = BrandEditor::new(Vec::new(), None);
        for name in ["a", "b", "c", "d", "e"] {
            editor.add(name).unwrap();
        }
        assert!(!editor.at_limit());
    }

    #[test]
    fn test_brand_editor_saves_only_active() {
        let mut editor = BrandEditor::new(vec![Brand::new("Nike"), Brand::new("Adidas")], None);
        editor.toggle(1);
        assert_eq!(editor.active_count(), 1);
        assert_eq!(editor.to_save().unwrap(), vec![Brand::new("Nike")]);

        editor.toggle(0);
        assert_eq!(editor.to_save(), Err(BrandError::NoneActive));

        editor.remove(0);
        editor.remove(7);
        assert_eq!(editor.brands.len(), 1);
    }

    #[test]
    fn test_password_change_rules() {
        let mut change = PasswordChange {
            current: "old-secret".to_string(),
            new: "abc12".to_string(),
            confirm: "abc12".to_string(),
        };
        assert_eq!(change.validate(), Err("Password must be at least 6 characters long"));

        change.confirm = "abc123".to_string();
        assert_eq!(change.validate(), Err("New passwords do not match"));

        change.new = "abc123".to_string();
        assert_eq!(change.validate(), Ok(()));
    }
}
