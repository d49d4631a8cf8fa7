use super::config::Policy;

// Membership is exact and case-sensitive. "mit" is not "MIT", and an empty
// identifier is matched like any other string.
impl Policy {
    pub fn is_allowed(&self, license: &str) -> bool {
        self.allow().contains(license)
    }

    pub fn is_denied(&self, license: &str) -> bool {
        self.deny().contains(license)
    }

    pub fn is_conditional(&self, license: &str) -> bool {
        self.conditional().contains(license)
    }

    pub fn is_exempted(&self, dependency: &str) -> bool {
        self.exceptions().contains(dependency)
    }
}
