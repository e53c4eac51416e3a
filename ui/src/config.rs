//! Site identity shared by the header, footer and pages.

pub const COMPANY: &str = "CrossFire";
pub const TAGLINE: &str = "Your Trusted Fire Safety Partner";
pub const FOUNDED: i32 = 2000;

pub const EMAIL: &str = "cfchyd@gamil.com";
pub const PHONE: &str = "9246199077";
pub const ADDRESS: [&str; 2] = ["8-1-400/48", "Deluxe Colony, Tolichowki, Hyderabad"];

pub fn years_in_business(current_year: i32) -> i32 {
    (current_year - FOUNDED).max(0)
}

/// About-page badge, rounded down to the decade: "20+".
pub fn experience_badge(current_year: i32) -> String {
    format!("{}+", years_in_business(current_year) / 10 * 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_never_negative() {
        assert_eq!(years_in_business(2025), 25);
        assert_eq!(years_in_business(1999), 0);
    }

    #[test]
    fn badge_rounds_down_to_decade() {
        assert_eq!(experience_badge(2025), "20+");
        assert_eq!(experience_badge(2030), "30+");
    }
}
