use log::Level;

pub const SITE_TITLE: &str = "STILLS BY BILL";
pub const TAGLINE: &str = "Live concert and event photography";
pub const SUBTAGLINE: &str = "Shot in the pit · UK shows · Available for bookings";
pub const CREDIT: &str = "Photos by Billy Baker";

pub const CONTACT_EMAIL: &str = "stillsbybill55@gmail.com";
pub const BOOKING_SUBJECT: &str = "Booking / Press Request";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/stillsbybill_/";

pub const DEFAULT_COLLECTION_KEY: &str = "hitmen-scab";

pub const MAGNET_PULL: f64 = 0.12;
pub const SPRING_STIFFNESS: f64 = 420.0;
pub const SPRING_DAMPING: f64 = 26.0;
pub const SPRING_MASS: f64 = 0.35;

pub const PARALLAX_RANGE: f64 = 60.0; // px, either direction

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running `trunk serve` locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn email_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn booking_href() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode(BOOKING_SUBJECT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_subject_is_percent_encoded() {
        assert_eq!(
            booking_href(),
            "mailto:stillsbybill55@gmail.com?subject=Booking%20%2F%20Press%20Request"
        );
    }

    #[test]
    fn email_href_has_no_subject() {
        assert_eq!(email_href(), "mailto:stillsbybill55@gmail.com");
    }
}
