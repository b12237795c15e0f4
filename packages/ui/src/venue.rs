//! Fixed facts about the restaurant.

pub const NAME: &str = "CARAVAN";
pub const STREET: &str = "Wöllstädter Str. 11";
pub const CITY: &str = "60385 Frankfurt am Main";
pub const PHONE: &str = "+49 69 95909158";
pub const PHONE_HREF: &str = "tel:+496995909158";
pub const EMAIL: &str = "info@restaurant-caravan.com";
pub const OPENING_HOURS: &str = "17:00 – 23:00";
pub const GOOGLE_PLACE_ID: &str = "ChIJhx2VfmkJvUcRnefb1P5Fxf4";

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// Google Maps search for the street address.
pub fn directions_url() -> String {
    let query = format!("{STREET}, {CITY}");
    format!("https://maps.google.com/?q={}", urlencoding::encode(&query))
}

/// Opens Google's "write a review" dialog for the restaurant.
pub fn review_url() -> String {
    format!("https://search.google.com/local/writereview?placeid={GOOGLE_PLACE_ID}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_url_is_percent_encoded() {
        assert_eq!(
            directions_url(),
            "https://maps.google.com/?q=W%C3%B6llst%C3%A4dter%20Str.%2011%2C%2060385%20Frankfurt%20am%20Main"
        );
    }

    #[test]
    fn review_url_targets_the_place() {
        assert_eq!(
            review_url(),
            "https://search.google.com/local/writereview?placeid=ChIJhx2VfmkJvUcRnefb1P5Fxf4"
        );
    }
}
