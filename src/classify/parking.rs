//! Domain-parking page detection.

use super::outcome::Classification;

/// Matches response bodies against known parking-service phrases.
///
/// Plain case-sensitive substring search. Localized or reworded parking
/// pages are not detected.
#[derive(Debug, Clone)]
pub struct ParkingDetector {
    phrases: Vec<String>,
}

impl ParkingDetector {
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// First configured phrase found in `body`.
    pub fn matched_phrase(&self, body: &str) -> Option<&str> {
        self.phrases
            .iter()
            .map(String::as_str)
            .find(|phrase| body.contains(phrase))
    }

    pub fn is_parking(&self, body: &str) -> bool {
        self.matched_phrase(body).is_some()
    }

    /// Classifies a completed response.
    ///
    /// The body only matters for a 200; any other status is reported as is.
    pub fn inspect(&self, status_code: u16, body: &str) -> Classification {
        if status_code != 200 {
            return Classification::completed(status_code);
        }
        match self.matched_phrase(body) {
            Some(phrase) => {
                log::debug!("Parking phrase {:?} found in response body", phrase);
                Classification::parked()
            }
            None => Classification::completed(status_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PARKING_TEXTS;

    fn detector() -> ParkingDetector {
        ParkingDetector::new(PARKING_TEXTS.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_detects_every_default_phrase() {
        let detector = detector();
        for phrase in PARKING_TEXTS {
            let body = format!("<html><body><h1>{}</h1></body></html>", phrase);
            assert!(detector.is_parking(&body), "phrase not detected: {}", phrase);
        }
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let detector = detector();
        assert!(!detector.is_parking("<p>domain parking</p>"));
        assert!(!detector.is_parking("<p>THIS DOMAIN IS FOR SALE.</p>"));
    }

    #[test]
    fn test_clean_body_is_not_parking() {
        let detector = detector();
        assert!(!detector.is_parking("<html><title>Our dapp</title></html>"));
        assert!(!detector.is_parking(""));
    }

    #[test]
    fn test_inspect_only_applies_to_200() {
        let detector = detector();
        let body = "Sedo's Domain Parking";
        assert_eq!(detector.inspect(200, body), Classification::parked());
        assert_eq!(detector.inspect(404, body), Classification::completed(404));
        assert_eq!(detector.inspect(200, "hello"), Classification::completed(200));
    }

    #[test]
    fn test_custom_phrase_list() {
        let detector = ParkingDetector::new(vec!["Dominio en venta".to_string()]);
        assert!(detector.is_parking("<p>Dominio en venta</p>"));
        assert!(!detector.is_parking("Domain Parking"));
    }

    #[test]
    fn test_empty_phrase_list_never_matches() {
        let detector = ParkingDetector::new(Vec::new());
        assert!(!detector.is_parking("Domain Parking"));
    }
}
