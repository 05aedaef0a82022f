use reqwest::Url;

use crate::fetch::FetchError;

use super::model::BrokerId;

/// URL builder for the broker directory API.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokerApi {
    base_url: String,
}

impl BrokerApi {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// `GET {base}/brokers`
    pub fn brokers_url(&self) -> String {
        format!("{}/brokers", self.base_url)
    }

    /// `GET {base}/brokers/details?id=<id>`, with the id query-encoded.
    pub fn details_url(&self, id: &BrokerId) -> String {
        let raw = format!("{}/brokers/details", self.base_url);
        match Url::parse(&raw) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("id", &id.to_string());
                url.to_string()
            }
            // Base URL was validated in `new`.
            Err(_) => format!("{}?id={}", raw, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let api = BrokerApi::new("https://api.example.test/pro/").unwrap();
        assert_eq!(api.brokers_url(), "https://api.example.test/pro/brokers");
        assert_eq!(
            api.details_url(&BrokerId::Number(3)),
            "https://api.example.test/pro/brokers/details?id=3"
        );
    }

    #[test]
    fn encodes_text_ids() {
        let api = BrokerApi::new("http://localhost:9000").unwrap();
        assert_eq!(
            api.details_url(&BrokerId::Text("a b&c".into())),
            "http://localhost:9000/brokers/details?id=a+b%26c"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            BrokerApi::new("not a url"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }
}
