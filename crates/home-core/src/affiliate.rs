//! Affiliate link decoration.

use url::Url;

use crate::config::AffiliateConfig;

/// Appends the associate tag to outbound links on the eligible domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliateLinkBuilder {
    domain: String,
    param: String,
    tag: String,
}

impl AffiliateLinkBuilder {
    /// Create a builder for `domain` that appends `param=tag`.
    pub fn new(
        domain: impl Into<String>,
        param: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into().to_ascii_lowercase(),
            param: param.into(),
            tag: tag.into(),
        }
    }

    pub fn from_config(config: &AffiliateConfig) -> Self {
        Self::new(&config.domain, &config.param, &config.tag)
    }

    /// The associate tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether `url` points at the affiliate-eligible domain or a subdomain of it.
    pub fn is_eligible(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        match parsed.host_str() {
            Some(host) => {
                let host = host.to_ascii_lowercase();
                host == self.domain
                    || host
                        .strip_suffix(self.domain.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }
            None => false,
        }
    }

    /// Decorate an outbound URL with the tracking parameter.
    ///
    /// The parameter goes at the end of the query string, ahead of any
    /// fragment, joined with `&` when a query is already present. The rest of
    /// the URL text is kept as-is. Ineligible or unparsable URLs are returned
    /// unchanged.
    pub fn decorate(&self, url: &str) -> String {
        if !self.is_eligible(url) {
            return url.to_string();
        }
        let (base, fragment) = url.split_at(url.find('#').unwrap_or(url.len()));
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{}{}{}={}{}", base, separator, self.param, self.tag, fragment)
    }
}

impl Default for AffiliateLinkBuilder {
    fn default() -> Self {
        Self::from_config(&AffiliateConfig::default())
    }
}
