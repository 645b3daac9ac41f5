//! Mock backend for tests and offline development.

use async_trait::async_trait;
use reqwest::Url;

use super::{CoachBackend, SummarizeRequest, TipsRequest};
use crate::error::{Error, Result};

/// Returns canned, input-dependent answers; `failing()` makes every call
/// fail the way an unreachable model server would.
#[derive(Clone, Default)]
pub struct MockBackend {
    pub fail: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl CoachBackend for MockBackend {
    async fn generate_tips(&self, request: &TipsRequest) -> Result<Vec<String>> {
        if self.fail {
            return Err(Error::GenerationFailed("mock backend configured to fail".into()));
        }

        let mut tips = Vec::new();
        if request.age < 30 {
            tips.push(
                "Start a monthly SIP now; time in the market does most of the compounding."
                    .to_string(),
            );
        } else {
            tips.push(
                "Review your retirement corpus target and raise contributions with each pay rise."
                    .to_string(),
            );
        }
        if request.income > 0.0 {
            let emergency_fund = request.income / 12.0 * 6.0;
            tips.push(format!(
                "Build an emergency fund of about {emergency_fund:.0} (six months of income)."
            ));
        }
        tips.push(format!(
            "Write down a deadline and a monthly amount for: {}.",
            request.financial_goals.trim()
        ));
        Ok(tips)
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<String> {
        if self.fail {
            return Err(Error::GenerationFailed("mock backend configured to fail".into()));
        }
        let host = Url::parse(&request.url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| request.url.clone());
        Ok(format!(
            "Key points from the article on {host}: spend less than you earn, invest the difference early, and diversify."
        ))
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tips_depend_on_age() {
        let backend = MockBackend::new();
        let young = TipsRequest {
            age: 22,
            income: 0.0,
            financial_goals: "Save for a laptop".into(),
        };
        let tips = backend.generate_tips(&young).await.expect("tips");
        assert_eq!(tips.len(), 2);
        assert!(tips[0].contains("SIP"));
        assert!(tips[1].contains("Save for a laptop"));
    }

    #[tokio::test]
    async fn failing_backend_returns_generation_failed() {
        let backend = MockBackend::failing();
        let req = SummarizeRequest {
            url: "https://example.com".into(),
        };
        assert!(matches!(
            backend.summarize(&req).await,
            Err(Error::GenerationFailed(_))
        ));
    }
}
