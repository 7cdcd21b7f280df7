use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::answer::Answer;
use crate::models::question::Question;
use crate::models::result::{PerformanceEntry, TestResult};
use crate::models::user::UserProfile;
use crate::services::extract;
use crate::services::gateway::TextGateway;
use crate::services::prompts;

/// Orchestrates the two model-bound operations of the test flow.
///
/// Stateless per call; holds only the injected gateway capability.
#[derive(Clone)]
pub struct TestService {
    gateway: Arc<dyn TextGateway>,
}

impl TestService {
    pub fn new(gateway: Arc<dyn TextGateway>) -> Self {
        Self { gateway }
    }

    /// Generate a fresh question list.
    ///
    /// A missing credential surfaces as a configuration error and a
    /// transport failure as a retryable gateway error; only malformed model
    /// output is absorbed by the extractor's fallback.
    pub async fn fetch_questions(&self) -> Result<Vec<Question>> {
        let raw = self
            .gateway
            .generate(prompts::question_generation_prompt())
            .await
            .map_err(|e| {
                if e.is_configuration() {
                    Error::Config(e.to_string())
                } else {
                    tracing::error!(error = %e, "question generation call failed");
                    Error::Gateway(e)
                }
            })?;

        let questions = extract::extract_questions(&raw);
        tracing::info!(count = questions.len(), "generated question list");
        Ok(questions)
    }

    /// Score a completed answer set.
    ///
    /// Never fails: a gateway outage degrades to the tier-2 unavailable
    /// result so the user always reaches a results view, and malformed
    /// output is handled inside the extractor.
    pub async fn score_answers(&self, profile: &UserProfile, answers: &[Answer]) -> TestResult {
        let prompt = prompts::scoring_prompt(profile, answers);
        match self.gateway.generate(&prompt).await {
            Ok(raw) => extract::extract_score(&raw),
            Err(e) => {
                tracing::error!(error = %e, "scoring call failed, serving unavailable result");
                unavailable_result()
            }
        }
    }
}

/// Tier-2 fallback served when the scoring call itself fails, as opposed to
/// the extractor's fallback for replies that arrive but cannot be parsed.
pub fn unavailable_result() -> TestResult {
    TestResult {
        iq_score: 105,
        iq_category: "Average Intelligence".to_string(),
        percentile: 50,
        performance: vec![
            PerformanceEntry::new("Logical Reasoning", 70),
            PerformanceEntry::new("Pattern Recognition", 75),
            PerformanceEntry::new("Spatial Reasoning", 65),
            PerformanceEntry::new("Mathematical Ability", 60),
        ],
        explanation: "Based on your answers, you showed good analytical thinking. \
                      Your score falls within the average range, indicating solid \
                      general intelligence."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::gateway::GatewayError;
    use async_trait::async_trait;
    use reqwest::StatusCode;

    /// Canned gateway: either a fixed reply or a fixed failure.
    struct FixedGateway {
        reply: std::result::Result<String, fn() -> GatewayError>,
    }

    impl FixedGateway {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
            })
        }

        fn failing(err: fn() -> GatewayError) -> Arc<Self> {
            Arc::new(Self { reply: Err(err) })
        }
    }

    #[async_trait]
    impl TextGateway for FixedGateway {
        async fn generate(&self, _prompt: &str) -> std::result::Result<String, GatewayError> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Ada".to_string(),
            country: "other".to_string(),
            age: 30,
            school: "MIT".to_string(),
            gender: Some("female".to_string()),
        }
    }

    #[tokio::test]
    async fn fetch_questions_parses_model_reply() {
        let gateway = FixedGateway::replying(
            r#"Here you go: [{"id": "g1", "type": "short_answer", "question": "Next: 3,6,9,?"}]"#,
        );
        let service = TestService::new(gateway);
        let questions = service.fetch_questions().await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "g1");
    }

    #[tokio::test]
    async fn fetch_questions_with_missing_credential_is_a_config_error() {
        let gateway = FixedGateway::failing(|| GatewayError::MissingCredential);
        let service = TestService::new(gateway);
        match service.fetch_questions().await {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other.map(|q| q.len())),
        }
    }

    #[tokio::test]
    async fn fetch_questions_with_upstream_failure_is_retryable_not_fallback() {
        let gateway = FixedGateway::failing(|| GatewayError::Upstream {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "overloaded".to_string(),
        });
        let service = TestService::new(gateway);
        match service.fetch_questions().await {
            Err(Error::Gateway(_)) => {}
            other => panic!("expected gateway error, got {:?}", other.map(|q| q.len())),
        }
    }

    #[tokio::test]
    async fn fetch_questions_with_malformed_reply_uses_extractor_fallback() {
        let gateway = FixedGateway::replying("I am sorry, I cannot produce JSON today.");
        let service = TestService::new(gateway);
        let questions = service.fetch_questions().await.unwrap();
        assert_eq!(questions, extract::fallback_questions());
    }

    #[tokio::test]
    async fn scoring_gateway_failure_degrades_to_unavailable_result() {
        let gateway = FixedGateway::failing(|| GatewayError::Upstream {
            status: StatusCode::GATEWAY_TIMEOUT,
            body: "timeout".to_string(),
        });
        let service = TestService::new(gateway);
        let answers = vec![Answer::new("q1", "4")];
        let result = service.score_answers(&profile(), &answers).await;
        assert_eq!(result, unavailable_result());
    }

    #[tokio::test]
    async fn scoring_parses_model_reply() {
        let gateway = FixedGateway::replying(
            r#"{"iqScore": 131, "iqCategory": "Very Superior Intelligence",
                "percentile": 98, "performance": [], "explanation": "Sharp."}"#,
        );
        let service = TestService::new(gateway);
        let result = service.score_answers(&profile(), &[]).await;
        assert_eq!(result.iq_score, 131);
        assert_eq!(result.percentile, 98);
    }
}
