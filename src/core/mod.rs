mod amortization;
mod content;
mod progress;
mod quiz;
mod savings;
mod tax;
mod types;

pub use amortization::{
    PPF_MAX_RATE_PERCENT, PPF_MAX_YEARLY_INVESTMENT, PPF_MIN_YEARLY_INVESTMENT, PPF_MIN_YEARS,
    compute_emi, compute_fd_maturity, compute_ppf_maturity, compute_retirement_corpus,
    compute_sip_future_value,
};
pub use content::{
    FraudScenario, LessonSection, QuizQuestion, ScenarioDetail, TopicOverview, TutorialTopic,
    fraud_scenarios, get_fraud_scenario, get_topic, list_topics, topic, topic_overviews, topics,
};
pub use progress::{
    COMPLETE_PERCENTAGE, ProgressRecord, ProgressSummary, Session, TopicProgress, merge_progress,
};
pub use quiz::{Answers, AttemptState, QuizAttempt, grade};
pub use savings::compute_required_monthly_saving;
pub use tax::{NEW_REGIME_FY2023_24, TaxRegime, compute_tax, compute_tax_breakdown};
pub use types::{
    CompoundingFrequency, EmiResult, FdResult, PpfResult, QuizOutcome, RetirementResult,
    SipResult, TaxBracket, TaxBreakdown, TopicSlug,
};
