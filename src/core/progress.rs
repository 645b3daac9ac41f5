use std::collections::BTreeMap;

use serde::Serialize;

use super::content::topics;
use super::types::TopicSlug;

pub const COMPLETE_PERCENTAGE: u8 = 100;

/// Best-ever quiz percentage per topic for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProgressRecord(BTreeMap<TopicSlug, u8>);

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slug: TopicSlug) -> u8 {
        self.0.get(&slug).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TopicSlug, u8)> + '_ {
        self.0.iter().map(|(slug, pct)| (*slug, *pct))
    }

    /// Keeps the higher of the stored and the new percentage. Returns the
    /// value now stored.
    pub fn merge(&mut self, slug: TopicSlug, percentage: u8) -> u8 {
        let percentage = percentage.min(COMPLETE_PERCENTAGE);
        let entry = self.0.entry(slug).or_insert(0);
        *entry = (*entry).max(percentage);
        *entry
    }

    pub fn summary(&self) -> ProgressSummary {
        let catalog = topics();
        let topics: Vec<TopicProgress> = catalog
            .iter()
            .map(|topic| TopicProgress {
                slug: topic.slug,
                title: topic.title,
                completed: self.get(topic.slug),
            })
            .collect();

        let total_modules = catalog.len();
        let completed_modules = self
            .iter()
            .filter(|&(_, pct)| pct == COMPLETE_PERCENTAGE)
            .count();
        let completion_percentage = if total_modules > 0 {
            ((completed_modules as f64 / total_modules as f64) * 100.0).round() as u8
        } else {
            0
        };
        let incomplete_modules = topics
            .iter()
            .filter(|row| row.completed < COMPLETE_PERCENTAGE)
            .map(|row| row.slug)
            .collect();

        ProgressSummary {
            total_modules,
            completed_modules,
            completion_percentage,
            topics,
            incomplete_modules,
        }
    }
}

/// Pure form of [`ProgressRecord::merge`].
pub fn merge_progress(
    progress: &ProgressRecord,
    slug: TopicSlug,
    percentage: u8,
) -> ProgressRecord {
    let mut updated = progress.clone();
    updated.merge(slug, percentage);
    updated
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgress {
    pub slug: TopicSlug,
    pub title: &'static str,
    pub completed: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_modules: usize,
    pub completed_modules: usize,
    pub completion_percentage: u8,
    /// One row per catalog topic, in catalog order.
    pub topics: Vec<TopicProgress>,
    /// Topics still below 100%, in catalog order.
    pub incomplete_modules: Vec<TopicSlug>,
}

/// A logged-in user and their progress. The host decides where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_name: String,
    progress: ProgressRecord,
}

impl Session {
    /// Every login starts from empty progress.
    pub fn login(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            progress: ProgressRecord::new(),
        }
    }

    /// Ends the session, returning the progress it held.
    pub fn logout(self) -> ProgressRecord {
        self.progress
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    pub fn record_quiz_result(&mut self, slug: TopicSlug, percentage: u8) -> u8 {
        self.progress.merge(slug, percentage)
    }
}
