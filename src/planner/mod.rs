//! Weekly content plan generation
//!
//! Expands the fixed catalogs over a 7-day window starting at a given date.
//! Everything here is deterministic for a given brand URL, start date and
//! schedule; the generation timestamp is applied later by the caller.

mod catalog;
mod types;

pub use types::*;

use crate::config::PostingTimes;
use crate::error::PlanError;
use catalog::{Destination, AD_VARIANTS, FACEBOOK_GROUP_PROMPT, HOOK_ANGLES, HOOK_CTA};
use chrono::{Days, NaiveDate};

/// Parse a `YYYY-MM-DD` week start.
///
/// chrono accepts unpadded fields, a sign and leading whitespace; only the
/// zero-padded form is allowed here.
pub fn parse_start_date(value: &str) -> Result<NaiveDate, PlanError> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| {
        PlanError::InvalidStartDate {
            value: value.to_string(),
            source,
        }
    })?;

    if date.format("%Y-%m-%d").to_string() != value {
        return Err(PlanError::NonCanonicalStartDate(value.to_string()));
    }
    Ok(date)
}

/// `start` plus `offset` days
fn day_at(start: NaiveDate, offset: usize) -> Result<NaiveDate, PlanError> {
    start
        .checked_add_days(Days::new(offset as u64))
        .ok_or(PlanError::DateOutOfRange(start))
}

/// One hook per day for the week beginning at `start` (inclusive)
pub fn build_hooks(brand_url: &str, start: NaiveDate) -> Result<Vec<Hook>, PlanError> {
    HOOK_ANGLES
        .iter()
        .enumerate()
        .map(|(idx, (angle, hook))| {
            Ok(Hook {
                day: day_at(start, idx)?,
                angle: angle.to_string(),
                hook: hook.to_string(),
                cta: HOOK_CTA.to_string(),
                destination: Destination::for_day(idx).url(brand_url),
            })
        })
        .collect()
}

pub fn build_ad_variants(brand_url: &str) -> Vec<AdVariant> {
    AD_VARIANTS
        .iter()
        .map(|v| AdVariant {
            name: v.name.to_string(),
            audience: v.audience.to_string(),
            creative_direction: v.creative_direction.to_string(),
            primary_text: v.primary_text.to_string(),
            headline: v.headline.to_string(),
            cta_label: v.cta_label.to_string(),
            destination: v.destination.url(brand_url),
        })
        .collect()
}

/// Two drafts per hook: an X post in the morning, then a Facebook group post.
///
/// The Facebook post always links to the quiz, whatever the day's hook
/// destination is.
pub fn build_queue(
    hooks: &[Hook],
    brand_url: &str,
    start: NaiveDate,
    times: &PostingTimes,
) -> Result<Vec<QueueItem>, PlanError> {
    let quiz_url = Destination::Quiz.url(brand_url);
    let mut queue = Vec::with_capacity(hooks.len() * 2);

    for (idx, hook) in hooks.iter().enumerate() {
        let day = day_at(start, idx)?.format("%Y-%m-%d");

        queue.push(QueueItem {
            platform: Platform::X,
            content_type: ContentType::Post,
            scheduled_local: format!("{} {}", day, times.x_post.format("%H:%M")),
            title: format!("{} hook", hook.angle),
            body: format!("{} {}: {}", hook.hook, hook.cta, hook.destination),
            destination: hook.destination.clone(),
            status: PostStatus::Draft,
        });

        queue.push(QueueItem {
            platform: Platform::Facebook,
            content_type: ContentType::GroupPost,
            scheduled_local: format!("{} {}", day, times.facebook_group_post.format("%H:%M")),
            title: format!("{} group post", hook.angle),
            body: format!("{}{}", FACEBOOK_GROUP_PROMPT, quiz_url),
            destination: quiz_url.clone(),
            status: PostStatus::Draft,
        });
    }

    Ok(queue)
}
