use crate::errors::AppError;
use crate::models::{ChallengeRecord, ChallengeStatus, Phase};
use chrono::NaiveDateTime;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 100;
pub const MILESTONE_STEP: u32 = 5;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    KeepGoing,
    Halfway,
    CrushingIt,
    AlmostThere,
    Done,
}

impl Mood {
    /// Upper bounds are exclusive except for `Done`, which covers 100 and beyond.
    pub fn for_percent(percent: f64) -> Self {
        if percent < 25.0 {
            Mood::KeepGoing
        } else if percent < 50.0 {
            Mood::Halfway
        } else if percent < 75.0 {
            Mood::CrushingIt
        } else if percent < 100.0 {
            Mood::AlmostThere
        } else {
            Mood::Done
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Mood::KeepGoing => "keep going",
            Mood::Halfway => "halfway",
            Mood::CrushingIt => "crushing it",
            Mood::AlmostThere => "almost there",
            Mood::Done => "done",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Mood::KeepGoing => "🚶 Keep going!",
            Mood::Halfway => "🏃 You're halfway!",
            Mood::CrushingIt => "🔥 Crushing it!",
            Mood::AlmostThere => "💪 Almost there!",
            Mood::Done => "🎉 Done!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub percent: f64,
    pub milestone: u32,
    pub mood: Mood,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    pub fn emoji_message(&self) -> &'static str {
        self.mood.message()
    }
}

pub fn validate_days(days: u32) -> Result<u32, AppError> {
    if (MIN_DAYS..=MAX_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(AppError::bad_request(format!(
            "challenge days must be between {MIN_DAYS} and {MAX_DAYS}"
        )))
    }
}

pub fn start_challenge(days: u32, now: NaiveDateTime) -> Result<ChallengeRecord, AppError> {
    let challenge_days = validate_days(days)?;
    Ok(ChallengeRecord {
        start_time: now,
        challenge_days,
        status: ChallengeStatus::Running,
        last_milestone: 0,
    })
}

pub fn compute_progress(record: &ChallengeRecord, now: NaiveDateTime) -> Progress {
    let total_seconds = f64::from(record.challenge_days) * SECONDS_PER_DAY;
    let elapsed_seconds = (now - record.start_time).num_milliseconds() as f64 / 1000.0;

    // A clock set backwards yields negative elapsed time; clamp it to zero.
    let percent = if total_seconds <= 0.0 {
        0.0
    } else {
        (100.0 * elapsed_seconds / total_seconds).clamp(0.0, 100.0)
    };
    let milestone = (percent / f64::from(MILESTONE_STEP)).floor() as u32 * MILESTONE_STEP;

    Progress {
        percent,
        milestone,
        mood: Mood::for_percent(percent),
    }
}

/// Moves `last_milestone` forward. Returns true when the record changed, which
/// is also the one moment a ding cue should play.
pub fn record_milestone(record: &mut ChallengeRecord, milestone: u32) -> bool {
    if milestone > record.last_milestone && milestone < 100 {
        record.last_milestone = milestone;
        true
    } else {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    /// Like `View`, but leaves milestones untouched so a poll cannot use up a cue.
    Inspect,
    Start { days: u32 },
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    Keep,
    Save,
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub record: Option<ChallengeRecord>,
    pub progress: Option<Progress>,
    pub milestone_reached: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub record: Option<ChallengeRecord>,
    pub persist: Persist,
    pub snapshot: Snapshot,
}

pub fn apply(
    current: Option<ChallengeRecord>,
    action: Action,
    now: NaiveDateTime,
) -> Result<Transition, AppError> {
    let (record, mut persist) = match action {
        Action::View | Action::Inspect => (current, Persist::Keep),
        Action::Start { days } => (Some(start_challenge(days, now)?), Persist::Save),
        Action::Stop => (None, Persist::Clear),
    };

    let Some(mut record) = record else {
        return Ok(Transition {
            record: None,
            persist,
            snapshot: Snapshot {
                phase: Phase::Idle,
                record: None,
                progress: None,
                milestone_reached: false,
            },
        });
    };

    let progress = compute_progress(&record, now);
    let milestone_reached =
        action != Action::Inspect && record_milestone(&mut record, progress.milestone);
    if milestone_reached {
        persist = Persist::Save;
    }

    let phase = if progress.is_complete() {
        Phase::Complete
    } else {
        Phase::Running
    };

    Ok(Transition {
        record: Some(record.clone()),
        persist,
        snapshot: Snapshot {
            phase,
            record: Some(record),
            progress: Some(progress),
            milestone_reached,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn start_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn record(days: u32) -> ChallengeRecord {
        start_challenge(days, start_time()).unwrap()
    }

    #[test]
    fn progress_is_zero_at_start_for_every_duration() {
        for days in MIN_DAYS..=MAX_DAYS {
            let progress = compute_progress(&record(days), start_time());
            assert_eq!(progress.percent, 0.0);
            assert_eq!(progress.milestone, 0);
            assert_eq!(progress.emoji_message(), "keep going");
        }
    }

    #[test]
    fn progress_is_done_at_end_for_every_duration() {
        for days in MIN_DAYS..=MAX_DAYS {
            let end = start_time() + Duration::seconds(i64::from(days) * 86_400);
            let progress = compute_progress(&record(days), end);
            assert_eq!(progress.percent, 100.0);
            assert_eq!(progress.emoji_message(), "done");
            assert!(progress.is_complete());
        }
    }

    #[test]
    fn progress_clamps_past_the_end_and_before_the_start() {
        let rec = record(3);
        let late = compute_progress(&rec, start_time() + Duration::days(30));
        assert_eq!(late.percent, 100.0);
        assert_eq!(late.milestone, 100);

        let early = compute_progress(&rec, start_time() - Duration::hours(5));
        assert_eq!(early.percent, 0.0);
        assert_eq!(early.mood, Mood::KeepGoing);
    }

    #[test]
    fn half_day_into_one_day_challenge_is_halfway() {
        let progress = compute_progress(&record(1), start_time() + Duration::seconds(43_200));
        assert_eq!(format!("{:.2}", progress.percent), "50.00");
        assert_eq!(progress.emoji_message(), "halfway");
        assert_eq!(progress.milestone, 50);
    }

    #[test]
    fn percent_and_milestone_never_decrease_over_time() {
        let rec = record(7);
        let mut last_percent = 0.0;
        let mut last_milestone = 0;
        for hour in 0..=(7 * 24 + 12) {
            let progress = compute_progress(&rec, start_time() + Duration::hours(hour));
            assert!(progress.percent >= last_percent);
            assert!(progress.milestone >= last_milestone);
            assert_eq!(progress.milestone % MILESTONE_STEP, 0);
            last_percent = progress.percent;
            last_milestone = progress.milestone;
        }
    }

    #[test]
    fn mood_boundaries_are_exclusive_on_the_upper_end() {
        assert_eq!(Mood::for_percent(24.99), Mood::KeepGoing);
        assert_eq!(Mood::for_percent(25.0), Mood::Halfway);
        assert_eq!(Mood::for_percent(50.0), Mood::CrushingIt);
        assert_eq!(Mood::for_percent(75.0), Mood::AlmostThere);
        assert_eq!(Mood::for_percent(99.999), Mood::AlmostThere);
        assert_eq!(Mood::for_percent(100.0), Mood::Done);
        assert_eq!(Mood::Halfway.headline(), "🏃 You're halfway!");
    }

    #[test]
    fn record_milestone_only_moves_forward() {
        let mut rec = record(10);
        assert!(record_milestone(&mut rec, 15));
        assert_eq!(rec.last_milestone, 15);

        assert!(!record_milestone(&mut rec, 15));
        assert!(!record_milestone(&mut rec, 10));
        assert_eq!(rec.last_milestone, 15);

        assert!(record_milestone(&mut rec, 20));
        assert_eq!(rec.last_milestone, 20);
    }

    #[test]
    fn record_milestone_never_stores_completion() {
        let mut rec = record(1);
        rec.last_milestone = 95;
        assert!(!record_milestone(&mut rec, 100));
        assert_eq!(rec.last_milestone, 95);
    }

    #[test]
    fn start_rejects_out_of_range_days() {
        for days in [0, 101, 1_000] {
            let err = start_challenge(days, start_time()).unwrap_err();
            assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        }
        assert!(start_challenge(1, start_time()).is_ok());
        assert!(start_challenge(100, start_time()).is_ok());
    }

    #[test]
    fn apply_start_saves_a_fresh_record() {
        let transition = apply(None, Action::Start { days: 7 }, start_time()).unwrap();
        assert_eq!(transition.persist, Persist::Save);
        assert_eq!(transition.snapshot.phase, Phase::Running);

        let rec = transition.record.unwrap();
        assert_eq!(rec.challenge_days, 7);
        assert_eq!(rec.status, ChallengeStatus::Running);
        assert_eq!(rec.last_milestone, 0);
        assert!(!transition.snapshot.milestone_reached);
    }

    #[test]
    fn apply_start_with_invalid_days_leaves_state_untouched() {
        let err = apply(None, Action::Start { days: 0 }, start_time()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn apply_view_records_a_crossed_milestone_once() {
        let now = start_time() + Duration::hours(12);
        let first = apply(Some(record(1)), Action::View, now).unwrap();
        assert_eq!(first.persist, Persist::Save);
        assert!(first.snapshot.milestone_reached);
        assert_eq!(first.record.as_ref().unwrap().last_milestone, 50);

        let second = apply(first.record, Action::View, now + Duration::minutes(1)).unwrap();
        assert_eq!(second.persist, Persist::Keep);
        assert!(!second.snapshot.milestone_reached);
    }

    #[test]
    fn apply_inspect_leaves_milestones_for_the_page() {
        let now = start_time() + Duration::hours(12);
        let inspected = apply(Some(record(1)), Action::Inspect, now).unwrap();
        assert_eq!(inspected.persist, Persist::Keep);
        assert!(!inspected.snapshot.milestone_reached);
        assert_eq!(inspected.snapshot.progress.unwrap().milestone, 50);
        assert_eq!(inspected.record.as_ref().unwrap().last_milestone, 0);

        let viewed = apply(inspected.record, Action::View, now).unwrap();
        assert!(viewed.snapshot.milestone_reached);
        assert_eq!(viewed.persist, Persist::Save);
    }

    #[test]
    fn apply_view_reports_completion() {
        let now = start_time() + Duration::days(2);
        let transition = apply(Some(record(1)), Action::View, now).unwrap();
        assert_eq!(transition.snapshot.phase, Phase::Complete);
        assert_eq!(transition.persist, Persist::Keep);
        assert_eq!(
            transition.snapshot.progress.unwrap().emoji_message(),
            "done"
        );
    }

    #[test]
    fn apply_stop_clears_the_record() {
        let transition = apply(Some(record(5)), Action::Stop, start_time()).unwrap();
        assert_eq!(transition.persist, Persist::Clear);
        assert!(transition.record.is_none());
        assert_eq!(transition.snapshot.phase, Phase::Idle);

        let idle = apply(None, Action::View, start_time()).unwrap();
        assert_eq!(idle.persist, Persist::Keep);
        assert_eq!(idle.snapshot.phase, Phase::Idle);
    }
}
