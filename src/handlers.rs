use crate::challenge::{self, Action, Persist, Snapshot, Transition};
use crate::errors::AppError;
use crate::models::{ChallengeResponse, MusicQuery, Notice, PageQuery, StartRequest};
use crate::sounds::Cue;
use crate::state::AppState;
use crate::storage::{clear_record, load_record, persist_record};
use crate::ui::{render_index, PageView};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use chrono::Local;
use std::path::Path as FsPath;
use tokio::fs;
use tracing::{error, info};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let snapshot = run(&state, Action::View).await?;
    let cues = state.sounds.available().await;
    let view = PageView {
        snapshot: &snapshot,
        cues,
        music: query.music.unwrap_or(true),
        notice: query.notice,
    };
    Ok(Html(render_index(&view)))
}

pub async fn get_challenge(State(state): State<AppState>) -> Result<Json<ChallengeResponse>, AppError> {
    let snapshot = run(&state, Action::Inspect).await?;
    Ok(Json(to_response(&snapshot)))
}

pub async fn start(
    State(state): State<AppState>,
    Json(payload): Json<StartRequest>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let snapshot = run(&state, Action::Start { days: payload.days }).await?;
    Ok(Json(to_response(&snapshot)))
}

pub async fn stop(State(state): State<AppState>) -> Result<Json<ChallengeResponse>, AppError> {
    let snapshot = run(&state, Action::Stop).await?;
    Ok(Json(to_response(&snapshot)))
}

pub async fn start_form(
    State(state): State<AppState>,
    Query(query): Query<MusicQuery>,
    Form(payload): Form<StartRequest>,
) -> Result<Redirect, AppError> {
    run(&state, Action::Start { days: payload.days }).await?;
    Ok(Redirect::to(&page_url(Some(Notice::Started), query.music)))
}

pub async fn stop_form(
    State(state): State<AppState>,
    Query(query): Query<MusicQuery>,
) -> Result<Redirect, AppError> {
    run(&state, Action::Stop).await?;
    Ok(Redirect::to(&page_url(Some(Notice::Stopped), query.music)))
}

pub async fn reset_form(
    State(state): State<AppState>,
    Query(query): Query<MusicQuery>,
) -> Result<Redirect, AppError> {
    run(&state, Action::Stop).await?;
    Ok(Redirect::to(&page_url(None, query.music)))
}

pub async fn audio(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cue = Cue::from_file_name(&file).ok_or_else(|| AppError::not_found("unknown audio asset"))?;
    let path = state
        .sounds
        .locate(cue)
        .await
        .ok_or_else(|| AppError::not_found("audio asset not available"))?;
    let bytes = fs::read(path).await?;
    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], bytes))
}

async fn run(state: &AppState, action: Action) -> Result<Snapshot, AppError> {
    let _guard = state.store_lock.lock().await;
    let now = Local::now().naive_local();
    let current = load_record(&state.data_path).await;
    let was_running = current.is_some();
    let transition = challenge::apply(current, action, now)?;

    commit(&state.data_path, action, &transition).await?;

    match action {
        Action::Start { days } => info!("challenge started for {days} days"),
        Action::Stop if was_running => info!("challenge stopped"),
        _ => {}
    }
    if transition.snapshot.milestone_reached {
        if let Some(record) = &transition.record {
            info!("milestone reached: {}%", record.last_milestone);
        }
    }

    Ok(transition.snapshot)
}

/// Writes the transition to disk. A failed milestone save on a plain view is
/// logged and the page still renders; start and stop report the failure.
async fn commit(path: &FsPath, action: Action, transition: &Transition) -> Result<(), AppError> {
    let result = match (transition.persist, &transition.record) {
        (Persist::Save, Some(record)) => persist_record(path, record).await,
        (Persist::Clear, _) => clear_record(path).await,
        _ => Ok(()),
    };

    match result {
        Err(err) if matches!(action, Action::View | Action::Inspect) => {
            error!("failed to save challenge record at {}: {err}", path.display());
            Ok(())
        }
        other => other,
    }
}

fn page_url(notice: Option<Notice>, music: Option<bool>) -> String {
    let mut params = Vec::new();
    match notice {
        Some(Notice::Started) => params.push("notice=started"),
        Some(Notice::Stopped) => params.push("notice=stopped"),
        None => {}
    }
    if music == Some(false) {
        params.push("music=false");
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

fn to_response(snapshot: &Snapshot) -> ChallengeResponse {
    let record = snapshot.record.as_ref();
    let progress = snapshot.progress.as_ref();
    ChallengeResponse {
        phase: snapshot.phase,
        challenge_days: record.map(|r| r.challenge_days),
        start_time: record.map(|r| r.start_time.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        last_milestone: record.map(|r| r.last_milestone),
        percent: progress.map(|p| p.percent),
        milestone: progress.map(|p| p.milestone),
        emoji_message: progress.map(|p| p.emoji_message().to_string()),
        headline: progress.map(|p| p.mood.headline().to_string()),
        milestone_reached: snapshot.milestone_reached,
    }
}
