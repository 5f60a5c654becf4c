use crate::challenge::{Snapshot, MAX_DAYS, MIN_DAYS};
use crate::models::{Notice, Phase};
use crate::sounds::{AvailableCues, Cue};

pub struct PageView<'a> {
    pub snapshot: &'a Snapshot,
    pub cues: AvailableCues,
    pub music: bool,
    pub notice: Option<Notice>,
}

pub fn render_index(view: &PageView<'_>) -> String {
    let body = match view.snapshot.phase {
        Phase::Idle => render_setup(view.music),
        Phase::Running | Phase::Complete => render_progress(view),
    };

    INDEX_HTML
        .replace("{{NOTICE}}", &render_notice(view.notice))
        .replace("{{BODY}}", &body)
}

fn render_notice(notice: Option<Notice>) -> String {
    match notice {
        Some(Notice::Started) => r#"<div class="notice ok">Challenge Started!</div>"#.to_string(),
        Some(Notice::Stopped) => r#"<div class="notice warn">Challenge stopped.</div>"#.to_string(),
        None => String::new(),
    }
}

/// Query suffix for form actions so a muted page stays muted after the redirect.
fn music_suffix(music: bool) -> &'static str {
    if music { "" } else { "?music=false" }
}

fn render_setup(music: bool) -> String {
    let suffix = music_suffix(music);
    format!(
        r#"<section class="setup">
      <h2>🎯 Set Your Challenge</h2>
      <form method="post" action="/challenge/start{suffix}">
        <label for="days">How many days is your challenge?</label>
        <input id="days" name="days" type="number" min="{MIN_DAYS}" max="{MAX_DAYS}" step="1" value="{MIN_DAYS}" required />
        <button class="btn-start" type="submit">🚀 Start Challenge</button>
      </form>
    </section>"#
    )
}

fn render_progress(view: &PageView<'_>) -> String {
    let Some(progress) = view.snapshot.progress else {
        return render_setup(view.music);
    };
    let complete = view.snapshot.phase == Phase::Complete;
    let days = view
        .snapshot
        .record
        .as_ref()
        .map(|record| record.challenge_days)
        .unwrap_or_default();

    let mut html = format!(
        r#"<section class="progress">
      <h2>💥 Challenge in Progress</h2>
      <h3 id="headline">{headline} ({percent:.2}%)</h3>
      <p class="subtitle">{days}-day challenge</p>
      <div class="container">
        <div style="width: {percent}%;" class="animated-bar"></div>
      </div>
"#,
        headline = progress.mood.headline(),
        percent = progress.percent,
    );

    html.push_str(&render_music_toggle(view.music));
    if view.music && view.cues.background {
        html.push_str(&audio_tag(Cue::Background, true));
    }
    if view.snapshot.milestone_reached && view.cues.ding {
        html.push_str(&audio_tag(Cue::Ding, false));
    }

    if complete {
        html.push_str(BALLOONS_HTML);
        if view.cues.victory {
            html.push_str(&audio_tag(Cue::Victory, false));
        }
        html.push_str(&format!(
            r#"      <div class="notice ok">🎉 Congratulations! You completed your challenge!</div>
      <form method="post" action="/challenge/reset{suffix}">
        <button class="btn-start" type="submit">🔁 Start New Challenge</button>
      </form>
"#,
            suffix = music_suffix(view.music),
        ));
    } else {
        html.push_str(&format!(
            r#"      <form method="post" action="/challenge/stop{suffix}">
        <button class="btn-stop" type="submit">❌ Stop Challenge</button>
      </form>
"#,
            suffix = music_suffix(view.music),
        ));
    }

    html.push_str("    </section>");
    html
}

fn render_music_toggle(music: bool) -> String {
    let (label, href) = if music {
        ("🎵 Background music: on", "/?music=false")
    } else {
        ("🎵 Background music: off", "/?music=true")
    };
    format!(r#"      <p class="toggle"><a href="{href}">{label}</a></p>
"#)
}

fn audio_tag(cue: Cue, looping: bool) -> String {
    let loop_attr = if looping { " loop" } else { "" };
    format!(
        r#"      <audio class="cue" src="{src}" autoplay{loop_attr}></audio>
"#,
        src = cue.url()
    )
}

const BALLOONS_HTML: &str = r#"      <div class="balloons" aria-hidden="true">
        <span>🎈</span><span>🎈</span><span>🎉</span><span>🎈</span><span>🎊</span><span>🎈</span>
      </div>
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Challenge Tracker</title>
  <style>
    :root {
      --ink: #2b2a28;
      --accent: #0575e6;
      --accent-2: #00f260;
      --card: #f5f7fa;
      --shadow: 0 0 15px rgba(0, 0, 0, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      display: grid;
      gap: 20px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .container {
      background-color: var(--card);
      padding: 20px;
      border-radius: 12px;
      box-shadow: var(--shadow);
    }

    .animated-bar {
      background: linear-gradient(to right, var(--accent-2), var(--accent));
      height: 35px;
      border-radius: 10px;
      animation: growBar 2s ease-in-out infinite alternate;
    }

    @keyframes growBar {
      0% { opacity: 0.7; }
      100% { opacity: 1.0; }
    }

    form {
      display: grid;
      gap: 12px;
      margin-top: 16px;
    }

    input[type="number"] {
      padding: 10px 12px;
      font-size: 1rem;
      border-radius: 8px;
      border: 1px solid #c9ced6;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    .btn-start {
      background: var(--accent);
    }

    .btn-stop {
      background: #c63b2b;
    }

    .notice {
      padding: 12px 16px;
      border-radius: 10px;
      margin-top: 12px;
    }

    .notice.ok {
      background: #e3f6ea;
      color: #2d7a4b;
    }

    .notice.warn {
      background: #fdf1dc;
      color: #8a5a10;
    }

    .toggle a {
      color: var(--accent);
      text-decoration: none;
    }

    .balloons {
      position: fixed;
      inset: 0;
      pointer-events: none;
      overflow: hidden;
    }

    .balloons span {
      position: absolute;
      bottom: -60px;
      font-size: 2.6rem;
      animation: floatUp 6s ease-in forwards;
    }

    .balloons span:nth-child(1) { left: 8%; animation-delay: 0s; }
    .balloons span:nth-child(2) { left: 24%; animation-delay: 0.6s; }
    .balloons span:nth-child(3) { left: 40%; animation-delay: 0.2s; }
    .balloons span:nth-child(4) { left: 58%; animation-delay: 0.9s; }
    .balloons span:nth-child(5) { left: 74%; animation-delay: 0.4s; }
    .balloons span:nth-child(6) { left: 90%; animation-delay: 1.1s; }

    @keyframes floatUp {
      to {
        transform: translateY(-120vh);
        opacity: 0.2;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>🏁 Daily Challenge Tracker</h1>
    {{NOTICE}}
    {{BODY}}
  </main>
</body>
</html>
"#;
