use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tokio::sync::mpsc::UnboundedReceiver;

use gradnet_application::{AppContext, ConversationSummary};
use gradnet_core::auth::AuthService;
use gradnet_core::notification::Notification;
use gradnet_core::profile::{UpdateProfileRequest, UserProfile, UserRole};
use gradnet_core::route::Route;
use gradnet_core::search::SearchFilters;
use gradnet_infrastructure::ConfigService;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    routes: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            routes: vec![
                "/login".to_string(),
                "/messages".to_string(),
                "/profile".to_string(),
                "/settings".to_string(),
                "/terms".to_string(),
                "/users/".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .routes
                .iter()
                .filter(|route| route.starts_with(line))
                .map(|route| Pair {
                    display: route.clone(),
                    replacement: route.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.routes
                .iter()
                .find(|route| route.starts_with(line) && route.len() > line.len())
                .map(|route| route[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// View state carried between prompts.
struct ReplState {
    route: Route,
    filters: SearchFilters,
    /// Last search results, for `view <n>`
    results: Vec<UserProfile>,
    /// Last chat-list rows, for `open <n>`
    summaries: Vec<ConversationSummary>,
    active_conversation: Option<String>,
    /// Profile edits not yet saved
    pending: UpdateProfileRequest,
}

impl ReplState {
    fn new() -> Self {
        Self {
            route: Route::Login,
            filters: SearchFilters::default(),
            results: Vec::new(),
            summaries: Vec::new(),
            active_conversation: None,
            pending: UpdateProfileRequest::default(),
        }
    }
}

fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Graduate => "大学院生",
        UserRole::Prospect => "進学希望者",
    }
}

fn format_time(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

fn print_error(err: impl std::fmt::Display) {
    eprintln!("{}", format!("Error: {err}").red());
}

fn drain_notifications(receiver: &mut UnboundedReceiver<Notification>) {
    while let Ok(notification) = receiver.try_recv() {
        println!(
            "{}",
            format!("🔔 新着メッセージ: {}", notification.body).bright_yellow()
        );
    }
}

/// The main entry point for the GradNet terminal front end.
///
/// Sets up a rustyline-based REPL over the wired application context.
/// Input starting with `/` navigates between views; other input runs the
/// commands of the current view. Notifications from the chat simulation
/// are drained between prompts.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    let config = ConfigService::new().get_config();
    let (context, mut notifications) = AppContext::bootstrap(config);

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== GradNet ===".bright_magenta().bold());
    println!(
        "{}",
        "大学院進学を目指す全ての人のためのプラットフォーム".bright_black()
    );
    println!(
        "{}",
        "Type a route ('/login', '/messages', ...) to navigate, 'help' for commands, 'quit' to exit."
            .bright_black()
    );
    println!();

    let mut state = ReplState::new();
    render_view(&context, &mut state).await;

    // ===== Main REPL Loop =====
    loop {
        drain_notifications(&mut notifications);

        let prompt = format!("gradnet:{}> ", state.route.path());
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if trimmed == "help" {
                    print_help(&state.route);
                    continue;
                }

                if trimmed.starts_with('/') {
                    navigate(&context, &mut state, trimmed).await;
                } else {
                    run_view_command(&context, &mut state, trimmed).await;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

/// Switches to the view behind `path`, redirecting unauthenticated
/// visitors of protected views to the login view.
async fn navigate(context: &AppContext, state: &mut ReplState, path: &str) {
    let route = Route::parse(path);

    if let Route::NotFound(path) = &route {
        println!("{}", format!("404 - '{path}' は存在しません").red());
        return;
    }

    if route.requires_auth() && !context.auth.is_authenticated().await {
        println!("{}", "ログインが必要です。".yellow());
        state.route = Route::Login;
    } else {
        state.route = route;
    }

    render_view(context, state).await;
}

async fn render_view(context: &AppContext, state: &mut ReplState) {
    match state.route.clone() {
        Route::Home => render_home(context, state).await,
        Route::Login => render_login(context).await,
        Route::Messages => render_messages(context, state).await,
        Route::Profile => render_profile(context).await,
        Route::Settings => render_settings(context).await,
        Route::Terms => render_terms(),
        Route::UserDetail(id) => render_user_detail(context, &id).await,
        Route::NotFound(_) => {}
    }
}

async fn render_login(context: &AppContext) {
    println!("{}", "--- ログイン / サインアップ ---".bold());
    if context.auth.is_authenticated().await {
        println!("{}", "既にログインしています。'/' で検索へ。".bright_black());
    } else {
        println!(
            "{}",
            "'signin' でデモアカウントにログインします。".bright_black()
        );
    }
}

async fn render_home(context: &AppContext, state: &mut ReplState) {
    println!("{}", "--- ユーザー検索 ---".bold());
    match context.directory.search(&state.filters).await {
        Ok(results) => {
            println!(
                "{}",
                format!("{} 人のユーザーが見つかりました", results.len()).bright_black()
            );
            for (index, profile) in results.iter().enumerate() {
                let badge = if profile.is_graduate() && profile.accepting_consultations {
                    " 相談受付中".green().to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {}. {} [{}]{} - {}",
                    index + 1,
                    profile.display_name.bright_blue(),
                    role_label(profile.role),
                    badge,
                    profile.institution.as_deref().unwrap_or("所属未設定")
                );
            }
            state.results = results;
        }
        Err(e) => print_error(e),
    }
}

async fn render_messages(context: &AppContext, state: &mut ReplState) {
    let unread = context.chat.unread_total().await.unwrap_or(0);
    if unread > 0 {
        println!("{}", format!("--- メッセージ (未読 {unread}) ---").bold());
    } else {
        println!("{}", "--- メッセージ ---".bold());
    }
    match context.chat.summaries().await {
        Ok(summaries) => {
            if summaries.is_empty() {
                println!("{}", "メッセージがありません".bright_black());
            }
            for (index, summary) in summaries.iter().enumerate() {
                let unread = if summary.unread_count > 0 {
                    format!(" ({} 未読)", summary.unread_count)
                        .bright_yellow()
                        .to_string()
                } else {
                    String::new()
                };
                let preview = summary
                    .last_message
                    .as_ref()
                    .map(|m| format!("{} [{}]", m.content, format_time(&m.timestamp)))
                    .unwrap_or_else(|| "(メッセージなし)".to_string());
                println!(
                    "  {}. {}{} - {}",
                    index + 1,
                    summary.participant.display_name.bright_blue(),
                    unread,
                    preview
                );
            }
            state.summaries = summaries;
        }
        Err(e) => print_error(e),
    }
}

async fn render_profile(context: &AppContext) {
    println!("{}", "--- プロフィール編集 ---".bold());
    match context.auth.current_user().await {
        Some(profile) => print_profile(&profile),
        None => println!("{}", "ログインが必要です。".yellow()),
    }
}

async fn render_settings(context: &AppContext) {
    println!("{}", "--- アカウント設定 ---".bold());
    if let Some(profile) = context.auth.current_user().await {
        println!(
            "  {} [{}]",
            profile.display_name.bright_blue(),
            role_label(profile.role)
        );
    }
    println!("{}", "'logout' でログアウトします。".bright_black());
}

fn render_terms() {
    println!("{}", "--- 利用規約 ---".bold());
    println!("{}", "本サービスはデモ環境です。登録情報は保存されません。".bright_black());
}

async fn render_user_detail(context: &AppContext, id: &str) {
    match context.directory.get_profile(id).await {
        Ok(profile) => {
            print_profile(&profile);
            if profile.is_graduate() {
                let status = if profile.accepting_consultations {
                    "このユーザーは現在相談を受け付けています。'message' でメッセージを送りましょう。"
                        .green()
                } else {
                    "このユーザーは現在相談を受け付けていません。返信が遅れる可能性があります。"
                        .yellow()
                };
                println!("{status}");
            }
        }
        Err(e) => print_error(e),
    }
}

fn print_profile(profile: &UserProfile) {
    println!(
        "  {} [{}]",
        profile.display_name.bright_blue().bold(),
        role_label(profile.role)
    );
    if let Some(institution) = &profile.institution {
        let department = profile.department.as_deref().unwrap_or("未設定");
        let field = profile.field.as_deref().unwrap_or("未設定");
        println!("  {institution} / {department} / {field}");
    }
    if let Some(bio) = &profile.bio {
        println!("  {bio}");
    }
    if !profile.research_interests.is_empty() {
        println!("  興味: {}", profile.research_interests.join(", "));
    }
}

/// Runs a non-navigation command against the current view.
async fn run_view_command(context: &AppContext, state: &mut ReplState, input: &str) {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    let route = state.route.clone();
    match (&route, command) {
        (Route::Login, "signin") => match context.auth.sign_in().await {
            Ok(profile) => {
                println!(
                    "{}",
                    format!("ようこそ、{} さん！", profile.display_name).bright_green()
                );
                state.route = Route::Home;
                render_view(context, state).await;
            }
            Err(e) => print_error(e),
        },

        (Route::Home, "search") => {
            state.filters.query = rest.to_string();
            render_view(context, state).await;
        }
        (Route::Home, "role") => match rest {
            "graduate" => set_role_filter(context, state, Some(UserRole::Graduate)).await,
            "prospect" => set_role_filter(context, state, Some(UserRole::Prospect)).await,
            "all" => set_role_filter(context, state, None).await,
            _ => println!("{}", "Usage: role graduate|prospect|all".bright_black()),
        },
        (Route::Home, "accepting") => match rest {
            "on" => {
                state.filters.accepting_consultations = true;
                render_view(context, state).await;
            }
            "off" => {
                state.filters.accepting_consultations = false;
                render_view(context, state).await;
            }
            _ => println!("{}", "Usage: accepting on|off".bright_black()),
        },
        (Route::Home, "reset") => {
            state.filters = SearchFilters::default();
            render_view(context, state).await;
        }
        (Route::Home, "list") => render_view(context, state).await,
        (Route::Home, "view") => match pick(&state.results, rest) {
            Some(profile) => {
                state.route = Route::UserDetail(profile.id.clone());
                render_view(context, state).await;
            }
            None => println!("{}", "Usage: view <番号>".bright_black()),
        },

        (Route::UserDetail(id), "message") => {
            let id = id.clone();
            match context.chat.start_conversation(&id).await {
                Ok(conversation) => {
                    state.active_conversation = Some(conversation.id.clone());
                    state.route = Route::Messages;
                    render_view(context, state).await;
                    print_history(context, state).await;
                }
                Err(e) => print_error(e),
            }
        }

        (Route::Messages, "list") => render_view(context, state).await,
        (Route::Messages, "open") => match pick(&state.summaries, rest) {
            Some(summary) => {
                state.active_conversation = Some(summary.conversation_id.clone());
                print_history(context, state).await;
            }
            None => println!("{}", "Usage: open <番号>".bright_black()),
        },
        (Route::Messages, "send") => {
            let Some(conversation_id) = state.active_conversation.clone() else {
                println!("{}", "先に 'open <番号>' でチャットを選択してください。".yellow());
                return;
            };
            if context.chat.is_sending(&conversation_id).await {
                println!("{}", "送信中です。しばらくお待ちください。".yellow());
                return;
            }
            match context.chat.send_message(&conversation_id, rest).await {
                Ok(_) => print_history(context, state).await,
                Err(e) => print_error(e),
            }
        }
        (Route::Messages, "seen") => {
            let Some(conversation_id) = state.active_conversation.clone() else {
                println!("{}", "先に 'open <番号>' でチャットを選択してください。".yellow());
                return;
            };
            match context.chat.mark_seen(&conversation_id).await {
                Ok(_) => print_history(context, state).await,
                Err(e) => print_error(e),
            }
        }

        (Route::Profile, "name") => state.pending.display_name = Some(rest.to_string()),
        (Route::Profile, "institution") => state.pending.institution = Some(rest.to_string()),
        (Route::Profile, "department") => state.pending.department = Some(rest.to_string()),
        (Route::Profile, "field") => state.pending.field = Some(rest.to_string()),
        (Route::Profile, "bio") => state.pending.bio = Some(rest.to_string()),
        (Route::Profile, "role") => match rest {
            "graduate" => state.pending.role = Some(UserRole::Graduate),
            "prospect" => state.pending.role = Some(UserRole::Prospect),
            _ => println!("{}", "Usage: role graduate|prospect".bright_black()),
        },
        (Route::Profile, "accepting") => match rest {
            "on" => state.pending.accepting_consultations = Some(true),
            "off" => state.pending.accepting_consultations = Some(false),
            _ => println!("{}", "Usage: accepting on|off".bright_black()),
        },
        (Route::Profile, "interest") => {
            edit_interests(context, state, rest).await;
        }
        (Route::Profile, "save") => {
            if state.pending.is_empty() {
                println!("{}", "変更はありません。".bright_black());
                return;
            }
            match context.auth.update_profile(state.pending.clone()).await {
                Ok(profile) => {
                    state.pending = UpdateProfileRequest::default();
                    println!("{}", "プロフィールが保存されました。".bright_green());
                    print_profile(&profile);
                }
                Err(e) => print_error(e),
            }
        }
        (Route::Profile, "discard") => {
            state.pending = UpdateProfileRequest::default();
            println!("{}", "変更を破棄しました。".bright_black());
        }

        (Route::Settings, "logout") => match context.auth.sign_out().await {
            Ok(()) => {
                println!("{}", "ログアウトしました".bright_green());
                state.route = Route::Login;
                render_view(context, state).await;
            }
            Err(e) => print_error(e),
        },

        _ => println!("{}", "Unknown command".bright_black()),
    }
}

async fn set_role_filter(context: &AppContext, state: &mut ReplState, role: Option<UserRole>) {
    state.filters.role = role;
    render_view(context, state).await;
}

/// Stages an interest edit, starting from the saved list on first touch.
async fn edit_interests(context: &AppContext, state: &mut ReplState, rest: &str) {
    let Some(mut profile) = context.auth.current_user().await else {
        println!("{}", "ログインが必要です。".yellow());
        return;
    };

    if let Some(staged) = state.pending.research_interests.clone() {
        profile.research_interests = staged;
    }

    match rest.split_once(char::is_whitespace) {
        Some(("add", value)) => {
            profile.add_research_interest(value);
        }
        Some(("rm", value)) => {
            profile.remove_research_interest(value.trim());
        }
        _ => {
            println!("{}", "Usage: interest add|rm <分野>".bright_black());
            return;
        }
    }

    println!("  興味: {}", profile.research_interests.join(", "));
    state.pending.research_interests = Some(profile.research_interests);
}

async fn print_history(context: &AppContext, state: &ReplState) {
    let Some(conversation_id) = &state.active_conversation else {
        return;
    };
    let conversation = match context.chat.conversation(conversation_id).await {
        Ok(conversation) => conversation,
        Err(e) => {
            print_error(e);
            return;
        }
    };

    let me = context.auth.current_user().await;
    let my_id = me.as_ref().map(|p| p.id.as_str()).unwrap_or_default();

    println!();
    for message in &conversation.messages {
        let time = format_time(&message.timestamp);
        if message.sender_id == my_id {
            let seen = if message.seen { " • 既読" } else { "" };
            println!("{}", format!("  [{time}] ▶ {}{seen}", message.content).green());
        } else {
            println!("{}", format!("  [{time}] ◀ {}", message.content).bright_blue());
        }
    }
    println!();
}

fn pick<'a, T>(items: &'a [T], index: &str) -> Option<&'a T> {
    let index: usize = index.parse().ok()?;
    items.get(index.checked_sub(1)?)
}

fn print_help(route: &Route) {
    println!("{}", "ナビゲーション: '/', '/login', '/messages', '/profile', '/settings', '/terms', '/users/<id>'".bright_black());
    let commands: &[&str] = match route {
        Route::Login => &["signin"],
        Route::Home => &[
            "search <テキスト>",
            "role graduate|prospect|all",
            "accepting on|off",
            "reset",
            "list",
            "view <番号>",
        ],
        Route::Messages => &["list", "open <番号>", "send <テキスト>", "seen"],
        Route::Profile => &[
            "name <テキスト>",
            "institution <テキスト>",
            "department <テキスト>",
            "field <テキスト>",
            "bio <テキスト>",
            "role graduate|prospect",
            "accepting on|off",
            "interest add|rm <分野>",
            "save",
            "discard",
        ],
        Route::Settings => &["logout"],
        Route::UserDetail(_) => &["message"],
        Route::Terms | Route::NotFound(_) => &[],
    };
    for command in commands {
        println!("  {}", command.bright_black());
    }
    println!("{}", "共通: help, quit".bright_black());
}
