//! FFI screen API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen-level functions to Dart via FRB.
//! - Hold per-screen state machines in session registries between calls.
//! - Resolve runtime configuration from environment variables once.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are flattened into `ok=false` envelopes with a message.
//! - Credentials and verification codes are never logged.

use crate::session::SessionRegistry;
use edutrack_core::attendance::{DEFAULT_MARKED_DISPLAY, DEFAULT_MARKING_DELAY};
use edutrack_core::auth::signup::{
    Department, Designation, Section, StudentSignup, StudyYear, TeacherSignup,
};
use edutrack_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner, AdminAuth, AttendanceMarker,
    AttendanceMethod, AuthEffect, AuthError, AuthMode, AuthOutcome, AuthStep, LoginForm,
    MarkPhase, MarkTimings, PortalAuth, Role, Route, SignupForm, Task, TaskBoard,
};
use log::debug;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

const MARKING_DELAY_ENV: &str = "EDUTRACK_MARKING_DELAY_MS";
const MARKED_DISPLAY_ENV: &str = "EDUTRACK_MARKED_DISPLAY_MS";

static MARK_TIMINGS: OnceLock<MarkTimings> = OnceLock::new();
static SIGNUP_SESSIONS: OnceLock<SessionRegistry<PortalAuth>> = OnceLock::new();
static TASK_SESSIONS: OnceLock<SessionRegistry<TaskBoard>> = OnceLock::new();
static ATTENDANCE_SESSIONS: OnceLock<SessionRegistry<AttendanceMarker>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Level the shell should pass to `init_logging` when it has no preference.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().as_str().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Route resolved from a location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    /// Stable route id (`student_dashboard`, `not_found`, ...).
    pub route: String,
    /// Canonical path; `*` for unknown locations.
    pub path: String,
    /// All dashboard routes share one screen.
    pub is_dashboard: bool,
}

/// Maps a location path to its screen. Unknown paths yield `not_found`.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_route(path: String) -> RouteInfo {
    let route = Route::from_path(path.as_str());
    RouteInfo {
        route: route.as_str().to_owned(),
        path: route.path().to_owned(),
        is_dashboard: route.is_dashboard(),
    }
}

/// Toast + navigation request produced by an auth interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEffectView {
    /// `succeeded|credential_mismatch|verification_code_mismatch`.
    pub outcome: String,
    pub succeeded: bool,
    pub title: String,
    pub description: String,
    /// Render with destructive styling.
    pub destructive: bool,
    /// Path to navigate to; `None` means stay on the screen.
    pub navigate_to: Option<String>,
}

impl From<AuthEffect> for AuthEffectView {
    fn from(effect: AuthEffect) -> Self {
        let succeeded = effect.succeeded();
        let destructive = effect.notification.is_destructive();
        Self {
            outcome: outcome_label(effect.outcome).to_owned(),
            succeeded,
            title: effect.notification.title,
            description: effect.notification.description,
            destructive,
            navigate_to: effect.navigate_to.map(|route| route.path().to_owned()),
        }
    }
}

/// Response envelope for the stateless login calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Whether the form was accepted for checking. A credential mismatch is
    /// still `ok=true` with a non-succeeded effect.
    pub ok: bool,
    pub effect: Option<AuthEffectView>,
    pub message: String,
}

impl LoginResponse {
    fn from_result(action: &str, result: Result<AuthEffect, AuthError>) -> Self {
        match result {
            Ok(effect) => Self {
                ok: true,
                effect: Some(effect.into()),
                message: format!("{action} handled."),
            },
            Err(err) => Self {
                ok: false,
                effect: None,
                message: format!("{action} failed: {err}"),
            },
        }
    }
}

/// Submits the student login tab. Any non-empty pair is accepted.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn student_login(identifier: String, password: String) -> LoginResponse {
    portal_login(Role::Student, identifier, password)
}

/// Submits the teacher login tab. Any non-empty pair is accepted.
#[flutter_rust_bridge::frb(sync)]
pub fn teacher_login(identifier: String, password: String) -> LoginResponse {
    portal_login(Role::Teacher, identifier, password)
}

/// Submits the admin form against the fixed admin account.
#[flutter_rust_bridge::frb(sync)]
pub fn admin_login(username: String, password: String) -> LoginResponse {
    let form = LoginForm::new(username, password);
    LoginResponse::from_result("admin_login", AdminAuth::new().login(&form))
}

fn portal_login(role: Role, identifier: String, password: String) -> LoginResponse {
    let action = format!("{}_login", role.as_str());
    let form = LoginForm::new(identifier, password);
    let result = PortalAuth::for_role(role).and_then(|mut portal| portal.login(&form));
    LoginResponse::from_result(&action, result)
}

/// Signup form fields as typed on either portal.
///
/// `member_id` is the registration number (student) or teacher id. Select
/// fields carry option values (`2nd`, `csit`, `a`, `assistant-professor`);
/// fields the role's form does not show are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub full_name: String,
    pub member_id: String,
    pub year: Option<String>,
    pub department: Option<String>,
    pub section: Option<String>,
    pub designation: Option<String>,
    pub email: String,
    pub mobile: String,
}

/// Snapshot of one signup session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupState {
    pub session_id: String,
    pub role: String,
    /// `login|signup`.
    pub mode: String,
    /// Whether the code-picking step replaces the form.
    pub showing_verification: bool,
    pub email_codes: Vec<String>,
    pub mobile_codes: Vec<String>,
    pub selected_email_code: Option<String>,
    pub selected_mobile_code: Option<String>,
    pub can_verify: bool,
    pub email_verified: bool,
    pub mobile_verified: bool,
}

/// Response envelope for signup session calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    pub ok: bool,
    pub state: Option<SignupState>,
    /// Present only for `signup_verify`.
    pub effect: Option<AuthEffectView>,
    pub message: String,
}

impl SignupResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            state: None,
            effect: None,
            message: message.into(),
        }
    }
}

/// Opens a student or teacher portal on its "Sign Up" tab.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - `role` is `student` or `teacher`; anything else fails.
/// - The session lives until `signup_close`.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_open(role: String) -> SignupResponse {
    let Some(role) = Role::parse(role.trim()) else {
        return SignupResponse::failure(format!("signup_open failed: unknown role `{role}`"));
    };
    let mut portal = match PortalAuth::for_role(role) {
        Ok(portal) => portal,
        Err(err) => return SignupResponse::failure(format!("signup_open failed: {err}")),
    };
    if let Err(err) = portal.set_mode(AuthMode::Signup) {
        return SignupResponse::failure(format!("signup_open failed: {err}"));
    }
    let state_portal = portal_snapshot(&portal);
    match signup_sessions().open(portal) {
        Ok(session_id) => SignupResponse {
            ok: true,
            state: Some(state_portal.into_state(session_id)),
            effect: None,
            message: "Signup session opened.".to_owned(),
        },
        Err(err) => SignupResponse::failure(format!("signup_open failed: {err}")),
    }
}

/// Switches the portal tab (`login|signup`).
#[flutter_rust_bridge::frb(sync)]
pub fn signup_switch_tab(session_id: String, mode: String) -> SignupResponse {
    let mode = match mode.trim() {
        "login" => AuthMode::Login,
        "signup" => AuthMode::Signup,
        other => {
            return SignupResponse::failure(format!(
                "signup_switch_tab failed: unknown tab `{other}`"
            ))
        }
    };
    run_signup(&session_id, "signup_switch_tab", "Tab switched.", |portal| {
        portal.set_mode(mode).map(|()| None)
    })
}

/// Submits the signup form and shows the verification step.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_submit(session_id: String, input: SignupInput) -> SignupResponse {
    run_signup(
        &session_id,
        "signup_submit",
        "Verification codes sent.",
        |portal| {
            let form = to_signup_form(portal.role(), input)?;
            portal.submit_signup(&form).map(|()| None)
        },
    )
}

/// Picks one of the offered email codes.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_select_email_code(session_id: String, code: String) -> SignupResponse {
    run_signup(
        &session_id,
        "signup_select_email_code",
        "Email code selected.",
        |portal| portal.select_email_code(code.trim()).map(|()| None),
    )
}

/// Picks one of the offered mobile codes.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_select_mobile_code(session_id: String, code: String) -> SignupResponse {
    run_signup(
        &session_id,
        "signup_select_mobile_code",
        "Mobile code selected.",
        |portal| portal.select_mobile_code(code.trim()).map(|()| None),
    )
}

/// Checks the selected codes. A mismatch is `ok=true` with a destructive effect.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_verify(session_id: String) -> SignupResponse {
    run_signup(&session_id, "signup_verify", "Verification handled.", |portal| {
        portal.verify().map(Some)
    })
}

/// Leaves the verification step and discards selections.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_back(session_id: String) -> SignupResponse {
    run_signup(&session_id, "signup_back", "Back to signup form.", |portal| {
        portal.back();
        Ok(None)
    })
}

/// Response envelope for closing any screen session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCloseResponse {
    pub ok: bool,
    pub message: String,
}

impl SessionCloseResponse {
    fn from_result<T>(action: &str, result: Result<Option<T>, String>) -> Self {
        match result {
            Ok(Some(_)) => Self {
                ok: true,
                message: "Session closed.".to_owned(),
            },
            Ok(None) => Self {
                ok: false,
                message: format!("{action} failed: session not found"),
            },
            Err(err) => Self {
                ok: false,
                message: format!("{action} failed: {err}"),
            },
        }
    }
}

/// Unmounts the signup screen.
#[flutter_rust_bridge::frb(sync)]
pub fn signup_close(session_id: String) -> SessionCloseResponse {
    SessionCloseResponse::from_result("signup_close", signup_sessions().close(&session_id))
}

/// One row of the tasks screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: u32,
    pub title: String,
    /// `study|homework|project|skill`.
    pub category: String,
    pub subject: String,
    pub duration: String,
    /// `high|medium|low`.
    pub priority: String,
    pub completed: bool,
    pub description: String,
    pub deadline: Option<String>,
}

/// Response envelope for tasks session calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardResponse {
    pub ok: bool,
    pub session_id: Option<String>,
    /// High priority first.
    pub pending: Vec<TaskItem>,
    pub completed: Vec<TaskItem>,
    pub total: u32,
    /// Whole percent.
    pub completion_rate: u32,
    /// "{completed} of {total} tasks completed".
    pub progress_label: String,
    /// Show the "Excellent Progress!" card.
    pub achievement: bool,
    pub message: String,
}

impl TaskBoardResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            session_id: None,
            pending: Vec::new(),
            completed: Vec::new(),
            total: 0,
            completion_rate: 0,
            progress_label: String::new(),
            achievement: false,
            message: message.into(),
        }
    }
}

/// Mounts the tasks screen with the seed list.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_open() -> TaskBoardResponse {
    let board = TaskBoard::seeded();
    let snapshot = task_snapshot(&board);
    match task_sessions().open(board) {
        Ok(session_id) => snapshot.into_response(session_id, "Tasks loaded."),
        Err(err) => TaskBoardResponse::failure(format!("tasks_open failed: {err}")),
    }
}

/// Flips completion of `task_id`. Unknown ids leave the board unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_toggle(session_id: String, task_id: u32) -> TaskBoardResponse {
    run_tasks(&session_id, "tasks_toggle", "Task updated.", |board| {
        if !board.toggle_complete(task_id) {
            debug!("event=task_toggled module=ffi status=noop task_id={task_id}");
        }
        Ok(())
    })
}

/// Snooze button. Leaves the board unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_snooze(session_id: String, task_id: u32) -> TaskBoardResponse {
    run_tasks(&session_id, "tasks_snooze", "Snooze noted.", |board| {
        board.snooze(task_id);
        Ok(())
    })
}

/// Re-reads the board without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_snapshot(session_id: String) -> TaskBoardResponse {
    run_tasks(&session_id, "tasks_snapshot", "Tasks loaded.", |_| Ok(()))
}

/// Unmounts the tasks screen. Toggles are discarded.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_close(session_id: String) -> SessionCloseResponse {
    SessionCloseResponse::from_result("tasks_close", task_sessions().close(&session_id))
}

/// Snapshot of one attendance session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceState {
    pub session_id: String,
    /// `qr|proximity|face`.
    pub method: String,
    /// `idle|marking|marked`.
    pub phase: String,
    pub action_label: String,
    pub mark_enabled: bool,
    pub show_marked_banner: bool,
    /// Milliseconds until the shell should call `attendance_poll` again.
    pub next_poll_in_ms: Option<u64>,
}

/// Response envelope for attendance session calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceResponse {
    pub ok: bool,
    pub state: Option<AttendanceState>,
    /// Phases entered during this call, in order.
    pub entered: Vec<String>,
    pub message: String,
}

impl AttendanceResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            state: None,
            entered: Vec::new(),
            message: message.into(),
        }
    }
}

/// Mounts the attendance screen (QR selected, idle).
///
/// Timings come from `EDUTRACK_MARKING_DELAY_MS` and
/// `EDUTRACK_MARKED_DISPLAY_MS`, read once per process.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_open() -> AttendanceResponse {
    let marker = AttendanceMarker::new(resolve_mark_timings());
    let now = Instant::now();
    let snapshot = attendance_snapshot(&marker, now);
    match attendance_sessions().open(marker) {
        Ok(session_id) => AttendanceResponse {
            ok: true,
            state: Some(snapshot.into_state(session_id)),
            entered: Vec::new(),
            message: "Attendance screen opened.".to_owned(),
        },
        Err(err) => AttendanceResponse::failure(format!("attendance_open failed: {err}")),
    }
}

/// Switches the action panel (`qr|proximity|face`).
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_select_method(session_id: String, method: String) -> AttendanceResponse {
    let Some(method) = AttendanceMethod::parse(method.as_str()) else {
        return AttendanceResponse::failure(format!(
            "attendance_select_method failed: unknown method `{method}`"
        ));
    };
    run_attendance(
        &session_id,
        "attendance_select_method",
        "Method selected.",
        |marker, _| {
            marker.select_method(method);
            Ok(Vec::new())
        },
    )
}

/// Starts a mark cycle. Rejected while one is in flight.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_mark(session_id: String) -> AttendanceResponse {
    run_attendance(&session_id, "attendance_mark", "Marking started.", |marker, now| {
        marker.mark(now).map_err(|err| err.to_string())?;
        Ok(vec![marker.phase()])
    })
}

/// Fires every transition due now.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_poll(session_id: String) -> AttendanceResponse {
    run_attendance(&session_id, "attendance_poll", "Polled.", |marker, now| {
        Ok(marker.poll(now))
    })
}

/// Unmounts the attendance screen and cancels any armed transition.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_close(session_id: String) -> SessionCloseResponse {
    let result = attendance_sessions().close(&session_id).map(|removed| {
        removed.map(|mut marker| {
            marker.cancel_pending();
            marker
        })
    });
    SessionCloseResponse::from_result("attendance_close", result)
}

fn signup_sessions() -> &'static SessionRegistry<PortalAuth> {
    SIGNUP_SESSIONS.get_or_init(|| SessionRegistry::new("signup"))
}

fn task_sessions() -> &'static SessionRegistry<TaskBoard> {
    TASK_SESSIONS.get_or_init(|| SessionRegistry::new("tasks"))
}

fn attendance_sessions() -> &'static SessionRegistry<AttendanceMarker> {
    ATTENDANCE_SESSIONS.get_or_init(|| SessionRegistry::new("attendance"))
}

fn resolve_mark_timings() -> MarkTimings {
    *MARK_TIMINGS.get_or_init(|| MarkTimings {
        marking_delay: parse_duration_ms(
            std::env::var(MARKING_DELAY_ENV).ok().as_deref(),
            DEFAULT_MARKING_DELAY,
        ),
        marked_display: parse_duration_ms(
            std::env::var(MARKED_DISPLAY_ENV).ok().as_deref(),
            DEFAULT_MARKED_DISPLAY,
        ),
    })
}

/// Blank, missing, or unparsable values fall back to `default`.
fn parse_duration_ms(raw: Option<&str>, default: Duration) -> Duration {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

fn run_signup(
    session_id: &str,
    action: &str,
    success: &str,
    f: impl FnOnce(&mut PortalAuth) -> Result<Option<AuthEffect>, AuthError>,
) -> SignupResponse {
    let session_key = session_id.trim().to_owned();
    let result = signup_sessions().with(session_id, |portal| {
        let effect = f(portal).map_err(|err| err.to_string())?;
        let state = portal_snapshot(portal).into_state(session_key);
        Ok::<_, String>((effect, state))
    });
    match result.and_then(|inner| inner) {
        Ok((effect, state)) => SignupResponse {
            ok: true,
            state: Some(state),
            effect: effect.map(AuthEffectView::from),
            message: success.to_owned(),
        },
        Err(err) => SignupResponse::failure(format!("{action} failed: {err}")),
    }
}

fn run_tasks(
    session_id: &str,
    action: &str,
    success: &str,
    f: impl FnOnce(&mut TaskBoard) -> Result<(), String>,
) -> TaskBoardResponse {
    let result = task_sessions().with(session_id, |board| {
        f(board)?;
        Ok::<_, String>(task_snapshot(board))
    });
    match result.and_then(|inner| inner) {
        Ok(snapshot) => snapshot.into_response(session_id.trim().to_owned(), success),
        Err(err) => TaskBoardResponse::failure(format!("{action} failed: {err}")),
    }
}

fn run_attendance(
    session_id: &str,
    action: &str,
    success: &str,
    f: impl FnOnce(&mut AttendanceMarker, Instant) -> Result<Vec<MarkPhase>, String>,
) -> AttendanceResponse {
    let now = Instant::now();
    let result = attendance_sessions().with(session_id, |marker| {
        let entered = f(marker, now)?;
        Ok::<_, String>((entered, attendance_snapshot(marker, now)))
    });
    match result.and_then(|inner| inner) {
        Ok((entered, snapshot)) => AttendanceResponse {
            ok: true,
            state: Some(snapshot.into_state(session_id.trim().to_owned())),
            entered: entered
                .into_iter()
                .map(|phase| phase.as_str().to_owned())
                .collect(),
            message: success.to_owned(),
        },
        Err(err) => AttendanceResponse::failure(format!("{action} failed: {err}")),
    }
}

/// Session-independent part of `SignupState`.
struct PortalSnapshot {
    role: String,
    mode: String,
    showing_verification: bool,
    email_codes: Vec<String>,
    mobile_codes: Vec<String>,
    selected_email_code: Option<String>,
    selected_mobile_code: Option<String>,
    can_verify: bool,
    email_verified: bool,
    mobile_verified: bool,
}

impl PortalSnapshot {
    fn into_state(self, session_id: String) -> SignupState {
        SignupState {
            session_id,
            role: self.role,
            mode: self.mode,
            showing_verification: self.showing_verification,
            email_codes: self.email_codes,
            mobile_codes: self.mobile_codes,
            selected_email_code: self.selected_email_code,
            selected_mobile_code: self.selected_mobile_code,
            can_verify: self.can_verify,
            email_verified: self.email_verified,
            mobile_verified: self.mobile_verified,
        }
    }
}

fn portal_snapshot(portal: &PortalAuth) -> PortalSnapshot {
    let codes = portal.codes();
    PortalSnapshot {
        role: portal.role().as_str().to_owned(),
        mode: portal.mode().as_str().to_owned(),
        showing_verification: portal.step() == AuthStep::ShowingVerification,
        email_codes: codes.email.iter().map(|code| (*code).to_owned()).collect(),
        mobile_codes: codes.mobile.iter().map(|code| (*code).to_owned()).collect(),
        selected_email_code: portal.selected_email_code().map(str::to_owned),
        selected_mobile_code: portal.selected_mobile_code().map(str::to_owned),
        can_verify: portal.can_verify(),
        email_verified: portal.email_verified(),
        mobile_verified: portal.mobile_verified(),
    }
}

struct TaskSnapshot {
    pending: Vec<TaskItem>,
    completed: Vec<TaskItem>,
    total: u32,
    completion_rate: u32,
    progress_label: String,
    achievement: bool,
}

impl TaskSnapshot {
    fn into_response(self, session_id: String, message: &str) -> TaskBoardResponse {
        TaskBoardResponse {
            ok: true,
            session_id: Some(session_id),
            pending: self.pending,
            completed: self.completed,
            total: self.total,
            completion_rate: self.completion_rate,
            progress_label: self.progress_label,
            achievement: self.achievement,
            message: message.to_owned(),
        }
    }
}

fn task_snapshot(board: &TaskBoard) -> TaskSnapshot {
    let summary = board.summary();
    TaskSnapshot {
        pending: board.pending().into_iter().map(to_task_item).collect(),
        completed: board.completed().into_iter().map(to_task_item).collect(),
        total: summary.total as u32,
        completion_rate: u32::from(summary.completion_rate),
        progress_label: board.progress_label(),
        achievement: summary.achievement,
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id,
        title: task.title.clone(),
        category: task.category.as_str().to_owned(),
        subject: task.subject.clone(),
        duration: task.duration.clone(),
        priority: task.priority.as_str().to_owned(),
        completed: task.completed,
        description: task.description.clone(),
        deadline: task.deadline.clone(),
    }
}

struct AttendanceSnapshot {
    method: String,
    phase: String,
    action_label: String,
    mark_enabled: bool,
    show_marked_banner: bool,
    next_poll_in_ms: Option<u64>,
}

impl AttendanceSnapshot {
    fn into_state(self, session_id: String) -> AttendanceState {
        AttendanceState {
            session_id,
            method: self.method,
            phase: self.phase,
            action_label: self.action_label,
            mark_enabled: self.mark_enabled,
            show_marked_banner: self.show_marked_banner,
            next_poll_in_ms: self.next_poll_in_ms,
        }
    }
}

fn attendance_snapshot(marker: &AttendanceMarker, now: Instant) -> AttendanceSnapshot {
    AttendanceSnapshot {
        method: marker.method().as_str().to_owned(),
        phase: marker.phase().as_str().to_owned(),
        action_label: marker.action_label().to_owned(),
        mark_enabled: marker.is_mark_enabled(),
        show_marked_banner: marker.shows_marked_banner(),
        next_poll_in_ms: marker
            .pending_timer()
            .map(|timer| timer.remaining(now).as_millis() as u64),
    }
}

fn to_signup_form(role: Role, input: SignupInput) -> Result<SignupForm, AuthError> {
    let department = parse_select("department", input.department, Department::parse)?;
    match role {
        Role::Student => Ok(SignupForm::Student(StudentSignup {
            full_name: input.full_name,
            registration_number: input.member_id,
            year: parse_select("year", input.year, StudyYear::parse)?,
            department,
            section: parse_select("section", input.section, Section::parse)?,
            email: input.email,
            mobile: input.mobile,
        })),
        Role::Teacher => Ok(SignupForm::Teacher(TeacherSignup {
            full_name: input.full_name,
            teacher_id: input.member_id,
            department,
            designation: parse_select("designation", input.designation, Designation::parse)?,
            email: input.email,
            mobile: input.mobile,
        })),
        Role::Admin => Err(AuthError::UnsupportedRole(role)),
    }
}

/// Empty selects mean "nothing chosen"; unknown values are rejected.
fn parse_select<T>(
    field: &'static str,
    raw: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, AuthError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse(value)
            .map(Some)
            .ok_or_else(|| AuthError::UnsupportedOption {
                field,
                value: value.to_owned(),
            }),
    }
}

fn outcome_label(outcome: AuthOutcome) -> &'static str {
    match outcome {
        AuthOutcome::Succeeded => "succeeded",
        AuthOutcome::CredentialMismatch => "credential_mismatch",
        AuthOutcome::VerificationCodeMismatch => "verification_code_mismatch",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        admin_login, attendance_close, attendance_mark, attendance_open, attendance_poll,
        attendance_select_method, core_version, init_logging, parse_duration_ms, ping,
        resolve_route, signup_back, signup_close, signup_open, signup_select_email_code,
        signup_select_mobile_code, signup_submit, signup_verify, student_login, tasks_close,
        tasks_open, tasks_snapshot, tasks_snooze, tasks_toggle, teacher_login, SignupInput,
    };
    use std::time::Duration;

    fn student_input() -> SignupInput {
        SignupInput {
            full_name: "Alex Smith".to_string(),
            member_id: "CS2024001".to_string(),
            year: Some("2nd".to_string()),
            department: Some("csit".to_string()),
            section: Some("a".to_string()),
            designation: None,
            email: "alex@university.edu".to_string(),
            mobile: "+91 98765 43210".to_string(),
        }
    }

    fn open_session(role: &str) -> String {
        let opened = signup_open(role.to_string());
        assert!(opened.ok, "{}", opened.message);
        opened.state.expect("open returns state").session_id
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/edutrack-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn resolve_route_maps_unknown_paths_to_not_found() {
        let known = resolve_route("/teacher-dashboard".to_string());
        assert_eq!(known.route, "teacher_dashboard");
        assert!(known.is_dashboard);

        let unknown = resolve_route("/settings".to_string());
        assert_eq!(unknown.route, "not_found");
        assert_eq!(unknown.path, "*");
    }

    #[test]
    fn portal_logins_navigate_to_dashboards() {
        let student = student_login("alex".to_string(), "pw".to_string());
        let effect = student.effect.expect("student effect");
        assert_eq!(effect.navigate_to.as_deref(), Some("/student-dashboard"));

        let teacher = teacher_login("smith".to_string(), "pw".to_string());
        let effect = teacher.effect.expect("teacher effect");
        assert_eq!(effect.navigate_to.as_deref(), Some("/teacher-dashboard"));

        let empty = student_login(String::new(), "pw".to_string());
        assert!(!empty.ok);
    }

    #[test]
    fn admin_login_mismatch_is_ok_but_not_succeeded() {
        let response = admin_login("admin".to_string(), "wrong".to_string());
        assert!(response.ok, "{}", response.message);
        let effect = response.effect.expect("admin effect");
        assert!(!effect.succeeded);
        assert!(effect.destructive);
        assert_eq!(effect.outcome, "credential_mismatch");
        assert_eq!(effect.navigate_to, None);
    }

    #[test]
    fn signup_flow_creates_account_after_correct_codes() {
        let session_id = open_session("student");

        let submitted = signup_submit(session_id.clone(), student_input());
        assert!(submitted.ok, "{}", submitted.message);
        let state = submitted.state.expect("state");
        assert!(state.showing_verification);
        assert_eq!(state.email_codes, vec!["1234", "5678", "9012"]);

        assert!(signup_select_email_code(session_id.clone(), "5678".to_string()).ok);
        assert!(signup_select_mobile_code(session_id.clone(), "2468".to_string()).ok);
        let failed = signup_verify(session_id.clone());
        assert!(failed.ok);
        assert!(failed.effect.expect("effect").destructive);
        let state = failed.state.expect("state");
        assert_eq!(state.selected_email_code.as_deref(), Some("5678"));

        assert!(signup_select_email_code(session_id.clone(), "1234".to_string()).ok);
        let verified = signup_verify(session_id.clone());
        let effect = verified.effect.expect("effect");
        assert!(effect.succeeded);
        assert_eq!(effect.title, "Account Created Successfully");
        let state = verified.state.expect("state");
        assert_eq!(state.mode, "login");
        assert!(!state.showing_verification);
        assert!(state.email_verified && state.mobile_verified);

        assert!(signup_close(session_id.clone()).ok);
        assert!(!signup_close(session_id).ok);
    }

    #[test]
    fn signup_rejects_bad_role_and_bad_options() {
        assert!(!signup_open("admin".to_string()).ok);
        assert!(!signup_open("parent".to_string()).ok);

        let session_id = open_session("student");
        let mut input = student_input();
        input.department = Some("ce".to_string());
        let response = signup_submit(session_id.clone(), input);
        assert!(!response.ok);
        assert!(response.message.contains("department"));

        let mut input = student_input();
        input.year = Some("5th".to_string());
        assert!(!signup_submit(session_id.clone(), input).ok);

        assert!(!signup_verify(session_id.clone()).ok);
        assert!(signup_back(session_id.clone()).ok);
        assert!(signup_close(session_id).ok);
    }

    #[test]
    fn teacher_signup_uses_teacher_fields() {
        let session_id = open_session("teacher");
        let input = SignupInput {
            full_name: "Dr. Smith".to_string(),
            member_id: "T-1001".to_string(),
            department: Some("ee".to_string()),
            designation: Some("lab-assistant".to_string()),
            email: "smith@university.edu".to_string(),
            mobile: "123".to_string(),
            ..SignupInput::default()
        };
        let submitted = signup_submit(session_id.clone(), input);
        assert!(submitted.ok, "{}", submitted.message);
        assert_eq!(
            submitted.state.expect("state").mobile_codes,
            vec!["3691", "7410", "2583"]
        );
        assert!(signup_close(session_id).ok);
    }

    #[test]
    fn tasks_session_toggles_and_reports_rate() {
        let opened = tasks_open();
        assert!(opened.ok);
        assert_eq!(opened.completion_rate, 40);
        let session_id = opened.session_id.expect("session id");

        let toggled = tasks_toggle(session_id.clone(), 1);
        assert!(toggled.ok, "{}", toggled.message);
        assert_eq!(toggled.completion_rate, 60);
        assert_eq!(
            toggled.pending.iter().map(|task| task.id).collect::<Vec<_>>(),
            vec![2, 4]
        );

        let missed = tasks_toggle(session_id.clone(), 77);
        assert!(missed.ok, "{}", missed.message);
        assert_eq!(missed.completion_rate, 60);
        assert_eq!(missed.total, 5);
        assert_eq!(missed.pending.len(), 2);
        assert!(!missed.achievement);

        let celebrated = tasks_toggle(session_id.clone(), 2);
        assert_eq!(celebrated.completion_rate, 80);
        assert!(celebrated.achievement);
        assert_eq!(celebrated.progress_label, "4 of 5 tasks completed");

        let snoozed = tasks_snooze(session_id.clone(), 2);
        assert_eq!(snoozed.completion_rate, 80);
        assert_eq!(tasks_snapshot(session_id.clone()).total, 5);

        assert!(tasks_close(session_id.clone()).ok);
        assert!(!tasks_snapshot(session_id).ok);
    }

    #[test]
    fn attendance_session_rejects_double_mark() {
        let opened = attendance_open();
        let state = opened.state.expect("state");
        assert_eq!(state.method, "qr");
        assert_eq!(state.phase, "idle");
        let session_id = state.session_id;

        let selected = attendance_select_method(session_id.clone(), "face".to_string());
        assert_eq!(selected.state.expect("state").action_label, "Start Verification");
        assert!(!attendance_select_method(session_id.clone(), "nfc".to_string()).ok);

        let marked = attendance_mark(session_id.clone());
        assert!(marked.ok, "{}", marked.message);
        assert_eq!(marked.entered, vec!["marking"]);
        let state = marked.state.expect("state");
        assert!(!state.mark_enabled);
        assert!(state.next_poll_in_ms.is_some());

        let again = attendance_mark(session_id.clone());
        assert!(!again.ok);
        assert!(again.message.contains("already in progress"));

        assert!(attendance_poll(session_id.clone()).ok);
        assert!(attendance_close(session_id.clone()).ok);
        assert!(!attendance_poll(session_id).ok);
    }

    #[test]
    fn duration_override_falls_back_on_bad_input() {
        let default = Duration::from_millis(2000);
        assert_eq!(parse_duration_ms(None, default), default);
        assert_eq!(parse_duration_ms(Some("  "), default), default);
        assert_eq!(parse_duration_ms(Some("soon"), default), default);
        assert_eq!(
            parse_duration_ms(Some(" 150 "), default),
            Duration::from_millis(150)
        );
    }
}
