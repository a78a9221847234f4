use crate::api::{ApiError, HabitPatch};
use crate::ui::create::{CreateIntent, CreateReducer, CreateState};
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::mvi::Reducer;
use crate::worker::{ApiCommand, ApiCommandSender, ApiEvent, ApiRequest, ApiResponse};

pub const LOAD_HABITS_FAILED: &str = "Could not load habits";
pub const HABIT_NOT_FOUND: &str = "Habit not found";
pub const LOAD_HABIT_FAILED: &str = "Could not load habit";
pub const CREATE_FAILED: &str = "Could not create habit";
pub const UPDATE_FAILED: &str = "Could not update habit";
pub const COMPLETE_FAILED: &str = "Could not complete habit";
pub const DELETE_FAILED: &str = "Could not delete habit";
pub const REFRESH_FAILED: &str = "Could not refresh habit";

/// The screen currently shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Dashboard,
    Create,
    Detail,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the active screen and performs the side effects reducers can't:
/// issuing API commands and navigating.
pub struct App {
    should_quit: bool,
    route: Route,
    /// Bumped on every navigation. API results from older generations are
    /// dropped.
    generation: u64,
    dashboard: DashboardState,
    create: CreateState,
    detail: DetailState,
    commands: Option<ApiCommandSender>,
    last_command_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::Dashboard,
            generation: 0,
            dashboard: DashboardState::default(),
            create: CreateState::default(),
            detail: DetailState::default(),
            commands: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: ApiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn create_form(&self) -> &CreateState {
        &self.create
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Show the dashboard and fetch the habit list.
    pub fn open_dashboard(&mut self) {
        self.navigate(Route::Dashboard);
        self.dispatch_dashboard(DashboardIntent::Reload);
        if !self.send_command(ApiRequest::List) {
            self.dispatch_dashboard(DashboardIntent::LoadFailed {
                message: LOAD_HABITS_FAILED.to_string(),
            });
        }
    }

    /// Show an empty create form.
    pub fn open_create(&mut self) {
        self.navigate(Route::Create);
    }

    /// Show the detail screen for `id` and fetch the habit.
    pub fn open_detail(&mut self, id: String) {
        self.navigate(Route::Detail);
        self.detail = DetailState::loading(id.clone());
        if !self.send_command(ApiRequest::Get { id }) {
            self.dispatch_detail(DetailIntent::LoadFailed {
                message: LOAD_HABIT_FAILED.to_string(),
            });
        }
    }

    pub fn open_selected_habit(&mut self) {
        if let Some(id) = self.dashboard.selected_habit().map(|habit| habit.id.clone()) {
            self.open_detail(id);
        }
    }

    /// Re-fetch whatever the current screen shows.
    pub fn reload(&mut self) {
        match self.route {
            Route::Dashboard => self.open_dashboard(),
            Route::Create => {}
            Route::Detail => {
                // Only a loaded habit can be reloaded; Error is terminal.
                let Some(id) = self.ready_habit_id() else {
                    return;
                };
                self.bump_generation();
                self.dispatch_detail(DetailIntent::Reload);
                if !self.send_command(ApiRequest::Get { id }) {
                    self.dispatch_detail(DetailIntent::LoadFailed {
                        message: LOAD_HABIT_FAILED.to_string(),
                    });
                }
            }
        }
    }

    /// Results of requests issued before this call will be dropped.
    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Leaving a screen discards its state.
    fn navigate(&mut self, route: Route) {
        self.bump_generation();
        tracing::info!(?route, generation = self.generation, "navigate");
        self.route = route;
        self.dashboard = DashboardState::default();
        self.create = CreateState::default();
        self.detail = DetailState::default();
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    /// Dispatch an intent to the dashboard reducer.
    pub fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    /// Dispatch an intent to the create reducer.
    pub fn dispatch_create(&mut self, intent: CreateIntent) {
        dispatch_mvi!(self, create, CreateReducer, intent);
    }

    /// Dispatch an intent to the detail reducer.
    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    // ========================================================================
    // Effectful actions
    // ========================================================================

    /// Submit the create form. Ignored while a submission is in flight.
    pub fn submit_create(&mut self) {
        if self.create.submitting {
            return;
        }
        self.dispatch_create(CreateIntent::Submit);
        if !self.create.submitting {
            return;
        }
        let payload = self.create.draft.to_payload();
        if !self.send_command(ApiRequest::Create { payload }) {
            self.dispatch_create(CreateIntent::SubmitFailed {
                message: CREATE_FAILED.to_string(),
            });
        }
    }

    /// Optimistically record a completion and send it.
    pub fn complete_habit(&mut self) {
        let Some(id) = self.ready_habit_id() else {
            return;
        };
        if self.detail.is_completing() {
            return;
        }
        self.dispatch_detail(DetailIntent::CompletePressed);
        if !self.detail.is_completing() {
            return;
        }
        if !self.send_command(ApiRequest::Complete { id }) {
            self.dispatch_detail(DetailIntent::CompleteFailed {
                message: COMPLETE_FAILED.to_string(),
            });
        }
    }

    /// Optimistically apply the edit form and send it.
    pub fn save_edit(&mut self) {
        let Some(id) = self.ready_habit_id() else {
            return;
        };
        if self.detail.is_saving() {
            return;
        }
        self.dispatch_detail(DetailIntent::SavePressed);
        if !self.detail.is_saving() {
            return;
        }
        let Some(form) = self.detail.edit_form() else {
            return;
        };
        let patch = HabitPatch::text(form.title.clone(), form.description.clone());
        if !self.send_command(ApiRequest::Update { id, patch }) {
            self.dispatch_detail(DetailIntent::SaveFailed {
                message: UPDATE_FAILED.to_string(),
            });
        }
    }

    /// Confirm the open delete prompt. Issues at most one `remove()`.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.ready_habit_id() else {
            return;
        };
        if !self.detail.is_confirming_delete() || self.detail.is_deleting() {
            return;
        }
        self.dispatch_detail(DetailIntent::DeleteConfirmed);
        if !self.send_command(ApiRequest::Remove { id }) {
            self.dispatch_detail(DetailIntent::DeleteFailed {
                message: DELETE_FAILED.to_string(),
            });
        }
    }

    fn ready_habit_id(&self) -> Option<String> {
        self.detail.habit().map(|habit| habit.id.clone())
    }

    fn refresh_detail(&mut self) {
        if let Some(id) = self.ready_habit_id() {
            if !self.send_command(ApiRequest::Refresh { id }) {
                self.dispatch_detail(DetailIntent::RefreshFailed {
                    message: REFRESH_FAILED.to_string(),
                });
            }
        }
    }

    // ========================================================================
    // API results
    // ========================================================================

    pub fn on_api_event(&mut self, event: ApiEvent) {
        if event.generation != self.generation {
            tracing::debug!(
                event_generation = event.generation,
                current_generation = self.generation,
                "dropping API result for a screen that is gone"
            );
            return;
        }

        match event.response {
            ApiResponse::Listed(result) => match result {
                Ok(habits) => self.dispatch_dashboard(DashboardIntent::Loaded { habits }),
                Err(err) => {
                    log_failure("list", &err);
                    self.dispatch_dashboard(DashboardIntent::LoadFailed {
                        message: LOAD_HABITS_FAILED.to_string(),
                    });
                }
            },
            ApiResponse::Fetched(result) => match result {
                Ok(habit) => self.dispatch_detail(DetailIntent::Loaded { habit }),
                Err(err) => {
                    log_failure("get", &err);
                    let message = if err.is_not_found() {
                        HABIT_NOT_FOUND
                    } else {
                        LOAD_HABIT_FAILED
                    };
                    self.dispatch_detail(DetailIntent::LoadFailed {
                        message: message.to_string(),
                    });
                }
            },
            ApiResponse::Created(result) => match result {
                Ok(habit) => {
                    tracing::info!(id = %habit.id, "habit created");
                    self.dispatch_create(CreateIntent::SubmitSucceeded);
                    self.open_detail(habit.id);
                }
                Err(err) => {
                    log_failure("create", &err);
                    self.dispatch_create(CreateIntent::SubmitFailed {
                        message: CREATE_FAILED.to_string(),
                    });
                }
            },
            ApiResponse::Updated(result) => match result {
                Ok(habit) => self.dispatch_detail(DetailIntent::SaveSucceeded { habit }),
                Err(err) => {
                    log_failure("update", &err);
                    self.dispatch_detail(DetailIntent::SaveFailed {
                        message: UPDATE_FAILED.to_string(),
                    });
                }
            },
            ApiResponse::Completed(result) => match result {
                Ok(habit) => self.dispatch_detail(DetailIntent::CompleteSucceeded { habit }),
                Err(err) => {
                    log_failure("complete", &err);
                    self.dispatch_detail(DetailIntent::CompleteFailed {
                        message: COMPLETE_FAILED.to_string(),
                    });
                    self.refresh_detail();
                }
            },
            ApiResponse::Removed(result) => match result {
                Ok(()) => {
                    tracing::info!("habit deleted");
                    self.dispatch_detail(DetailIntent::DeleteSucceeded);
                    self.open_dashboard();
                }
                Err(err) => {
                    log_failure("remove", &err);
                    self.dispatch_detail(DetailIntent::DeleteFailed {
                        message: DELETE_FAILED.to_string(),
                    });
                    self.refresh_detail();
                }
            },
            ApiResponse::Refreshed(result) => match result {
                Ok(habit) => self.dispatch_detail(DetailIntent::Refreshed { habit }),
                Err(err) => {
                    log_failure("refresh", &err);
                    // Gone on the server, e.g. a delete that committed but
                    // whose response was lost.
                    if err.is_not_found() {
                        self.dispatch_detail(DetailIntent::LoadFailed {
                            message: HABIT_NOT_FOUND.to_string(),
                        });
                    } else {
                        self.dispatch_detail(DetailIntent::RefreshFailed {
                            message: REFRESH_FAILED.to_string(),
                        });
                    }
                }
            },
        }
    }

    fn send_command(&mut self, request: ApiRequest) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        let command = ApiCommand {
            generation: self.generation,
            request,
        };
        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to queue API command");
                self.last_command_error = Some(format!("Command queue: {}", err));
                false
            }
        }
    }
}

fn log_failure(operation: &'static str, err: &ApiError) {
    tracing::warn!(operation, status = ?err.status(), error = %err, "habit API call failed");
}
