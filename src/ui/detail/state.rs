use crate::api::Habit;
use crate::habit::CompletionHistory;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Description,
}

impl EditField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }
}

/// Title/description form shown while editing.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub title: String,
    pub description: String,
    pub focus: EditField,
}

impl EditForm {
    pub fn from_habit(habit: &Habit) -> Self {
        Self {
            title: habit.title.clone(),
            description: habit.description.clone(),
            focus: EditField::Title,
        }
    }
}

/// Sub-state of a loaded habit.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailMode {
    Viewing,
    Editing { form: EditForm, saving: bool },
    /// Delete confirmation modal is open.
    ConfirmDelete { deleting: bool },
}

/// A loaded habit with its optimistic bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// What the screen shows, optimistic changes included.
    pub habit: Habit,
    /// Last habit the service returned.
    pub confirmed: Habit,
    pub history: CompletionHistory,
    pub mode: DetailMode,
    /// A `complete()` request is in flight.
    pub completing: bool,
    /// Inline message from the last failed action.
    pub notice: Option<String>,
}

impl DetailView {
    pub fn new(habit: Habit) -> Self {
        Self {
            history: CompletionHistory::from_count(habit.history_count),
            confirmed: habit.clone(),
            habit,
            mode: DetailMode::Viewing,
            completing: false,
            notice: None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.mode, DetailMode::Editing { saving: true, .. })
    }

    /// Accept a habit from the service.
    ///
    /// The server value becomes the confirmed one. Fields with a request
    /// still in flight keep their optimistic value on screen: counts while
    /// completing, title and description while saving.
    pub(crate) fn accept_server_habit(&mut self, habit: Habit) {
        let mut shown = habit.clone();
        if self.completing {
            shown.history_count = self.habit.history_count;
            shown.today_completions = self.habit.today_completions;
        }
        if self.is_saving() {
            shown.title = self.habit.title.clone();
            shown.description = self.habit.description.clone();
        }
        self.confirmed = habit;
        self.set_habit(shown);
    }

    pub(crate) fn set_habit(&mut self, habit: Habit) {
        self.history = CompletionHistory::from_count(habit.history_count);
        self.habit = habit;
    }
}

/// Detail screen state for one habit id.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading { id: String },
    Ready(DetailView),
    /// Terminal for this activation: no actions, only a message.
    Error { message: String },
}

impl Default for DetailState {
    fn default() -> Self {
        Self::Loading { id: String::new() }
    }
}

impl UiState for DetailState {}

impl DetailState {
    pub fn loading(id: impl Into<String>) -> Self {
        Self::Loading { id: id.into() }
    }

    /// Id of the habit this screen is about, once known.
    pub fn habit_id(&self) -> Option<&str> {
        match self {
            Self::Loading { id } => Some(id),
            Self::Ready(view) => Some(&view.habit.id),
            Self::Error { .. } => None,
        }
    }

    pub fn view(&self) -> Option<&DetailView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn habit(&self) -> Option<&Habit> {
        self.view().map(|view| &view.habit)
    }

    pub fn mode(&self) -> Option<&DetailMode> {
        self.view().map(|view| &view.mode)
    }

    pub fn is_completing(&self) -> bool {
        self.view().is_some_and(|view| view.completing)
    }

    pub fn is_saving(&self) -> bool {
        self.view().is_some_and(DetailView::is_saving)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode(), Some(DetailMode::Editing { .. }))
    }

    pub fn is_confirming_delete(&self) -> bool {
        matches!(self.mode(), Some(DetailMode::ConfirmDelete { .. }))
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.mode(), Some(DetailMode::ConfirmDelete { deleting: true }))
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        match self.mode() {
            Some(DetailMode::Editing { form, .. }) => Some(form),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.view().and_then(|view| view.notice.as_deref())
    }
}
