//! Executes API commands issued by the UI.
//!
//! The UI thread never awaits: it pushes an [`ApiCommand`] onto a tokio
//! channel and keeps drawing. The worker runs each command on its own task
//! and hands the [`ApiEvent`] back through the `emit` callback.

use tokio::sync::mpsc;

use crate::api::{ApiError, Habit, HabitClient, HabitPatch, NewHabit};

/// Capacity of the UI → worker channel.
pub const COMMAND_BUFFER: usize = 32;

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// One API call requested by a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    List,
    Get { id: String },
    Create { payload: NewHabit },
    Update { id: String, patch: HabitPatch },
    Remove { id: String },
    Complete { id: String },
    /// Authoritative re-fetch after a failed mutation.
    Refresh { id: String },
}

/// A request tagged with the view generation that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCommand {
    pub generation: u64,
    pub request: ApiRequest,
}

#[derive(Debug)]
pub enum ApiResponse {
    Listed(Result<Vec<Habit>, ApiError>),
    Fetched(Result<Habit, ApiError>),
    Created(Result<Habit, ApiError>),
    Updated(Result<Habit, ApiError>),
    Removed(Result<(), ApiError>),
    Completed(Result<Habit, ApiError>),
    Refreshed(Result<Habit, ApiError>),
}

/// Result of a command, carrying the generation of the command.
#[derive(Debug)]
pub struct ApiEvent {
    pub generation: u64,
    pub response: ApiResponse,
}

/// Perform a single request.
pub async fn execute(client: &HabitClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::List => ApiResponse::Listed(client.list().await),
        ApiRequest::Get { id } => ApiResponse::Fetched(client.get(&id).await),
        ApiRequest::Create { payload } => ApiResponse::Created(client.create(&payload).await),
        ApiRequest::Update { id, patch } => ApiResponse::Updated(client.update(&id, &patch).await),
        ApiRequest::Remove { id } => ApiResponse::Removed(client.remove(&id).await),
        ApiRequest::Complete { id } => ApiResponse::Completed(client.complete(&id).await),
        ApiRequest::Refresh { id } => ApiResponse::Refreshed(client.get(&id).await),
    }
}

/// Drain `commands` until every sender is dropped.
pub async fn run_worker<F>(client: HabitClient, mut commands: mpsc::Receiver<ApiCommand>, emit: F)
where
    F: Fn(ApiEvent) + Clone + Send + 'static,
{
    tracing::info!(base_url = client.base_url(), "API worker started");

    while let Some(ApiCommand {
        generation,
        request,
    }) = commands.recv().await
    {
        tracing::debug!(generation, ?request, "API command");
        let client = client.clone();
        let emit = emit.clone();
        tokio::spawn(async move {
            let response = execute(&client, request).await;
            emit(ApiEvent {
                generation,
                response,
            });
        });
    }

    tracing::info!("API worker stopped");
}
