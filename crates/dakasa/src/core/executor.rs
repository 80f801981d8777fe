/*!
Task executor.

Decouples the reducer's declarative `Effect::Async(TaskKind)` outputs from
the identity calls that fulfil them.

- `spawn(id, kind)` queues the task on an unbounded channel. Ids come from
  the reducer (`RootState::begin_task`), which matches results against them.
- A background worker (Tokio) pulls tasks and runs each one on its own
  Tokio task: emit `Action::TaskStarted`, perform the call through
  [`IdentityClient`], emit `Action::TaskFinished(id, TaskResultKind)`.
- Every call is answered: transport failures arrive as an `Outcome` with no
  status, so the worker never drops a result.

A request the user walked away from keeps running and its result is dropped
by the reducer; it never delays the next request. Pending tasks are dropped
on shutdown. `TaskExecutor` is `Clone` (clones the sender).
*/

use identity::IdentityClient;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::action::Action;
use crate::core::effects::{TaskKind, TaskResultKind};

/// Task identifier, monotonic per `RootState`.
pub type TaskId = u64;

#[derive(Clone)]
pub struct TaskExecutor {
    tx: mpsc::UnboundedSender<Dispatch>,
}

/// Internal dispatch envelope.
struct Dispatch {
    id: TaskId,
    kind: TaskKind,
}

impl TaskExecutor {
    /// Create the executor and spawn its worker. Results are sent on `action_tx`.
    pub fn new_with_action_tx(
        client: IdentityClient,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Dispatch>();
        Worker {
            rx,
            client,
            action_tx,
        }
        .spawn();
        Self { tx }
    }

    /// Schedule a call. Its result comes back as `TaskFinished(id, _)`.
    pub fn spawn(&self, id: TaskId, kind: TaskKind) {
        if let Err(e) = self.tx.send(Dispatch { id, kind }) {
            warn!("TaskExecutor channel closed; failed to schedule task: {e}");
        }
    }
}

struct Worker {
    rx: mpsc::UnboundedReceiver<Dispatch>,
    client: IdentityClient,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Worker {
    fn spawn(mut self) {
        tokio::spawn(async move {
            while let Some(dispatch) = self.rx.recv().await {
                tokio::spawn(handle(
                    self.client.clone(),
                    self.action_tx.clone(),
                    dispatch,
                ));
            }
            info!("TaskExecutor worker stopped (channel closed)");
        });
    }
}

async fn handle(
    client: IdentityClient,
    action_tx: mpsc::UnboundedSender<Action>,
    dispatch: Dispatch,
) {
    let Dispatch { id, kind } = dispatch;
    let _ = action_tx.send(Action::TaskStarted(id, kind.to_string()));

    let result = match kind {
        TaskKind::Register(request) => TaskResultKind::Registered(client.register(&request).await),
        TaskKind::Login(request) => {
            let outcome = client.login(&request).await;
            TaskResultKind::LoggedIn {
                identifier: request.identifier,
                outcome,
            }
        }
        TaskKind::CreateRecoveryTicket(request) => {
            TaskResultKind::TicketCreated(client.create_recovery_ticket(&request).await)
        }
        TaskKind::ValidateRecoveryTicket(request) => {
            let outcome = client.validate_recovery_ticket(&request).await;
            TaskResultKind::TicketValidated {
                code: request.code,
                outcome,
            }
        }
        TaskKind::CloseRecoveryTicket(request) => {
            TaskResultKind::TicketClosed(client.close_recovery_ticket(&request).await)
        }
    };

    info!("[task:{id}] done");
    let _ = action_tx.send(Action::TaskFinished(id, result));
}
