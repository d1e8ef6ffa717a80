use crate::controllers::interactive::data::scheduler_status::SchedulerStatus;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::events::agent_event::{AgentEvent, AgentEventHandler};
use crate::controllers::interactive::ports::agent_transport::AgentTransport;
use crate::controllers::interactive::ports::parameter_provider::ParameterProvider;
use crate::controllers::interactive::ports::row_painter::RowPainter;
use crate::controllers::interactive::scheduler::RowScheduler;
use std::error::Error;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

enum ControlMessage {
    StartGeneration,
    Agent(AgentEvent),
    Shutdown,
}

struct SharedStatus {
    status: Mutex<SchedulerStatus>,
    changed: Condvar,
}

impl SharedStatus {
    fn publish(&self, status: SchedulerStatus) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = status;
        self.changed.notify_all();
    }
}

/// Runs a `RowScheduler` on its own thread.
///
/// Generation requests and agent completions are funnelled into one channel
/// and handled strictly one at a time by that thread, so the scheduler itself
/// needs no locking.
pub struct RowRenderController {
    sender: Sender<ControlMessage>,
    requested_generation: AtomicU64,
    shared: Arc<SharedStatus>,
    worker: Option<JoinHandle<()>>,
}

impl RowRenderController {
    /// Builds the agent pool through `build_transport`, handing it the
    /// completion handler, and starts the scheduler thread.
    pub fn new<P, R, T, F, E>(
        provider: P,
        painter: R,
        build_transport: F,
    ) -> Result<Self, ControllerError>
    where
        P: ParameterProvider + Send + 'static,
        R: RowPainter + Send + 'static,
        T: AgentTransport + Send + 'static,
        F: FnOnce(AgentEventHandler) -> Result<T, E>,
        E: Error + Send + Sync + 'static,
    {
        let (sender, receiver) = mpsc::channel();

        let agent_sender = sender.clone();
        let on_event: AgentEventHandler = Arc::new(move |event| {
            // the scheduler thread is gone once the controller shuts down
            let _ = agent_sender.send(ControlMessage::Agent(event));
        });

        let transport =
            build_transport(on_event).map_err(|err| ControllerError::Transport(Box::new(err)))?;
        let scheduler = RowScheduler::new(provider, transport, painter);

        let shared = Arc::new(SharedStatus {
            status: Mutex::new(scheduler.status()),
            changed: Condvar::new(),
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("row-scheduler".to_string())
            .spawn(move || {
                Self::scheduler_loop(scheduler, &receiver, &worker_shared);
            })
            .map_err(ControllerError::SpawnScheduler)?;

        Ok(Self {
            sender,
            requested_generation: AtomicU64::new(0),
            shared,
            worker: Some(worker),
        })
    }

    /// Requests a new generation and returns the number it will get.
    pub fn start_generation(&self) -> Result<u64, ControllerError> {
        self.sender
            .send(ControlMessage::StartGeneration)
            .map_err(|_| ControllerError::Disconnected)?;

        Ok(self.requested_generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn status(&self) -> SchedulerStatus {
        *self
            .shared
            .status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks until `generation` has settled or been superseded.
    ///
    /// Returns the status observed at that point, or `None` if `timeout`
    /// expires first.
    pub fn wait_until_settled(
        &self,
        generation: u64,
        timeout: Duration,
    ) -> Option<SchedulerStatus> {
        let deadline = Instant::now() + timeout;
        let mut guard = self
            .shared
            .status
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            let done = guard.generation > generation
                || (guard.generation == generation && guard.settled);

            if done {
                return Some(*guard);
            }

            let remaining = deadline.saturating_duration_since(Instant::now());

            if remaining.is_zero() {
                return None;
            }

            guard = self
                .shared
                .changed
                .wait_timeout(guard, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    pub fn shutdown(&mut self) {
        let _ = self.sender.send(ControlMessage::Shutdown);

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::warn!("scheduler thread panicked");
            }
        }
    }

    fn scheduler_loop<P, T, R>(
        mut scheduler: RowScheduler<P, T, R>,
        receiver: &Receiver<ControlMessage>,
        shared: &SharedStatus,
    ) where
        P: ParameterProvider,
        T: AgentTransport,
        R: RowPainter,
    {
        while let Ok(message) = receiver.recv() {
            match message {
                ControlMessage::StartGeneration => {
                    scheduler.start_generation();
                }
                ControlMessage::Agent(event) => scheduler.handle_event(event),
                ControlMessage::Shutdown => break,
            }

            let status = scheduler.status();

            if status.settled {
                log::debug!(
                    "generation {} settled: {} rows painted, {} stale discarded",
                    status.generation,
                    status.rows_painted,
                    status.stale_discarded
                );
            }

            shared.publish(status);
        }

        log::debug!("scheduler loop stopped at generation {}", scheduler.generation());
    }
}

impl Drop for RowRenderController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
