use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::PresenterPort;
use crate::core::actions::cancellation::GenerationToken;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_cancelable};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParams;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

type Renderer =
    fn(&RenderParams, &GenerationToken<'_>) -> Result<PixelBuffer, RenderFrameError>;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderParams>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn PresenterPort>,
    renderer: Renderer,
}

impl SharedState {
    fn lock_request(&self) -> MutexGuard<'_, Option<(u64, Arc<RenderParams>)>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Acquire) == generation
    }
}

/// Renders the newest submitted view on a dedicated worker thread.
///
/// Each submission gets a generation number. A render in flight is
/// abandoned as soon as a newer generation arrives, and results for
/// superseded generations are never presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn PresenterPort>) -> Self {
        Self::with_renderer(presenter_port, |params, cancel| {
            render_cancelable(params, cancel)
        })
    }

    fn with_renderer(presenter_port: Arc<dyn PresenterPort>, renderer: Renderer) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
            renderer,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, replacing any request not yet picked up.
    ///
    /// Returns the generation assigned to it. Never waits for rendering.
    pub fn submit_request(&self, request: Arc<RenderParams>) -> u64 {
        // Numbered under the slot lock so the slot always holds the highest generation.
        let mut slot = self.shared.lock_request();
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *slot = Some((generation, request));
        drop(slot);

        self.shared.wake.notify_one();

        log::trace!("submitted render generation {}", generation);

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState) {
        while let Some((job_generation, request)) = Self::next_request(shared) {
            let cancel =
                GenerationToken::new(&shared.generation, &shared.shutdown, job_generation);

            let start = Instant::now();
            let result = (shared.renderer)(&request, &cancel);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    pixel_buffer,
                    render_duration,
                }),
                Err(err) if err.is_cancelled() => {
                    log::trace!("render generation {} cancelled", job_generation);
                    continue;
                }
                Err(err) => {
                    log::warn!("render generation {} failed: {}", job_generation, err);
                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            if !shared.is_current(job_generation) {
                log::trace!("dropping stale render generation {}", job_generation);
                continue;
            }

            log::debug!(
                "render generation {} finished in {:?}",
                job_generation,
                render_duration
            );

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .fetch_max(job_generation, Ordering::AcqRel);
        }
    }

    /// Blocks until a request is pending. `None` once shutdown is flagged.
    fn next_request(shared: &SharedState) -> Option<(u64, Arc<RenderParams>)> {
        let mut guard = shared.lock_request();

        loop {
            if shared.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if let Some(request) = guard.take() {
                return Some(request);
            }

            guard = shared
                .wake
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
