use std::{
    sync::{
        mpsc::{self, RecvTimeoutError, Sender},
        Arc, Mutex, MutexGuard,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    AppConfig, CarouselError, CarouselEvent, CarouselState, CarouselView, Result,
    TestimonialCatalog, Transition,
};

/// Callback invoked from the timer thread after each automatic advance.
pub type AdvanceObserver = Arc<dyn Fn(Transition) + Send + Sync>;

/// A mounted carousel.
///
/// Owns the state, the auto-advance worker and the listener wiring for as
/// long as it lives. Dropping or [`unmount`](Self::unmount)ing the session
/// stops and joins the worker before returning, so no tick lands on the
/// state afterwards.
pub struct CarouselSession {
    catalog: TestimonialCatalog,
    state: Arc<Mutex<CarouselState>>,
    timer: Option<AutoAdvance>,
}

impl CarouselSession {
    pub fn mount(catalog: TestimonialCatalog, config: &AppConfig) -> Result<Self> {
        Self::mount_with_observer(catalog, config, None)
    }

    pub fn mount_with_observer(
        catalog: TestimonialCatalog,
        config: &AppConfig,
        observer: Option<AdvanceObserver>,
    ) -> Result<Self> {
        let state = Arc::new(Mutex::new(CarouselState::new(catalog.len())?));

        let timer = if config.carousel.auto_advance {
            let interval = config.carousel.interval();
            match AutoAdvance::spawn(state.clone(), interval, observer) {
                Ok(timer) => Some(timer),
                Err(err) => {
                    tracing::warn!(%err, "auto-advance unavailable; manual navigation only");
                    None
                }
            }
        } else {
            tracing::info!("auto-advance disabled by configuration");
            None
        };

        tracing::info!(
            items = catalog.len(),
            auto_advance = timer.is_some(),
            "mounted testimonial carousel"
        );

        Ok(Self {
            catalog,
            state,
            timer,
        })
    }

    pub fn catalog(&self) -> &TestimonialCatalog {
        &self.catalog
    }

    /// True when the timer worker is running.
    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    /// Applies a user-driven event (buttons, keys, dots, hover).
    pub fn dispatch(&self, event: CarouselEvent) -> Result<Transition> {
        let mut state = self.lock_state()?;
        let was_paused = state.is_paused();
        let transition = state.apply(event);

        // Rearm before releasing the lock so a tick already waiting on it
        // sees the restart and is skipped.
        if event == CarouselEvent::PointerLeave && was_paused {
            if let Some(timer) = &self.timer {
                timer.rearm();
            }
        }
        Ok(transition)
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Result<CarouselState> {
        Ok(self.lock_state()?.clone())
    }

    pub fn view(&self) -> Result<CarouselView<'_>> {
        let state = self.lock_state()?;
        CarouselView::build(&state, &self.catalog)
            .ok_or_else(|| CarouselError::msg("carousel index outside the catalog"))
    }

    /// Tears the session down, stopping the timer synchronously.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
            tracing::info!("unmounted testimonial carousel");
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, CarouselState>> {
        self.state
            .lock()
            .map_err(|_| CarouselError::Poisoned("carousel state"))
    }
}

impl Drop for CarouselSession {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for CarouselSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselSession")
            .field("items", &self.catalog.len())
            .field("auto_advance", &self.timer.is_some())
            .finish()
    }
}

enum Control {
    /// Restart the interval from zero.
    Rearm,
}

/// Background thread emitting ticks every `interval`. Dropping the control
/// sender wakes the thread immediately and ends it.
struct AutoAdvance {
    control: Option<Sender<Control>>,
    handle: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    fn spawn(
        state: Arc<Mutex<CarouselState>>,
        interval: Duration,
        observer: Option<AdvanceObserver>,
    ) -> std::io::Result<Self> {
        let (control, inbox) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("carousel-auto-advance".into())
            .spawn(move || loop {
                match inbox.recv_timeout(interval) {
                    Ok(Control::Rearm) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        let transition = match state.lock() {
                            Ok(mut state) => {
                                if inbox.try_iter().count() > 0 {
                                    continue;
                                }
                                state.apply(CarouselEvent::Tick)
                            }
                            Err(_) => {
                                tracing::warn!("carousel state poisoned; stopping auto-advance");
                                break;
                            }
                        };
                        if transition.advanced {
                            if let Some(observer) = &observer {
                                observer(transition);
                            }
                        }
                    }
                }
            })?;

        Ok(Self {
            control: Some(control),
            handle: Some(handle),
        })
    }

    fn rearm(&self) {
        if let Some(control) = &self.control {
            let _ = control.send(Control::Rearm);
        }
    }

    fn stop(&mut self) {
        self.control.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("auto-advance worker panicked");
            }
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Instant,
    };

    use super::*;
    use crate::{CarouselConfig, Direction, Key};

    fn config(interval_ms: u64) -> AppConfig {
        AppConfig {
            carousel: CarouselConfig {
                interval_ms,
                auto_advance: true,
            },
            ..Default::default()
        }
    }

    fn manual_only() -> AppConfig {
        AppConfig {
            carousel: CarouselConfig {
                auto_advance: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn counting_observer() -> (Arc<AtomicUsize>, AdvanceObserver) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let observer: AdvanceObserver = Arc::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (count, observer)
    }

    fn wait_for(count: &AtomicUsize, at_least: usize) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if count.load(Ordering::SeqCst) >= at_least {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        false
    }

    #[test]
    fn mounts_at_first_item() {
        let session = CarouselSession::mount(TestimonialCatalog::builtin(), &manual_only()).unwrap();
        let state = session.snapshot().unwrap();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.direction(), Direction::Forward);
        assert!(!state.is_paused());
        assert!(!session.is_auto_advancing());
    }

    #[test]
    fn manual_navigation_without_timer() {
        let session = CarouselSession::mount(TestimonialCatalog::builtin(), &manual_only()).unwrap();
        let transition = session.dispatch(CarouselEvent::Key(Key::ArrowLeft)).unwrap();
        assert_eq!(transition.to, 3);
        assert_eq!(session.view().unwrap().card.name, "Sadia Sultana");
    }

    #[test]
    fn timer_advances_the_carousel() {
        let (count, observer) = counting_observer();
        let session = CarouselSession::mount_with_observer(
            TestimonialCatalog::builtin(),
            &config(5),
            Some(observer),
        )
        .unwrap();

        assert!(session.is_auto_advancing());
        assert!(wait_for(&count, 2));
        assert_ne!(session.snapshot().unwrap().current_index(), 0);
    }

    #[test]
    fn hover_stops_timer_ticks() {
        let (count, observer) = counting_observer();
        let session = CarouselSession::mount_with_observer(
            TestimonialCatalog::builtin(),
            &config(5),
            Some(observer),
        )
        .unwrap();

        session.dispatch(CarouselEvent::PointerEnter).unwrap();
        // let a tick that raced the hover finish reporting
        thread::sleep(Duration::from_millis(10));
        let hovered_at = session.snapshot().unwrap().current_index();
        let ticks = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(40));
        assert_eq!(session.snapshot().unwrap().current_index(), hovered_at);
        assert_eq!(count.load(Ordering::SeqCst), ticks);

        session.dispatch(CarouselEvent::PointerLeave).unwrap();
        assert!(wait_for(&count, ticks + 1));
    }

    #[test]
    fn leaving_restarts_the_interval() {
        let (count, observer) = counting_observer();
        let session = CarouselSession::mount_with_observer(
            TestimonialCatalog::builtin(),
            &config(50),
            Some(observer),
        )
        .unwrap();

        session.dispatch(CarouselEvent::PointerEnter).unwrap();
        thread::sleep(Duration::from_millis(45));
        let before_leave = count.load(Ordering::SeqCst);
        session.dispatch(CarouselEvent::PointerLeave).unwrap();

        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), before_leave);
        assert!(wait_for(&count, before_leave + 1));
    }

    #[test]
    fn single_item_timer_reports_advances() {
        let (count, observer) = counting_observer();
        let catalog = TestimonialCatalog::new(vec![crate::Testimonial::new(
            "Solid work", "Ada", "Engineer", "Analytical", "ada.png",
        )])
        .unwrap();
        let session =
            CarouselSession::mount_with_observer(catalog, &config(5), Some(observer)).unwrap();

        assert!(wait_for(&count, 1));
        assert_eq!(session.snapshot().unwrap().current_index(), 0);
    }

    #[test]
    fn no_ticks_after_unmount() {
        let (count, observer) = counting_observer();
        let session = CarouselSession::mount_with_observer(
            TestimonialCatalog::builtin(),
            &config(5),
            Some(observer),
        )
        .unwrap();
        assert!(wait_for(&count, 1));

        session.unmount();
        let after_unmount = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(40));
        assert_eq!(count.load(Ordering::SeqCst), after_unmount);
    }

    #[test]
    fn drop_releases_a_pending_timer() {
        let (count, observer) = counting_observer();
        {
            let _session = CarouselSession::mount_with_observer(
                TestimonialCatalog::builtin(),
                &config(100),
                Some(observer),
            )
            .unwrap();
        }
        thread::sleep(Duration::from_millis(250));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
