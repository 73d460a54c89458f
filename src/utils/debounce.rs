// ============================================================================
// DEBOUNCE - Una sola tarea programada por input
// ============================================================================
// Cada llamada cancela la tarea pendiente (si existe) y programa otra.
// La cancelación es soltar el handle: gloo_timers limpia el timeout en Drop.
// ============================================================================

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

/// Programa una tarea diferida. Soltar el handle la cancela.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Scheduler del navegador basado en `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct Debouncer<S: Scheduler = TimeoutScheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Re-arma el timer con `task`; la tarea anterior no se ejecuta
    pub fn call<F>(&self, task: F)
    where
        F: FnOnce() + 'static,
    {
        // Soltar primero: nunca hay dos timers vivos
        drop(self.pending.borrow_mut().take());
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        drop(self.pending.borrow_mut().take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    type Slot = (u32, Rc<Cell<bool>>, Option<Box<dyn FnOnce()>>);

    /// Scheduler manual: las tareas se ejecutan con `run_due`
    #[derive(Clone, Default)]
    struct ManualScheduler {
        tasks: Rc<RefCell<Vec<Slot>>>,
    }

    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks
                .borrow_mut()
                .push((delay_ms, cancelled.clone(), Some(task)));
            ManualHandle { cancelled }
        }
    }

    impl ManualScheduler {
        fn live(&self) -> usize {
            self.tasks
                .borrow()
                .iter()
                .filter(|(_, cancelled, task)| !cancelled.get() && task.is_some())
                .count()
        }

        fn run_due(&self) {
            let due: Vec<Box<dyn FnOnce()>> = self
                .tasks
                .borrow_mut()
                .iter_mut()
                .filter(|(_, cancelled, _)| !cancelled.get())
                .filter_map(|(_, _, task)| task.take())
                .collect();
            for task in due {
                task();
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |value: &str| {
            let sink = sink.clone();
            let value = value.to_string();
            Box::new(move || sink.borrow_mut().push(value)) as Box<dyn FnOnce()>
        };
        (log, make)
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 50);
        let (log, make) = recorder();

        debouncer.call(make("phone"));
        assert!(log.borrow().is_empty());

        scheduler.run_due();
        assert_eq!(*log.borrow(), vec!["phone"]);
    }

    #[test]
    fn each_keystroke_restarts_the_timer() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 50);
        let (log, make) = recorder();

        debouncer.call(make("p"));
        debouncer.call(make("ph"));
        debouncer.call(make("pho"));
        assert_eq!(scheduler.live(), 1);

        scheduler.run_due();
        assert_eq!(*log.borrow(), vec!["pho"]);
    }

    #[test]
    fn uses_configured_delay() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 75);
        debouncer.call(|| {});
        assert_eq!(debouncer.delay_ms(), 75);
        assert_eq!(scheduler.tasks.borrow()[0].0, 75);
    }

    #[test]
    fn cancel_drops_pending_task() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 50);
        let (log, make) = recorder();

        debouncer.call(make("jacket"));
        debouncer.cancel();
        scheduler.run_due();

        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn dropping_the_debouncer_cancels() {
        let scheduler = ManualScheduler::default();
        let (log, make) = recorder();
        {
            let debouncer = Debouncer::new(scheduler.clone(), 50);
            debouncer.call(make("dress"));
        }
        scheduler.run_due();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn can_rearm_after_firing() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 50);
        let (log, make) = recorder();

        debouncer.call(make("a"));
        scheduler.run_due();
        debouncer.call(make("b"));
        scheduler.run_due();

        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn reset_with_cancel_keeps_pending_search_out() {
        use crate::state::FiltersState;

        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), 50);
        let filters = Rc::new(RefCell::new(FiltersState::default().set_search("lap")));

        let store = filters.clone();
        debouncer.call(move || {
            let next = store.borrow().set_search("laptop");
            *store.borrow_mut() = next;
        });

        // "Clear all filters" antes de que venza el timer
        let reset = filters.borrow().reset_all();
        *filters.borrow_mut() = reset;
        debouncer.cancel();
        scheduler.run_due();

        assert_eq!(filters.borrow().search, "");
        assert!(!filters.borrow().has_active_filters());
    }
}
