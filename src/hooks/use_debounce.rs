use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::utils::debounce::{Debouncer, TimeoutScheduler};

/// Callback con debounce + cancelación de la llamada pendiente
pub struct DebouncedCallback<T: 'static> {
    callback: Callback<T>,
    debouncer: Rc<RefCell<Debouncer<TimeoutScheduler>>>,
}

impl<T: 'static> Clone for DebouncedCallback<T> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            debouncer: self.debouncer.clone(),
        }
    }
}

impl<T: 'static> DebouncedCallback<T> {
    /// Re-arma el timer; solo el último valor llega a `callback`
    pub fn emit(&self, value: T) {
        let callback = self.callback.clone();
        self.debouncer.borrow().call(move || callback.emit(value));
    }

    pub fn cancel(&self) {
        self.debouncer.borrow().cancel();
    }
}

/// Un timer por componente; se cancela al desmontar.
#[hook]
pub fn use_debounced_callback<T>(callback: Callback<T>, delay_ms: u32) -> DebouncedCallback<T>
where
    T: 'static,
{
    let debouncer = use_mut_ref(move || Debouncer::new(TimeoutScheduler, delay_ms));

    {
        let debouncer = debouncer.clone();
        use_effect_with((), move |_| move || debouncer.borrow().cancel());
    }

    DebouncedCallback {
        callback,
        debouncer,
    }
}
