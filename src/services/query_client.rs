// ============================================================================
// QUERY CLIENT - Caché en memoria de las peticiones de catálogo
// ============================================================================
// - El catálogo se pide una vez por sesión (o cuando caduca, si hay stale time)
// - Los detalles se sirven desde la lista cacheada si ya contiene el id
// - Errores: reintento con backoff exponencial (salvo 404) y nunca se cachean
// - Una petición en curso se comparte: quien llega después espera su resultado
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;

use crate::config::AppConfig;
use crate::utils::constants::RETRY_MAX_DELAY_MS;
use crate::models::Product;
use crate::services::{ApiError, ProductSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Products,
    Product(u32),
}

/// Estado de una query tal como lo consume la UI
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(Rc<T>),
    Error(ApiError),
}

impl<T> QueryState<T> {
    pub fn from_result(result: Result<Rc<T>, ApiError>) -> Self {
        match result {
            Ok(value) => QueryState::Ready(value),
            Err(e) => QueryState::Error(e),
        }
    }

    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryState::Error(ApiError::NotFound(_)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryOptions {
    pub retry_attempts: u32,
    pub retry_base_delay_ms: u32,
    pub retry_max_delay_ms: u32,
    /// `None`: nunca caduca durante la sesión
    pub stale_after: Option<Duration>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl QueryOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            retry_attempts: config.retry_attempts,
            retry_base_delay_ms: config.retry_base_delay_ms,
            retry_max_delay_ms: RETRY_MAX_DELAY_MS,
            stale_after: config.stale_after(),
        }
    }

    /// Espera antes del reintento `retry` (0 = primero): base * 2^retry, con tope
    pub fn retry_delay_ms(&self, retry: u32) -> u32 {
        self.retry_base_delay_ms
            .saturating_mul(2u32.saturating_pow(retry))
            .min(self.retry_max_delay_ms)
    }
}

/// Espera entre reintentos
#[allow(async_fn_in_trait)]
pub trait Sleep {
    async fn sleep(&self, ms: u32);
}

/// `setTimeout` del navegador
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSleep;

impl Sleep for TimerSleep {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

#[derive(Debug)]
struct Cached<T> {
    value: Rc<T>,
    fetched_at: DateTime<Utc>,
}

impl<T> Cached<T> {
    fn new(value: Rc<T>) -> Self {
        Self {
            value,
            fetched_at: Utc::now(),
        }
    }

    fn is_fresh(&self, stale_after: Option<Duration>, now: DateTime<Utc>) -> bool {
        match stale_after {
            None => true,
            Some(max_age) => now.signed_duration_since(self.fetched_at) < max_age,
        }
    }
}

type Outcome<T> = Result<Rc<T>, ApiError>;

enum Slot<T> {
    /// Hace la petición
    Leader,
    /// Espera el resultado del líder
    Follower(oneshot::Receiver<Outcome<T>>),
}

/// Peticiones en curso por clave
struct InFlight<T> {
    waiting: RefCell<HashMap<QueryKey, Vec<oneshot::Sender<Outcome<T>>>>>,
}

impl<T> InFlight<T> {
    fn new() -> Self {
        Self {
            waiting: RefCell::new(HashMap::new()),
        }
    }

    fn join(&self, key: QueryKey) -> Slot<T> {
        let mut waiting = self.waiting.borrow_mut();
        match waiting.get_mut(&key) {
            Some(waiters) => {
                let (tx, rx) = oneshot::channel();
                waiters.push(tx);
                Slot::Follower(rx)
            }
            None => {
                waiting.insert(key, Vec::new());
                Slot::Leader
            }
        }
    }

    fn finish(&self, key: QueryKey, outcome: &Outcome<T>) {
        let waiters = self.waiting.borrow_mut().remove(&key).unwrap_or_default();
        for tx in waiters {
            let _ = tx.send(outcome.clone());
        }
    }

    fn is_pending(&self, key: QueryKey) -> bool {
        self.waiting.borrow().contains_key(&key)
    }
}

/// Libera la clave si el future del líder se suelta a medias.
/// Los que esperaban reciben `Canceled` y vuelven a intentarlo.
struct LeaderGuard<'a, T> {
    in_flight: &'a InFlight<T>,
    key: QueryKey,
}

impl<T> Drop for LeaderGuard<'_, T> {
    fn drop(&mut self) {
        self.in_flight.waiting.borrow_mut().remove(&self.key);
    }
}

pub struct QueryClient<S: ProductSource, Z: Sleep = TimerSleep> {
    source: S,
    options: QueryOptions,
    sleeper: Z,
    products: RefCell<Option<Cached<Vec<Product>>>>,
    details: RefCell<HashMap<u32, Cached<Product>>>,
    list_in_flight: InFlight<Vec<Product>>,
    detail_in_flight: InFlight<Product>,
}

impl<S: ProductSource> QueryClient<S> {
    pub fn new(source: S, options: QueryOptions) -> Self {
        Self::with_sleeper(source, options, TimerSleep)
    }
}

impl<S: ProductSource, Z: Sleep> QueryClient<S, Z> {
    pub fn with_sleeper(source: S, options: QueryOptions, sleeper: Z) -> Self {
        Self {
            source,
            options,
            sleeper,
            products: RefCell::new(None),
            details: RefCell::new(HashMap::new()),
            list_in_flight: InFlight::new(),
            detail_in_flight: InFlight::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Lista cacheada y todavía fresca, sin tocar la red
    pub fn cached_products(&self) -> Option<Rc<Vec<Product>>> {
        let now = Utc::now();
        self.products
            .borrow()
            .as_ref()
            .filter(|cached| cached.is_fresh(self.options.stale_after, now))
            .map(|cached| cached.value.clone())
    }

    pub fn cached_product(&self, id: u32) -> Option<Rc<Product>> {
        let now = Utc::now();
        if let Some(cached) = self.details.borrow().get(&id) {
            if cached.is_fresh(self.options.stale_after, now) {
                return Some(cached.value.clone());
            }
        }
        self.cached_products()
            .and_then(|products| products.iter().find(|p| p.id == id).cloned())
            .map(Rc::new)
    }

    /// Hay una petición en curso para `key`
    pub fn is_fetching(&self, key: QueryKey) -> bool {
        match key {
            QueryKey::Products => self.list_in_flight.is_pending(key),
            QueryKey::Product(_) => self.detail_in_flight.is_pending(key),
        }
    }

    pub async fn fetch_products(&self) -> Result<Rc<Vec<Product>>, ApiError> {
        let source = &self.source;
        self.run_query(
            QueryKey::Products,
            &self.list_in_flight,
            || self.cached_products(),
            move || source.fetch_products(),
            |products| *self.products.borrow_mut() = Some(Cached::new(products.clone())),
        )
        .await
    }

    pub async fn fetch_product(&self, id: u32) -> Result<Rc<Product>, ApiError> {
        let source = &self.source;
        self.run_query(
            QueryKey::Product(id),
            &self.detail_in_flight,
            || self.cached_product(id),
            move || source.fetch_product(id),
            |product| {
                self.details
                    .borrow_mut()
                    .insert(id, Cached::new(product.clone()));
            },
        )
        .await
    }

    pub fn invalidate(&self, key: QueryKey) {
        log::info!("♻️ [QUERY] invalidando {:?}", key);
        match key {
            QueryKey::Products => {
                self.products.borrow_mut().take();
            }
            QueryKey::Product(id) => {
                self.details.borrow_mut().remove(&id);
            }
        }
    }

    pub fn clear(&self) {
        self.products.borrow_mut().take();
        self.details.borrow_mut().clear();
    }

    /// Caché -> petición en curso -> petición nueva (con reintentos)
    async fn run_query<T, C, F, Fut, W>(
        &self,
        key: QueryKey,
        in_flight: &InFlight<T>,
        cached: C,
        request: F,
        store: W,
    ) -> Outcome<T>
    where
        C: Fn() -> Option<Rc<T>>,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
        W: FnOnce(&Rc<T>),
    {
        loop {
            if let Some(value) = cached() {
                log::debug!("📦 [QUERY] {:?} desde caché", key);
                return Ok(value);
            }
            match in_flight.join(key) {
                Slot::Leader => break,
                Slot::Follower(rx) => {
                    log::debug!("⏳ [QUERY] {:?} ya en curso, esperando", key);
                    if let Ok(outcome) = rx.await {
                        return outcome;
                    }
                }
            }
        }

        let _guard = LeaderGuard { in_flight, key };
        let outcome = self.with_retry(key, request).await.map(Rc::new);
        if let Ok(value) = &outcome {
            store(value);
        }
        in_flight.finish(key, &outcome);
        outcome
    }

    async fn with_retry<T, F, Fut>(&self, key: QueryKey, mut request: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut retry = 0;
        loop {
            match request().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && retry < self.options.retry_attempts => {
                    let delay = self.options.retry_delay_ms(retry);
                    retry += 1;
                    log::warn!(
                        "⚠️ [QUERY] {:?} falló ({}), reintento {}/{} en {} ms",
                        key, e, retry, self.options.retry_attempts, delay
                    );
                    self.sleeper.sleep(delay).await;
                }
                Err(e) => {
                    log::error!("❌ [QUERY] {:?} falló: {}", key, e);
                    return Err(e);
                }
            }
        }
    }
}
