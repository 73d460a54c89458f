// ============================================================================
// QUERY CONTEXT - QueryClient compartido (una caché por sesión)
// ============================================================================

use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::{CatalogSource, QueryClient, QueryOptions};

pub type AppQueryClient = QueryClient<CatalogSource>;

#[derive(Clone)]
pub struct QueryClientHandle(Rc<AppQueryClient>);

impl QueryClientHandle {
    pub fn new(client: AppQueryClient) -> Self {
        Self(Rc::new(client))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(QueryClient::new(
            CatalogSource::from_config(config),
            QueryOptions::from_config(config),
        ))
    }
}

// Misma instancia = mismo cliente; el contenido de la caché no cuenta
impl PartialEq for QueryClientHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for QueryClientHandle {
    type Target = AppQueryClient;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Properties, PartialEq)]
pub struct QueryProviderProps {
    pub client: QueryClientHandle,
    pub children: Children,
}

#[function_component(QueryProvider)]
pub fn query_provider(props: &QueryProviderProps) -> Html {
    html! {
        <ContextProvider<QueryClientHandle> context={props.client.clone()}>
            {props.children.clone()}
        </ContextProvider<QueryClientHandle>>
    }
}

#[hook]
pub fn use_query_client() -> QueryClientHandle {
    use_context::<QueryClientHandle>().expect("use_query_client() fuera de <QueryProvider>")
}
