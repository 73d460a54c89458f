// ============================================================================
// HOME VIEW - Catálogo con filtros, búsqueda y orden
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::components::{AppLoading, CategoryFilterTabs, EmptyState, ProductList, SortBy};
use crate::hooks::{use_catalog, use_products, use_store};
use crate::models::Product;
use crate::services::QueryState;

#[function_component(HomeView)]
pub fn home_view() -> Html {
    match use_products() {
        QueryState::Loading => html! { <AppLoading /> },
        QueryState::Ready(products) => html! { <CatalogSection {products} /> },
        QueryState::Error(e) => {
            log::error!("❌ Error cargando catálogo: {}", e);
            html! {
                <div class="page home">
                    <div class="error-state">
                        <h3>{"Something went wrong"}</h3>
                        <p>{e.to_string()}</p>
                    </div>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct CatalogSectionProps {
    products: Rc<Vec<Product>>,
}

#[function_component(CatalogSection)]
fn catalog_section(props: &CatalogSectionProps) -> Html {
    let filters = use_store().filters();
    let catalog = use_catalog(props.products.clone());

    html! {
        <div class="page home">
            <div class="hero">
                <h1>{"Discover Our Collection"}</h1>
                <p>{"Browse through our curated selection of premium products"}</p>
            </div>

            <CategoryFilterTabs category={filters.category.clone()} />

            <div class="catalog-toolbar">
                <p class="product-count">{format!("{} products", catalog.count)}</p>
                <SortBy sort={filters.sort} />
            </div>

            if catalog.is_empty() {
                <EmptyState has_filters={catalog.has_active_filters} />
            } else {
                <ProductList products={catalog.visible.clone()} />
            }
        </div>
    }
}
