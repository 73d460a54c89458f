// ============================================================================
// SKELETONS - Placeholders mientras cargan catálogo y detalle
// ============================================================================

use yew::prelude::*;

use crate::models::CATEGORY_TABS;
use crate::utils::SKELETON_CARDS;

#[function_component(ProductCardSkeleton)]
pub fn product_card_skeleton() -> Html {
    html! {
        <div class="product-card skeleton">
            <div class="skeleton-block square" />
            <div class="skeleton-body">
                <div class="skeleton-line w-full" />
                <div class="skeleton-line w-3-4" />
                <div class="skeleton-line short w-full" />
                <div class="skeleton-line short w-5-6" />
                <div class="skeleton-line price" />
            </div>
        </div>
    }
}

#[function_component(ProductListSkeleton)]
pub fn product_list_skeleton() -> Html {
    html! {
        <div class="product-list pulse">
            { for (0..SKELETON_CARDS).map(|i| html! { <ProductCardSkeleton key={i} /> }) }
        </div>
    }
}

/// Home completa en estado de carga
#[function_component(AppLoading)]
pub fn app_loading() -> Html {
    html! {
        <div class="page home pulse">
            <div class="hero">
                <h1>{"Discover Our Collection"}</h1>
                <p>{"Browse through our curated selection of premium products"}</p>
            </div>
            <div class="category-tabs">
                { for CATEGORY_TABS.iter().map(|_| html! { <div class="skeleton-pill" /> }) }
            </div>
            <div class="catalog-toolbar">
                <div class="skeleton-line count" />
                <div class="skeleton-line select" />
            </div>
            <ProductListSkeleton />
        </div>
    }
}

#[function_component(ProductDetailSkeleton)]
pub fn product_detail_skeleton() -> Html {
    html! {
        <div class="product-detail skeleton pulse">
            <div class="skeleton-block square" />
            <div class="skeleton-body">
                <div class="skeleton-line short" />
                <div class="skeleton-line w-full" />
                <div class="skeleton-line w-3-4" />
                <div class="skeleton-line price" />
                <div class="skeleton-line w-full" />
                <div class="skeleton-line w-5-6" />
            </div>
        </div>
    }
}
