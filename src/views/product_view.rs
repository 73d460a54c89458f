// ============================================================================
// PRODUCT VIEW - Detalle de un producto ("/{productId}")
// ============================================================================

use yew::prelude::*;

use crate::components::{Link, ProductDetailSkeleton, ToggleFavourite};
use crate::hooks::use_product;
use crate::models::Product;
use crate::routes::Route;
use crate::services::QueryState;

#[derive(Properties, PartialEq)]
pub struct ProductViewProps {
    pub id: u32,
}

#[function_component(ProductView)]
pub fn product_view(props: &ProductViewProps) -> Html {
    let state = use_product(props.id);

    let body = match &state {
        QueryState::Loading => html! { <ProductDetailSkeleton /> },
        QueryState::Ready(product) => product_detail(product),
        QueryState::Error(_) if state.is_not_found() => html! {
            <div class="error-state">
                <h3>{"Product not found"}</h3>
                <p>{format!("We couldn't find a product with id {}.", props.id)}</p>
            </div>
        },
        QueryState::Error(e) => {
            log::error!("❌ Error cargando producto {}: {}", props.id, e);
            html! {
                <div class="error-state">
                    <h3>{"Something went wrong"}</h3>
                    <p>{e.to_string()}</p>
                </div>
            }
        }
    };

    html! {
        <div class="page product">
            <Link to={Route::Home} class="back-link">{"← Back to products"}</Link>
            {body}
        </div>
    }
}

fn product_detail(p: &Product) -> Html {
    html! {
        <article class="product-detail">
            <div class="product-detail-media">
                <img src={p.image.clone()} alt={p.title.clone()} />
            </div>
            <div class="product-detail-body">
                <span class="product-card-category">{p.category.clone()}</span>
                <h1>{p.title.clone()}</h1>
                if let Some(rating) = &p.rating {
                    <p class="product-rating">
                        {format!("★ {:.1} ({} reviews)", rating.rate, rating.count)}
                    </p>
                }
                <p class="product-detail-price">{p.display_price()}</p>
                <p class="product-detail-description">{p.description.clone()}</p>
                <div class="product-detail-actions">
                    <ToggleFavourite product={p.clone()} />
                    <button type="button" class="btn-primary">{"Add to cart"}</button>
                </div>
            </div>
        </article>
    }
}
