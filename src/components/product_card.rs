use yew::prelude::*;

use crate::components::{Link, ToggleFavourite};
use crate::models::Product;
use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let p = &props.product;
    let to = Route::Product(p.id);

    html! {
        <div class="product-card" data-id={p.id.to_string()}>
            <div class="product-card-media">
                <Link {to} class="product-card-image">
                    <img src={p.image.clone()} alt={p.title.clone()} loading="lazy" />
                </Link>

                <span class="product-card-category">{p.category.clone()}</span>

                <div class="product-card-favourite">
                    <ToggleFavourite product={p.clone()} compact={true} />
                </div>

                <Link {to} class="product-card-quick-view">
                    <span>{"👁 Quick View"}</span>
                </Link>
            </div>

            <div class="product-card-body">
                <Link {to} class="product-card-title" title={p.title.clone()}>
                    <h2>{p.title.clone()}</h2>
                </Link>
                <p class="product-card-description">{p.description.clone()}</p>

                <div class="product-card-footer">
                    <div class="product-card-price">
                        <span class="label">{"Price"}</span>
                        <span class="value">{p.display_price()}</span>
                    </div>
                    <button type="button" class="icon-button" aria-label="Add to cart">
                        <span class="icon">{"🛍"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
