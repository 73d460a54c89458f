use yew::prelude::*;

use crate::components::ProductCard;
use crate::models::Product;

#[derive(Properties, PartialEq)]
pub struct ProductListProps {
    pub products: Vec<Product>,
}

#[function_component(ProductList)]
pub fn product_list(props: &ProductListProps) -> Html {
    html! {
        <div class="product-list">
            { for props.products.iter().map(|product| html! {
                <ProductCard key={product.id} product={product.clone()} />
            }) }
        </div>
    }
}
