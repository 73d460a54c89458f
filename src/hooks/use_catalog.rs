use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_store;
use crate::models::Product;
use crate::viewmodels::{derive_catalog, CatalogView};

/// Productos visibles de la home; se recalcula solo si cambian catálogo o filtros
#[hook]
pub fn use_catalog(products: Rc<Vec<Product>>) -> Rc<CatalogView> {
    let filters = use_store().filters();
    use_memo((products, filters), |(products, filters)| {
        derive_catalog(products, filters)
    })
}
