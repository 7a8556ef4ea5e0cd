use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::errors::ProductError;
use business::domain::product::model::ProductId;
use business::domain::product::use_cases::consumer_price::{
    ConsumerPriceParams, ConsumerPriceUseCase,
};
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::product::use_cases::update_name::{
    UpdateProductNameParams, UpdateProductNameUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, rejection};
use crate::api::product::dto::{
    CreateProductRequest, PatchProductRequest, ProductResponse, ProductsConsumerResponse,
    UpdateProductRequest,
};
use crate::api::security::ApiToken;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    consumer_price_use_case: Arc<dyn ConsumerPriceUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    update_name_use_case: Arc<dyn UpdateProductNameUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        consumer_price_use_case: Arc<dyn ConsumerPriceUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        update_name_use_case: Arc<dyn UpdateProductNameUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            consumer_price_use_case,
            update_use_case,
            update_name_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Option<ProductId> {
    raw.trim().parse().ok()
}

fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse().ok()
}

/// Comma separated ids, e.g. "1,2,3". Empty lists and non-integer items are rejected.
fn parse_id_list(raw: Option<&str>) -> Option<Vec<ProductId>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.split(',').map(parse_id).collect()
}

/// Product catalog API
///
/// Reads are public. Mutations require the `token` header.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// The code must be unique across the catalog and the expiration must be a
    /// valid DD/MM/YYYY date.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        _auth: ApiToken,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns the catalog in insertion order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ProductListResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                ProductListResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProductListResponse::BadRequest(json),
                    _ => ProductListResponse::InternalError(json),
                }
            }
        }
    }

    /// Search products by price
    ///
    /// Returns the products whose price is strictly greater than `priceGt`.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
        #[oai(name = "priceGt")] price_gt: Query<Option<String>>,
    ) -> ProductListResponse {
        let Some(price_gt) = parse_price(price_gt.0.as_deref()) else {
            return ProductListResponse::BadRequest(ErrorResponse::invalid_data());
        };

        match self
            .search_use_case
            .execute(SearchProductsParams { price_gt })
            .await
        {
            Ok(products) => {
                ProductListResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProductListResponse::BadRequest(json),
                    _ => ProductListResponse::InternalError(json),
                }
            }
        }
    }

    /// Consumer price
    ///
    /// Sums the published products among `list` (comma separated ids) and
    /// applies the markup for the number of matches.
    #[oai(
        path = "/products/consumer_price",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn consumer_price(&self, list: Query<Option<String>>) -> ConsumerPriceResponse {
        let Some(ids) = parse_id_list(list.0.as_deref()) else {
            return ConsumerPriceResponse::BadRequest(ErrorResponse::invalid_data());
        };

        match self
            .consumer_price_use_case
            .execute(ConsumerPriceParams { ids })
            .await
        {
            Ok(consumer) => ConsumerPriceResponse::Ok(Json(consumer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ConsumerPriceResponse::BadRequest(json),
                    _ => ConsumerPriceResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Some(id) = parse_id(&id.0) else {
            return GetProductByIdResponse::BadRequest(ErrorResponse::invalid_data());
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a product
    ///
    /// Every field is overwritten. The code may stay the same as the stored one.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        _auth: ApiToken,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return UpdateProductResponse::BadRequest(ErrorResponse::invalid_data());
        };

        match self.update_use_case.execute(body.0.into_params(id)).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => UpdateProductResponse::from_product_error(err),
        }
    }

    /// Partially update a product
    ///
    /// Fields missing from the body keep their stored value.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn patch_product(
        &self,
        _auth: ApiToken,
        id: Path<String>,
        body: Json<PatchProductRequest>,
    ) -> UpdateProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return UpdateProductResponse::BadRequest(ErrorResponse::invalid_data());
        };

        let current = match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => product,
            Err(err) => return UpdateProductResponse::from_product_error(err),
        };

        match self.update_use_case.execute(body.0.merge_into(current)).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => UpdateProductResponse::from_product_error(err),
        }
    }

    /// Rename a product
    #[oai(path = "/products/:id/name", method = "patch", tag = "ApiTags::Products")]
    async fn update_product_name(
        &self,
        _auth: ApiToken,
        id: Path<String>,
        name: Query<Option<String>>,
    ) -> UpdateProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return UpdateProductResponse::BadRequest(ErrorResponse::invalid_data());
        };

        let params = UpdateProductNameParams {
            id,
            name: name.0.unwrap_or_default(),
        };

        match self.update_name_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => UpdateProductResponse::from_product_error(err),
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, _auth: ApiToken, id: Path<String>) -> DeleteProductResponse {
        let Some(id) = parse_id(&id.0) else {
            return DeleteProductResponse::BadRequest(ErrorResponse::invalid_data());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "reject_create")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn reject_create(err: poem::Error) -> CreateProductResponse {
    match rejection(&err) {
        (status, json) if status.as_u16() == 401 => CreateProductResponse::Unauthorized(json),
        (_, json) => CreateProductResponse::BadRequest(json),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConsumerPriceResponse {
    #[oai(status = 200)]
    Ok(Json<ProductsConsumerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "reject_update")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UpdateProductResponse {
    fn from_product_error(err: ProductError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => UpdateProductResponse::BadRequest(json),
            404 => UpdateProductResponse::NotFound(json),
            409 => UpdateProductResponse::Conflict(json),
            _ => UpdateProductResponse::InternalError(json),
        }
    }
}

fn reject_update(err: poem::Error) -> UpdateProductResponse {
    match rejection(&err) {
        (status, json) if status.as_u16() == 401 => UpdateProductResponse::Unauthorized(json),
        (_, json) => UpdateProductResponse::BadRequest(json),
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "reject_delete")]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn reject_delete(err: poem::Error) -> DeleteProductResponse {
    match rejection(&err) {
        (status, json) if status.as_u16() == 401 => DeleteProductResponse::Unauthorized(json),
        (_, json) => DeleteProductResponse::BadRequest(json),
    }
}
