use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductId;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::Expiration;

/// Checks code uniqueness against every stored product except `candidate`,
/// then the expiration format. The first failure wins.
pub(super) async fn validate(
    repository: &dyn ProductRepository,
    candidate: Option<ProductId>,
    code_value: &str,
    expiration: &str,
) -> Result<(), ProductError> {
    let products = repository
        .get_all()
        .await
        .map_err(ProductError::from_repository)?;

    if products
        .iter()
        .any(|existing| existing.conflicts_with(code_value, candidate))
    {
        return Err(ProductError::AlreadyExists);
    }

    Expiration::parse(expiration)?;

    Ok(())
}
