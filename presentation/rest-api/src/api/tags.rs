use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service liveness
    Health,
    /// Product catalog
    Products,
}
